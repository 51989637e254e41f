//! Defines an abstraction over the event sending mechanism.

use super::events::UserEvent;

/// A trait that abstracts the delivery of events to the presentation layer.
///
/// Fire-and-forget: the sender cannot meaningfully react to a dropped UI, so
/// implementations should log failed sends instead of returning them. The
/// consumer implements this for whatever its runtime offers -- an event-loop
/// proxy, a channel sender, a queue.
pub trait EventProxy: Send + Sync + Clone + 'static {
    fn send_event(&self, event: UserEvent);
}
