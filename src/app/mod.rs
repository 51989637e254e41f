pub mod commands;
pub mod events;
pub mod expansion;
pub mod helpers;
pub mod proxy;
pub mod state;
pub mod tasks;
pub mod view_model;
pub mod workspace;
