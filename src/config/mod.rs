pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::reader::DEFAULT_MAX_READ_BYTES;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// The root that was open when the application last exited, if any.
    pub last_root: Option<PathBuf>,
    /// Whether a consumer should reopen `last_root` on startup.
    pub auto_load_last_root: bool,
    /// Upper bound, in bytes, for file preview reads.
    pub max_read_bytes: u64,
    /// The file this configuration persists to. `None` selects the platform
    /// config directory; tests point it into their own tempdir.
    #[serde(skip)]
    pub storage_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_root: None,
            auto_load_last_root: true,
            max_read_bytes: DEFAULT_MAX_READ_BYTES,
            storage_path: None,
        }
    }
}
