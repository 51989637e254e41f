use anyhow::Result;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

const APP_NAME: &str = "WorkspaceBrowser";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "workspacebrowser", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
pub fn get_config_file_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the application configuration from the platform config directory.
pub fn load_config() -> Result<AppConfig> {
    let config_path = get_config_file_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    load_config_from(&config_path)
}

/// Loads the configuration from `config_path`, which becomes the save target
/// for the returned config.
///
/// A missing or unparseable file falls back to the defaults with a warning;
/// a broken config must never take the application down.
pub fn load_config_from(config_path: &Path) -> Result<AppConfig> {
    let mut config = if !config_path.exists() {
        AppConfig::default()
    } else {
        let config_content = fs::read_to_string(config_path)?;
        match serde_json::from_str::<AppConfig>(&config_content) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", config_path);
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse config file at {:?}: {}. Falling back to default config.",
                    config_path,
                    e
                );
                AppConfig::default()
            }
        }
    };
    config.storage_path = Some(config_path.to_path_buf());
    Ok(config)
}

/// Saves the configuration to its storage path, falling back to the platform
/// config directory when none is set.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let config_path = config
        .storage_path
        .clone()
        .or_else(get_config_file_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }
    }

    let config_json = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, config_json)?;

    Ok(())
}

/// Best-effort persistence of the last opened root.
///
/// Failures are swallowed: a root we could not remember is indistinguishable
/// from no remembered root, and neither is an error the user should see.
pub fn remember_last_root(config: &mut AppConfig, root: &Path) {
    config.last_root = Some(root.to_path_buf());
    if let Err(e) = save_config(config) {
        tracing::debug!("could not persist last root: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembered_root_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig {
            storage_path: Some(path.clone()),
            ..AppConfig::default()
        };

        remember_last_root(&mut config, Path::new("/workspaces/demo"));

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(
            reloaded.last_root.as_deref(),
            Some(Path::new("/workspaces/demo"))
        );
        assert_eq!(reloaded.storage_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn missing_file_loads_defaults_and_keeps_the_save_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config_from(&path).unwrap();
        assert!(config.last_root.is_none());
        assert!(config.auto_load_last_root);
        assert_eq!(config.storage_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.last_root.is_none());
    }

    #[test]
    fn failed_save_is_swallowed_and_state_still_updates() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file where a directory should be").unwrap();

        let mut config = AppConfig {
            storage_path: Some(blocker.join("config.json")),
            ..AppConfig::default()
        };
        remember_last_root(&mut config, Path::new("/workspaces/demo"));

        assert_eq!(
            config.last_root.as_deref(),
            Some(Path::new("/workspaces/demo"))
        );
    }
}
