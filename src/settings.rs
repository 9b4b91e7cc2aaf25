//! Settings persistence
//!
//! Loads and saves the [`StoredConfig`] JSON blob a front end keeps between
//! sessions. The generator itself never touches the filesystem.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{Config, StoredConfig};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the settings file path.
///
/// Priority:
/// 1. Environment variable `PWD_GEN_SETTINGS_PATH`
/// 2. Default path `./pwdGenConfig.json`
pub fn get_settings_path() -> PathBuf {
    std::env::var("PWD_GEN_SETTINGS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./pwdGenConfig.json"))
}

/// Loads the configuration from the default settings path.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist (callers usually fall back to `Config::default()`)
/// - File cannot be read
/// - File is not a JSON object
///
/// Individual fields that are missing or malformed never fail the load; they
/// take their default value.
pub fn load_settings() -> Result<Config, SettingsError> {
    load_settings_from_path(get_settings_path())
}

/// Loads the configuration from a specific file path.
pub fn load_settings_from_path<P: AsRef<Path>>(path: P) -> Result<Config, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::info!("No saved settings at {:?}", path);
        return Err(SettingsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let stored: StoredConfig = serde_json::from_str(&content).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Settings load FAILED for {:?}: {}", path, _e);
    })?;

    #[cfg(feature = "tracing")]
    tracing::info!("Settings loaded from {:?}", path);

    Ok(Config::from(stored))
}

/// Saves the configuration to the default settings path.
pub fn save_settings(config: &Config) -> Result<(), SettingsError> {
    save_settings_to_path(config, get_settings_path())
}

/// Saves the configuration to a specific file path, creating parent
/// directories as needed.
pub fn save_settings_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), SettingsError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&StoredConfig::from(config))?;
    std::fs::write(path, json)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Settings saved to {:?}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharacterGroup;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_settings_path_default() {
        remove_env("PWD_GEN_SETTINGS_PATH");

        let path = get_settings_path();
        assert_eq!(path, PathBuf::from("./pwdGenConfig.json"));
    }

    #[test]
    #[serial]
    fn test_get_settings_path_from_env() {
        let custom_path = "/custom/path/settings.json";
        set_env("PWD_GEN_SETTINGS_PATH", custom_path);

        let path = get_settings_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_GEN_SETTINGS_PATH");
    }

    #[test]
    #[serial]
    fn test_load_settings_file_not_found() {
        set_env("PWD_GEN_SETTINGS_PATH", "/nonexistent/path/settings.json");

        let result = load_settings();
        match result {
            Err(SettingsError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env("PWD_GEN_SETTINGS_PATH");
    }

    #[test]
    fn test_load_settings_invalid_json() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "not json").expect("Failed to write");

        let result = load_settings_from_path(temp_file.path());
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    #[serial]
    fn test_load_settings_partial_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, r#"{{"length": 9, "requireSymbols": false}}"#).expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_GEN_SETTINGS_PATH", path);

        let config = load_settings().expect("Settings should load");
        assert_eq!(config.length(), 9);
        assert_eq!(config.bulk_count(), 1);
        assert!(!config.require_one(CharacterGroup::Symbol));
        assert_eq!(config.pool(CharacterGroup::Uppercase).selected_count(), 26);

        remove_env("PWD_GEN_SETTINGS_PATH");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("settings.json");

        let mut config = Config::default();
        config.set_length(16);
        config.set_bulk_count(10);
        config.set_group_enabled(CharacterGroup::Symbol, false);
        config.toggle_guaranteed('!');

        save_settings_to_path(&config, &path).expect("Settings should save");
        let loaded = load_settings_from_path(&path).expect("Settings should load");
        assert_eq!(loaded, config);
    }
}
