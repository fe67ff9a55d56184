//! Application configuration.

use crate::consts::cli_consts::record_keys;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

/// Which shipped default record key the detail view uses when no explicit
/// key is configured. Both variants existed in the daemon's web front end
/// and are kept as alternate configurations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Key the detail view by a literal info-hash.
    #[default]
    Hash,
    /// Key the detail view by the `id_torrent` alias.
    Alias,
}

impl Profile {
    pub fn default_record_key(&self) -> &'static str {
        match self {
            Profile::Hash => record_keys::HASH_PROFILE_KEY,
            Profile::Alias => record_keys::ALIAS_PROFILE_KEY,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Explicit record key for the detail view; overrides the profile default.
    #[serde(default)]
    pub record_key: Option<String>,
    #[serde(default)]
    pub profile: Profile,
    /// Daemon base URL; `None` means the local daemon.
    #[serde(default)]
    pub daemon_url: Option<String>,
}

impl Config {
    pub fn new(record_key: Option<String>, profile: Profile, daemon_url: Option<String>) -> Self {
        Config {
            record_key,
            profile,
            daemon_url,
        }
    }

    /// The record key the detail view should display.
    pub fn resolved_key(&self) -> &str {
        self.record_key
            .as_deref()
            .unwrap_or_else(|| self.profile.default_record_key())
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(None, Profile::default(), None)
    }
}

/// Path of the config file: `~/.sleekwatch/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".sleekwatch").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new(Some("abc".to_string()), Profile::Hash, None);
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // An explicit record key takes priority over the profile default.
    fn test_resolved_key_prefers_explicit_key() {
        let config = Config::new(Some("abc".to_string()), Profile::Alias, None);
        assert_eq!(config.resolved_key(), "abc");
    }

    #[test]
    // Without an explicit key, each profile falls back to its shipped default.
    fn test_resolved_key_falls_back_to_profile() {
        let hash = Config::new(None, Profile::Hash, None);
        assert_eq!(
            hash.resolved_key(),
            "56a21a042238079f5cc68a81af8f3689dd923b0b"
        );

        let alias = Config::new(None, Profile::Alias, None);
        assert_eq!(alias.resolved_key(), "id_torrent");
    }

    #[test]
    // Clearing a missing file is not an error.
    fn test_clear_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::clear(&path).is_ok());
    }
}
