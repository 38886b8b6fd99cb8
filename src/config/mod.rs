use std::{
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::storage::bin_backend::{tmp_path, write_atomic};
use crate::storage::ensure_dir;

const CONFIG_FILE: &str = "config.json";
const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display preferences shared by the three utilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency_symbol: String,
    pub timestamp_format: String,
    pub confirm_deletes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            confirm_deletes: true,
        }
    }
}

impl Config {
    /// Renders a timestamp with the configured format. The format string
    /// comes from a user-editable file, so a bad specifier falls back to the
    /// default instead of failing the render.
    pub fn format_timestamp(&self, when: DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", when.format(&self.timestamp_format)).is_ok() {
            return out;
        }
        tracing::warn!(
            format = %self.timestamp_format,
            "invalid timestamp format in config, using the default"
        );
        when.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}

/// Reads and writes the JSON config file in the data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(base_dir: &Path) -> Result<Self, StoreError> {
        ensure_dir(base_dir)?;
        Ok(Self {
            path: base_dir.join(CONFIG_FILE),
        })
    }

    /// Loads the config, writing the defaults on first run so the file is
    /// there for users to edit.
    pub fn load_or_init(&self) -> Result<Config, StoreError> {
        if !self.path.exists() {
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_load_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::new(temp.path()).unwrap();

        let config = manager.load_or_init().unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert!(config.confirm_deletes);
        assert!(manager.path().exists());
    }

    #[test]
    fn format_timestamp_falls_back_on_bad_specifier() {
        use chrono::TimeZone;

        let mut config = Config::default();
        config.timestamp_format = "%Q".into();

        let when = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        assert_eq!(config.format_timestamp(when), "2024-07-01 08:00");

        config.timestamp_format = "%d/%m/%Y".into();
        assert_eq!(config.format_timestamp(when), "01/07/2024");
    }

    #[test]
    fn failed_save_leaves_previous_config_untouched() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::new(temp.path()).unwrap();
        manager.save(&Config::default()).unwrap();
        let original = fs::read_to_string(manager.path()).unwrap();

        // A directory squatting on the temp file name forces the write to fail.
        let mut tmp = manager.path().to_path_buf();
        tmp.set_extension("json.tmp");
        fs::create_dir_all(&tmp).unwrap();

        let mut changed = Config::default();
        changed.currency_symbol = "€".into();
        assert!(manager.save(&changed).is_err());
        assert_eq!(fs::read_to_string(manager.path()).unwrap(), original);
    }

    #[test]
    fn saved_config_round_trips() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::new(temp.path()).unwrap();

        let mut config = Config::default();
        config.currency_symbol = "€".into();
        config.confirm_deletes = false;
        manager.save(&config).unwrap();

        let loaded = manager.load_or_init().unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.confirm_deletes);
    }
}
