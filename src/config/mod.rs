//! Persistent user preferences: currency symbol, color toggle, and an
//! optional override for the ledger data file.

use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "transactions.json";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "LEDGER_CORE_CONFIG_DIR";
pub const DATA_FILE_ENV: &str = "LEDGER_CORE_DATA_FILE";

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// User-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom location for the ledger file. Defaults to
    /// `transactions.json` in the working directory.
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_file: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Resolves the ledger file path: environment override first, then the
    /// configured override, then the working-directory default.
    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(path) = env::var_os(DATA_FILE_ENV) {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        PathBuf::from(DEFAULT_DATA_FILE)
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE_NAME)))
    }

    /// Builds a manager rooted at `LEDGER_CORE_CONFIG_DIR` when set, falling
    /// back to the platform config directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ledger_core"),
        };
        Self::with_base_dir(base)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{Config, ConfigManager, DEFAULT_DATA_FILE};

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.currency_symbol, "$");
        assert!(config.ui_color_enabled);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn resolve_data_file_prefers_configured_override() {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/elsewhere.json")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_data_file(),
            PathBuf::from("/tmp/elsewhere.json")
        );
    }

    #[test]
    fn resolve_data_file_defaults_to_working_directory() {
        let config = Config::default();
        assert_eq!(config.resolve_data_file(), PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let dir = TempDir::new().expect("create temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = manager.load().expect("load");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().expect("create temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = Config {
            currency_symbol: "€".into(),
            ui_color_enabled: false,
            data_file: Some(PathBuf::from("ledger.json")),
        };
        manager.save(&config).expect("save");

        let loaded = manager.load().expect("load");
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.ui_color_enabled);
        assert_eq!(loaded.data_file, Some(PathBuf::from("ledger.json")));
    }

    #[test]
    fn load_tolerates_missing_fields() {
        let dir = TempDir::new().expect("create temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        std::fs::write(manager.config_path(), "{}").expect("write config");
        let config = manager.load().expect("load");
        assert_eq!(config.currency_symbol, "$");
        assert!(config.ui_color_enabled);
    }
}
