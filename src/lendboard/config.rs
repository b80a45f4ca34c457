use crate::error::{DashError, Result};
use crate::query::page::DEFAULT_ITEMS_PER_PAGE;
use crate::source::mock::{DEFAULT_SEED, DEFAULT_USER_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Dashboard settings, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashConfig {
    /// Rows per table page when `--per-page` is not given
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Size of the collection the mock backend serves
    #[serde(default = "default_user_count")]
    pub user_count: usize,

    /// Seed for the mock backend's generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Simulated round-trip delay for each mock backend call
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_user_count() -> usize {
    DEFAULT_USER_COUNT
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            user_count: DEFAULT_USER_COUNT,
            seed: DEFAULT_SEED,
            latency_ms: 0,
        }
    }
}

impl DashConfig {
    pub const KEYS: [&'static str; 4] = ["items-per-page", "user-count", "seed", "latency-ms"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DashError::Io)?;
        let config: DashConfig =
            serde_json::from_str(&content).map_err(DashError::Serialization)?;
        if config.items_per_page == 0 {
            return Err(DashError::Config(
                "items_per_page must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DashError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DashError::Serialization)?;
        fs::write(config_path, content).map_err(DashError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "items-per-page" => Ok(self.items_per_page.to_string()),
            "user-count" => Ok(self.user_count.to_string()),
            "seed" => Ok(self.seed.to_string()),
            "latency-ms" => Ok(self.latency_ms.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "items-per-page" => {
                let n = parse_number(key, value)?;
                if n == 0 {
                    return Err(DashError::InvalidPageSize);
                }
                self.items_per_page = n as usize;
            }
            "user-count" => self.user_count = parse_number(key, value)? as usize,
            "seed" => self.seed = parse_number(key, value)?,
            "latency-ms" => self.latency_ms = parse_number(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| DashError::Config(format!("{} expects a non-negative integer, got {:?}", key, value)))
}

fn unknown_key(key: &str) -> DashError {
    DashError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        DashConfig::KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashConfig::default();
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.user_count, 500);
        assert_eq!(config.latency_ms, 0);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashConfig::load(dir.path()).unwrap();
        assert_eq!(config, DashConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = DashConfig::default();
        config.set("items-per-page", "25").unwrap();
        config.set("seed", "7").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = DashConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.items_per_page, 25);
        assert_eq!(loaded.seed, 7);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"user_count": 12}"#).unwrap();

        let config = DashConfig::load(dir.path()).unwrap();
        assert_eq!(config.user_count, 12);
        assert_eq!(config.items_per_page, 10);
    }

    #[test]
    fn test_zero_page_size_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"items_per_page": 0}"#).unwrap();
        assert!(matches!(
            DashConfig::load(dir.path()),
            Err(DashError::Config(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = DashConfig::default();
        assert!(matches!(
            config.set("items-per-page", "0"),
            Err(DashError::InvalidPageSize)
        ));
        assert!(matches!(
            config.set("seed", "-1"),
            Err(DashError::Config(_))
        ));
        assert!(matches!(
            config.set("colour", "blue"),
            Err(DashError::Config(_))
        ));
        assert_eq!(config.get("latency-ms").unwrap(), "0");
    }
}
