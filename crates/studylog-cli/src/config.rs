use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studylog_engine::SessionSort;

/// CLI configuration stored as `config.toml` in the data directory.
///
/// A missing file loads as the defaults; `studylog init` writes the file
/// so the defaults are visible and editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sessions shown in the dashboard's recent list
    pub recent_limit: usize,

    /// Session list order when --sort is not given
    pub default_sort: SessionSort,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_limit: 5,
            default_sort: SessionSort::DateDesc,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let raw = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            recent_limit: 10,
            default_sort: SessionSort::DurationDesc,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "recent_limit = 8\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.recent_limit, 8);
        assert_eq!(config.default_sort, SessionSort::DateDesc);
    }
}
