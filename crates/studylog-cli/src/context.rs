use std::path::{Path, PathBuf};

use anyhow::Result;
use once_cell::sync::OnceCell;

use studylog_store::StudyStore;

use crate::config::Config;

/// Per-invocation context: data directory plus lazily opened store and
/// config.
pub struct ExecutionContext {
    data_dir: PathBuf,
    store: OnceCell<StudyStore>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            store: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn store(&self) -> &StudyStore {
        self.store
            .get_or_init(|| StudyStore::open(&self.data_dir))
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }
}
