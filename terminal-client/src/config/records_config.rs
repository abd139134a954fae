use std::path::{Path, PathBuf};

use common::config::Validate;
use common::records::RECORDS_FILE_EXTENSION;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RecordsConfig {
    pub save: bool,
    pub location: String,
}

impl RecordsConfig {
    /// Relative locations are taken relative to the directory holding the config file.
    pub fn resolve(&self, config_path: &Path) -> PathBuf {
        let location = Path::new(&self.location);
        if location.is_absolute() {
            return location.to_path_buf();
        }
        match config_path.parent() {
            Some(dir) => dir.join(location),
            None => location.to_path_buf(),
        }
    }
}

impl Validate for RecordsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("records location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            save: true,
            location: format!("xo_records.{}", RECORDS_FILE_EXTENSION),
        }
    }
}
