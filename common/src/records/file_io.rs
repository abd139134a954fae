use std::io::ErrorKind;
use std::path::Path;

use super::Records;

#[derive(Debug)]
pub enum RecordsError {
    IoError(std::io::Error),
    YamlError(serde_yaml_ng::Error),
}

impl std::fmt::Display for RecordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordsError::IoError(e) => write!(f, "IO error: {}", e),
            RecordsError::YamlError(e) => write!(f, "YAML error: {}", e),
        }
    }
}

impl std::error::Error for RecordsError {}

impl From<std::io::Error> for RecordsError {
    fn from(e: std::io::Error) -> Self {
        RecordsError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for RecordsError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        RecordsError::YamlError(e)
    }
}

pub fn save_records(path: &Path, records: &Records) -> Result<(), RecordsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let encoded = serde_yaml_ng::to_string(records)?;
    std::fs::write(path, encoded)?;
    Ok(())
}

/// A missing file yields empty records.
pub fn load_records(path: &Path) -> Result<Records, RecordsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Records::default()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Records::default());
    }

    Ok(serde_yaml_ng::from_str(&content)?)
}
