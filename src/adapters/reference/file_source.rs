//! Filesystem source for reference data files (JSON or YAML)

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::reference::ReferenceData;
use crate::ports::{ReferenceDataSource, SourceError};

/// Serialization format of a reference data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Picks the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DataFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(DataFormat::Yaml)
            }
            _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses reference data in this format
    pub fn parse(&self, content: &str) -> Result<ReferenceData, SourceError> {
        match self {
            DataFormat::Json => serde_json::from_str(content)
                .map_err(|e| SourceError::ParseFailed(format!("JSON: {}", e))),
            DataFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| SourceError::ParseFailed(format!("YAML: {}", e))),
        }
    }
}

/// Reference data read from a file on every load
pub struct FileReferenceSource {
    path: PathBuf,
    format: DataFormat,
    default_archetype: Option<String>,
}

impl FileReferenceSource {
    /// Create a source for the given file
    ///
    /// # Errors
    /// Returns `SourceError::UnsupportedFormat` for extensions other than
    /// `.json`, `.yaml` and `.yml`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let format = DataFormat::from_path(&path)?;
        Ok(Self {
            path,
            format,
            default_archetype: None,
        })
    }

    /// Replace the default archetype named by the file on every load
    pub fn with_default_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.default_archetype = Some(archetype.into());
        self
    }
}

#[async_trait]
impl ReferenceDataSource for FileReferenceSource {
    async fn load(&self) -> Result<ReferenceData, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::IoError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let mut data = self.format.parse(&content)?;
        if let Some(archetype) = &self.default_archetype {
            data.default_archetype = Some(archetype.clone());
        }
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
