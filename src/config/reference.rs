//! Reference data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

const DATA_FILE_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Where reference data comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceConfig {
    /// Reference data file; the built-in demo tables are used when unset
    pub data_path: Option<PathBuf>,

    /// Replaces the default archetype named by the data itself
    pub default_archetype: Option<String>,
}

impl ReferenceConfig {
    /// Validate reference configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.data_path {
            let supported = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|ext| {
                    DATA_FILE_EXTENSIONS
                        .iter()
                        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
                })
                .unwrap_or(false);
            if !supported {
                return Err(ValidationError::UnsupportedDataFile(
                    path.display().to_string(),
                ));
            }
        }
        if let Some(archetype) = &self.default_archetype {
            if archetype.trim().is_empty() {
                return Err(ValidationError::BlankDefaultArchetype);
            }
        }
        Ok(())
    }
}
