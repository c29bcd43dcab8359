//! In-memory reference data source
//!
//! Serves a fixed `ReferenceData` value. Used for the built-in demo tables
//! and in tests.

use async_trait::async_trait;

use crate::domain::reference::ReferenceData;
use crate::ports::{ReferenceDataSource, SourceError};

/// Source that always returns the same tables
#[derive(Debug, Clone)]
pub struct StaticReferenceSource {
    data: ReferenceData,
    label: String,
}

impl StaticReferenceSource {
    /// Create a source serving the given data
    pub fn new(data: ReferenceData, label: impl Into<String>) -> Self {
        Self {
            data,
            label: label.into(),
        }
    }

    /// Source serving the built-in demo tables
    pub fn demo() -> Self {
        Self::new(ReferenceData::demo(), "built-in demo")
    }

    /// Replace the default archetype named by the data
    pub fn with_default_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.data.default_archetype = Some(archetype.into());
        self
    }
}

impl Default for StaticReferenceSource {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl ReferenceDataSource for StaticReferenceSource {
    async fn load(&self) -> Result<ReferenceData, SourceError> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
