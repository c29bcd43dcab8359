//! Error types for comparison analysis.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that abort a single comparison render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("No score for capability '{capability}' from vendor '{vendor}'")]
    DataIntegrity { vendor: String, capability: String },

    #[error("Archetype '{archetype}' has no factor weights")]
    EmptyWeights { archetype: String },

    #[error("Competitor '{0}' is not a known vendor")]
    UnknownCompetitor(String),

    #[error("Vendor '{0}' has no score table")]
    UnknownVendor(String),
}

impl ComparisonError {
    /// The error category surfaced to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            ComparisonError::DataIntegrity { .. } | ComparisonError::UnknownVendor(_) => {
                ErrorCode::DataIntegrity
            }
            ComparisonError::EmptyWeights { .. } | ComparisonError::UnknownCompetitor(_) => {
                ErrorCode::ConfigError
            }
        }
    }
}

impl From<ComparisonError> for DomainError {
    fn from(err: ComparisonError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            ComparisonError::DataIntegrity { vendor, capability } => base
                .with_detail("vendor", vendor)
                .with_detail("capability", capability),
            ComparisonError::EmptyWeights { archetype } => base.with_detail("archetype", archetype),
            ComparisonError::UnknownCompetitor(name) => base.with_detail("competitor", name),
            ComparisonError::UnknownVendor(name) => base.with_detail("vendor", name),
        }
    }
}
