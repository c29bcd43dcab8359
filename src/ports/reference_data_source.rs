//! Reference Data Source Port - Interface for loading reference tables.
//!
//! The comparison core never performs I/O; it reads whatever a source
//! produced at startup (or on reload).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reference::{ReferenceData, ReferenceDataError};

/// Errors that can occur while loading reference data
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Reference data not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse reference data: {0}")]
    ParseFailed(String),

    #[error("Unsupported reference data format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid reference data: {0}")]
    Invalid(#[from] ReferenceDataError),
}

impl SourceError {
    /// Error code for this source error
    pub fn code(&self) -> ErrorCode {
        match self {
            SourceError::NotFound(_) | SourceError::IoError(_) => ErrorCode::SourceUnavailable,
            SourceError::ParseFailed(_) | SourceError::UnsupportedFormat(_) => {
                ErrorCode::InvalidFormat
            }
            SourceError::Invalid(_) => ErrorCode::DataIntegrity,
        }
    }
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Port for loading reference data
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    /// Load the reference tables
    ///
    /// # Errors
    /// Returns `SourceError` if the data cannot be read or parsed.
    /// Validation is the caller's concern.
    async fn load(&self) -> Result<ReferenceData, SourceError>;

    /// Human-readable description of where the data comes from
    fn describe(&self) -> String;
}

/// A validated, immutable generation of reference data.
#[derive(Debug, Clone)]
pub struct ReferenceSnapshot {
    pub data: Arc<ReferenceData>,
    /// SHA-256 of the canonical JSON form
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}

impl ReferenceSnapshot {
    /// Validates the data and stamps it with a fingerprint.
    pub fn new(data: ReferenceData) -> Result<Self, SourceError> {
        data.validate()?;
        let fingerprint = Self::compute_fingerprint(&data)?;
        Ok(Self {
            data: Arc::new(data),
            fingerprint,
            loaded_at: Utc::now(),
        })
    }

    /// Computes the fingerprint of reference data.
    pub fn compute_fingerprint(data: &ReferenceData) -> Result<String, SourceError> {
        let canonical =
            serde_json::to_vec(data).map_err(|e| SourceError::ParseFailed(e.to_string()))?;
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// First 12 hex characters of the fingerprint, for logs.
    pub fn short_fingerprint(&self) -> &str {
        &self.fingerprint[..self.fingerprint.len().min(12)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_of_demo_data_is_fingerprinted() {
        let snapshot = ReferenceSnapshot::new(ReferenceData::demo()).unwrap();
        assert_eq!(snapshot.fingerprint.len(), 64);
        assert_eq!(snapshot.short_fingerprint().len(), 12);
    }

    #[test]
    fn fingerprint_is_stable_for_equal_data() {
        let a = ReferenceSnapshot::compute_fingerprint(&ReferenceData::demo()).unwrap();
        let b = ReferenceSnapshot::compute_fingerprint(&ReferenceData::demo()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_changes_with_data() {
        let changed = ReferenceData::demo();
        let changed = ReferenceData {
            hints: changed.hints.clone().with("Canara Bank", "PSU Large Bank"),
            ..changed
        };
        assert_ne!(
            ReferenceSnapshot::compute_fingerprint(&ReferenceData::demo()).unwrap(),
            ReferenceSnapshot::compute_fingerprint(&changed).unwrap()
        );
    }

    #[test]
    fn source_errors_map_to_codes() {
        let err: DomainError = SourceError::NotFound("/tmp/x.json".to_string()).into();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
        assert_eq!(err.to_string(), "[SOURCE_UNAVAILABLE] Reference data not found: /tmp/x.json");

        let err: DomainError = SourceError::Invalid(ReferenceDataError::NoArchetypes).into();
        assert_eq!(err.code, ErrorCode::DataIntegrity);
        assert_eq!(
            SourceError::UnsupportedFormat("x.csv".to_string()).code(),
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn snapshot_rejects_invalid_data() {
        let data = ReferenceData::builder().primary_vendor("Cisco").build();
        let result = ReferenceSnapshot::new(data);
        assert!(matches!(
            result,
            Err(SourceError::Invalid(ReferenceDataError::UnknownPrimaryVendor(_)))
        ));
    }
}
