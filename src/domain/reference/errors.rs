//! Error types for reference data validation.

use thiserror::Error;

/// Invariant violations found when validating reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceDataError {
    #[error("Primary vendor '{0}' has no score table")]
    UnknownPrimaryVendor(String),

    #[error("Primary vendor '{0}' defines no capabilities")]
    EmptyMasterList(String),

    #[error("Vendor '{vendor}' has no score for capability '{capability}'")]
    MissingScore { vendor: String, capability: String },

    #[error("Product '{product}' references unknown capability '{capability}'")]
    UnknownCapability { product: String, capability: String },

    #[error("Archetype '{0}' has no factor weights")]
    EmptyWeights(String),

    #[error("No archetypes defined")]
    NoArchetypes,

    #[error("Default archetype '{0}' is not defined")]
    UnknownDefaultArchetype(String),

    #[error("Duplicate {kind} '{name}'")]
    Duplicate { kind: &'static str, name: String },

    #[error("'{owner}' lists {kind} '{name}' more than once")]
    DuplicateEntry {
        owner: String,
        kind: &'static str,
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_displays_correctly() {
        let err = ReferenceDataError::MissingScore {
            vendor: "Palo Alto Networks".to_string(),
            capability: "Email Security".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Vendor 'Palo Alto Networks' has no score for capability 'Email Security'"
        );
    }

    #[test]
    fn duplicate_displays_kind() {
        let err = ReferenceDataError::Duplicate {
            kind: "product",
            name: "Cisco Duo".to_string(),
        };
        assert_eq!(format!("{}", err), "Duplicate product 'Cisco Duo'");
    }

    #[test]
    fn duplicate_entry_names_owner() {
        let err = ReferenceDataError::DuplicateEntry {
            owner: "PSU Large Bank".to_string(),
            kind: "factor",
            name: "Cloud Maturity".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "'PSU Large Bank' lists factor 'Cloud Maturity' more than once"
        );
    }
}
