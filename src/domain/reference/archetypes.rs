//! Bank archetypes, their factor weights, and customer-name hints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Score;

/// The weight of one industry factor within an archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub factor: String,
    pub weight: Score,
}

impl FactorWeight {
    /// Creates a new factor weight.
    pub fn new(factor: impl Into<String>, weight: Score) -> Self {
        Self {
            factor: factor.into(),
            weight,
        }
    }
}

/// A customer-segment profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub factors: Vec<FactorWeight>,
}

impl Archetype {
    /// Creates an archetype with no factors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factors: Vec::new(),
        }
    }

    /// Adds a factor weight.
    pub fn with_factor(mut self, factor: impl Into<String>, weight: Score) -> Self {
        self.factors.push(FactorWeight::new(factor, weight));
        self
    }
}

/// Archetype name → factor weights, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeWeights {
    archetypes: Vec<Archetype>,
}

impl ArchetypeWeights {
    /// Creates the table from archetypes.
    pub fn new(archetypes: Vec<Archetype>) -> Self {
        Self { archetypes }
    }

    /// Finds an archetype by exact name.
    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    /// Returns true if the archetype exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first-defined archetype.
    pub fn first(&self) -> Option<&Archetype> {
        self.archetypes.first()
    }

    /// Archetype names in authoring order.
    pub fn names(&self) -> Vec<&str> {
        self.archetypes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterates over archetypes.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }

    /// Returns true if no archetype is defined.
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub(crate) fn push(&mut self, archetype: Archetype) {
        self.archetypes.push(archetype);
    }
}

/// Free-text customer name → archetype name. Lookup is exact-string.
///
/// Kept sorted so serialized reference data is byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeHints {
    hints: BTreeMap<String, String>,
}

impl ArchetypeHints {
    /// Creates an empty hint table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hint.
    pub fn with(mut self, customer: impl Into<String>, archetype: impl Into<String>) -> Self {
        self.insert(customer, archetype);
        self
    }

    /// Inserts or replaces a hint.
    pub fn insert(&mut self, customer: impl Into<String>, archetype: impl Into<String>) {
        self.hints.insert(customer.into(), archetype.into());
    }

    /// Looks up the hinted archetype for a customer.
    pub fn lookup(&self, customer: &str) -> Option<&str> {
        self.hints.get(customer).map(String::as_str)
    }

    /// Iterates over (customer, archetype) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.hints.iter().map(|(c, a)| (c.as_str(), a.as_str()))
    }

    /// Number of hints.
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Returns true if there are no hints.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    #[test]
    fn archetype_weights_keep_authoring_order() {
        let weights = ArchetypeWeights::new(vec![
            Archetype::new("PSU").with_factor("Regulatory Pressure", score(5)),
            Archetype::new("Private").with_factor("Regulatory Pressure", score(4)),
        ]);

        assert_eq!(weights.names(), vec!["PSU", "Private"]);
        assert_eq!(weights.first().map(|a| a.name.as_str()), Some("PSU"));
        assert!(weights.contains("Private"));
        assert!(!weights.contains("private"));
    }

    #[test]
    fn hints_lookup_is_exact() {
        let hints = ArchetypeHints::new().with("SBI", "PSU");
        assert_eq!(hints.lookup("SBI"), Some("PSU"));
        assert_eq!(hints.lookup("sbi"), None);
        assert_eq!(hints.lookup(""), None);
    }

    #[test]
    fn hints_deserialize_from_object() {
        let hints: ArchetypeHints =
            serde_json::from_str(r#"{"RBI": "Central Bank / Regulator"}"#).unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints.lookup("RBI"), Some("Central Bank / Regulator"));
    }

    #[test]
    fn factor_weight_rejects_out_of_range_on_deserialize() {
        let result: Result<FactorWeight, _> =
            serde_json::from_str(r#"{"factor": "Cloud Maturity", "weight": 0}"#);
        assert!(result.is_err());
    }
}
