//! Reference Data - the immutable tables every comparison reads from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    Archetype, ArchetypeHints, ArchetypeWeights, Product, ProductCapabilityMap,
    ReferenceDataError, VendorProfile, VendorScoreTable,
};
use crate::domain::foundation::Score;

/// The full set of reference tables for one comparison context.
///
/// The primary vendor's score list is the master capability list: its order
/// is the row order of every comparison, and every other vendor must score
/// each capability on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub primary_vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_archetype: Option<String>,
    pub vendors: VendorScoreTable,
    pub products: ProductCapabilityMap,
    pub archetypes: ArchetypeWeights,
    #[serde(default)]
    pub hints: ArchetypeHints,
}

impl ReferenceData {
    /// Creates a builder for constructing reference data.
    pub fn builder() -> ReferenceDataBuilder {
        ReferenceDataBuilder::new()
    }

    /// The built-in demo tables: Cisco vs. Palo Alto Networks for Indian banks.
    pub fn demo() -> Self {
        ReferenceData::builder()
            .primary_vendor("Cisco")
            .score("Cisco", "Network Security", 5)
            .score("Cisco", "Email Security", 5)
            .score("Cisco", "Threat Prevention", 4)
            .score("Cisco", "Identity & Zero Trust", 5)
            .score("Cisco", "Cloud Security (SSE)", 4)
            .score("Cisco", "Compliance & Sovereignty", 5)
            .score("Palo Alto Networks", "Network Security", 5)
            .score("Palo Alto Networks", "Email Security", 3)
            .score("Palo Alto Networks", "Threat Prevention", 5)
            .score("Palo Alto Networks", "Identity & Zero Trust", 3)
            .score("Palo Alto Networks", "Cloud Security (SSE)", 5)
            .score("Palo Alto Networks", "Compliance & Sovereignty", 4)
            .product(
                "Cisco Secure Firewall",
                vec![
                    "Network Security",
                    "Threat Prevention",
                    "Compliance & Sovereignty",
                ],
            )
            .product("Cisco Secure Email", vec!["Email Security", "Threat Prevention"])
            .product(
                "Cisco Duo",
                vec!["Identity & Zero Trust", "Compliance & Sovereignty"],
            )
            .product(
                "Cisco Umbrella",
                vec!["Cloud Security (SSE)", "Threat Prevention"],
            )
            .archetype(
                "PSU Large Bank",
                &[
                    ("Regulatory Pressure", 5),
                    ("Data Sovereignty", 5),
                    ("Legacy Footprint", 4),
                    ("Cloud Maturity", 2),
                ],
            )
            .archetype(
                "Private Large Bank",
                &[
                    ("Regulatory Pressure", 4),
                    ("Data Sovereignty", 3),
                    ("Legacy Footprint", 2),
                    ("Cloud Maturity", 4),
                ],
            )
            .archetype(
                "Central Bank / Regulator",
                &[
                    ("Regulatory Pressure", 5),
                    ("Data Sovereignty", 5),
                    ("Legacy Footprint", 5),
                    ("Cloud Maturity", 1),
                ],
            )
            .hint("State Bank of India", "PSU Large Bank")
            .hint("SBI", "PSU Large Bank")
            .hint("Bank of Baroda", "PSU Large Bank")
            .hint("Punjab National Bank", "PSU Large Bank")
            .hint("HDFC Bank", "Private Large Bank")
            .hint("ICICI Bank", "Private Large Bank")
            .hint("Axis Bank", "Private Large Bank")
            .hint("Reserve Bank of India", "Central Bank / Regulator")
            .hint("RBI", "Central Bank / Regulator")
            .build()
    }

    /// The primary vendor's profile.
    pub fn primary_profile(&self) -> Option<&VendorProfile> {
        self.vendors.get(&self.primary_vendor)
    }

    /// The master capability list, in row order.
    pub fn master_capabilities(&self) -> Vec<String> {
        self.primary_profile()
            .map(VendorProfile::capabilities)
            .unwrap_or_default()
    }

    /// Vendors that can be selected as competitor.
    pub fn competitors(&self) -> Vec<&str> {
        self.vendors
            .names()
            .into_iter()
            .filter(|name| *name != self.primary_vendor)
            .collect()
    }

    /// The archetype used when no hint applies: the configured default,
    /// else the first-defined archetype.
    pub fn default_archetype(&self) -> Option<&str> {
        self.default_archetype
            .as_deref()
            .or_else(|| self.archetypes.first().map(|a| a.name.as_str()))
    }

    /// Hints whose archetype is not defined. Sorted by customer name.
    ///
    /// These are not invalid; resolution falls back to the default archetype.
    pub fn dangling_hints(&self) -> Vec<(&str, &str)> {
        let mut dangling: Vec<_> = self
            .hints
            .iter()
            .filter(|(_, archetype)| !self.archetypes.contains(archetype))
            .collect();
        dangling.sort();
        dangling
    }

    /// Checks every table invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        let primary = self
            .primary_profile()
            .ok_or_else(|| ReferenceDataError::UnknownPrimaryVendor(self.primary_vendor.clone()))?;

        let master = primary.capabilities();
        if master.is_empty() {
            return Err(ReferenceDataError::EmptyMasterList(self.primary_vendor.clone()));
        }
        ensure_unique("capability", master.iter().map(String::as_str))?;
        ensure_unique("vendor", self.vendors.iter().map(|v| v.name.as_str()))?;

        for vendor in self.vendors.iter() {
            ensure_unique_within(
                &vendor.name,
                "capability",
                vendor.scores.iter().map(|s| s.capability.as_str()),
            )?;
            for capability in &master {
                if vendor.score_for(capability).is_none() {
                    return Err(ReferenceDataError::MissingScore {
                        vendor: vendor.name.clone(),
                        capability: capability.clone(),
                    });
                }
            }
        }

        ensure_unique("product", self.products.iter().map(|p| p.name.as_str()))?;
        for product in self.products.iter() {
            if let Some(unknown) = product.capabilities.iter().find(|c| !master.contains(c)) {
                return Err(ReferenceDataError::UnknownCapability {
                    product: product.name.clone(),
                    capability: unknown.clone(),
                });
            }
        }

        if self.archetypes.is_empty() {
            return Err(ReferenceDataError::NoArchetypes);
        }
        ensure_unique("archetype", self.archetypes.iter().map(|a| a.name.as_str()))?;
        for archetype in self.archetypes.iter() {
            if archetype.factors.is_empty() {
                return Err(ReferenceDataError::EmptyWeights(archetype.name.clone()));
            }
            ensure_unique_within(
                &archetype.name,
                "factor",
                archetype.factors.iter().map(|f| f.factor.as_str()),
            )?;
        }

        if let Some(default) = &self.default_archetype {
            if !self.archetypes.contains(default) {
                return Err(ReferenceDataError::UnknownDefaultArchetype(default.clone()));
            }
        }

        Ok(())
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ReferenceDataError> {
    match first_duplicate(names) {
        Some(name) => Err(ReferenceDataError::Duplicate {
            kind,
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

/// Entries keyed by name inside one vendor or archetype.
fn ensure_unique_within<'a>(
    owner: &str,
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ReferenceDataError> {
    match first_duplicate(names) {
        Some(name) => Err(ReferenceDataError::DuplicateEntry {
            owner: owner.to_string(),
            kind,
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

fn first_duplicate<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.find(|name| !seen.insert(*name))
}

/// Builder for constructing ReferenceData instances.
///
/// Integer scores and weights are clamped to the 1-5 scale.
#[derive(Debug, Default)]
pub struct ReferenceDataBuilder {
    primary_vendor: String,
    default_archetype: Option<String>,
    vendors: VendorScoreTable,
    products: ProductCapabilityMap,
    archetypes: ArchetypeWeights,
    hints: ArchetypeHints,
}

impl ReferenceDataBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary vendor.
    pub fn primary_vendor(mut self, name: impl Into<String>) -> Self {
        self.primary_vendor = name.into();
        self
    }

    /// Sets an explicit default archetype.
    pub fn default_archetype(mut self, name: impl Into<String>) -> Self {
        self.default_archetype = Some(name.into());
        self
    }

    /// Adds a vendor's score for a capability.
    pub fn score(mut self, vendor: &str, capability: impl Into<String>, score: u8) -> Self {
        self.vendors
            .entry(vendor)
            .set_score(capability, Score::new(score));
        self
    }

    /// Adds a product and the capabilities it activates.
    pub fn product(mut self, name: impl Into<String>, capabilities: Vec<impl Into<String>>) -> Self {
        self.products.push(Product::new(name, capabilities));
        self
    }

    /// Adds an archetype with its factor weights.
    pub fn archetype(mut self, name: impl Into<String>, factors: &[(&str, u8)]) -> Self {
        let archetype = factors
            .iter()
            .fold(Archetype::new(name), |archetype, (factor, weight)| {
                archetype.with_factor(*factor, Score::new(*weight))
            });
        self.archetypes.push(archetype);
        self
    }

    /// Adds a customer-name hint.
    pub fn hint(mut self, customer: impl Into<String>, archetype: impl Into<String>) -> Self {
        self.hints.insert(customer, archetype);
        self
    }

    /// Builds the reference data without validating it.
    pub fn build(self) -> ReferenceData {
        ReferenceData {
            primary_vendor: self.primary_vendor,
            default_archetype: self.default_archetype,
            vendors: self.vendors,
            products: self.products,
            archetypes: self.archetypes,
            hints: self.hints,
        }
    }
}
