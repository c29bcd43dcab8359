//! Vendor score table and product → capability map.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// A vendor's score for one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityScore {
    pub capability: String,
    pub score: Score,
}

impl CapabilityScore {
    /// Creates a new capability score.
    pub fn new(capability: impl Into<String>, score: Score) -> Self {
        Self {
            capability: capability.into(),
            score,
        }
    }
}

/// All capability scores for a single vendor, in authoring order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    pub scores: Vec<CapabilityScore>,
}

impl VendorProfile {
    /// Creates a vendor with no scores.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Vec::new(),
        }
    }

    /// Looks up the score for a capability.
    pub fn score_for(&self, capability: &str) -> Option<Score> {
        self.scores
            .iter()
            .find(|s| s.capability == capability)
            .map(|s| s.score)
    }

    /// Capability names in authoring order.
    pub fn capabilities(&self) -> Vec<String> {
        self.scores.iter().map(|s| s.capability.clone()).collect()
    }

    /// Sets (or replaces) the score for a capability, keeping its position.
    pub fn set_score(&mut self, capability: impl Into<String>, score: Score) {
        let capability = capability.into();
        match self.scores.iter_mut().find(|s| s.capability == capability) {
            Some(existing) => existing.score = score,
            None => self.scores.push(CapabilityScore::new(capability, score)),
        }
    }
}

/// Vendor → capability → score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorScoreTable {
    vendors: Vec<VendorProfile>,
}

impl VendorScoreTable {
    /// Creates a table from vendor profiles.
    pub fn new(vendors: Vec<VendorProfile>) -> Self {
        Self { vendors }
    }

    /// Finds a vendor by exact name.
    pub fn get(&self, vendor: &str) -> Option<&VendorProfile> {
        self.vendors.iter().find(|v| v.name == vendor)
    }

    /// Returns true if the vendor exists.
    pub fn contains(&self, vendor: &str) -> bool {
        self.get(vendor).is_some()
    }

    /// Vendor names in authoring order.
    pub fn names(&self) -> Vec<&str> {
        self.vendors.iter().map(|v| v.name.as_str()).collect()
    }

    /// Iterates over vendor profiles.
    pub fn iter(&self) -> impl Iterator<Item = &VendorProfile> {
        self.vendors.iter()
    }

    /// Returns a mutable profile for the vendor, creating it if missing.
    pub(crate) fn entry(&mut self, vendor: &str) -> &mut VendorProfile {
        let index = match self.vendors.iter().position(|v| v.name == vendor) {
            Some(index) => index,
            None => {
                self.vendors.push(VendorProfile::new(vendor));
                self.vendors.len() - 1
            }
        };
        &mut self.vendors[index]
    }
}

/// A product and the capabilities it activates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub capabilities: Vec<String>,
}

impl Product {
    /// Creates a new product entry.
    pub fn new(name: impl Into<String>, capabilities: Vec<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            capabilities: capabilities.into_iter().map(|c| c.into()).collect(),
        }
    }
}

/// Product identifier → set of activated capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCapabilityMap {
    products: Vec<Product>,
}

impl ProductCapabilityMap {
    /// Creates a map from product entries.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Capabilities activated by a product, if the product is known.
    pub fn capabilities_of(&self, product: &str) -> Option<&[String]> {
        self.products
            .iter()
            .find(|p| p.name == product)
            .map(|p| p.capabilities.as_slice())
    }

    /// Returns true if the product is known.
    pub fn contains(&self, product: &str) -> bool {
        self.capabilities_of(product).is_some()
    }

    /// Product names in authoring order.
    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    /// Iterates over product entries.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub(crate) fn push(&mut self, product: Product) {
        self.products.push(product);
    }
}
