//! Comparison rows and their qualitative labels.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::Score;

/// Outcome of comparing the vendor and competitor on one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Positioning {
    VendorAdvantage,
    CompetitorAdvantage,
    Comparable,
    NotCompared,
}

impl Positioning {
    /// Positions an in-scope capability by the sign of vendor − competitor.
    pub fn from_scores(vendor: Score, competitor: Score) -> Self {
        match vendor.cmp(&competitor) {
            Ordering::Greater => Positioning::VendorAdvantage,
            Ordering::Less => Positioning::CompetitorAdvantage,
            Ordering::Equal => Positioning::Comparable,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Positioning::VendorAdvantage => "Vendor Advantage",
            Positioning::CompetitorAdvantage => "Competitor Advantage",
            Positioning::Comparable => "Comparable",
            Positioning::NotCompared => "Not Compared",
        }
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether a capability is activated by the selected products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    InScope,
    OutOfScope,
}

impl Scope {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::InScope => "In Scope",
            Scope::OutOfScope => "Out of Scope",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The vendor's score on a row. Out-of-scope rows carry no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorScore {
    Scored(Score),
    Unscored,
}

impl fmt::Display for VendorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorScore::Scored(score) => write!(f, "{}", score),
            VendorScore::Unscored => write!(f, "-"),
        }
    }
}

/// One capability's line in the comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub capability: String,
    pub vendor_score: VendorScore,
    pub competitor_score: Score,
    pub positioning: Positioning,
    pub scope: Scope,
}

impl ComparisonRow {
    /// Creates an in-scope row, positioned by score.
    pub fn in_scope(capability: impl Into<String>, vendor: Score, competitor: Score) -> Self {
        Self {
            capability: capability.into(),
            vendor_score: VendorScore::Scored(vendor),
            competitor_score: competitor,
            positioning: Positioning::from_scores(vendor, competitor),
            scope: Scope::InScope,
        }
    }

    /// Creates an out-of-scope row. No comparison is performed.
    pub fn out_of_scope(capability: impl Into<String>, competitor: Score) -> Self {
        Self {
            capability: capability.into(),
            vendor_score: VendorScore::Unscored,
            competitor_score: competitor,
            positioning: Positioning::NotCompared,
            scope: Scope::OutOfScope,
        }
    }
}

/// Capabilities grouped by outcome, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub advantages: Vec<String>,
    pub pressures: Vec<String>,
    pub out_of_scope: Vec<String>,
}
