//! Comparison Engine - Builds the capability matrix and its insight summary.

use std::collections::HashSet;

use super::{ComparisonError, ComparisonRow, ComparisonSummary, Positioning, Scope};
use crate::domain::foundation::Score;
use crate::domain::reference::VendorProfile;

/// Capability comparison functions.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Builds one row per master capability, in master order.
    ///
    /// # Algorithm
    /// - Activated: both scores looked up, positioned by sign of the difference
    /// - Not activated: vendor unscored, competitor score still shown, not compared
    ///
    /// # Errors
    /// `DataIntegrity` if a looked-up score is missing. No score is ever guessed.
    pub fn build_comparison(
        all_capabilities: &[String],
        activated: &HashSet<String>,
        vendor_scores: &VendorProfile,
        competitor_scores: &VendorProfile,
    ) -> Result<Vec<ComparisonRow>, ComparisonError> {
        all_capabilities
            .iter()
            .map(|capability| {
                let competitor = Self::lookup(competitor_scores, capability)?;
                if activated.contains(capability) {
                    let vendor = Self::lookup(vendor_scores, capability)?;
                    Ok(ComparisonRow::in_scope(capability.clone(), vendor, competitor))
                } else {
                    Ok(ComparisonRow::out_of_scope(capability.clone(), competitor))
                }
            })
            .collect()
    }

    fn lookup(profile: &VendorProfile, capability: &str) -> Result<Score, ComparisonError> {
        profile
            .score_for(capability)
            .ok_or_else(|| ComparisonError::DataIntegrity {
                vendor: profile.name.clone(),
                capability: capability.to_string(),
            })
    }

    /// Groups capabilities by outcome, preserving row order.
    ///
    /// # Edge Cases
    /// - Nothing activated: advantages and pressures empty, every row out of scope
    pub fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
        ComparisonSummary {
            advantages: Self::capabilities_where(rows, |row| {
                row.positioning == Positioning::VendorAdvantage
            }),
            pressures: Self::capabilities_where(rows, |row| {
                row.positioning == Positioning::CompetitorAdvantage
            }),
            out_of_scope: Self::capabilities_where(rows, |row| row.scope == Scope::OutOfScope),
        }
    }

    fn capabilities_where(
        rows: &[ComparisonRow],
        keep: impl Fn(&ComparisonRow) -> bool,
    ) -> Vec<String> {
        rows.iter()
            .filter(|row| keep(row))
            .map(|row| row.capability.clone())
            .collect()
    }
}
