//! RunComparisonHandler - Query handler for one comparison render.
//!
//! Takes a snapshot of the reference data, resolves the selection, and
//! returns the full comparison report. Every render is independent.

use serde::Serialize;

use crate::adapters::reference::ReferenceCatalog;
use crate::domain::analysis::{
    ComparisonEngine, ComparisonError, ComparisonRow, ComparisonSummary, IndustryWeight,
    IndustryWeightCalculator, SelectionResolver,
};
use crate::domain::reference::{FactorWeight, ReferenceData};

/// Query describing the user's current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunComparisonCommand {
    /// Free-text customer name, used for the archetype hint.
    pub customer_name: String,
    /// Archetype chosen by the user instead of the suggested one.
    pub archetype_override: Option<String>,
    /// Selected primary-vendor products.
    pub products: Vec<String>,
    /// Competitor vendor name.
    pub competitor: String,
}

/// Everything a presentation layer needs to show one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub customer_name: String,
    pub primary_vendor: String,
    pub competitor: String,
    /// Archetype suggested by the customer-name hint (or the default).
    pub suggested_archetype: String,
    /// Archetype actually used.
    pub archetype: String,
    /// Factor weights of the archetype; empty when it has none defined.
    pub drivers: Vec<FactorWeight>,
    /// `None` is the "no drivers" state.
    pub industry_weight: Option<IndustryWeight>,
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
    /// Selected products missing from the product map.
    pub unknown_products: Vec<String>,
}

impl ComparisonReport {
    /// Returns true if the archetype override replaced the suggestion.
    pub fn archetype_overridden(&self) -> bool {
        self.archetype != self.suggested_archetype
    }
}

/// Handler for running a comparison against the current reference data.
pub struct RunComparisonHandler {
    catalog: ReferenceCatalog,
}

impl RunComparisonHandler {
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        command: RunComparisonCommand,
    ) -> Result<ComparisonReport, ComparisonError> {
        let snapshot = self.catalog.snapshot().await;
        tracing::debug!(
            customer = %command.customer_name,
            competitor = %command.competitor,
            products = command.products.len(),
            fingerprint = %snapshot.short_fingerprint(),
            "Running comparison"
        );

        let report = compare(&snapshot.data, &command);
        if let Err(e) = &report {
            tracing::warn!(code = %e.code(), "Comparison aborted: {}", e);
        }
        report
    }
}

/// Runs one comparison over the given reference data.
///
/// # Errors
/// - `UnknownCompetitor` if the competitor has no score table
/// - `UnknownVendor` if the primary vendor has no score table
/// - `DataIntegrity` if a master capability lacks a score
/// - `EmptyWeights` if the effective archetype has no factors
pub fn compare(
    data: &ReferenceData,
    command: &RunComparisonCommand,
) -> Result<ComparisonReport, ComparisonError> {
    let competitor = data
        .vendors
        .get(&command.competitor)
        .ok_or_else(|| ComparisonError::UnknownCompetitor(command.competitor.clone()))?;
    let vendor = data
        .primary_profile()
        .ok_or_else(|| ComparisonError::UnknownVendor(data.primary_vendor.clone()))?;

    let default_archetype = data.default_archetype().unwrap_or_default();
    let suggested_archetype = SelectionResolver::resolve_archetype(
        &command.customer_name,
        &data.hints,
        &data.archetypes,
        default_archetype,
    );
    let archetype = command
        .archetype_override
        .clone()
        .unwrap_or_else(|| suggested_archetype.clone());

    let (drivers, industry_weight) = match data.archetypes.get(&archetype) {
        Some(definition) => (
            definition.factors.clone(),
            Some(IndustryWeightCalculator::for_archetype(definition)?),
        ),
        None => {
            tracing::warn!(archetype = %archetype, "No industry drivers defined for archetype");
            (Vec::new(), None)
        }
    };

    let unknown_products = SelectionResolver::unknown_products(&command.products, &data.products);
    for product in &unknown_products {
        tracing::warn!(product = %product, "Selected product has no capability mapping");
    }

    let activated = SelectionResolver::activate_capabilities(&command.products, &data.products);
    let rows = ComparisonEngine::build_comparison(
        &data.master_capabilities(),
        &activated,
        vendor,
        competitor,
    )?;
    let summary = ComparisonEngine::summarize(&rows);

    Ok(ComparisonReport {
        customer_name: command.customer_name.clone(),
        primary_vendor: data.primary_vendor.clone(),
        competitor: command.competitor.clone(),
        suggested_archetype,
        archetype,
        drivers,
        industry_weight,
        rows,
        summary,
        unknown_products,
    })
}
