//! Analysis Module - Pure domain services for capability comparison.
//!
//! This module contains stateless functions that operate on reference data
//! to resolve a selection and compare a vendor against a competitor.
//!
//! # Components
//!
//! - `SelectionResolver` - Archetype resolution and capability activation
//! - `ComparisonEngine` - Comparison matrix and insight summary
//! - `IndustryWeightCalculator` - LOW / MEDIUM / HIGH weight of an archetype
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take
//! reference tables as input and return computed results. No ports or
//! adapters needed since there's no I/O or external dependencies.

mod comparison_engine;
mod comparison_row;
mod errors;
mod industry_weight;
mod selection_resolver;

// Re-export all public types
pub use comparison_engine::ComparisonEngine;
pub use comparison_row::{ComparisonRow, ComparisonSummary, Positioning, Scope, VendorScore};
pub use errors::ComparisonError;
pub use industry_weight::{
    IndustryWeight, IndustryWeightCalculator, WeightLevel, HIGH_WEIGHT_THRESHOLD,
    MEDIUM_WEIGHT_THRESHOLD,
};
pub use selection_resolver::SelectionResolver;
