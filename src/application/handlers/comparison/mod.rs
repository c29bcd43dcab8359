//! Comparison handlers.

mod run_comparison;

pub use run_comparison::{compare, ComparisonReport, RunComparisonCommand, RunComparisonHandler};
