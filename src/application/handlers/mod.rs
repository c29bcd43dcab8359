//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod comparison;

pub use comparison::{compare, ComparisonReport, RunComparisonCommand, RunComparisonHandler};
