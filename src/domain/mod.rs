//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (score value object, errors)
//! - `reference` - Static reference tables and their invariants
//! - `analysis` - Pure domain services (resolver, comparison engine, industry weight)

pub mod analysis;
pub mod foundation;
pub mod reference;
