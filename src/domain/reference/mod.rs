//! Reference Module - Static tables the comparison reads from.
//!
//! # Components
//!
//! - `VendorScoreTable` - Vendor → capability → score
//! - `ProductCapabilityMap` - Product → activated capabilities
//! - `ArchetypeWeights` - Archetype → factor weights
//! - `ArchetypeHints` - Customer name → archetype
//! - `ReferenceData` - Aggregate of the above with invariant validation
//!
//! Reference data is never mutated after load; a replacement is a whole new
//! `ReferenceData` value.

mod archetypes;
mod errors;
mod reference_data;
mod tables;

pub use archetypes::{Archetype, ArchetypeHints, ArchetypeWeights, FactorWeight};
pub use errors::ReferenceDataError;
pub use reference_data::{ReferenceData, ReferenceDataBuilder};
pub use tables::{CapabilityScore, Product, ProductCapabilityMap, VendorProfile, VendorScoreTable};
