//! Adapters - Implementations of port interfaces.
//!
//! - `reference` - Reference data sources and the swappable catalog
//! - `report` - Text / JSON rendering of comparison reports

pub mod reference;
pub mod report;

pub use reference::{DataFormat, FileReferenceSource, ReferenceCatalog, StaticReferenceSource};
pub use report::{render_listing, render_text, RenderError, ReportFormat};
