//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReferenceDataSource` - Where reference tables are loaded from

mod reference_data_source;

pub use reference_data_source::{ReferenceDataSource, ReferenceSnapshot, SourceError};
