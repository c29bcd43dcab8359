//! Reference data adapters
//!
//! - `StaticReferenceSource` - Fixed in-memory tables (built-in demo)
//! - `FileReferenceSource` - JSON / YAML file on disk
//! - `ReferenceCatalog` - Atomically swappable current generation

mod catalog;
mod file_source;
mod static_source;

pub use catalog::ReferenceCatalog;
pub use file_source::{DataFormat, FileReferenceSource};
pub use static_source::StaticReferenceSource;
