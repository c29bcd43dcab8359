//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the capability comparison domain.

mod errors;
mod score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use score::Score;
