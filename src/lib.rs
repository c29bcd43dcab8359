//! Capability Compare - Vendor capability comparison for customer conversations
//!
//! This crate compares the primary vendor's capability scores against a
//! competitor, restricted to the capabilities the selected products deliver,
//! and derives an industry weight from the customer's archetype.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
