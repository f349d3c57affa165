//! Wellness Tracker Shared Library
//!
//! This crate contains the domain types, input types, and validation
//! utilities shared by the tracking and achievement crates.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
