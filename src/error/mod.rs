//! Error types shared across the crate.
//!
//! Rendering itself never fails: bad sizes degrade to empty output. Errors are
//! reserved for malformed layout descriptions, which are rejected up front.

mod types;

pub use types::{LayoutError, Result};
