//! Utility modules for typetodo.
//!
//! # Available Utilities
//!
//! - [`color`] - Deterministic tag colors derived from a string hash

pub mod color;
