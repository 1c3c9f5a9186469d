//! Probity property-based testing library.
//!
//! This is the main entry point for Probity, re-exporting the engine and,
//! with the `derive` feature, `#[derive(Arbitrary)]`.

pub use probity_core::*;

// Re-export derive macros when available
#[cfg(feature = "derive")]
pub use probity_derive::*;
