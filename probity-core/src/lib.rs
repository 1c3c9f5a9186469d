//! Core functionality for Probity property-based testing.
//!
//! Values are produced by the [`Arbitrary`] generator protocol at a
//! generation level and seed, checked against a [`Property`], and on failure
//! shrunk structurally until no smaller candidate fails.

pub mod arbitrary;
pub mod data;
pub mod error;
pub mod forward_list;
pub mod property;
pub mod random;
pub mod report;
pub mod sequence;
pub mod session;

// Re-export the main types
pub use arbitrary::*;
pub use data::*;
pub use error::*;
pub use forward_list::ForwardList;
pub use property::*;
pub use random::*;
pub use report::*;
pub use sequence::*;
pub use session::*;
