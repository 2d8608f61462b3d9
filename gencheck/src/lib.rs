//! gencheck: generator-driven property checking.
//!
//! This is the main entry point for the library, re-exporting the core
//! generators, registry and check runner, plus `#[derive(Arbitrary)]` when
//! the `derive` feature is enabled.

pub use gencheck_core::*;

// Re-export derive macros when available
#[cfg(feature = "derive")]
pub use gencheck_derive::*;
