//! Core functionality for gencheck.
//!
//! This crate provides the building blocks of generator-driven property
//! checking: an explicit random [`Source`], the [`Generator`] trait with
//! primitive and composite generators, a type-indexed [`Registry`] and the
//! check runner.

pub mod composite;
pub mod data;
pub mod error;
pub mod gen;
pub mod primitive;
pub mod property;
pub mod registry;

// Re-export the main types
pub use composite::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use primitive::*;
pub use property::*;
pub use registry::*;
