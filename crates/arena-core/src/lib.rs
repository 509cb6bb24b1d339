//! Core vocabulary for the arena-shooter tuning library.
//!
//! This crate defines the immutable ParameterSet tree, the powerup and
//! enemy kind enums, geometry types, and the error types shared across
//! the other crates. It has no dependency on any runtime framework and
//! performs no I/O: the parameter schema is embedded and validated once
//! at load time.

pub mod enums;
pub mod error;
pub mod params;
pub mod types;

pub use error::{InputValidationError, SchemaError};
pub use params::ParameterSet;
