//! Error types for schema validation and per-call input validation.
//!
//! `SchemaError` is raised once at parameter load and is fatal to startup.
//! `InputValidationError` is raised per call by the scaling/selection
//! functions and must be surfaced to the immediate caller; the functions
//! never clamp or default an invalid argument.

use thiserror::Error;

/// A malformed or internally inconsistent ParameterSet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A numeric field is outside its legal range.
    #[error("{field}: value {value} violates constraint ({constraint})")]
    OutOfRange {
        /// Dotted path of the offending field, e.g. `powerups.shield.rarity`.
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// A color field is not a `#rrggbb` hex literal.
    #[error("{field}: malformed color {value:?} (expected #rrggbb)")]
    BadColor { field: &'static str, value: String },
}

/// An out-of-domain argument to a scaling or selection call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputValidationError {
    /// The eligible candidate set was empty.
    #[error("selection requires at least one candidate")]
    EmptyCandidates,

    /// `lo > hi` where an ordered pair of bounds was required.
    #[error("inverted bounds: lo {lo} > hi {hi}")]
    InvertedBounds { lo: f64, hi: f64 },

    /// A named argument fell outside its documented domain.
    #[error("{name}: {value} outside {expected}")]
    OutOfDomain {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A named argument was NaN or infinite where a finite number is required.
    #[error("{name}: must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// A caller-supplied clock value went backwards.
    #[error("clock went backwards: now {now} < previous {previous}")]
    NonMonotonicClock { now: f64, previous: f64 },
}
