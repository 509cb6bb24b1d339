//! Canonical utility module: math, formatting, and caller-clocked timers.
//!
//! Every function is pure and total over its documented domain; invalid
//! arguments surface `InputValidationError` rather than being clamped or
//! defaulted.

pub mod format;
pub mod math;
pub mod timer;

pub use format::{camel_to_kebab, capitalize, format_clock, format_number, kebab_to_camel, unique};
pub use math::{clamp, degrees_to_radians, distance, in_bounds, lerp, radians_to_degrees};
pub use timer::{Debounce, Throttle};
