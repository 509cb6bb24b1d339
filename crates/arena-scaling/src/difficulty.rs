//! Wave and elapsed-time difficulty scaling.
//!
//! Pure functions: wave index and elapsed time in, multiplier out. The
//! external game loop owns the counters and calls these once per wave or
//! tick.

use arena_core::error::InputValidationError;
use arena_core::params::WaveParams;

/// Compounding per-wave difficulty: `scaling_factor ^ wave_index`.
///
/// `scaling_factor` must be finite and > 0. Monotone non-decreasing in
/// `wave_index` whenever `scaling_factor >= 1`. Wave 0 is always 1.0.
pub fn difficulty_multiplier(
    wave_index: u32,
    scaling_factor: f64,
) -> Result<f64, InputValidationError> {
    if !scaling_factor.is_finite() {
        return Err(InputValidationError::NotFinite {
            name: "scaling_factor",
            value: scaling_factor,
        });
    }
    if scaling_factor <= 0.0 {
        return Err(InputValidationError::OutOfDomain {
            name: "scaling_factor",
            value: scaling_factor,
            expected: "(0, inf)",
        });
    }
    Ok(scaling_factor.powf(f64::from(wave_index)))
}

/// Enemies for a wave: the base count scaled by the compounding
/// multiplier, rounded half-up.
pub fn enemy_count(wave_index: u32, waves: &WaveParams) -> Result<u32, InputValidationError> {
    let multiplier = difficulty_multiplier(wave_index, waves.difficulty_scaling)?;
    Ok((waves.enemies_per_wave as f64 * multiplier).round() as u32)
}

/// Per-minute compounding difficulty: `scaling ^ (elapsed_ms / 60000)`.
///
/// Drives `mechanics.difficulty_scaling`. Requires `elapsed_ms >= 0` and
/// a finite positive scaling factor.
pub fn time_difficulty(
    elapsed_ms: f64,
    per_minute_scaling: f64,
) -> Result<f64, InputValidationError> {
    if !elapsed_ms.is_finite() {
        return Err(InputValidationError::NotFinite {
            name: "elapsed_ms",
            value: elapsed_ms,
        });
    }
    if elapsed_ms < 0.0 {
        return Err(InputValidationError::OutOfDomain {
            name: "elapsed_ms",
            value: elapsed_ms,
            expected: "[0, inf)",
        });
    }
    if !(per_minute_scaling.is_finite() && per_minute_scaling > 0.0) {
        return Err(InputValidationError::OutOfDomain {
            name: "per_minute_scaling",
            value: per_minute_scaling,
            expected: "(0, inf)",
        });
    }
    Ok(per_minute_scaling.powf(elapsed_ms / 60_000.0))
}

/// Derived wave state. Never stored by this crate; the caller supplies
/// the monotonic counters and recomputes on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveState {
    /// Monotonic wave counter, starting at 0.
    pub wave_index: u32,
    /// Elapsed play time in milliseconds.
    pub elapsed_ms: f64,
}

impl WaveState {
    pub fn new(wave_index: u32, elapsed_ms: f64) -> Self {
        Self {
            wave_index,
            elapsed_ms,
        }
    }

    /// The compounding multiplier for this wave.
    pub fn difficulty_multiplier(&self, waves: &WaveParams) -> Result<f64, InputValidationError> {
        difficulty_multiplier(self.wave_index, waves.difficulty_scaling)
    }

    /// Enemy count for this wave.
    pub fn enemy_count(&self, waves: &WaveParams) -> Result<u32, InputValidationError> {
        enemy_count(self.wave_index, waves)
    }
}
