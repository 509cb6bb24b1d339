//! Decaying sinusoidal pulse.
//!
//! The pulse oscillates at `frequency_hz` and its envelope decays by
//! `damping` per cycle: `base * damping^(t * f) * sin(2π f t)` with `t`
//! in seconds. For damping in [0, 1) the envelope approaches zero as
//! elapsed time grows; the instantaneous value never exceeds the base
//! amplitude in magnitude.

use std::f64::consts::TAU;

use arena_core::error::InputValidationError;
use arena_core::params::PulseParams;

fn validate(
    elapsed_ms: f64,
    base_amplitude: f64,
    frequency_hz: f64,
    damping: f64,
) -> Result<(), InputValidationError> {
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
    if !(base_amplitude.is_finite() && base_amplitude >= 0.0) {
        return Err(InputValidationError::OutOfDomain {
            name: "base_amplitude",
            value: base_amplitude,
            expected: "[0, inf)",
        });
    }
    if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
        return Err(InputValidationError::OutOfDomain {
            name: "frequency_hz",
            value: frequency_hz,
            expected: "(0, inf)",
        });
    }
    if !(damping.is_finite() && (0.0..=1.0).contains(&damping)) {
        return Err(InputValidationError::OutOfDomain {
            name: "damping",
            value: damping,
            expected: "[0, 1]",
        });
    }
    Ok(())
}

/// The non-oscillating decay term: `base * damping^(elapsed_cycles)`.
///
/// Monotone non-increasing in `elapsed_ms` and never above
/// `base_amplitude`.
pub fn pulse_envelope(
    elapsed_ms: f64,
    base_amplitude: f64,
    frequency_hz: f64,
    damping: f64,
) -> Result<f64, InputValidationError> {
    validate(elapsed_ms, base_amplitude, frequency_hz, damping)?;
    let cycles = elapsed_ms * frequency_hz / 1_000.0;
    Ok(base_amplitude * damping.powf(cycles))
}

/// Instantaneous pulse value: the envelope modulated by
/// `sin(2π f t)`. Exactly zero at sine zero crossings.
pub fn pulse_amplitude(
    elapsed_ms: f64,
    base_amplitude: f64,
    frequency_hz: f64,
    damping: f64,
) -> Result<f64, InputValidationError> {
    let envelope = pulse_envelope(elapsed_ms, base_amplitude, frequency_hz, damping)?;
    let phase = TAU * frequency_hz * elapsed_ms / 1_000.0;
    Ok(envelope * phase.sin())
}

/// Pulse value for a configured pulse block. A disabled pulse reads as
/// flat zero; that is configured behavior, not input coercion.
pub fn amplitude_for(params: &PulseParams, elapsed_ms: f64) -> Result<f64, InputValidationError> {
    if !params.enabled {
        // Still reject bad clocks so a disabled pulse cannot mask them.
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
        return Ok(0.0);
    }
    pulse_amplitude(elapsed_ms, params.amplitude, params.frequency_hz, params.damping)
}
