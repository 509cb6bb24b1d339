//! Caller-clocked debounce and throttle handles.
//!
//! The original helpers scheduled callbacks on ambient timers; here they
//! are explicit state machines driven by a caller-supplied monotonic
//! clock in milliseconds. Each handle owns its own pending state, so
//! dropping it cancels whatever was armed. A clock that runs backwards
//! is an input error.

use arena_core::error::InputValidationError;

fn check_delay(name: &'static str, delay_ms: f64) -> Result<(), InputValidationError> {
    if !delay_ms.is_finite() {
        return Err(InputValidationError::NotFinite {
            name,
            value: delay_ms,
        });
    }
    if delay_ms < 0.0 {
        return Err(InputValidationError::OutOfDomain {
            name,
            value: delay_ms,
            expected: "[0, inf)",
        });
    }
    Ok(())
}

fn check_clock(now_ms: f64, previous: Option<f64>) -> Result<(), InputValidationError> {
    if !now_ms.is_finite() {
        return Err(InputValidationError::NotFinite {
            name: "now_ms",
            value: now_ms,
        });
    }
    if let Some(prev) = previous {
        if now_ms < prev {
            return Err(InputValidationError::NonMonotonicClock {
                now: now_ms,
                previous: prev,
            });
        }
    }
    Ok(())
}

/// Debounce: holds at most one pending deadline. Re-triggering before
/// expiry pushes the deadline out; `poll` reports expiry exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce {
    delay_ms: f64,
    deadline: Option<f64>,
    last_now: Option<f64>,
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Result<Self, InputValidationError> {
        check_delay("delay_ms", delay_ms)?;
        Ok(Self {
            delay_ms,
            deadline: None,
            last_now: None,
        })
    }

    /// Arm (or re-arm) the deadline at `now + delay`.
    pub fn trigger(&mut self, now_ms: f64) -> Result<(), InputValidationError> {
        check_clock(now_ms, self.last_now)?;
        self.last_now = Some(now_ms);
        self.deadline = Some(now_ms + self.delay_ms);
        Ok(())
    }

    /// Returns true exactly once when the armed deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Result<bool, InputValidationError> {
        check_clock(now_ms, self.last_now)?;
        self.last_now = Some(now_ms);
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Throttle: gates re-entry for a fixed window after each acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle {
    window_ms: f64,
    open_at: Option<f64>,
    last_now: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Result<Self, InputValidationError> {
        check_delay("window_ms", window_ms)?;
        Ok(Self {
            window_ms,
            open_at: None,
            last_now: None,
        })
    }

    /// Returns true and closes the gate for one window if the gate is
    /// open; false while the window is still running.
    pub fn try_acquire(&mut self, now_ms: f64) -> Result<bool, InputValidationError> {
        check_clock(now_ms, self.last_now)?;
        self.last_now = Some(now_ms);
        match self.open_at {
            Some(open_at) if now_ms < open_at => Ok(false),
            _ => {
                self.open_at = Some(now_ms + self.window_ms);
                Ok(true)
            }
        }
    }

    /// Re-open the gate immediately.
    pub fn reset(&mut self) {
        self.open_at = None;
    }
}
