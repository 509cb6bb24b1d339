//! Scaling & selection engine.
//!
//! Pure functions that derive time-varying or randomized gameplay values
//! from a ParameterSet: compounding wave difficulty, the decaying pulse
//! envelope, and rarity-weighted powerup selection. Callers own all
//! mutable state (cooldown clocks, wave counters, the RNG) and thread it
//! through each call; nothing here blocks, suspends, or retains state.

pub mod difficulty;
pub mod pulse;
pub mod select;

pub use difficulty::{difficulty_multiplier, enemy_count, time_difficulty, WaveState};
pub use pulse::{amplitude_for, pulse_amplitude, pulse_envelope};
pub use select::{
    eligible_powerups, random_color, random_element, random_id, random_int, shuffle, uuid_v4,
    weighted_select, Weighted,
};

#[cfg(test)]
mod tests;
