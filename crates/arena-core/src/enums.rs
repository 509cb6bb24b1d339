//! Kind enumerations for powerups, enemies, and UI placement.

use serde::{Deserialize, Serialize};

/// Powerup variety. Each kind has its own duration/cooldown/rarity entry
/// in [`crate::params::PowerupsParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Absorbs damage for the duration.
    Shield,
    /// Movement speed multiplier.
    SpeedBoost,
    /// Score multiplier.
    DoublePoints,
    /// Slows the rest of the arena.
    SlowTime,
    /// Immune to all damage. Rarest.
    Invincibility,
}

impl PowerupKind {
    /// All kinds in table-declaration order. Weighted selection assigns
    /// cumulative subintervals in this order, so it must stay stable.
    pub const ALL: [PowerupKind; 5] = [
        PowerupKind::Shield,
        PowerupKind::SpeedBoost,
        PowerupKind::DoublePoints,
        PowerupKind::SlowTime,
        PowerupKind::Invincibility,
    ];
}

/// Enemy archetype. Each kind has its own health/speed/size/points entry
/// in [`crate::params::EnemyParams`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline enemy.
    #[default]
    Basic,
    /// Low health, high speed.
    Fast,
    /// High health, slow, worth the most points.
    Tank,
    /// Small and quick, low health.
    Scout,
}

impl EnemyKind {
    /// All kinds in table-declaration order.
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Basic,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Scout,
    ];
}

/// HUD anchor corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudPosition {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}
