//! The immutable ParameterSet tree and its schema validation.
//!
//! Every tunable the game reads lives here, grouped by domain. The tree is
//! built once at startup from the embedded defaults, validated once, and
//! never mutated afterwards; it is safe to share across threads without
//! locking. Consumers receive it explicitly — there is no global.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, HudPosition, PowerupKind};
use crate::error::SchemaError;

// ---- Sync ----

/// Synchronization and peer timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncParams {
    /// State sync interval in milliseconds (20 Hz).
    pub sync_interval_ms: f64,
    /// Board update interval in milliseconds (~30 FPS).
    pub board_interval_ms: f64,
    /// Maximum number of peer connections.
    pub max_peers: u32,
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            sync_interval_ms: 50.0,
            board_interval_ms: 33.0,
            max_peers: 8,
        }
    }
}

// ---- Pulse ----

/// Decaying sinusoidal pulse driven by the visual/audio layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseParams {
    pub enabled: bool,
    /// Pulse frequency in Hz.
    pub frequency_hz: f64,
    /// Peak amplitude on a 0-1 scale.
    pub amplitude: f64,
    /// Per-cycle damping factor; the envelope decays as damping^cycles.
    pub damping: f64,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency_hz: 0.5,
            amplitude: 0.1,
            damping: 0.95,
        }
    }
}

// ---- Powerups ----

/// Per-kind powerup tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerupParams {
    /// Effect duration in milliseconds.
    pub duration_ms: f64,
    /// Cooldown between uses in milliseconds.
    pub cooldown_ms: f64,
    /// Relative rarity weight in (0, 1]. Weights need not sum to 1;
    /// selection normalizes across the eligible set.
    pub rarity: f64,
    /// Effect multiplier where the kind has one (speed, score, time scale).
    pub multiplier: Option<f64>,
}

/// Powerup spawning and the per-kind table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerupsParams {
    pub enabled: bool,
    /// Probability of a powerup spawn per frame, in [0, 1].
    pub spawn_rate: f64,
    /// Maximum powerups on the board at once.
    pub max_active: u32,
    /// Lifetime of an uncollected powerup in milliseconds.
    pub lifetime_ms: f64,
    pub shield: PowerupParams,
    pub speed_boost: PowerupParams,
    pub double_points: PowerupParams,
    pub slow_time: PowerupParams,
    pub invincibility: PowerupParams,
}

impl PowerupsParams {
    /// Per-kind lookup. Total over the enum, so a dangling kind reference
    /// is unrepresentable.
    pub fn kind(&self, kind: PowerupKind) -> &PowerupParams {
        match kind {
            PowerupKind::Shield => &self.shield,
            PowerupKind::SpeedBoost => &self.speed_boost,
            PowerupKind::DoublePoints => &self.double_points,
            PowerupKind::SlowTime => &self.slow_time,
            PowerupKind::Invincibility => &self.invincibility,
        }
    }

    /// Iterate kinds in table-declaration order (the order weighted
    /// selection assigns cumulative intervals in).
    pub fn iter(&self) -> impl Iterator<Item = (PowerupKind, &PowerupParams)> {
        PowerupKind::ALL.iter().map(move |&k| (k, self.kind(k)))
    }
}

impl Default for PowerupsParams {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_rate: 0.02,
            max_active: 5,
            lifetime_ms: 10_000.0,
            shield: PowerupParams {
                duration_ms: 5_000.0,
                cooldown_ms: 10_000.0,
                rarity: 0.3,
                multiplier: None,
            },
            speed_boost: PowerupParams {
                duration_ms: 3_000.0,
                cooldown_ms: 8_000.0,
                rarity: 0.4,
                multiplier: Some(1.5),
            },
            double_points: PowerupParams {
                duration_ms: 4_000.0,
                cooldown_ms: 15_000.0,
                rarity: 0.25,
                multiplier: Some(2.0),
            },
            slow_time: PowerupParams {
                duration_ms: 2_000.0,
                cooldown_ms: 12_000.0,
                rarity: 0.35,
                multiplier: Some(0.5),
            },
            invincibility: PowerupParams {
                duration_ms: 3_000.0,
                cooldown_ms: 20_000.0,
                rarity: 0.1,
                multiplier: None,
            },
        }
    }
}

// ---- Spawning ----

/// Wave scheduling and per-wave difficulty compounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    pub enabled: bool,
    /// Milliseconds between waves.
    pub wave_interval_ms: f64,
    /// Base enemies per wave before difficulty scaling.
    pub enemies_per_wave: u32,
    /// Compounding multiplier applied per wave index.
    pub difficulty_scaling: f64,
}

/// Player/enemy spawn pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnParams {
    /// Milliseconds between player respawns.
    pub player_spawn_interval_ms: f64,
    /// Probability of an enemy spawn per frame, in [0, 1].
    pub enemy_spawn_rate: f64,
    /// Maximum enemies on the board at once.
    pub max_enemies: u32,
    pub waves: WaveParams,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            player_spawn_interval_ms: 2_000.0,
            enemy_spawn_rate: 0.03,
            max_enemies: 20,
            waves: WaveParams {
                enabled: true,
                wave_interval_ms: 30_000.0,
                enemies_per_wave: 3,
                difficulty_scaling: 1.1,
            },
        }
    }
}

// ---- Board ----

/// Arena geometry and backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardParams {
    /// Board width in pixels.
    pub width: f64,
    /// Board height in pixels.
    pub height: f64,
    /// Backdrop color, `#rrggbb`.
    pub background_color: String,
    pub grid_enabled: bool,
    /// Grid cell size in pixels.
    pub grid_size: f64,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background_color: "#0a0e27".to_string(),
            grid_enabled: true,
            grid_size: 50.0,
        }
    }
}

// ---- Player ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerParams {
    pub start_health: f64,
    pub max_health: f64,
    /// Movement speed in pixels per second.
    pub speed: f64,
    /// Pixels per second squared.
    pub acceleration: f64,
    pub deceleration: f64,
    /// Player radius in pixels.
    pub size: f64,
    /// Body color, `#rrggbb`.
    pub color: String,
    /// Milliseconds between shots.
    pub fire_rate_ms: f64,
}

impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            start_health: 100.0,
            max_health: 100.0,
            speed: 200.0,
            acceleration: 800.0,
            deceleration: 600.0,
            size: 15.0,
            color: "#00ff88".to_string(),
            fire_rate_ms: 200.0,
        }
    }
}

// ---- Enemies ----

/// Per-kind enemy tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyParams {
    pub health: f64,
    /// Pixels per second.
    pub speed: f64,
    /// Radius in pixels.
    pub size: f64,
    /// Score awarded on kill.
    pub points: u32,
}

/// Enemy base stats and the per-kind table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTableParams {
    pub base_health: f64,
    pub base_speed: f64,
    pub base_size: f64,
    /// Body color, `#rrggbb`.
    pub color: String,
    /// Minimum spawn distance from the player, in pixels.
    pub spawn_distance: f64,
    pub basic: EnemyParams,
    pub fast: EnemyParams,
    pub tank: EnemyParams,
    pub scout: EnemyParams,
}

impl EnemyTableParams {
    /// Per-kind lookup, total over the enum.
    pub fn kind(&self, kind: EnemyKind) -> &EnemyParams {
        match kind {
            EnemyKind::Basic => &self.basic,
            EnemyKind::Fast => &self.fast,
            EnemyKind::Tank => &self.tank,
            EnemyKind::Scout => &self.scout,
        }
    }

    /// Iterate kinds in table-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EnemyKind, &EnemyParams)> {
        EnemyKind::ALL.iter().map(move |&k| (k, self.kind(k)))
    }
}

impl Default for EnemyTableParams {
    fn default() -> Self {
        Self {
            base_health: 50.0,
            base_speed: 100.0,
            base_size: 12.0,
            color: "#ff0055".to_string(),
            spawn_distance: 150.0,
            basic: EnemyParams {
                health: 30.0,
                speed: 80.0,
                size: 12.0,
                points: 10,
            },
            fast: EnemyParams {
                health: 20.0,
                speed: 150.0,
                size: 10.0,
                points: 25,
            },
            tank: EnemyParams {
                health: 80.0,
                speed: 50.0,
                size: 18.0,
                points: 50,
            },
            scout: EnemyParams {
                health: 15.0,
                speed: 120.0,
                size: 8.0,
                points: 15,
            },
        }
    }
}

// ---- Projectiles ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileParams {
    /// Pixels per second.
    pub speed: f64,
    /// Radius in pixels.
    pub size: f64,
    pub damage: f64,
    /// Milliseconds before despawn.
    pub lifetime_ms: f64,
    /// `#rrggbb`.
    pub color: String,
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self {
            speed: 350.0,
            size: 4.0,
            damage: 10.0,
            lifetime_ms: 5_000.0,
            color: "#00ff88".to_string(),
        }
    }
}

// ---- Mechanics ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicsParams {
    /// Gravity acceleration; 0 for space-like movement.
    pub gravity: f64,
    /// Velocity retained per frame, in (0, 1].
    pub friction: f64,
    /// Damage taken on enemy contact.
    pub collision_damage: f64,
    pub scoring_multiplier: f64,
    /// Compounding difficulty increase per minute of elapsed play.
    pub difficulty_scaling: f64,
}

impl Default for MechanicsParams {
    fn default() -> Self {
        Self {
            gravity: 0.0,
            friction: 0.98,
            collision_damage: 10.0,
            scoring_multiplier: 1.0,
            difficulty_scaling: 1.02,
        }
    }
}

// ---- Audio ----

/// Per-effect volume levels, 0-1 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectVolumes {
    pub gunshot: f64,
    pub explosion: f64,
    pub powerup: f64,
    pub hit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicParams {
    pub enabled: bool,
    /// 0-1 scale.
    pub volume: f64,
    /// Crossfade time in milliseconds.
    pub fade_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioParams {
    pub enabled: bool,
    /// 0-1 scale.
    pub master_volume: f64,
    pub effects: EffectVolumes,
    pub music: MusicParams,
}

impl Default for AudioParams {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 0.8,
            effects: EffectVolumes {
                gunshot: 0.6,
                explosion: 0.7,
                powerup: 0.5,
                hit: 0.4,
            },
            music: MusicParams {
                enabled: true,
                volume: 0.5,
                fade_ms: 1_000.0,
            },
        }
    }
}

// ---- UI ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudParams {
    pub enabled: bool,
    pub position: HudPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimapParams {
    pub enabled: bool,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthBarParams {
    pub enabled: bool,
    /// Bar height in pixels.
    pub height: f64,
    /// `#rrggbb`.
    pub color: String,
    /// `#rrggbb`.
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiParams {
    pub hud: HudParams,
    pub minimap: MinimapParams,
    pub health_bar: HealthBarParams,
}

impl Default for UiParams {
    fn default() -> Self {
        Self {
            hud: HudParams {
                enabled: true,
                position: HudPosition::TopLeft,
            },
            minimap: MinimapParams {
                enabled: true,
                width: 150.0,
                height: 150.0,
            },
            health_bar: HealthBarParams {
                enabled: true,
                height: 8.0,
                color: "#ff0055".to_string(),
                background_color: "#1a1a2e".to_string(),
            },
        }
    }
}

// ---- Performance ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceParams {
    pub max_particles: u32,
    /// Milliseconds.
    pub particle_lifetime_ms: f64,
    /// Canvas scaling factor.
    pub render_scale: f64,
    pub enable_shaders: bool,
    pub vsync_enabled: bool,
}

impl Default for PerformanceParams {
    fn default() -> Self {
        Self {
            max_particles: 500,
            particle_lifetime_ms: 1_000.0,
            render_scale: 1.0,
            enable_shaders: true,
            vsync_enabled: true,
        }
    }
}

// ---- Debug ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugParams {
    pub enabled: bool,
    pub show_collision_bounds: bool,
    pub show_network_info: bool,
    pub log_frame_rate: bool,
    /// Time scale in (0, 1]; 1.0 = normal speed.
    pub slow_motion: f64,
}

impl Default for DebugParams {
    fn default() -> Self {
        Self {
            enabled: false,
            show_collision_bounds: false,
            show_network_info: false,
            log_frame_rate: false,
            slow_motion: 1.0,
        }
    }
}

// ---- The full tree ----

/// The complete tuning table, one field per domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub sync: SyncParams,
    pub pulse: PulseParams,
    pub powerups: PowerupsParams,
    pub spawn: SpawnParams,
    pub board: BoardParams,
    pub player: PlayerParams,
    pub enemy: EnemyTableParams,
    pub projectile: ProjectileParams,
    pub mechanics: MechanicsParams,
    pub audio: AudioParams,
    pub ui: UiParams,
    pub performance: PerformanceParams,
    pub debug: DebugParams,
}

impl ParameterSet {
    /// Build the embedded default tree and validate it. Deterministic, no
    /// I/O; fails only if the schema is internally inconsistent.
    pub fn load() -> Result<Self, SchemaError> {
        let params = Self::default();
        params.validate()?;
        Ok(params)
    }

    /// Validate every field constraint. Public so a deserialized tree can
    /// be checked the same way the embedded one is.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_sync()?;
        self.validate_pulse()?;
        self.validate_powerups()?;
        self.validate_spawn()?;
        self.validate_board()?;
        self.validate_player()?;
        self.validate_enemy()?;
        self.validate_projectile()?;
        self.validate_mechanics()?;
        self.validate_audio()?;
        self.validate_ui()?;
        self.validate_performance()?;
        self.validate_debug()?;
        Ok(())
    }

    fn validate_sync(&self) -> Result<(), SchemaError> {
        check_positive("sync.sync_interval_ms", self.sync.sync_interval_ms)?;
        check_positive("sync.board_interval_ms", self.sync.board_interval_ms)?;
        if self.sync.max_peers == 0 {
            return Err(SchemaError::OutOfRange {
                field: "sync.max_peers",
                value: 0.0,
                constraint: "must be >= 1",
            });
        }
        Ok(())
    }

    fn validate_pulse(&self) -> Result<(), SchemaError> {
        check_positive("pulse.frequency_hz", self.pulse.frequency_hz)?;
        check_unit("pulse.amplitude", self.pulse.amplitude)?;
        if !(0.0..1.0).contains(&self.pulse.damping) {
            return Err(SchemaError::OutOfRange {
                field: "pulse.damping",
                value: self.pulse.damping,
                constraint: "must be in [0, 1)",
            });
        }
        Ok(())
    }

    fn validate_powerups(&self) -> Result<(), SchemaError> {
        check_unit("powerups.spawn_rate", self.powerups.spawn_rate)?;
        check_non_negative("powerups.lifetime_ms", self.powerups.lifetime_ms)?;

        // Field paths for the per-kind table, in declaration order.
        const PATHS: [(&str, &str, &str, &str); 5] = [
            (
                "powerups.shield.duration_ms",
                "powerups.shield.cooldown_ms",
                "powerups.shield.rarity",
                "powerups.shield.multiplier",
            ),
            (
                "powerups.speed_boost.duration_ms",
                "powerups.speed_boost.cooldown_ms",
                "powerups.speed_boost.rarity",
                "powerups.speed_boost.multiplier",
            ),
            (
                "powerups.double_points.duration_ms",
                "powerups.double_points.cooldown_ms",
                "powerups.double_points.rarity",
                "powerups.double_points.multiplier",
            ),
            (
                "powerups.slow_time.duration_ms",
                "powerups.slow_time.cooldown_ms",
                "powerups.slow_time.rarity",
                "powerups.slow_time.multiplier",
            ),
            (
                "powerups.invincibility.duration_ms",
                "powerups.invincibility.cooldown_ms",
                "powerups.invincibility.rarity",
                "powerups.invincibility.multiplier",
            ),
        ];

        for ((_, p), (dur, cd, rar, mult)) in self.powerups.iter().zip(PATHS) {
            check_non_negative(dur, p.duration_ms)?;
            check_non_negative(cd, p.cooldown_ms)?;
            if !(p.rarity > 0.0 && p.rarity <= 1.0) {
                return Err(SchemaError::OutOfRange {
                    field: rar,
                    value: p.rarity,
                    constraint: "must be in (0, 1]",
                });
            }
            if let Some(m) = p.multiplier {
                check_positive(mult, m)?;
            }
        }
        Ok(())
    }

    fn validate_spawn(&self) -> Result<(), SchemaError> {
        check_non_negative(
            "spawn.player_spawn_interval_ms",
            self.spawn.player_spawn_interval_ms,
        )?;
        check_unit("spawn.enemy_spawn_rate", self.spawn.enemy_spawn_rate)?;
        check_positive("spawn.waves.wave_interval_ms", self.spawn.waves.wave_interval_ms)?;
        if self.spawn.waves.enemies_per_wave == 0 {
            return Err(SchemaError::OutOfRange {
                field: "spawn.waves.enemies_per_wave",
                value: 0.0,
                constraint: "must be >= 1",
            });
        }
        check_positive(
            "spawn.waves.difficulty_scaling",
            self.spawn.waves.difficulty_scaling,
        )?;
        Ok(())
    }

    fn validate_board(&self) -> Result<(), SchemaError> {
        check_positive("board.width", self.board.width)?;
        check_positive("board.height", self.board.height)?;
        check_positive("board.grid_size", self.board.grid_size)?;
        check_color("board.background_color", &self.board.background_color)?;
        Ok(())
    }

    fn validate_player(&self) -> Result<(), SchemaError> {
        check_positive("player.start_health", self.player.start_health)?;
        check_positive("player.max_health", self.player.max_health)?;
        if self.player.start_health > self.player.max_health {
            return Err(SchemaError::OutOfRange {
                field: "player.start_health",
                value: self.player.start_health,
                constraint: "must be <= player.max_health",
            });
        }
        check_positive("player.speed", self.player.speed)?;
        check_positive("player.acceleration", self.player.acceleration)?;
        check_positive("player.deceleration", self.player.deceleration)?;
        check_positive("player.size", self.player.size)?;
        check_positive("player.fire_rate_ms", self.player.fire_rate_ms)?;
        check_color("player.color", &self.player.color)?;
        Ok(())
    }

    fn validate_enemy(&self) -> Result<(), SchemaError> {
        check_positive("enemy.base_health", self.enemy.base_health)?;
        check_positive("enemy.base_speed", self.enemy.base_speed)?;
        check_positive("enemy.base_size", self.enemy.base_size)?;
        check_non_negative("enemy.spawn_distance", self.enemy.spawn_distance)?;
        check_color("enemy.color", &self.enemy.color)?;

        const PATHS: [(&str, &str, &str, &str); 4] = [
            (
                "enemy.basic.health",
                "enemy.basic.speed",
                "enemy.basic.size",
                "enemy.basic.points",
            ),
            (
                "enemy.fast.health",
                "enemy.fast.speed",
                "enemy.fast.size",
                "enemy.fast.points",
            ),
            (
                "enemy.tank.health",
                "enemy.tank.speed",
                "enemy.tank.size",
                "enemy.tank.points",
            ),
            (
                "enemy.scout.health",
                "enemy.scout.speed",
                "enemy.scout.size",
                "enemy.scout.points",
            ),
        ];
        for ((_, p), (health, speed, size, points)) in self.enemy.iter().zip(PATHS) {
            check_positive(health, p.health)?;
            check_positive(speed, p.speed)?;
            check_positive(size, p.size)?;
            if p.points == 0 {
                return Err(SchemaError::OutOfRange {
                    field: points,
                    value: 0.0,
                    constraint: "must be >= 1",
                });
            }
        }
        Ok(())
    }

    fn validate_projectile(&self) -> Result<(), SchemaError> {
        check_positive("projectile.speed", self.projectile.speed)?;
        check_positive("projectile.size", self.projectile.size)?;
        check_positive("projectile.damage", self.projectile.damage)?;
        check_positive("projectile.lifetime_ms", self.projectile.lifetime_ms)?;
        check_color("projectile.color", &self.projectile.color)?;
        Ok(())
    }

    fn validate_mechanics(&self) -> Result<(), SchemaError> {
        check_non_negative("mechanics.gravity", self.mechanics.gravity)?;
        if !(self.mechanics.friction > 0.0 && self.mechanics.friction <= 1.0) {
            return Err(SchemaError::OutOfRange {
                field: "mechanics.friction",
                value: self.mechanics.friction,
                constraint: "must be in (0, 1]",
            });
        }
        check_non_negative("mechanics.collision_damage", self.mechanics.collision_damage)?;
        check_positive("mechanics.scoring_multiplier", self.mechanics.scoring_multiplier)?;
        check_positive("mechanics.difficulty_scaling", self.mechanics.difficulty_scaling)?;
        Ok(())
    }

    fn validate_audio(&self) -> Result<(), SchemaError> {
        check_unit("audio.master_volume", self.audio.master_volume)?;
        check_unit("audio.effects.gunshot", self.audio.effects.gunshot)?;
        check_unit("audio.effects.explosion", self.audio.effects.explosion)?;
        check_unit("audio.effects.powerup", self.audio.effects.powerup)?;
        check_unit("audio.effects.hit", self.audio.effects.hit)?;
        check_unit("audio.music.volume", self.audio.music.volume)?;
        check_non_negative("audio.music.fade_ms", self.audio.music.fade_ms)?;
        Ok(())
    }

    fn validate_ui(&self) -> Result<(), SchemaError> {
        check_positive("ui.minimap.width", self.ui.minimap.width)?;
        check_positive("ui.minimap.height", self.ui.minimap.height)?;
        check_positive("ui.health_bar.height", self.ui.health_bar.height)?;
        check_color("ui.health_bar.color", &self.ui.health_bar.color)?;
        check_color(
            "ui.health_bar.background_color",
            &self.ui.health_bar.background_color,
        )?;
        Ok(())
    }

    fn validate_performance(&self) -> Result<(), SchemaError> {
        check_positive(
            "performance.particle_lifetime_ms",
            self.performance.particle_lifetime_ms,
        )?;
        check_positive("performance.render_scale", self.performance.render_scale)?;
        Ok(())
    }

    fn validate_debug(&self) -> Result<(), SchemaError> {
        if !(self.debug.slow_motion > 0.0 && self.debug.slow_motion <= 1.0) {
            return Err(SchemaError::OutOfRange {
                field: "debug.slow_motion",
                value: self.debug.slow_motion,
                constraint: "must be in (0, 1]",
            });
        }
        Ok(())
    }
}

// ---- Validation helpers ----

fn check_positive(field: &'static str, value: f64) -> Result<(), SchemaError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SchemaError::OutOfRange {
            field,
            value,
            constraint: "must be finite and > 0",
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), SchemaError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SchemaError::OutOfRange {
            field,
            value,
            constraint: "must be finite and >= 0",
        })
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), SchemaError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SchemaError::OutOfRange {
            field,
            value,
            constraint: "must be in [0, 1]",
        })
    }
}

fn check_color(field: &'static str, value: &str) -> Result<(), SchemaError> {
    let bytes = value.as_bytes();
    let ok = bytes.len() == 7
        && bytes[0] == b'#'
        && bytes[1..].iter().all(|b| b.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        Err(SchemaError::BadColor {
            field,
            value: value.to_string(),
        })
    }
}
