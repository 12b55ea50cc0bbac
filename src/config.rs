//! Game balance configuration
//!
//! Every value that differed between the game's variants (hp totals, fire
//! intervals, boss targeting) is a named parameter here instead of a separate
//! code path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the boss aims its shots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Targeting {
    /// Straight left along the x axis
    #[default]
    Fixed,
    /// Normalized vector toward the player's current center
    Aimed,
}

/// Named bundles of balance values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    #[default]
    Standard,
    Aimed,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Standard => "Standard",
            Preset::Aimed => "Aimed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" => Some(Preset::Standard),
            "aimed" => Some(Preset::Aimed),
            _ => None,
        }
    }
}

/// Balance parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_max_hp: i32,
    pub boss_max_hp: i32,
    /// hp removed per projectile hit (both actors)
    pub damage: i32,
    pub player_speed: f32,
    /// Initial boss patrol speed (sign flips at the window edges)
    pub boss_speed: f32,
    pub projectile_speed: f32,
    pub player_cooldown_ticks: u32,
    pub boss_cooldown_ticks: u32,
    pub targeting: Targeting,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_max_hp: PLAYER_MAX_HP,
            boss_max_hp: BOSS_MAX_HP,
            damage: HIT_DAMAGE,
            player_speed: PLAYER_SPEED,
            boss_speed: BOSS_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            player_cooldown_ticks: PLAYER_COOLDOWN_TICKS,
            boss_cooldown_ticks: BOSS_COOLDOWN_TICKS,
            targeting: Targeting::Fixed,
        }
    }
}

impl GameConfig {
    /// Create a config from a preset
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Standard => Self::default(),
            Preset::Aimed => Self {
                player_max_hp: 30,
                player_cooldown_ticks: 40,
                boss_cooldown_ticks: 30,
                targeting: Targeting::Aimed,
                ..Self::default()
            },
        }
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load a JSON config file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would stall or break the simulation
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.player_max_hp <= 0 {
            self.player_max_hp = defaults.player_max_hp;
        }
        if self.boss_max_hp <= 0 {
            self.boss_max_hp = defaults.boss_max_hp;
        }
        self.damage = self.damage.max(1);
        if !(self.player_speed.is_finite() && self.player_speed > 0.0) {
            self.player_speed = defaults.player_speed;
        }
        // A zero patrol speed would pin the boss; keep the configured sign otherwise
        if !(self.boss_speed.is_finite() && self.boss_speed != 0.0) {
            self.boss_speed = defaults.boss_speed;
        }
        if !(self.projectile_speed.is_finite() && self.projectile_speed > 0.0) {
            self.projectile_speed = defaults.projectile_speed;
        }
        self.player_cooldown_ticks = self.player_cooldown_ticks.max(1);
        self.boss_cooldown_ticks = self.boss_cooldown_ticks.max(1);
        self
    }
}
