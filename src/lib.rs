//! Boss Fight - a two-ship arcade duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `ui`: Game Over overlay layout and click handling
//! - `renderer`: Renderer-agnostic draw list (vertices + text labels)
//! - `config`: Data-driven game balance

pub mod config;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::{GameConfig, Preset, Targeting};

/// Game configuration constants
pub mod consts {
    /// Logical window size (non-resizable)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &str = "Boss Fight Game with Shooting";

    /// Player ship (left edge)
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_MAX_HP: i32 = 100;
    /// Vertical step per tick while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Boss ship (right edge, patrols vertically)
    pub const BOSS_SPAWN_X: f32 = 700.0;
    pub const BOSS_SPAWN_Y: f32 = 300.0;
    pub const BOSS_SIZE: f32 = 80.0;
    pub const BOSS_MAX_HP: i32 = 200;
    pub const BOSS_SPEED: f32 = 2.0;

    /// Projectiles
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 8.0;

    /// hp removed per hit
    pub const HIT_DAMAGE: i32 = 10;

    /// Fire intervals in ticks
    pub const PLAYER_COOLDOWN_TICKS: u32 = 60;
    pub const BOSS_COOLDOWN_TICKS: u32 = 60;
}
