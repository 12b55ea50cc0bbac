//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per host frame
//! - Stable iteration order (projectiles in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, contains_point_inclusive};
pub use rect::Rect;
pub use state::{
    Boss, Cooldown, GameEvent, GamePhase, GameState, Outcome, Player, Projectile, Source,
};
pub use tick::{TickInput, tick};
