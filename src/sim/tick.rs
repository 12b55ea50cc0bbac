//! Fixed-cadence simulation tick
//!
//! Core game loop that advances the fight deterministically.

use super::collision::aabb_overlap;
use super::state::{GameEvent, GamePhase, GameState, Outcome, Source};
use crate::config::Targeting;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Input snapshot for a single tick (held keys, sampled by the host)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move up held
    pub up: bool,
    /// Move down held
    pub down: bool,
    /// Fire held
    pub fire: bool,
    /// Demo mode - the player ship flies itself
    pub autopilot: bool,
}

/// Advance the fight by one tick
///
/// Order: player input, boss patrol, cooldowns, projectile flight and
/// culling, hits on the player, hits on the boss, new shots, defeat check.
/// Does nothing while the session is over.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let input = if input.autopilot {
        autopilot_input(state)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    if input.up {
        state.player.move_up();
    }
    if input.down {
        state.player.move_down();
    }

    // Boss cooldown ticks inside its patrol
    state.boss.patrol();
    state.player_cooldown.tick();

    update_projectiles(state);
    resolve_player_hits(state);
    resolve_boss_hits(state);
    fire_weapons(state, input.fire);
    check_game_over(state);
}

/// Move every projectile and drop the ones that left the window
fn update_projectiles(state: &mut GameState) {
    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    state
        .projectiles
        .retain(|p| !p.is_out_of_bounds(WINDOW_WIDTH, WINDOW_HEIGHT));
}

/// Any projectile touching the player hits it, whoever fired it
fn resolve_player_hits(state: &mut GameState) {
    let player_rect = state.player.rect();
    let mut hits = 0;
    state.projectiles.retain(|p| {
        let hit = aabb_overlap(&player_rect, &p.rect());
        hits += usize::from(hit);
        !hit
    });

    for _ in 0..hits {
        state.player.take_damage(state.config.damage);
        log::debug!("Player hit, hp {}", state.player.hp);
        state.events.push(GameEvent::PlayerHit {
            hp: state.player.hp,
        });
    }
}

/// Only player shots can hurt the boss
fn resolve_boss_hits(state: &mut GameState) {
    let boss_rect = state.boss.rect();
    let mut hits = 0;
    state.projectiles.retain(|p| {
        let hit = p.source() == Source::Player && aabb_overlap(&boss_rect, &p.rect());
        hits += usize::from(hit);
        !hit
    });

    for _ in 0..hits {
        state.boss.take_damage(state.config.damage);
        log::debug!("Boss hit, hp {}", state.boss.hp);
        state.events.push(GameEvent::BossHit { hp: state.boss.hp });
    }
}

fn fire_weapons(state: &mut GameState, fire_held: bool) {
    let speed = state.config.projectile_speed;

    if fire_held && state.player_cooldown.ready() {
        let id = state.next_entity_id();
        state.player.shoot(&mut state.projectiles, id, speed);
        state.player_cooldown.trigger();
        state.events.push(GameEvent::PlayerFired);
    }

    if state.boss.can_shoot() {
        let target = match state.config.targeting {
            Targeting::Fixed => None,
            Targeting::Aimed => Some(state.player.center()),
        };
        let id = state.next_entity_id();
        state.boss.shoot(&mut state.projectiles, id, speed, target);
        state.events.push(GameEvent::BossFired);
    }
}

fn check_game_over(state: &mut GameState) {
    let outcome = if state.player.is_defeated() {
        Outcome::Defeat
    } else if state.boss.is_defeated() {
        Outcome::Victory
    } else {
        return;
    };

    state.phase = GamePhase::GameOver;
    state.outcome = Some(outcome);
    state.events.push(GameEvent::GameOver { outcome });
    log::info!(
        "Game over at tick {}: {:?} (player hp {}, boss hp {})",
        state.time_ticks,
        outcome,
        state.player.hp,
        state.boss.hp
    );
}

/// Track the boss vertically and keep the trigger held
fn autopilot_input(state: &GameState) -> TickInput {
    let dy = state.boss.rect().center().y - state.player.center().y;
    let dead_zone = state.player.speed;
    TickInput {
        up: dy < -dead_zone,
        down: dy > dead_zone,
        fire: true,
        autopilot: true,
    }
}
