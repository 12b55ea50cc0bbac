//! Boss Fight entry point
//!
//! Native builds run headless demo fights: the autopilot flies the player, the
//! Game Over menu is driven with synthetic clicks, and results go to the log.
//! A windowed host drives the same library calls once per frame.

use boss_fight::consts::*;
use boss_fight::renderer::build_scene;
use boss_fight::sim::{GameEvent, GameState, TickInput, tick};
use boss_fight::ui::{ClickInput, MenuAction, MenuLayout, handle_click};
use boss_fight::{GameConfig, Preset};

/// Demo fights before the menu's Exit button is pressed
const DEMO_ROUNDS: u32 = 3;
/// Cap so a stalemate cannot spin forever (about 3 minutes at 60 Hz)
const MAX_TICKS_PER_ROUND: u64 = 60 * 60 * 3;

fn load_config() -> GameConfig {
    if let Ok(path) = std::env::var("BOSS_FIGHT_CONFIG") {
        return GameConfig::load(path);
    }
    match std::env::var("BOSS_FIGHT_PRESET") {
        Ok(name) => match Preset::from_str(&name) {
            Some(preset) => {
                log::info!("Using preset {}", preset.as_str());
                GameConfig::from_preset(preset)
            }
            None => {
                log::warn!("Unknown preset '{}', using Standard", name);
                GameConfig::default()
            }
        },
        Err(_) => GameConfig::default(),
    }
}

fn main() {
    env_logger::init();
    log::info!("{} (native, headless) starting...", WINDOW_TITLE);

    let config = load_config();
    log::info!("Config: {:?}", config);

    let layout = MenuLayout::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut state = GameState::new(config);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut round = 1;
    loop {
        let round_start = state.time_ticks;
        let mut shots = 0u32;
        let mut hits = 0u32;

        while !state.is_game_over() && state.time_ticks - round_start < MAX_TICKS_PER_ROUND {
            tick(&mut state, &input);
            for event in state.drain_events() {
                match event {
                    GameEvent::PlayerFired | GameEvent::BossFired => shots += 1,
                    GameEvent::PlayerHit { .. } | GameEvent::BossHit { .. } => hits += 1,
                    _ => {}
                }
            }
        }

        log::info!(
            "Round {} finished after {} ticks: {:?}, {} shots, {} hits, player hp {}, boss hp {}",
            round,
            state.time_ticks - round_start,
            state.outcome,
            shots,
            hits,
            state.player.hp,
            state.boss.hp
        );

        if !state.is_game_over() {
            log::warn!("Round {} hit the tick cap without a winner", round);
            break;
        }

        let scene = build_scene(&state, &layout);
        log::debug!(
            "Game Over frame: {} vertices, {} labels",
            scene.vertices.len(),
            scene.labels.len()
        );

        let button = if round < DEMO_ROUNDS {
            &layout.restart
        } else {
            &layout.exit
        };
        let center = button.rect.center();
        match handle_click(&mut state, &layout, ClickInput::left(center.x, center.y)) {
            Some(MenuAction::Restart) => round += 1,
            Some(MenuAction::Exit) | None => break,
        }
    }

    log::info!("Exiting");
}
