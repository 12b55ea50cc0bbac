//! Game state and core simulation types
//!
//! Everything one fight needs lives in `GameState`; hosts own exactly one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active fight
    Playing,
    /// One side is down; simulation frozen until restart
    GameOver,
}

/// How a finished fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Boss destroyed
    Victory,
    /// Player destroyed (wins ties)
    Defeat,
}

/// Which actor fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Player,
    Boss,
}

/// Things that happened during a tick, for host-side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerFired,
    BossFired,
    PlayerHit { hp: i32 },
    BossHit { hp: i32 },
    GameOver { outcome: Outcome },
    Restarted,
}

/// Countdown gating how often an actor may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    pub remaining: u32,
    pub interval: u32,
}

impl Cooldown {
    /// A cooldown that is ready immediately
    pub fn new(interval: u32) -> Self {
        Self {
            remaining: 0,
            interval,
        }
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.remaining == 0
    }

    /// Count down one tick, stopping at zero
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Start a new wait after firing
    pub fn trigger(&mut self) {
        self.remaining = self.interval;
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    /// Vertical step per tick
    pub speed: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: Vec2::splat(PLAYER_SIZE),
            hp: config.player_max_hp,
            max_hp: config.player_max_hp,
            speed: config.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    fn max_y(&self) -> f32 {
        (WINDOW_HEIGHT - self.size.y).max(0.0)
    }

    pub fn move_up(&mut self) {
        self.pos.y = (self.pos.y - self.speed).clamp(0.0, self.max_y());
    }

    pub fn move_down(&mut self) {
        self.pos.y = (self.pos.y + self.speed).clamp(0.0, self.max_y());
    }

    /// Fire rightward from the nose of the ship
    pub fn shoot(&self, projectiles: &mut Vec<Projectile>, id: u32, speed: f32) {
        let origin = Vec2::new(self.pos.x + self.size.x, self.pos.y + self.size.y / 2.0);
        projectiles.push(Projectile::new(id, origin, Vec2::X, speed, Source::Player));
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Back to spawn position with full hp
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.hp = self.max_hp;
    }
}

/// The boss ship, patrolling up and down the right edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    /// Signed vertical velocity (positive = down)
    pub speed: f32,
    /// Velocity restored on reset
    pub spawn_speed: f32,
    pub cooldown: Cooldown,
}

impl Boss {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(BOSS_SPAWN_X, BOSS_SPAWN_Y),
            size: Vec2::splat(BOSS_SIZE),
            hp: config.boss_max_hp,
            max_hp: config.boss_max_hp,
            speed: config.boss_speed,
            spawn_speed: config.boss_speed,
            cooldown: Cooldown::new(config.boss_cooldown_ticks),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Advance the patrol one tick and count down the fire cooldown
    ///
    /// Reaching either window edge reverses the direction. Overshoot is
    /// clamped back into the window.
    pub fn patrol(&mut self) {
        let max_y = (WINDOW_HEIGHT - self.size.y).max(0.0);
        self.pos.y += self.speed;
        if self.pos.y <= 0.0 {
            self.speed = self.speed.abs();
        } else if self.pos.y >= max_y {
            self.speed = -self.speed.abs();
        }
        self.pos.y = self.pos.y.clamp(0.0, max_y);
        self.cooldown.tick();
    }

    pub fn can_shoot(&self) -> bool {
        self.cooldown.ready()
    }

    /// Fire from the boss's left face and start the cooldown
    ///
    /// With a `target`, the shot is aimed at that point; otherwise it flies
    /// straight left.
    pub fn shoot(
        &mut self,
        projectiles: &mut Vec<Projectile>,
        id: u32,
        speed: f32,
        target: Option<Vec2>,
    ) {
        let origin = Vec2::new(self.pos.x, self.pos.y + self.size.y / 2.0);
        let dir = target
            .map(|t| (t - origin).normalize_or_zero())
            .filter(|d| *d != Vec2::ZERO)
            .unwrap_or(Vec2::NEG_X);
        projectiles.push(Projectile::new(id, origin, dir, speed, Source::Boss));
        self.cooldown.trigger();
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn reset(&mut self) {
        self.pos = Vec2::new(BOSS_SPAWN_X, BOSS_SPAWN_Y);
        self.hp = self.max_hp;
        self.speed = self.spawn_speed;
        self.cooldown.reset();
    }
}

/// A projectile in straight-line flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Unit direction of travel
    pub dir: Vec2,
    source: Source,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, dir: Vec2, speed: f32, source: Source) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed,
            dir,
            source,
        }
    }

    /// Who fired this projectile (fixed at creation)
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos += self.dir * self.speed;
    }

    /// True once the projectile can no longer hit anything inside the window
    pub fn is_out_of_bounds(&self, width: f32, height: f32) -> bool {
        let r = self.rect();
        r.left() > width || r.right() < 0.0 || r.bottom() < 0.0 || r.top() > height
    }
}

/// Complete state of one fight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub boss: Boss,
    /// Live projectiles (in spawn order)
    pub projectiles: Vec<Projectile>,
    /// Shared fire counter gating the player's shots
    pub player_cooldown: Cooldown,
    pub phase: GamePhase,
    /// Set when the phase becomes GameOver
    pub outcome: Option<Outcome>,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        Self {
            player: Player::new(&config),
            boss: Boss::new(&config),
            projectiles: Vec::new(),
            player_cooldown: Cooldown::new(config.player_cooldown_ticks),
            phase: GamePhase::Playing,
            outcome: None,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a fresh fight after Game Over
    ///
    /// Returns false (and changes nothing) while a fight is still running.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }

        self.player.reset();
        self.boss.reset();
        self.projectiles.clear();
        self.player_cooldown.reset();
        self.outcome = None;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Fight restarted");
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_clamped_at_top_and_bottom() {
        let mut player = Player::new(&GameConfig::default());
        for _ in 0..200 {
            player.move_up();
        }
        assert_eq!(player.pos.y, 0.0);
        player.move_up();
        assert_eq!(player.pos.y, 0.0);

        for _ in 0..200 {
            player.move_down();
        }
        assert_eq!(player.pos.y, WINDOW_HEIGHT - PLAYER_SIZE);
    }

    #[test]
    fn test_player_shot_spawns_at_nose() {
        let player = Player::new(&GameConfig::default());
        let mut projectiles = Vec::new();
        player.shoot(&mut projectiles, 7, PROJECTILE_SPEED);

        let p = &projectiles[0];
        assert_eq!(p.id, 7);
        assert_eq!(p.pos, Vec2::new(100.0, 325.0));
        assert_eq!(p.dir, Vec2::X);
        assert_eq!(p.source(), Source::Player);
    }

    #[test]
    fn test_boss_bounces_off_bottom() {
        let mut boss = Boss::new(&GameConfig::default());
        boss.pos.y = WINDOW_HEIGHT - BOSS_SIZE - 1.0;
        boss.patrol();
        assert_eq!(boss.pos.y, WINDOW_HEIGHT - BOSS_SIZE);
        assert!(boss.speed < 0.0);
        boss.patrol();
        assert!(boss.pos.y < WINDOW_HEIGHT - BOSS_SIZE);
    }

    #[test]
    fn test_boss_bounces_off_top() {
        let mut boss = Boss::new(&GameConfig::default());
        boss.pos.y = 1.0;
        boss.speed = -2.0;
        boss.patrol();
        assert_eq!(boss.pos.y, 0.0);
        assert!(boss.speed > 0.0);
    }

    #[test]
    fn test_boss_fixed_shot_goes_left() {
        let mut boss = Boss::new(&GameConfig::default());
        let mut projectiles = Vec::new();
        boss.shoot(&mut projectiles, 1, PROJECTILE_SPEED, None);

        assert_eq!(projectiles[0].pos, Vec2::new(700.0, 340.0));
        assert_eq!(projectiles[0].dir, Vec2::NEG_X);
        assert_eq!(projectiles[0].source(), Source::Boss);
        assert!(!boss.can_shoot());
    }

    #[test]
    fn test_boss_aimed_shot_is_normalized() {
        let mut boss = Boss::new(&GameConfig::default());
        let mut projectiles = Vec::new();
        boss.shoot(&mut projectiles, 1, PROJECTILE_SPEED, Some(Vec2::new(75.0, 100.0)));

        let dir = projectiles[0].dir;
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x < 0.0 && dir.y < 0.0);
    }

    #[test]
    fn test_boss_aimed_at_own_muzzle_falls_back_to_left() {
        let mut boss = Boss::new(&GameConfig::default());
        let mut projectiles = Vec::new();
        boss.shoot(&mut projectiles, 1, PROJECTILE_SPEED, Some(Vec2::new(700.0, 340.0)));
        assert_eq!(projectiles[0].dir, Vec2::NEG_X);
    }

    #[test]
    fn test_cooldown_counts_down_to_ready() {
        let mut cd = Cooldown::new(3);
        assert!(cd.ready());
        cd.trigger();
        assert!(!cd.ready());
        cd.tick();
        cd.tick();
        assert!(!cd.ready());
        cd.tick();
        assert!(cd.ready());
        cd.tick();
        assert_eq!(cd.remaining, 0);
    }

    #[test]
    fn test_projectile_bounds() {
        let mut p = Projectile::new(1, Vec2::new(790.0, 300.0), Vec2::X, 8.0, Source::Player);
        assert!(!p.is_out_of_bounds(WINDOW_WIDTH, WINDOW_HEIGHT));
        p.advance();
        assert_eq!(p.pos.x, 798.0);
        p.advance();
        assert!(p.is_out_of_bounds(WINDOW_WIDTH, WINDOW_HEIGHT));

        let left = Projectile::new(2, Vec2::new(-21.0, 300.0), Vec2::NEG_X, 8.0, Source::Boss);
        assert!(left.is_out_of_bounds(WINDOW_WIDTH, WINDOW_HEIGHT));
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = GameState::default();
        state.player.hp = 40;
        assert!(!state.restart());
        assert_eq!(state.player.hp, 40);

        state.phase = GamePhase::GameOver;
        state.outcome = Some(Outcome::Defeat);
        state.projectiles.push(Projectile::new(
            9,
            Vec2::ZERO,
            Vec2::X,
            8.0,
            Source::Boss,
        ));
        assert!(state.restart());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert_eq!(state.boss.hp, BOSS_MAX_HP);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.outcome, None);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_snapshot_survives_json() {
        use crate::sim::tick::{TickInput, tick};

        let mut state = GameState::default();
        let input = TickInput {
            fire: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &input);
        }
        assert!(!state.events.is_empty());

        let json = serde_json::to_string(&state).expect("serialize");
        let mut restored: GameState = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored.player.pos, state.player.pos);
        assert_eq!(restored.boss.pos, state.boss.pos);
        assert_eq!(restored.boss.speed, state.boss.speed);
        assert_eq!(restored.player.hp, state.player.hp);
        assert_eq!(restored.boss.hp, state.boss.hp);
        assert_eq!(restored.boss.cooldown, state.boss.cooldown);
        assert_eq!(restored.player_cooldown, state.player_cooldown);
        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.time_ticks, state.time_ticks);
        assert_eq!(restored.config, state.config);
        assert_eq!(restored.next_id, state.next_id);
        assert!(restored.events.is_empty());

        let sources: Vec<Source> = state.projectiles.iter().map(Projectile::source).collect();
        let restored_sources: Vec<Source> =
            restored.projectiles.iter().map(Projectile::source).collect();
        assert_eq!(restored_sources, vec![Source::Player, Source::Boss]);
        assert_eq!(restored_sources, sources);
        for (a, b) in restored.projectiles.iter().zip(&state.projectiles) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.dir, b.dir);
        }

        // Restored state keeps allocating fresh ids
        assert_eq!(restored.next_entity_id(), state.next_id);
    }
}
