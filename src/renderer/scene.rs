//! Per-frame draw list
//!
//! `build_scene` turns the game state into triangles plus text labels. Hosts
//! upload the vertices and rasterize the labels with their own font renderer.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::GameState;
use crate::ui::{MenuLayout, TITLE_FONT_SIZE};

const HP_BAR_HEIGHT: f32 = 5.0;
const HP_BAR_GAP: f32 = 4.0;
const HUD_FONT_SIZE: f32 = 20.0;
const BUTTON_FONT_SIZE: f32 = 20.0;
const BUTTON_OUTLINE_THICKNESS: f32 = 2.0;

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `pos` is the top-left corner
    Left,
    /// `pos` is the top-center point
    Center,
    /// `pos` is the top-right corner
    Right,
}

/// Text for the host to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
    pub align: TextAlign,
}

/// Everything to draw this frame, in pixel coordinates (y down)
#[derive(Debug, Clone)]
pub struct Scene {
    /// Color to clear the frame with before drawing
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl Scene {
    fn label(
        &mut self,
        text: impl Into<String>,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
        align: TextAlign,
    ) {
        self.labels.push(TextLabel {
            text: text.into(),
            pos,
            size,
            color,
            align,
        });
    }

    /// Vertices mapped from pixels to clip space (x right, y up, -1..1)
    pub fn to_clip_space(&self, width: f32, height: f32) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| {
                let x = v.position[0] / width * 2.0 - 1.0;
                let y = 1.0 - v.position[1] / height * 2.0;
                Vertex::new(x, y, v.color)
            })
            .collect()
    }
}

fn hp_fraction(hp: i32, max_hp: i32) -> f32 {
    if max_hp <= 0 {
        return 0.0;
    }
    hp.max(0) as f32 / max_hp as f32
}

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState, layout: &MenuLayout) -> Scene {
    let mut scene = Scene::default();

    let player = &state.player;
    let boss = &state.boss;

    scene
        .vertices
        .extend(shapes::rect(&player.rect(), colors::PLAYER));
    scene.vertices.extend(shapes::rect(&boss.rect(), colors::BOSS));
    for projectile in &state.projectiles {
        scene
            .vertices
            .extend(shapes::rect(&projectile.rect(), colors::PROJECTILE));
    }

    // hp bars float just above each ship
    for (pos, size, hp, max_hp) in [
        (player.pos, player.size, player.hp, player.max_hp),
        (boss.pos, boss.size, boss.hp, boss.max_hp),
    ] {
        let origin = Vec2::new(pos.x, (pos.y - HP_BAR_GAP - HP_BAR_HEIGHT).max(0.0));
        scene.vertices.extend(shapes::bar(
            origin,
            Vec2::new(size.x, HP_BAR_HEIGHT),
            hp_fraction(hp, max_hp),
            colors::HP_BAR_BACK,
            colors::HP_BAR_FILL,
        ));
    }

    scene.label(
        format!("Player HP: {}", player.hp.max(0)),
        Vec2::new(10.0, 10.0),
        HUD_FONT_SIZE,
        colors::HUD_TEXT,
        TextAlign::Left,
    );
    scene.label(
        format!("Boss HP: {}", boss.hp.max(0)),
        Vec2::new(layout.width - 10.0, 10.0),
        HUD_FONT_SIZE,
        colors::HUD_TEXT,
        TextAlign::Right,
    );

    if state.is_game_over() {
        scene.label(
            "Game Over",
            layout.title_anchor(),
            TITLE_FONT_SIZE,
            colors::GAME_OVER_TEXT,
            TextAlign::Center,
        );

        for (button, color) in [
            (&layout.restart, colors::RESTART_BUTTON),
            (&layout.exit, colors::EXIT_BUTTON),
        ] {
            scene.vertices.extend(shapes::rect(&button.rect, color));
            scene.vertices.extend(shapes::rect_outline(
                &button.rect,
                BUTTON_OUTLINE_THICKNESS,
                colors::BUTTON_OUTLINE,
            ));
            scene.label(
                button.label,
                Vec2::new(button.rect.center().x, button.rect.top() + 10.0),
                BUTTON_FONT_SIZE,
                colors::BUTTON_TEXT,
                TextAlign::Center,
            );
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Projectile, Source};

    #[test]
    fn test_playing_scene_has_no_menu() {
        let state = GameState::default();
        let scene = build_scene(&state, &MenuLayout::default());

        // player + boss + two full hp bars (back + fill each)
        assert_eq!(scene.vertices.len(), 6 * 6);
        assert!(scene.labels.iter().all(|l| l.text != "Game Over"));
    }

    #[test]
    fn test_projectiles_are_drawn() {
        let mut state = GameState::default();
        state.projectiles.push(Projectile::new(
            1,
            Vec2::new(300.0, 300.0),
            Vec2::X,
            8.0,
            Source::Player,
        ));
        let scene = build_scene(&state, &MenuLayout::default());
        assert_eq!(scene.vertices.len(), 7 * 6);
        assert!(scene.vertices.iter().any(|v| v.color == colors::PROJECTILE
            && v.position == [320.0, 305.0]));
    }

    #[test]
    fn test_game_over_scene_has_buttons_and_title() {
        let mut state = GameState::default();
        state.player.hp = -10;
        state.phase = GamePhase::GameOver;
        let scene = build_scene(&state, &MenuLayout::default());

        let texts: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"Game Over"));
        assert!(texts.contains(&"Restart"));
        assert!(texts.contains(&"Exit"));
        assert!(texts.contains(&"Player HP: 0"));
        assert!(scene.vertices.iter().any(|v| v.color == colors::RESTART_BUTTON));
        assert!(scene.vertices.iter().any(|v| v.color == colors::EXIT_BUTTON));

        let outline = scene
            .vertices
            .iter()
            .filter(|v| v.color == colors::BUTTON_OUTLINE)
            .count();
        assert_eq!(outline, 2 * 24);

        let title = scene.labels.iter().find(|l| l.text == "Game Over").unwrap();
        assert_eq!(title.pos, MenuLayout::default().title_anchor());
        assert_eq!(title.align, TextAlign::Center);
    }

    #[test]
    fn test_scene_clears_to_background() {
        let scene = build_scene(&GameState::default(), &MenuLayout::default());
        assert_eq!(scene.clear_color, colors::BACKGROUND);
    }

    #[test]
    fn test_clip_space_corners() {
        let mut scene = Scene::default();
        scene.vertices.push(Vertex::new(0.0, 0.0, colors::PLAYER));
        scene.vertices.push(Vertex::new(800.0, 600.0, colors::PLAYER));
        let clip = scene.to_clip_space(800.0, 600.0);
        assert_eq!(clip[0].position, [-1.0, 1.0]);
        assert_eq!(clip[1].position, [1.0, -1.0]);
    }
}
