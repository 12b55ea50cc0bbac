//! Game Over overlay: layout and click handling
//!
//! The host forwards a `ClickInput` snapshot captured at event time; nothing
//! here reads ambient mouse state.

use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::{GamePhase, GameState, Rect, contains_point_inclusive};

pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Buttons sit this far below the vertical center
pub const BUTTON_OFFSET_Y: f32 = 50.0;
/// Font size of the "Game Over" title
pub const TITLE_FONT_SIZE: f32 = 50.0;

/// Mouse buttons the host may report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A click event as seen by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickInput {
    pub pos: Vec2,
    pub button: MouseButton,
}

impl ClickInput {
    pub fn left(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            button: MouseButton::Left,
        }
    }
}

/// What a menu click asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The session was restarted
    Restart,
    /// The host should close the window and exit
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub action: MenuAction,
}

/// Overlay geometry derived from the window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub width: f32,
    pub height: f32,
    pub restart: Button,
    pub exit: Button,
}

impl MenuLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let button_y = height / 2.0 + BUTTON_OFFSET_Y;
        Self {
            width,
            height,
            restart: Button {
                rect: Rect::new(
                    width / 4.0 - BUTTON_WIDTH / 2.0,
                    button_y,
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                ),
                label: "Restart",
                action: MenuAction::Restart,
            },
            exit: Button {
                rect: Rect::new(
                    width * 3.0 / 4.0 - BUTTON_WIDTH / 2.0,
                    button_y,
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                ),
                label: "Exit",
                action: MenuAction::Exit,
            },
        }
    }

    pub fn buttons(&self) -> [&Button; 2] {
        [&self.restart, &self.exit]
    }

    /// Top-center of the "Game Over" title
    pub fn title_anchor(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0 - TITLE_FONT_SIZE / 2.0)
    }

    /// Top-left of the title for hosts that measure the text themselves
    pub fn title_origin(&self, text_width: f32) -> Vec2 {
        self.title_anchor() - Vec2::new(text_width / 2.0, 0.0)
    }

    /// Button under a point, borders included (Restart wins on overlap)
    pub fn hit_test(&self, point: Vec2) -> Option<&Button> {
        self.buttons()
            .into_iter()
            .find(|b| contains_point_inclusive(&b.rect, point))
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

/// Process a click against the Game Over menu
///
/// Only left clicks while the session is over do anything. Restart is applied
/// to `state` immediately; Exit is returned for the host to act on.
pub fn handle_click(
    state: &mut GameState,
    layout: &MenuLayout,
    click: ClickInput,
) -> Option<MenuAction> {
    if state.phase != GamePhase::GameOver || click.button != MouseButton::Left {
        return None;
    }

    let action = layout.hit_test(click.pos)?.action;
    match action {
        MenuAction::Restart => {
            state.restart();
        }
        MenuAction::Exit => log::info!("Exit requested from Game Over menu"),
    }
    Some(action)
}
