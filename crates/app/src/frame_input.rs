//! Keyboard input collection for one rendered frame.
//!
//! Directional intent is level-triggered (held arrows); pause, debug
//! commands and page hops are edge-triggered so the session sees each press
//! exactly once.

use app::router::NavIntent;
use game_core::{DebugCommand, Direction, FrameInput};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

pub fn capture_game_input() -> FrameInput {
    let direction = if is_key_down(KeyCode::Up) {
        Some(Direction::Up)
    } else if is_key_down(KeyCode::Left) {
        Some(Direction::Left)
    } else if is_key_down(KeyCode::Down) {
        Some(Direction::Down)
    } else if is_key_down(KeyCode::Right) {
        Some(Direction::Right)
    } else {
        None
    };

    // R+C / R+G / R+D replay chords, as listed on the in-game help panel.
    let command = if is_key_down(KeyCode::R) && is_key_pressed(KeyCode::C) {
        Some(DebugCommand::RestartCurrent)
    } else if is_key_down(KeyCode::R) && is_key_pressed(KeyCode::G) {
        Some(DebugCommand::RegenerateRandom)
    } else if is_key_down(KeyCode::R) && is_key_pressed(KeyCode::D) {
        Some(DebugCommand::RegenerateDefault)
    } else {
        None
    };

    FrameInput { direction, toggle_pause: is_key_pressed(KeyCode::P), command }
}

pub fn capture_nav_intent() -> Option<NavIntent> {
    if is_key_pressed(KeyCode::Up) {
        Some(NavIntent::Up)
    } else if is_key_pressed(KeyCode::Down) {
        Some(NavIntent::Down)
    } else if is_key_pressed(KeyCode::Enter) {
        Some(NavIntent::Select)
    } else if is_key_pressed(KeyCode::Escape) {
        Some(NavIntent::Back)
    } else {
        None
    }
}

pub struct GamePageKeys {
    pub to_leaderboard: bool,
    pub to_menu: bool,
}

pub fn capture_game_page_keys() -> GamePageKeys {
    GamePageKeys {
        to_leaderboard: is_key_pressed(KeyCode::V),
        to_menu: is_key_pressed(KeyCode::Escape),
    }
}
