//! Polls raylib once per frame and maps device events to session inputs.
use raylib::prelude::*;

use crate::core::player::Direction;
use crate::core::session::Input;

pub fn map_key(key: KeyboardKey) -> Option<Input> {
    match key {
        KeyboardKey::KEY_UP => Some(Input::Move(Direction::Up)),
        KeyboardKey::KEY_DOWN => Some(Input::Move(Direction::Down)),
        KeyboardKey::KEY_LEFT => Some(Input::Move(Direction::Left)),
        KeyboardKey::KEY_RIGHT => Some(Input::Move(Direction::Right)),
        KeyboardKey::KEY_B => Some(Input::BuildStation),
        _ => None,
    }
}

/// Drains the key queue in press order, then appends a left click if there was one.
pub fn process_events(window: &mut RaylibHandle) -> Vec<Input> {
    let mut inputs = Vec::new();
    while let Some(key) = window.get_key_pressed() {
        if let Some(input) = map_key(key) {
            inputs.push(input);
        }
    }
    if window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = window.get_mouse_position();
        inputs.push(Input::Click { x: pos.x, y: pos.y });
    }
    inputs
}
