use macroquad::prelude::*;

use crate::application::Intent;

type KeyBinding = (KeyCode, Intent);

/// WASD and the arrow keys move, Space digs, Escape quits
const BINDINGS: [KeyBinding; 10] = [
    (KeyCode::W, Intent::MoveUp),
    (KeyCode::Up, Intent::MoveUp),
    (KeyCode::S, Intent::MoveDown),
    (KeyCode::Down, Intent::MoveDown),
    (KeyCode::A, Intent::MoveLeft),
    (KeyCode::Left, Intent::MoveLeft),
    (KeyCode::D, Intent::MoveRight),
    (KeyCode::Right, Intent::MoveRight),
    (KeyCode::Space, Intent::ClearRock),
    (KeyCode::Escape, Intent::Quit),
];

/// Intent bound to a key, if any
pub fn intent_for_key(key: KeyCode) -> Option<Intent> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, intent)| *intent)
}

/// Collect the intents for keys pressed this frame, plus window close
pub fn poll_intents() -> Vec<Intent> {
    let mut intents: Vec<Intent> = get_keys_pressed()
        .into_iter()
        .filter_map(intent_for_key)
        .collect();

    if is_quit_requested() {
        intents.push(Intent::Quit);
    }
    intents
}

/// Pointer position in screen pixels; cosmetic only
pub fn pointer() -> Vec2 {
    let (x, y) = mouse_position();
    vec2(x, y)
}
