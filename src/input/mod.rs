use macroquad::prelude::*;
use crate::application::Simulation;

/// Escape, Q, or the window's close button
pub fn quit_requested() -> bool {
    is_quit_requested() || is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Simulation::restart),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
