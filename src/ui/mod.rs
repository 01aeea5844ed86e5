mod button;

pub use button::Button;

use macroquad::prelude::{Rect, screen_height, screen_width};

use crate::input::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the surface area
pub fn surface_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(1.0)
}

/// Get the height of the surface area
pub fn surface_area_height() -> f32 {
    screen_height().max(1.0)
}

/// Panel buttons laid out top to bottom
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    [
        ("Start", Command::Start),
        ("Stop", Command::Stop),
        ("Randomize", Command::Randomize),
        ("Clear", Command::Clear),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, command))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        Button::new(Rect::new(px, y, width, BUTTON_HEIGHT), label, command)
    })
    .collect()
}
