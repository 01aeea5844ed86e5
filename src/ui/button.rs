use macroquad::prelude::*;

use crate::input::Command;

/// Panel button issuing one `Command` when clicked
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: &'static str,
    command: Command,
}

const IDLE_COLOR: Color = Color::new(0.24, 0.24, 0.24, 1.0);
const HOVER_COLOR: Color = Color::new(0.8, 0.6, 0.6, 1.0);

impl Button {
    pub fn new(rect: Rect, label: &'static str, command: Command) -> Self {
        Self { rect, label, command }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Half-open box: the right and bottom edges belong to the neighbor
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        let Rect { x, y, w, h } = self.rect;
        (x..x + w).contains(&mouse_pos.0) && (y..y + h).contains(&mouse_pos.1)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let color = if self.is_hovered(mouse_pos) { HOVER_COLOR } else { IDLE_COLOR };

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(self.label, None, 20, 1.0);
        draw_text(
            self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Command to run if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left))
            .then_some(self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_half_open() {
        let button = Button::new(Rect::new(10.0, 20.0, 100.0, 40.0), "Start", Command::Start);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((109.9, 59.9)));
        assert!(!button.is_hovered((9.9, 30.0)));
        assert!(!button.is_hovered((110.0, 30.0)));
        assert!(!button.is_hovered((50.0, 60.0)));
        assert_eq!(button.command(), Command::Start);
    }

    #[test]
    fn test_stacked_buttons_never_both_hovered() {
        let upper = Button::new(Rect::new(0.0, 0.0, 100.0, 40.0), "Start", Command::Start);
        let lower = Button::new(Rect::new(0.0, 40.0, 100.0, 40.0), "Stop", Command::Stop);

        assert!(!upper.is_hovered((50.0, 40.0)));
        assert!(lower.is_hovered((50.0, 40.0)));
    }
}
