use std::time::Instant;

use macroquad::prelude::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed};
use rand::Rng;

use crate::application::{Simulation, Viewport};
use crate::domain::Surface;
use crate::ui::Button;

/// Core operation requested by the user
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Randomize,
    Clear,
    /// Click at surface pixel coordinates
    Click { x: f32, y: f32 },
}

/// Apply one command to the simulation. Runs to completion before the
/// loop computes another generation.
pub fn apply<R, S>(
    command: Command,
    simulation: &mut Simulation,
    surface: &mut S,
    rng: &mut R,
    now: Instant,
) where
    R: Rng + ?Sized,
    S: Surface + ?Sized,
{
    match command {
        Command::Start => simulation.start(now),
        Command::Stop => simulation.stop(),
        Command::Randomize => simulation.randomize_requested(rng, surface),
        Command::Clear => simulation.clear_requested(surface),
        Command::Click { x, y } => {
            simulation.pointer_click(x, y, surface);
        }
    }
}

/// Commands issued by panel buttons this frame
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter_map(|button| button.clicked(mouse_pos))
        .collect()
}

/// Left click inside the viewport, mapped to surface pixels
pub fn process_pointer(viewport: &Viewport, mouse_pos: (f32, f32)) -> Option<Command> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    viewport
        .to_surface(mouse_pos.0, mouse_pos.1)
        .map(|(x, y)| Command::Click { x, y })
}

/// Keyboard shortcuts for the panel buttons
pub fn process_keyboard_input() -> Vec<Command> {
    const KEYS: [(KeyCode, Command); 4] = [
        (KeyCode::Enter, Command::Start),
        (KeyCode::Space, Command::Stop),
        (KeyCode::R, Command::Randomize),
        (KeyCode::C, Command::Clear),
    ];

    KEYS.iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ClockState, Config};
    use crate::domain::{Cell, Paint};
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Default)]
    struct CountingSurface {
        paints: usize,
    }

    impl Surface for CountingSurface {
        fn paint_cell(&mut self, _cell: &Cell, _paint: Paint) {
            self.paints += 1;
        }
    }

    fn setup() -> (Simulation, CountingSurface, StdRng) {
        let config = Config {
            cell_size: 10,
            ..Config::default()
        };
        (
            Simulation::new(90, 90, &config, Instant::now()),
            CountingSurface::default(),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_stop_and_start() {
        let (mut simulation, mut surface, mut rng) = setup();

        apply(Command::Stop, &mut simulation, &mut surface, &mut rng, Instant::now());
        assert_eq!(simulation.state(), ClockState::Paused);

        apply(Command::Start, &mut simulation, &mut surface, &mut rng, Instant::now());
        assert_eq!(simulation.state(), ClockState::Running);
        assert_eq!(surface.paints, 0);
    }

    #[test]
    fn test_click_toggles_cell() {
        let (mut simulation, mut surface, mut rng) = setup();

        apply(
            Command::Click { x: 45.0, y: 5.0 },
            &mut simulation,
            &mut surface,
            &mut rng,
            Instant::now(),
        );

        assert!(simulation.grid().get(4, 0).unwrap().alive);
        assert_eq!(surface.paints, 1);
    }

    #[test]
    fn test_clear_while_paused_repaints() {
        let (mut simulation, mut surface, mut rng) = setup();
        let now = Instant::now();
        apply(Command::Randomize, &mut simulation, &mut surface, &mut rng, now);
        apply(Command::Stop, &mut simulation, &mut surface, &mut rng, now);

        apply(Command::Clear, &mut simulation, &mut surface, &mut rng, now);

        assert_eq!(simulation.grid().alive_count(), 0);
        // 90 / 10 + 1 = 10 columns and rows
        assert_eq!(surface.paints, 100);
    }
}
