mod clock;
mod config;
mod simulation;
mod viewport;

pub use clock::{Beat, ClockState, SimulationClock, PAUSED_POLL_INTERVAL};
pub use config::{Config, Palette, Rgba};
pub use simulation::Simulation;
pub use viewport::Viewport;
