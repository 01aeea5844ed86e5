// Domain layer - grid, neighborhood and rule engine
pub mod domain;

// Application layer - clock, simulation context, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, CellIndex, Grid, Paint, Surface};
pub use application::{Config, Simulation, SimulationClock, Viewport};
