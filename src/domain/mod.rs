mod cell;
mod grid;
mod rules;
mod algorithm;
mod surface;
pub mod neighborhood;

pub use cell::{Cell, CellIndex, Paint};
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, step, step_parallel, evolve, evolve_parallel};
pub use neighborhood::{neighbors_of, live_neighbor_count};
pub use algorithm::Algorithm;
pub use surface::Surface;
