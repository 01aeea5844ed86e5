use super::{Cell, Grid, neighborhood::live_neighbor_count};
use rayon::prelude::*;

/// Trait for cellular automaton rules
pub trait Rule: Send + Sync {
    /// Next alive state of a cell given its current state and live neighbor count
    fn evolve(&self, alive: bool, live_neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn evolve(&self, alive: bool, live_neighbors: u8) -> bool {
        match (alive, live_neighbors) {
            // Survival
            (true, 2 | 3) => true,
            // Reproduction
            (false, 3) => true,
            // Under/overpopulation, or stays dead
            _ => false,
        }
    }
}

/// Compute the next generation under Conway's rule.
/// The input is left untouched; every cell is judged against it.
pub fn step(grid: &Grid) -> Grid {
    evolve(grid, &ConwayRule)
}

/// Same as `step`, with columns computed on the rayon pool
pub fn step_parallel(grid: &Grid) -> Grid {
    evolve_parallel(grid, &ConwayRule)
}

/// Pure functional evolution - returns new grid (serial)
pub fn evolve(grid: &Grid, rule: &dyn Rule) -> Grid {
    check_shape(grid);

    let columns = (0..grid.columns().len())
        .map(|column| next_column(grid, column, rule))
        .collect();

    Grid::from_columns(columns, grid.cell_size())
}

/// Parallel evolution, one rayon task per column
pub fn evolve_parallel(grid: &Grid, rule: &dyn Rule) -> Grid {
    check_shape(grid);

    let columns = (0..grid.columns().len())
        .into_par_iter()
        .map(|column| next_column(grid, column, rule))
        .collect();

    Grid::from_columns(columns, grid.cell_size())
}

fn next_column(grid: &Grid, column: usize, rule: &dyn Rule) -> Vec<Cell> {
    grid.columns()[column]
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            let neighbors = live_neighbor_count(column, row, grid);
            cell.with_alive(rule.evolve(cell.alive, neighbors))
        })
        .collect()
}

/// A jagged grid can only come from a construction bug.
fn check_shape(grid: &Grid) {
    if cfg!(debug_assertions) && !grid.is_rectangular() {
        let lengths: Vec<usize> = grid.columns().iter().map(Vec::len).collect();
        tracing::error!(?lengths, "malformed grid: columns differ in length");
        panic!("malformed grid: columns differ in length");
    }
}
