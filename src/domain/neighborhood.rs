//! Moore neighborhood lookups on a bounded (non-wrapping) grid.

use super::{Cell, Grid};

/// Relative (column, row) offsets of the eight Moore neighbors
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Iterator over the in-bounds neighbors of one cell.
/// Walks a fixed offset table, so resolving a neighborhood never allocates.
pub struct Neighbors<'a> {
    grid: &'a Grid,
    column: usize,
    row: usize,
    next: usize,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dc, dr)) = OFFSETS.get(self.next) {
            self.next += 1;

            let Some(column) = self.column.checked_add_signed(dc) else {
                continue;
            };
            let Some(row) = self.row.checked_add_signed(dr) else {
                continue;
            };
            if let Some(cell) = self.grid.get(column, row) {
                return Some(cell);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next))
    }
}

/// Neighbors of the cell at `[column][row]` that exist inside the grid:
/// 3 at a corner, 5 along an edge, 8 in the interior.
pub fn neighbors_of(column: usize, row: usize, grid: &Grid) -> Neighbors<'_> {
    Neighbors { grid, column, row, next: 0 }
}

/// Number of alive Moore neighbors of `[column][row]`
pub fn live_neighbor_count(column: usize, row: usize, grid: &Grid) -> u8 {
    neighbors_of(column, row, grid)
        .filter(|cell| cell.alive)
        .count() as u8
}
