use super::{Cell, CellIndex};
use rand::Rng;

/// Probability threshold used by `randomize`: a cell lives when a uniform
/// sample in [0, 1) lands above it, so roughly 30% of cells start alive.
const RANDOM_ALIVE_THRESHOLD: f64 = 0.7;

/// Grid owns the cells of the simulation as columns of rows,
/// indexed `[column][row]`.
///
/// Every cell carries its pixel origin (`column * cell_size`,
/// `row * cell_size`). Columns always have equal length and the
/// dimensions never change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    columns: Vec<Vec<Cell>>,
    cell_size: u32,
}

impl Grid {
    /// Build an all-dead grid covering a `width` x `height` pixel surface.
    ///
    /// Stepping is inclusive (`0, cell_size, ... <= width`), so the grid has
    /// `width / cell_size + 1` columns and `height / cell_size + 1` rows.
    /// When a dimension is an exact multiple of `cell_size` the last
    /// column/row starts on the surface edge.
    pub fn create(width: u32, height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be non-zero");

        let columns = (0..=width)
            .step_by(cell_size as usize)
            .map(|x| {
                (0..=height)
                    .step_by(cell_size as usize)
                    .map(|y| Cell::dead(x, y))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { columns, cell_size }
    }

    /// Wrap already-built columns, e.g. the output of a generation step
    pub(crate) fn from_columns(columns: Vec<Vec<Cell>>, cell_size: u32) -> Self {
        let grid = Self { columns, cell_size };
        debug_assert!(grid.is_rectangular(), "grid columns differ in length");
        grid
    }

    /// (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns.len(), self.columns.first().map_or(0, Vec::len))
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Cell> {
        self.columns.get(column)?.get(row)
    }

    /// Columns in index order
    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    /// All cells, column by column
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.columns.iter().flatten()
    }

    /// All cells with their grid index, column by column
    pub fn indexed(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(row, cell)| (CellIndex::new(column, row), cell))
        })
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|cell| cell.alive).count()
    }

    /// Every column has as many rows as the first one
    pub fn is_rectangular(&self) -> bool {
        let (_, rows) = self.dimensions();
        self.columns.iter().all(|column| column.len() == rows)
    }

    /// Give every cell an independent 30% chance of being alive
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.columns.iter_mut().flatten().for_each(|cell| {
            cell.alive = rng.random::<f64>() > RANDOM_ALIVE_THRESHOLD;
        });
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.columns
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.alive = false);
    }

    /// Flip a single cell, returning it so the caller can repaint it
    pub fn toggle(&mut self, column: usize, row: usize) -> Option<&Cell> {
        let cell = self.columns.get_mut(column)?.get_mut(row)?;
        cell.toggle();
        Some(cell)
    }

    /// Find the cell whose box `[x, x + cell_size) x [y, y + cell_size)`
    /// contains the pixel point.
    pub fn hit_test(&self, pixel_x: f32, pixel_y: f32) -> Option<CellIndex> {
        // NaN fails both comparisons and is rejected here too
        if !(pixel_x >= 0.0 && pixel_y >= 0.0) {
            return None;
        }

        let size = self.cell_size as f32;
        let column = (pixel_x / size).floor() as usize;
        let row = (pixel_y / size).floor() as usize;

        self.get(column, row).map(|_| CellIndex::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_create_uses_inclusive_stepping() {
        let grid = Grid::create(100, 60, 20);
        assert_eq!(grid.dimensions(), (6, 4));

        let grid = Grid::create(110, 75, 20);
        assert_eq!(grid.dimensions(), (6, 4));
    }

    #[test]
    fn test_create_assigns_pixel_coordinates() {
        let grid = Grid::create(100, 60, 20);
        assert!(grid.is_rectangular());
        for (index, cell) in grid.indexed() {
            assert_eq!(cell.x, index.column as u32 * 20);
            assert_eq!(cell.y, index.row as u32 * 20);
            assert!(!cell.alive);
        }
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut grid = Grid::create(200, 200, 10);
        grid.randomize(&mut StdRng::seed_from_u64(7));
        assert!(grid.alive_count() > 0);

        grid.clear();
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_randomize_alive_fraction_near_thirty_percent() {
        let mut grid = Grid::create(2000, 2000, 10);
        grid.randomize(&mut StdRng::seed_from_u64(42));

        let (columns, rows) = grid.dimensions();
        let fraction = grid.alive_count() as f64 / (columns * rows) as f64;
        assert!((fraction - 0.3).abs() < 0.02, "alive fraction was {fraction}");
    }

    #[test]
    fn test_toggle_flips_single_cell() {
        let mut grid = Grid::create(60, 60, 20);
        let toggled = grid.toggle(1, 2).copied();
        assert_eq!(toggled, Some(Cell { x: 20, y: 40, alive: true }));
        assert_eq!(grid.alive_count(), 1);

        grid.toggle(1, 2);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_none() {
        let mut grid = Grid::create(60, 60, 20);
        assert!(grid.toggle(4, 0).is_none());
        assert!(grid.toggle(0, 4).is_none());
    }

    #[test]
    fn test_hit_test_boundaries() {
        let grid = Grid::create(60, 60, 20);

        assert_eq!(grid.hit_test(20.0, 40.0), Some(CellIndex::new(1, 2)));
        assert_eq!(grid.hit_test(39.9, 59.9), Some(CellIndex::new(1, 2)));
        assert_eq!(grid.hit_test(0.0, 0.0), Some(CellIndex::new(0, 0)));
        // Right edge of a box belongs to the next cell
        assert_eq!(grid.hit_test(40.0, 0.0), Some(CellIndex::new(2, 0)));
    }

    #[test]
    fn test_hit_test_outside_grid() {
        let grid = Grid::create(60, 60, 20);

        assert_eq!(grid.hit_test(-0.5, 10.0), None);
        assert_eq!(grid.hit_test(10.0, -1.0), None);
        assert_eq!(grid.hit_test(80.0, 10.0), None);
        assert_eq!(grid.hit_test(10.0, 80.0), None);
        assert_eq!(grid.hit_test(f32::NAN, 10.0), None);
    }
}
