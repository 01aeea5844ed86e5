/// Cell is one square of the life grid.
/// `x` and `y` are the pixel origin of the cell on the drawing surface,
/// not array indices. Use `CellIndex` when addressing the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub alive: bool,
}

impl Cell {
    /// Dead cell at the given pixel origin
    pub const fn dead(x: u32, y: u32) -> Self {
        Self { x, y, alive: false }
    }

    /// Same position, new state
    pub const fn with_alive(self, alive: bool) -> Self {
        Self { alive, ..self }
    }

    /// Flip the alive flag in place
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    /// Logical paint for the current state
    pub const fn paint(&self) -> Paint {
        if self.alive { Paint::Alive } else { Paint::Dead }
    }
}

/// Column/row address of a cell inside a `Grid`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct CellIndex {
    pub column: usize,
    pub row: usize,
}

impl CellIndex {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// The two logical colors a cell can be painted with
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Paint {
    Alive,
    Dead,
}
