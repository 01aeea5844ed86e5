use super::{Cell, Paint};

/// Drawing target the simulation paints cells onto.
/// Painting is persistent: a cell keeps its color until painted again.
pub trait Surface {
    fn paint_cell(&mut self, cell: &Cell, paint: Paint);
}
