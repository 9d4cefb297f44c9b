use std::fmt;

use super::heading::Heading;

/// A grid coordinate as a (row, col) pair.
///
/// Components are signed so pre-wrap arithmetic can be expressed; any cell
/// produced by [`Grid::wrap`] or [`Grid::step`] lies inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A toroidal grid: moving past one edge reappears at the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Maps any cell into the grid component-wise. `rem_euclid` keeps
    /// negative coordinates wrapping the right way: row -1 becomes the
    /// bottom row, not a negative index.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            row: cell.row.rem_euclid(self.height as i32),
            col: cell.col.rem_euclid(self.width as i32),
        }
    }

    /// One step from `cell` in `heading`, wrapped around the edges.
    pub fn step(&self, cell: Cell, heading: Heading) -> Cell {
        let (row_delta, col_delta) = heading.delta();
        self.wrap(Cell::new(cell.row + row_delta, cell.col + col_delta))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.row < self.height as i32
            && cell.col >= 0
            && cell.col < self.width as i32
    }
}
