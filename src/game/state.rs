use super::grid::{Cell, Grid};
use super::heading::Heading;

/// The snake's body: head at index 0, tail last, never empty.
///
/// Cells are unique while the snake is alive; the engine's collision check
/// enforces that, not this container. Membership is a linear scan, which is
/// fine at terminal-grid sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// A single-cell snake, the canonical post-reset shape.
    pub fn single(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Builds a snake from explicit cells, head first. Callers guarantee the
    /// list is non-empty.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { body: cells }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Moves the head to `new_head`. Growing keeps the tail in place, so the
    /// body gains exactly one cell; otherwise the tail is dropped and the
    /// length stays the same.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }
}

/// Everything the engine owns: the grid the run happens on, the snake, the
/// food cell, and the heading that was last applied to a tick.
///
/// The *pending* heading lives in the arbiter; `heading` here is the engine's
/// record of what actually moved the snake, which is what the no-reversal
/// invariant, the renderer, and the snapshot all refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    pub heading: Heading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_snake() {
        let snake = Snake::single(Cell::new(0, 0));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(0, 0));
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::from_cells(vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]);

        snake.advance(Cell::new(0, 3), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(0, 3));
        assert_eq!(
            snake.cells(),
            &[Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1)]
        );
    }

    #[test]
    fn test_advance_with_growth_adds_one_cell() {
        let mut snake = Snake::from_cells(vec![Cell::new(0, 1), Cell::new(0, 0)]);

        snake.advance(Cell::new(0, 2), true);

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells(),
            &[Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]
        );
    }

    #[test]
    fn test_contains_checks_the_whole_body() {
        let snake = Snake::from_cells(vec![Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)]);
        assert!(snake.contains(Cell::new(2, 2)));
        assert!(snake.contains(Cell::new(2, 0)));
        assert!(!snake.contains(Cell::new(3, 0)));
    }
}
