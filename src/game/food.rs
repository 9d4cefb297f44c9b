use rand::Rng;

use super::grid::{Cell, Grid};
use super::state::Snake;

/// Picks a uniformly random cell that is not on the snake.
///
/// Returns `None` when the body covers the whole grid, which the engine
/// treats as a win. The sampling loop only runs when a free cell exists.
pub fn spawn<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    loop {
        let cell = Cell::new(
            rng.gen_range(0..grid.height() as i32),
            rng.gen_range(0..grid.width() as i32),
        );
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::heading::Heading;

    #[test]
    fn test_food_never_spawns_on_the_body() {
        let mut rng = rand::thread_rng();
        let grid = Grid::new(6, 6);

        // A winding body covering a third of the grid.
        let mut cells = vec![Cell::new(0, 0)];
        for heading in [
            Heading::Right,
            Heading::Right,
            Heading::Down,
            Heading::Down,
            Heading::Left,
            Heading::Left,
            Heading::Down,
            Heading::Right,
            Heading::Right,
            Heading::Right,
            Heading::Up,
        ] {
            let next = grid.step(cells[0], heading);
            cells.insert(0, next);
        }
        let snake = Snake::from_cells(cells);

        for _ in 0..1000 {
            let cell = spawn(&mut rng, grid, &snake).unwrap();
            assert!(!snake.contains(cell));
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn test_full_grid_yields_none() {
        let grid = Grid::new(2, 2);
        let snake = Snake::from_cells(vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ]);

        assert_eq!(spawn(&mut rand::thread_rng(), grid, &snake), None);
    }

    #[test]
    fn test_single_free_cell_is_always_found() {
        let grid = Grid::new(2, 2);
        let snake = Snake::from_cells(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);

        for _ in 0..100 {
            assert_eq!(
                spawn(&mut rand::thread_rng(), grid, &snake),
                Some(Cell::new(1, 0))
            );
        }
    }
}
