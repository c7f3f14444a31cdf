use crate::games::SessionRng;
use super::entity::Snake;
use super::grid::FieldSize;
use super::types::Point;

/// Picks a free cell for the next food item.
pub struct FoodPlacer;

impl FoodPlacer {
    const ATTEMPTS_PER_CELL: usize = 4;

    /// Rejection-samples a free cell, falling back to a row-major scan once
    /// the attempt budget runs out. `None` means the snake fills the grid.
    pub fn place(field: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
        if snake.len() >= field.cell_count() {
            return None;
        }

        let size = field.size() as i32;
        for _ in 0..field.cell_count() * Self::ATTEMPTS_PER_CELL {
            let pos = Point::new(rng.random_range(0..size), rng.random_range(0..size));
            if !snake.contains(&pos) {
                return Some(pos);
            }
        }

        field.cells().find(|pos| !snake.contains(pos))
    }
}
