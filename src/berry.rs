use log::warn;
use rand::{seq::IteratorRandom, Rng};

use crate::geometry::{Grid, Point};
use crate::snake::Snake;

/// Random samples tried before falling back to a scan of every free cell.
pub const SPAWN_ATTEMPTS: usize = 64;

/// Pick a free cell at least one step away from the border.
///
/// Sampling is cheap while the board is mostly empty; once it keeps hitting
/// the snake the free cells are enumerated instead. `None` means there is no
/// free cell left.
pub fn spawn_berry<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Point> {
    if grid.width < 3 || grid.height < 3 {
        return None;
    }

    for _ in 0..SPAWN_ATTEMPTS {
        let x = rng.gen_range(1..grid.width - 1);
        let y = rng.gen_range(1..grid.height - 1);
        let candidate = Point::new(x, y);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    warn!("berry sampling missed {} times, scanning free cells", SPAWN_ATTEMPTS);
    grid.padded_cells().filter(|p| !snake.occupies(*p)).choose(rng)
}
