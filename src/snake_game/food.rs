//! Optional food respawning, applied by the caller after an advance that ate food.
//! The update rule itself never adds food.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{GameState, GridPoint};

pub trait FoodSpawner {
    /// Picks a cell for new food, or `None` to leave the board as it is.
    fn respawn(&mut self, state: &GameState) -> Option<GridPoint>;
}

/// The stock rule: eaten food is gone for good.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRespawn;

impl FoodSpawner for NoRespawn {
    fn respawn(&mut self, _state: &GameState) -> Option<GridPoint> {
        None
    }
}

/// Drops new food on a random free cell of the visible board.
#[derive(Debug)]
pub struct RandomFood {
    rng: StdRng,
    width: i32,
    height: i32,
}

impl RandomFood {
    pub const MAX_ATTEMPTS: usize = 1000;

    pub fn new(width: i32, height: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, width, height }
    }

    fn rand_point(&mut self) -> GridPoint {
        GridPoint {
            x: self.rng.gen_range(0..self.width),
            y: self.rng.gen_range(0..self.height),
        }
    }
}

impl FoodSpawner for RandomFood {
    fn respawn(&mut self, state: &GameState) -> Option<GridPoint> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        for _ in 0..Self::MAX_ATTEMPTS {
            let loc = self.rand_point();
            if state.is_occupied(loc) { continue; }
            return Some(loc);
        }
        log::warn!("no free cell for food after {} attempts", Self::MAX_ATTEMPTS);
        None
    }
}
