use clap::Parser;

use crate::render::BOARD_CELLS;
use crate::snake_game::{FoodSpawner, NoRespawn, RandomFood};

/// Without flags this opens the window and plays the stock board.
#[derive(Parser, Debug, Default)]
#[command(name = "snake-quads")]
#[command(version, about = "Snake drawn as colored quads")]
pub struct Args {
    /// Run without a window, replaying --script, then print the final state as JSON
    #[arg(long)]
    pub headless: bool,

    /// Loop iterations in headless mode (default: script length, or 60 without a script)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Comma separated per-frame keys: U, D, L, R (arrows), Q (escape), . (nothing)
    #[arg(long, default_value = "")]
    pub script: String,

    /// Drop new food on a random free cell whenever food is eaten
    #[arg(long)]
    pub respawn_food: bool,

    /// Seed for --respawn-food
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub const DEFAULT_HEADLESS_FRAMES: u64 = 60;

    pub fn food_spawner(&self) -> Box<dyn FoodSpawner + Send + Sync> {
        if self.respawn_food {
            Box::new(RandomFood::new(BOARD_CELLS, BOARD_CELLS, self.seed))
        } else {
            Box::new(NoRespawn)
        }
    }

    pub fn headless_frames(&self, script_frames: usize) -> u64 {
        match self.frames {
            Some(frames) => frames,
            None if script_frames > 0 => script_frames as u64,
            None => Self::DEFAULT_HEADLESS_FRAMES,
        }
    }
}
