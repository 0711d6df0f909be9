//! One running game: state, frame divider, quit flag and the optional food rule.
//!
//! [`Session::frame`] is a single pass of the main loop minus drawing, so the
//! windowed app and headless runs share it.

use log::{debug, info};
use serde::Serialize;

use crate::config::GameConfig;
use crate::controls::{control_for, Control, InputEvent, InputPort};
use crate::error::Result;
use crate::snake_game::{Advance, Counter, Direction, FoodSpawner, GameState, GridPoint, NoRespawn, Snake};

pub struct Session {
    pub state: GameState,
    counter: Counter,
    running: bool,
    frames: u64,
    ticks: u64,
    spawner: Box<dyn FoodSpawner + Send + Sync>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Session> {
        Self::with_spawner(config, Box::new(NoRespawn))
    }

    pub fn with_spawner(config: &GameConfig, spawner: Box<dyn FoodSpawner + Send + Sync>) -> Result<Session> {
        config.validate()?;
        let snake = Snake::new(config.initial_snake.iter().copied())?;
        let state = GameState::new(snake, config.initial_food.iter().copied(), config.initial_direction);
        Ok(Session {
            state,
            counter: Counter::new(config.tick_rate)?,
            running: true,
            frames: 0,
            ticks: 0,
            spawner,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match control_for(event) {
            Some(Control::Quit) => {
                info!("quit requested");
                self.running = false;
            }
            Some(Control::Turn(direction)) => {
                if direction != self.state.direction {
                    debug!("turning {:?} -> {:?}", self.state.direction, direction);
                }
                self.state.direction = direction;
            }
            None => {}
        }
    }

    /// Counts a frame and advances the game when the divider fires.
    pub fn update(&mut self) -> Option<Advance> {
        self.frames += 1;
        if !self.counter.tick() {
            return None;
        }
        self.ticks += 1;
        let step = self.state.advance();
        debug!("tick {}: head {:?} -> {:?}", self.ticks, step.head, step.new_head);
        if let Some(eaten) = step.eaten {
            info!("ate food at {:?}, {} left", eaten, self.state.food.len());
            if let Some(pt) = self.spawner.respawn(&self.state) {
                debug!("new food at {pt:?}");
                self.state.food.insert(pt);
            }
        }
        Some(step)
    }

    /// Polls input then updates. Returns whether the loop should keep going.
    pub fn frame(&mut self, input: &mut impl InputPort) -> bool {
        for event in input.poll_events() {
            self.handle_event(event);
        }
        if !self.running {
            return false;
        }
        self.update();
        self.running
    }

    /// Runs up to `max_frames` loop iterations, stopping early on quit.
    /// Returns the number of iterations that ran.
    pub fn run(&mut self, input: &mut impl InputPort, max_frames: u64) -> u64 {
        let mut ran = 0;
        while ran < max_frames {
            ran += 1;
            if !self.frame(input) {
                break;
            }
        }
        ran
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut food: Vec<GridPoint> = self.state.food.iter().copied().collect();
        food.sort();
        let mut grow: Vec<GridPoint> = self.state.grow.iter().copied().collect();
        grow.sort();
        Snapshot {
            frames: self.frames,
            ticks: self.ticks,
            running: self.running,
            direction: self.state.direction,
            snake: self.state.snake.segments().copied().collect(),
            food,
            grow,
        }
    }
}

/// Serializable view of a session, with sets sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub frames: u64,
    pub ticks: u64,
    pub running: bool,
    pub direction: Direction,
    /// Tail first.
    pub snake: Vec<GridPoint>,
    pub food: Vec<GridPoint>,
    pub grow: Vec<GridPoint>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
