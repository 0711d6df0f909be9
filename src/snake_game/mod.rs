//! Snake simulation: grid points, the snake body, food and pending growth.
//!
//! Nothing in here knows about bevy, so the whole update rule can be driven and
//! inspected from plain tests or a headless loop.

pub mod counter;
pub mod food;

use std::collections::{HashSet, VecDeque};
use std::ops;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use counter::Counter;
pub use food::{FoodSpawner, NoRespawn, RandomFood};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Debug, Default)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when `other` is one orthogonal step away.
    pub fn is_adjacent(self, other: GridPoint) -> bool {
        let d = other - self;
        d.x.abs() + d.y.abs() == 1
    }
}

impl ops::Add<Self> for GridPoint {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        GridPoint { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl ops::Sub<Self> for GridPoint {
    type Output = GridPoint;
    fn sub(self, rhs: GridPoint) -> Self::Output {
        GridPoint { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake. The y axis points up.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn to_point(self) -> GridPoint {
        match self {
            Direction::Up    => GridPoint { x: 0, y: 1, },
            Direction::Down  => GridPoint { x: 0, y: -1, },
            Direction::Left  => GridPoint { x: -1, y: 0, },
            Direction::Right => GridPoint { x: 1, y: 0, },
        }
    }
}

/// Snake body, tail at the front and head at the back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snake {
    locations: VecDeque<GridPoint>,
}

impl Snake {
    /// Builds a snake from tail to head. Consecutive segments must be grid neighbours.
    pub fn new(segments: impl IntoIterator<Item = GridPoint>) -> Result<Snake> {
        let locations: VecDeque<GridPoint> = segments.into_iter().collect();
        if locations.is_empty() {
            return Err(Error::EmptySnake);
        }
        for (index, (from, to)) in locations.iter().zip(locations.iter().skip(1)).enumerate() {
            if !from.is_adjacent(*to) {
                return Err(Error::DisjointSnake { index, from: *from, to: *to });
            }
        }
        Ok(Snake { locations })
    }

    pub fn head(&self) -> GridPoint {
        self.locations[self.locations.len() - 1]
    }

    pub fn tail(&self) -> GridPoint {
        self.locations[0]
    }

    pub fn length(&self) -> usize {
        self.locations.len()
    }

    /// Segments from tail to head.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &GridPoint> + '_ {
        self.locations.iter()
    }

    fn push_head(&mut self, location: GridPoint) {
        self.locations.push_back(location);
    }

    fn pop_tail(&mut self) -> Option<GridPoint> {
        // A one-segment snake still has its new head after this.
        self.locations.pop_front()
    }
}

/// What one call to [`GameState::advance`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Advance {
    /// Head before the move.
    pub head: GridPoint,
    pub new_head: GridPoint,
    /// Food consumed at the pre-move head, if any.
    pub eaten: Option<GridPoint>,
    /// The pre-move tail carried a grow marker, so nothing was dropped.
    pub grew: bool,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: HashSet<GridPoint>,
    /// Tail positions that must survive their next advance.
    pub grow: HashSet<GridPoint>,
    pub direction: Direction,
}

impl GameState {
    pub fn new(snake: Snake, food: impl IntoIterator<Item = GridPoint>, direction: Direction) -> Self {
        Self {
            snake,
            food: food.into_iter().collect(),
            grow: HashSet::new(),
            direction,
        }
    }

    /// One simulation step.
    ///
    /// 1. Food under the current head is eaten and the current tail gets a grow marker.
    /// 2. A new head is appended one cell away in `direction`.
    /// 3. If the pre-move tail carried a grow marker the marker is consumed and the
    ///    snake keeps its tail, otherwise the tail is dropped.
    ///
    /// There are no walls and no self collision; the snake may leave the board or
    /// cross itself.
    pub fn advance(&mut self) -> Advance {
        let head = self.snake.head();
        let tail = self.snake.tail();

        // Eat food
        let eaten = if self.food.remove(&head) {
            self.grow.insert(tail);
            Some(head)
        } else {
            None
        };

        // Move snake
        let new_head = head + self.direction.to_point();
        self.snake.push_head(new_head);

        let grew = self.grow.remove(&tail);
        if !grew {
            self.snake.pop_tail();
        }

        Advance { head, new_head, eaten, grew }
    }

    /// True when `pt` is occupied by the snake or by food.
    pub fn is_occupied(&self, pt: GridPoint) -> bool {
        self.food.contains(&pt) || self.snake.segments().any(|s| *s == pt)
    }
}
