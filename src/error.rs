//! Errors surfaced while setting up a run.

use thiserror::Error;

use crate::snake_game::GridPoint;

#[derive(Error, Debug)]
pub enum Error {
    #[error("tick rate must be at least 1, got 0")]
    ZeroTickRate,

    #[error("initial snake has no segments")]
    EmptySnake,

    #[error("initial snake segment {index} at {from:?} is not adjacent to the next one at {to:?}")]
    DisjointSnake {
        index: usize,
        from: GridPoint,
        to: GridPoint,
    },

    #[error("invalid projection planes: near={near}, far={far}")]
    InvalidProjection { near: f32, far: f32 },

    #[error("unknown script token {token:?} at frame {frame}")]
    UnknownScriptToken { token: String, frame: usize },

    #[error("failed to serialize snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
