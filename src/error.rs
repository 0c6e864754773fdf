//! Startup error types.
//!
//! Gameplay itself never fails: blocked moves and unaffordable builds are
//! silent no-ops. Only loading a config or an authored maze can go wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Problems found while building a maze from authored rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze has no rows")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("start cell ({row}, {col}) is a wall or outside the grid")]
    StartBlocked { row: usize, col: usize },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid maze {}: {source}", path.display())]
    Maze {
        path: PathBuf,
        #[source]
        source: MazeError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
