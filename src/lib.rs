//! HydroDrive: drive a fuel-cell truck around a grid maze and reach the
//! point target before the tank runs dry.
//!
//! `core` holds the game rules and has no window or audio dependency; `render`,
//! `audio` and `input` wrap raylib and rodio around it, and `app` runs the loop.

pub mod app;
pub mod audio;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod render;

pub use crate::config::Config;
pub use crate::core::session::{Input, Phase, Session};
pub use crate::error::{Error, MazeError, Result};
