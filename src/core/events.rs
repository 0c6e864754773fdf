//! Game events.
//!
//! Emitted by the per-frame rules and drained once per frame by the app, which
//! hands them to the audio collaborator and the log. Nothing reads them back
//! into the game state.

use crate::core::maze::Coord;
use crate::core::player::Direction;
use crate::core::session::Phase;

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// The truck entered a new cell.
    Moved { to: Coord, facing: Direction },

    /// A station was driven over and consumed.
    FuelCollected { at: Coord, fuel: f32, score: u32 },

    /// Enough fuel was collected to knock out a wall.
    WallUnlocked { at: Coord },

    /// Points were spent on a new station.
    StationBuilt { at: Coord, score: u32 },

    /// Fuel is at or below the warning level after a move attempt.
    LowFuel { fuel: f32 },

    PhaseChanged { from: Phase, to: Phase },
}
