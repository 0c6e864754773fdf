//! Core game types and logic (data, rules, session).
//!
//! Re-exports:
//! - `maze`: Grid cells, authored template and text loading
//! - `player`: Player position, facing, fuel and score
//! - `effects`: Notices and particle bursts
//! - `rules`: Tuning constants and difficulty presets
//! - `state`: Shared mutable state passed into every rule
//! - `movement`: Move resolution and fuel pickups
//! - `progression`: Wall unlocks and station building
//! - `layout`: Menu button geometry
//! - `events`: Events for audio and logging
//! - `session`: Phase state machine and frame update

pub mod maze;
pub mod player;
pub mod effects;
pub mod rules;
pub mod state;
pub mod movement;
pub mod progression;
pub mod layout;
pub mod events;
pub mod session;
