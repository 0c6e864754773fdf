//! Gameplay tuning. Every constant the session uses lives here so a config file can override it.
use serde::{Deserialize, Serialize};

use crate::core::effects::BurstShape;

/// Difficulty presets; each scales the per-move fuel cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn multiplier(self) -> f32 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub move_cost: f32,
    pub fuel_bonus: f32,
    pub pickup_reward: u32,
    pub low_fuel: f32,
    /// Bumping a wall or the grid edge still burns fuel. Off by default.
    pub charge_blocked_moves: bool,
    pub unlock_threshold: u32,
    pub station_cost: u32,
    pub target_score: u32,
    pub initial_stations: usize,
    pub start: (usize, usize),
    pub notice_frames: u32,
    pub burst_count: usize,
    pub burst_spread: i32,
    pub burst_speed: f32,
    pub particle_frames: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            move_cost: 1.0,
            fuel_bonus: 20.0,
            pickup_reward: 500,
            low_fuel: 20.0,
            charge_blocked_moves: false,
            unlock_threshold: 2,
            station_cost: 100,
            target_score: 5000,
            initial_stations: 10,
            start: (1, 1),
            notice_frames: 90,
            burst_count: 10,
            burst_spread: 5,
            burst_speed: 1.0,
            particle_frames: 50,
        }
    }
}

impl Rules {
    pub fn burst(&self) -> BurstShape {
        BurstShape {
            count: self.burst_count,
            spread: self.burst_spread.max(0),
            max_speed: self.burst_speed.max(0.0),
            lifetime: self.particle_frames,
        }
    }
}
