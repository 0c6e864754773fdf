//! Mutable game state shared by every per-frame rule.
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::effects::Effects;
use crate::core::events::GameEvent;
use crate::core::maze::{Coord, Maze};
use crate::core::player::Player;
use crate::core::rules::Rules;
use crate::error::MazeError;

/// Session counters that survive across frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Counters {
    /// Stations consumed since the last wall unlock.
    pub fuel_collected: u32,
    pub walls_unlocked: u32,
    pub stations_built: u32,
    pub multiplier: f32,
}

impl Default for Counters {
    fn default() -> Self {
        Self { fuel_collected: 0, walls_unlocked: 0, stations_built: 0, multiplier: 1.0 }
    }
}

#[derive(Debug)]
pub struct GameState {
    pub maze: Maze,
    pub player: Player,
    pub effects: Effects,
    pub counters: Counters,
    pub rules: Rules,
    /// Pixel size of one grid cell; particles live in pixel space.
    pub cell_size: f32,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: StdRng,
}

impl GameState {
    /// Validates the start cell and scatters the initial fuel stations.
    pub fn new(mut maze: Maze, rules: Rules, cell_size: f32, mut rng: StdRng) -> Result<Self, MazeError> {
        let (row, col) = rules.start;
        if maze.get(row, col).is_none_or(|c| c.is_wall()) {
            return Err(MazeError::StartBlocked { row, col });
        }
        maze.scatter_stations(&mut rng, rules.initial_stations);

        Ok(Self {
            maze,
            player: Player::new(rules.start),
            effects: Effects::default(),
            counters: Counters::default(),
            rules,
            cell_size,
            events: Vec::new(),
            rng,
        })
    }

    /// Same as [`GameState::new`] with an RNG seeded from `seed`.
    pub fn seeded(maze: Maze, rules: Rules, cell_size: f32, seed: u64) -> Result<Self, MazeError> {
        Self::new(maze, rules, cell_size, StdRng::seed_from_u64(seed))
    }

    pub fn move_cost(&self) -> f32 {
        self.rules.move_cost * self.counters.multiplier
    }

    pub fn pixel_center(&self, (row, col): Coord) -> (f32, f32) {
        let half = self.cell_size / 2.0;
        (col as f32 * self.cell_size + half, row as f32 * self.cell_size + half)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
