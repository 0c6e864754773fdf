//! Session state machine: menu → briefing → play → outcome.
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::events::GameEvent;
use crate::core::layout::Layout;
use crate::core::maze::Maze;
use crate::core::movement::move_player;
use crate::core::player::Direction;
use crate::core::progression::{build_station, unlock_wall};
use crate::core::rules::{Difficulty, Rules};
use crate::core::state::GameState;
use crate::error::MazeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    DifficultySelect,
    Briefing,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// One polled input, already mapped from the raw device event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    Move(Direction),
    BuildStation,
    Click { x: f32, y: f32 },
}

#[derive(Debug)]
pub struct Session {
    phase: Phase,
    difficulty: Option<Difficulty>,
    layout: Layout,
    pub state: GameState,
}

impl Session {
    /// Sets up the maze (stations scattered) and waits on the difficulty menu.
    /// `seed` of `None` draws one from the OS.
    pub fn new(maze: Maze, rules: Rules, layout: Layout, seed: Option<u64>) -> Result<Self, MazeError> {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(maze, rules, layout.cell_size, rng)?;
        Ok(Self { phase: Phase::DifficultySelect, difficulty: None, layout, state })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Locks in the fuel-cost multiplier. Only valid on the difficulty menu.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase != Phase::DifficultySelect {
            return;
        }
        self.difficulty = Some(difficulty);
        self.state.counters.multiplier = difficulty.multiplier();
        info!(difficulty = difficulty.label(), multiplier = difficulty.multiplier(), "difficulty selected");
        self.set_phase(Phase::Briefing);
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Briefing {
            self.set_phase(Phase::Playing);
        }
    }

    /// Applies one input. Inputs that mean nothing in the current phase are dropped.
    pub fn handle(&mut self, input: Input) {
        match (self.phase, input) {
            (Phase::DifficultySelect, Input::Click { x, y }) => {
                if let Some(d) = self.layout.difficulty_at(x, y) {
                    self.choose_difficulty(d);
                }
            }
            (Phase::Briefing, Input::Click { x, y }) => {
                if self.layout.start_button().contains(x, y) {
                    self.start();
                }
            }
            (Phase::Playing, Input::Move(dir)) => {
                move_player(&mut self.state, dir);
            }
            (Phase::Playing, Input::BuildStation) => {
                build_station(&mut self.state);
            }
            _ => {}
        }
    }

    /// Per-frame rules after input: unlock, effect timers, then the outcome check.
    pub fn update(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        unlock_wall(&mut self.state);
        self.state.effects.tick();

        if self.state.player.score >= self.state.rules.target_score {
            self.set_phase(Phase::Won);
        } else if self.state.player.is_empty() {
            self.set_phase(Phase::Lost);
        }
    }

    /// Input in queue order, then the frame update.
    pub fn frame(&mut self, inputs: impl IntoIterator<Item = Input>) {
        for input in inputs {
            self.handle(input);
        }
        self.update();
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    fn set_phase(&mut self, next: Phase) {
        let from = self.phase;
        self.phase = next;
        match next {
            Phase::Won | Phase::Lost => info!(
                outcome = ?next,
                score = self.state.player.score,
                fuel = self.state.player.fuel(),
                walls_unlocked = self.state.counters.walls_unlocked,
                stations_built = self.state.counters.stations_built,
                "session over"
            ),
            _ => info!(?from, to = ?next, "phase changed"),
        }
        self.state.push_event(GameEvent::PhaseChanged { from, to: next });
    }
}
