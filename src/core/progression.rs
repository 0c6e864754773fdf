//! Wall unlocking and station building.
use tracing::debug;

use crate::core::events::GameEvent;
use crate::core::maze::{Cell, Coord};
use crate::core::state::GameState;

/// Knocks out one random wall once enough fuel has been collected.
/// Leaves the counter alone when no walls are left.
pub fn unlock_wall(state: &mut GameState) -> Option<Coord> {
    if state.counters.fuel_collected < state.rules.unlock_threshold {
        return None;
    }
    let at = state.maze.convert_random(&mut state.rng, Cell::Wall, Cell::Path)?;
    state.counters.fuel_collected = 0;
    state.counters.walls_unlocked += 1;
    state.effects.notify(format!("New route opened at ({}, {})!", at.0, at.1), state.rules.notice_frames);

    debug!(row = at.0, col = at.1, total = state.counters.walls_unlocked, "wall unlocked");
    state.push_event(GameEvent::WallUnlocked { at });
    Some(at)
}

/// Spends points on a new station at a random path cell.
/// Does nothing when the player can't afford it or there is nowhere to put it.
pub fn build_station(state: &mut GameState) -> Option<Coord> {
    let cost = state.rules.station_cost;
    if state.player.score < cost {
        return None;
    }
    let at = state.maze.convert_random(&mut state.rng, Cell::Path, Cell::FuelStation)?;
    state.player.spend(cost);
    state.counters.stations_built += 1;
    state.effects.notify(format!("Station built at ({}, {})!", at.0, at.1), state.rules.notice_frames);

    debug!(row = at.0, col = at.1, score = state.player.score, "station built");
    state.push_event(GameEvent::StationBuilt { at, score: state.player.score });
    Some(at)
}
