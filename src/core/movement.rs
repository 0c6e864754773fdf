//! Grid movement and fuel pickups.
use tracing::debug;

use crate::core::events::GameEvent;
use crate::core::maze::Cell;
use crate::core::player::Direction;
use crate::core::state::GameState;

/// Resolves one move request.
///
/// An empty tank ignores the request outright. Otherwise the truck steps into
/// the neighbouring cell unless it is a wall or off the grid, consuming a
/// station if it lands on one. Fuel is burned after the attempt; whether a
/// blocked attempt also burns is governed by `Rules::charge_blocked_moves`.
pub fn move_player(state: &mut GameState, dir: Direction) -> bool {
    if state.player.is_empty() {
        return false;
    }

    let (dr, dc) = dir.delta();
    let row = state.player.row as isize + dr;
    let col = state.player.col as isize + dc;

    let moved = match state.maze.get_signed(row, col) {
        Some(cell) if !cell.is_wall() => {
            let to = (row as usize, col as usize);
            state.player.row = to.0;
            state.player.col = to.1;
            state.player.facing = dir;
            state.push_event(GameEvent::Moved { to, facing: dir });
            if cell == Cell::FuelStation {
                collect_fuel(state);
            }
            true
        }
        _ => false,
    };

    if moved || state.rules.charge_blocked_moves {
        let cost = state.move_cost();
        state.player.burn(cost);
    }
    if state.player.fuel() <= state.rules.low_fuel {
        state.push_event(GameEvent::LowFuel { fuel: state.player.fuel() });
    }
    moved
}

fn collect_fuel(state: &mut GameState) {
    let at = state.player.pos();
    state.maze.set(at, Cell::Path);
    state.player.refuel(state.rules.fuel_bonus);
    state.player.score = state.player.score.saturating_add(state.rules.pickup_reward);
    state.counters.fuel_collected += 1;

    let (x, y) = state.pixel_center(at);
    let shape = state.rules.burst();
    state.effects.burst(&mut state.rng, x, y, shape);
    state.effects.notify("Fuel cell collected!", state.rules.notice_frames);

    debug!(row = at.0, col = at.1, fuel = state.player.fuel(), score = state.player.score, "fuel collected");
    state.push_event(GameEvent::FuelCollected { at, fuel: state.player.fuel(), score: state.player.score });
}
