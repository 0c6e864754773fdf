//! Player data: grid position, facing, fuel gauge and score.
use serde::{Deserialize, Serialize};

use crate::core::maze::Coord;

pub const MAX_FUEL: f32 = 100.0;

/// Cardinal move request. The truck always faces the way it last moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, col) delta.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Clockwise sprite rotation; the truck art points up.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Direction::Up => 0.0,
            Direction::Right => 90.0,
            Direction::Down => 180.0,
            Direction::Left => 270.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub row: usize,
    pub col: usize,
    pub facing: Direction,
    fuel: f32,
    pub score: u32,
}

impl Player {
    pub fn new((row, col): Coord) -> Self {
        Self {
            row,
            col,
            facing: Direction::Up,
            fuel: MAX_FUEL,
            score: 0,
        }
    }

    pub fn pos(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    pub fn set_fuel(&mut self, fuel: f32) {
        self.fuel = fuel.clamp(0.0, MAX_FUEL);
    }

    pub fn refuel(&mut self, amount: f32) {
        self.set_fuel(self.fuel + amount);
    }

    pub fn burn(&mut self, amount: f32) {
        self.set_fuel(self.fuel - amount);
    }

    pub fn is_empty(&self) -> bool {
        self.fuel <= 0.0
    }

    /// Spends `cost` points if affordable.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.score.checked_sub(cost) {
            Some(left) => {
                self.score = left;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_is_clamped() {
        let mut p = Player::new((1, 1));
        p.refuel(50.0);
        assert_eq!(p.fuel(), MAX_FUEL);
        p.burn(150.0);
        assert_eq!(p.fuel(), 0.0);
        assert!(p.is_empty());
    }

    #[test]
    fn test_spend_requires_enough_score() {
        let mut p = Player::new((1, 1));
        p.score = 99;
        assert!(!p.spend(100));
        assert_eq!(p.score, 99);
        p.score = 250;
        assert!(p.spend(100));
        assert_eq!(p.score, 150);
    }

    #[test]
    fn test_directions_are_unit_steps() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }
}
