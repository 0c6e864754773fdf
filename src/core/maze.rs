//! Maze grid: authored template, text loading and cell queries.
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Error, MazeError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Path,
    FuelStation,
}

impl Cell {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Wall),
            '.' | ' ' | '\t' => Some(Cell::Path),
            'H' => Some(Cell::FuelStation),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }
}

/// Grid coordinate, row first.
pub type Coord = (usize, usize);

/// The built-in 21x9 course. One station is authored in; the rest are scattered at start.
pub const AUTHORED: [&str; 9] = [
    "#####################",
    "#....#...#...#...#.H#",
    "####.###.###.###.##.#",
    "#...................#",
    "#.###################",
    "#...................#",
    "###################.#",
    "#...................#",
    "#####################",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
}

impl Maze {
    /// Builds a maze from rectangular rows.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let width = cells.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MazeError::Ragged { row, expected: width, found: r.len() });
        }
        Ok(Self { cells })
    }

    pub fn authored() -> Self {
        let cells = AUTHORED
            .iter()
            .map(|line| line.chars().map(|ch| Cell::from_char(ch).unwrap_or(Cell::Wall)).collect())
            .collect();
        Self { cells }
    }

    /// Parses an authored text grid. Blank lines are skipped and short rows are padded with walls.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut grid: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let row_idx = grid.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| Cell::from_char(ch).ok_or(MazeError::UnknownCell { row: row_idx, col, ch }))
                .collect::<Result<Vec<_>, _>>()?;
            grid.push(row);
        }

        let maxw = grid.iter().map(Vec::len).max().unwrap_or(0);
        for r in &mut grid {
            r.resize(maxw, Cell::Wall);
        }
        Self::from_rows(grid)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        Self::parse(&text).map_err(|source| Error::Maze { path: path.to_path_buf(), source })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Looks up a signed coordinate; anything off the grid is `None`.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    pub fn set(&mut self, (row, col): Coord, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cell)| ((r, c), cell)))
    }

    pub fn cells_of(&self, kind: Cell) -> Vec<Coord> {
        self.iter().filter(|&(_, c)| c == kind).map(|(at, _)| at).collect()
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == kind).count()
    }

    /// Turns one uniformly chosen `from` cell into `to`. Returns where, if any existed.
    pub fn convert_random<R: Rng + ?Sized>(&mut self, rng: &mut R, from: Cell, to: Cell) -> Option<Coord> {
        let at = *self.cells_of(from).choose(rng)?;
        self.set(at, to);
        Some(at)
    }

    /// Places up to `n` stations on distinct path cells. Returns how many were placed.
    pub fn scatter_stations<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> usize {
        let mut empty = self.cells_of(Cell::Path);
        empty.shuffle(rng);
        let picked: Vec<Coord> = empty.into_iter().take(n).collect();
        for &at in &picked {
            self.set(at, Cell::FuelStation);
        }
        picked.len()
    }
}
