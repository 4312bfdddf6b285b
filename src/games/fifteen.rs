//! # Fifteen Puzzle Implementation
//!
//! The classic sliding puzzle: a 4x4 frame of numbered tiles with one
//! gap. Slide tiles into the gap until they read 1..15 in order.
//!
//! Moves are tile-centric: `Up` slides the tile *below* the gap upward,
//! `Left` slides the tile right of the gap to the left, and so on.
//! The shuffle random-walks the gap away from the solved position, so
//! every generated puzzle is solvable by construction.

use crate::GameState;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::fmt;
use std::str::FromStr;

/// A slide direction (the direction the tile moves, not the gap).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FifteenMove {
    Up,
    Down,
    Left,
    Right,
}

impl FifteenMove {
    const ALL: [FifteenMove; 4] = [
        FifteenMove::Up,
        FifteenMove::Down,
        FifteenMove::Left,
        FifteenMove::Right,
    ];

    /// Offset of the tile that slides, relative to the gap.
    fn tile_offset(self) -> (i32, i32) {
        match self {
            FifteenMove::Up => (1, 0),    // tile below the gap moves up
            FifteenMove::Down => (-1, 0), // tile above the gap moves down
            FifteenMove::Left => (0, 1),  // tile right of the gap moves left
            FifteenMove::Right => (0, -1),
        }
    }
}

/// Complete state of a sliding puzzle. Tile 0 is the gap.
#[derive(Debug, Clone)]
pub struct FifteenState {
    tiles: Vec<u8>,
    size: usize,
    moves_taken: u32,
}

impl GameState for FifteenState {
    type Move = FifteenMove;

    fn get_num_players(&self) -> i32 {
        1
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        FifteenMove::ALL
            .iter()
            .copied()
            .filter(|m| self.tile_for(*m).is_some())
            .collect()
    }

    fn make_move(&mut self, mv: &Self::Move) {
        if let Some(tile_idx) = self.tile_for(*mv) {
            let gap_idx = self.gap_index();
            self.tiles.swap(gap_idx, tile_idx);
            self.moves_taken += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.is_solved()
    }

    fn get_winner(&self) -> Option<i32> {
        if self.is_solved() {
            Some(1)
        } else {
            None
        }
    }

    fn get_current_player(&self) -> i32 {
        1
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        !self.is_solved() && self.tile_for(*mv).is_some()
    }
}

impl FifteenState {
    /// Creates a shuffled puzzle.
    ///
    /// # Arguments
    /// * `size` - Side length (4 for the classic fifteen puzzle), min 2
    /// * `seed` - Shuffle seed; the same seed gives the same layout
    pub fn new(size: usize, seed: u64) -> Self {
        let size = size.max(2);
        let mut state = Self::solved(size);
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

        // Walk the gap around; re-walk if we happen to land back on the
        // solved arrangement.
        while state.is_solved() {
            for _ in 0..size * size * 25 {
                let legal: Vec<FifteenMove> = FifteenMove::ALL
                    .iter()
                    .copied()
                    .filter(|m| state.tile_for(*m).is_some())
                    .collect();
                let mv = legal[rng.gen_range(0..legal.len())];
                if let Some(tile_idx) = state.tile_for(mv) {
                    let gap_idx = state.gap_index();
                    state.tiles.swap(gap_idx, tile_idx);
                }
            }
        }
        state.moves_taken = 0;
        state
    }

    /// The solved arrangement: 1..n*n-1 row-major, gap last.
    pub fn solved(size: usize) -> Self {
        let size = size.max(2);
        let count = size * size;
        let mut tiles: Vec<u8> = (1..count as u8).collect();
        tiles.push(0);
        FifteenState {
            tiles,
            size,
            moves_taken: 0,
        }
    }

    /// Number of slides made since the shuffle.
    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }

    /// Solitaire puzzle, no bot.
    pub fn suggest_move(&self) -> Option<FifteenMove> {
        None
    }

    fn is_solved(&self) -> bool {
        let count = self.size * self.size;
        self.tiles[count - 1] == 0
            && self.tiles[..count - 1]
                .iter()
                .enumerate()
                .all(|(i, &t)| t == i as u8 + 1)
    }

    fn gap_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == 0)
            .expect("puzzle always has a gap")
    }

    /// Index of the tile that would slide for this move, if in bounds.
    fn tile_for(&self, mv: FifteenMove) -> Option<usize> {
        let gap = self.gap_index();
        let (gr, gc) = (gap / self.size, gap % self.size);
        let (dr, dc) = mv.tile_offset();
        let tr = gr as i32 + dr;
        let tc = gc as i32 + dc;
        if tr < 0 || tc < 0 || tr as usize >= self.size || tc as usize >= self.size {
            return None;
        }
        Some(tr as usize * self.size + tc as usize)
    }
}

impl fmt::Display for FifteenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                match self.tiles[r * self.size + c] {
                    0 => write!(f, "  . ")?,
                    t => write!(f, "{:3} ", t)?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "moves: {}", self.moves_taken)
    }
}

impl fmt::Display for FifteenMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FifteenMove::Up => "up",
            FifteenMove::Down => "down",
            FifteenMove::Left => "left",
            FifteenMove::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FifteenMove {
    type Err = String;

    /// Parses "u"/"up", "d"/"down", "l"/"left", "r"/"right".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "up" => Ok(FifteenMove::Up),
            "d" | "down" => Ok(FifteenMove::Down),
            "l" | "left" => Ok(FifteenMove::Left),
            "r" | "right" => Ok(FifteenMove::Right),
            other => Err(format!("Unknown direction '{}', use u/d/l/r", other)),
        }
    }
}
