//! # Othello (Reversi) Game Implementation
//!
//! Players take turns placing discs on an 8x8 board, with the goal of
//! having the most discs of their color when neither side can move.
//!
//! ## Rules
//! - A move must "sandwich" opponent discs between the new disc and an
//!   existing disc of the mover's color
//! - All sandwiched discs are flipped to the mover's color
//! - A player with no legal moves is skipped
//! - Game ends when neither player can move; most discs wins

use crate::GameState;
use std::fmt;
use std::str::FromStr;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A disc placement at (row, col), both 0-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OthelloMove(pub usize, pub usize);

/// Complete state of an Othello game.
///
/// The board uses 1 for Black discs, 2 for White discs, 0 for empty.
/// Black (seat 1) moves first.
#[derive(Debug, Clone)]
pub struct OthelloState {
    board: Vec<Vec<i32>>,
    current_player: i32,
    board_size: usize,
    last_move: Option<(usize, usize)>,
}

fn opponent(seat: i32) -> i32 {
    3 - seat
}

impl GameState for OthelloState {
    type Move = OthelloMove;

    fn get_num_players(&self) -> i32 {
        2
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::new();
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                if self.is_valid_move((r, c)) {
                    moves.push(OthelloMove(r, c));
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let (r, c) = (mv.0, mv.1);
        self.board[r][c] = self.current_player;
        self.last_move = Some((r, c));
        self.flip_pieces(r, c);
        self.current_player = opponent(self.current_player);

        // If the new player has no moves, skip their turn
        if self.get_possible_moves().is_empty() {
            self.current_player = opponent(self.current_player);
        }
    }

    fn is_terminal(&self) -> bool {
        // Terminal when neither seat has a move
        let mut probe = self.clone();
        if probe.get_possible_moves().is_empty() {
            probe.current_player = opponent(probe.current_player);
            if probe.get_possible_moves().is_empty() {
                return true;
            }
        }
        false
    }

    fn get_winner(&self) -> Option<i32> {
        if !self.is_terminal() {
            return None;
        }
        let (black, white) = self.disc_counts();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Less => Some(2),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn get_current_player(&self) -> i32 {
        self.current_player
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        mv.0 < self.board_size && mv.1 < self.board_size && self.is_valid_move((mv.0, mv.1))
    }
}

impl OthelloState {
    /// Creates a new game with the standard central setup.
    ///
    /// # Arguments
    /// * `board_size` - Side length, must be even and at least 4
    pub fn new(board_size: usize) -> Self {
        let size = board_size.max(4) & !1;
        let mut board = vec![vec![0; size]; size];
        let center = size / 2;
        board[center - 1][center - 1] = 2; // White
        board[center - 1][center] = 1; // Black
        board[center][center - 1] = 1; // Black
        board[center][center] = 2; // White
        OthelloState {
            board,
            current_player: 1, // Black starts
            board_size: size,
            last_move: None,
        }
    }

    /// Counts of (black, white) discs currently on the board.
    pub fn disc_counts(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for row in &self.board {
            for &cell in row {
                match cell {
                    1 => black += 1,
                    2 => white += 1,
                    _ => {}
                }
            }
        }
        (black, white)
    }

    /// Picks a move for the bot: a corner if one is available, otherwise
    /// the placement flipping the most discs (ties break toward the
    /// upper-left, so the choice is deterministic).
    pub fn suggest_move(&self) -> Option<OthelloMove> {
        let moves = self.get_possible_moves();
        let last = self.board_size - 1;
        let corners = [(0, 0), (0, last), (last, 0), (last, last)];
        if let Some(mv) = moves
            .iter()
            .find(|m| corners.contains(&(m.0, m.1)))
        {
            return Some(*mv);
        }
        moves
            .into_iter()
            .max_by_key(|m| {
                let flips = self.count_flips(m.0, m.1);
                // Row-major reverse ordering makes max_by_key prefer
                // earlier cells on ties.
                (flips, std::cmp::Reverse(m.0 * self.board_size + m.1))
            })
    }

    fn count_flips(&self, r: usize, c: usize) -> usize {
        let mut total = 0;
        let opp = opponent(self.current_player);
        for (dr, dc) in DIRECTIONS.iter() {
            let mut run = 0;
            let mut nr = r as i32 + dr;
            let mut nc = c as i32 + dc;
            while self.in_bounds(nr, nc) {
                let cell = self.board[nr as usize][nc as usize];
                if cell == opp {
                    run += 1;
                } else if cell == self.current_player {
                    total += run;
                    break;
                } else {
                    break;
                }
                nr += dr;
                nc += dc;
            }
        }
        total
    }

    fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.board_size && (c as usize) < self.board_size
    }

    fn is_valid_move(&self, mv: (usize, usize)) -> bool {
        let (r, c) = mv;
        if self.board[r][c] != 0 {
            return false;
        }

        let opp = opponent(self.current_player);
        for (dr, dc) in DIRECTIONS.iter() {
            let mut seen_opp = false;
            let mut nr = r as i32 + dr;
            let mut nc = c as i32 + dc;
            while self.in_bounds(nr, nc) {
                let cell = self.board[nr as usize][nc as usize];
                if cell == opp {
                    seen_opp = true;
                } else if cell == self.current_player {
                    if seen_opp {
                        return true;
                    }
                    break;
                } else {
                    break;
                }
                nr += dr;
                nc += dc;
            }
        }
        false
    }

    /// Flips every opponent disc captured by a placement at (r, c).
    fn flip_pieces(&mut self, r: usize, c: usize) {
        let opp = opponent(self.current_player);
        for (dr, dc) in DIRECTIONS.iter() {
            let mut line = Vec::new();
            let mut nr = r as i32 + dr;
            let mut nc = c as i32 + dc;
            while self.in_bounds(nr, nc) {
                let cell = self.board[nr as usize][nc as usize];
                if cell == opp {
                    line.push((nr as usize, nc as usize));
                } else if cell == self.current_player {
                    for (fr, fc) in line {
                        self.board[fr][fc] = self.current_player;
                    }
                    break;
                } else {
                    break;
                }
                nr += dr;
                nc += dc;
            }
        }
    }
}

impl fmt::Display for OthelloState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.board_size {
            write!(f, "{} ", c)?;
        }
        writeln!(f)?;
        for r in 0..self.board_size {
            write!(f, "{} ", r)?;
            for c in 0..self.board_size {
                let symbol = match self.board[r][c] {
                    1 => "X",
                    2 => "O",
                    _ => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        let (black, white) = self.disc_counts();
        writeln!(f, "X (Black): {}  O (White): {}", black, white)
    }
}

impl fmt::Display for OthelloMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl FromStr for OthelloMove {
    type Err = String;

    /// Parses a move in "row,col" form, e.g. "3,4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: row,col".to_string());
        }
        let r = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let c = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(OthelloMove(r, c))
    }
}
