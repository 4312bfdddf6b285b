//! # Pentago Game Implementation
//!
//! A 6x6 board built from four 3x3 quadrants. A move places a marble on
//! an empty cell and then twists one quadrant a quarter turn. Five in a
//! row (in any direction, across quadrant seams) wins.
//!
//! ## Rules
//! - Place first, then rotate; the rotation is part of the same move
//! - If the placement alone makes five in a row, the win stands and the
//!   rotation is not performed
//! - If a rotation gives both players five in a row, the game is a draw
//! - A full board with no five in a row is a draw

use crate::games::grid::check_line_win;
use crate::GameState;
use std::fmt;
use std::str::FromStr;

const SIZE: usize = 6;
const LINE: usize = 5;

/// One of the four 3x3 quadrants of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants, in reading order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Top-left corner (row, col) of this quadrant on the 6x6 board.
    fn origin(self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, 3),
            Quadrant::BottomLeft => (3, 0),
            Quadrant::BottomRight => (3, 3),
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "tl",
            Quadrant::TopRight => "tr",
            Quadrant::BottomLeft => "bl",
            Quadrant::BottomRight => "br",
        }
    }
}

/// A Pentago move: marble placement plus a quadrant twist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PentagoMove {
    /// Placement row, 0-5
    pub row: usize,
    /// Placement column, 0-5
    pub col: usize,
    /// Which quadrant to rotate after placing
    pub quadrant: Quadrant,
    /// Rotation direction: true for clockwise
    pub clockwise: bool,
}

/// Complete state of a Pentago game.
///
/// The board is a flat 36-cell vector: 0 empty, 1 and 2 for the seats.
#[derive(Debug, Clone)]
pub struct PentagoState {
    board: Vec<i32>,
    current_player: i32,
    /// Some(result) once the game has been decided; the inner Option is
    /// the winning seat, None for a draw.
    outcome: Option<Option<i32>>,
}

impl GameState for PentagoState {
    type Move = PentagoMove;

    fn get_num_players(&self) -> i32 {
        2
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.board[row * SIZE + col] != 0 {
                    continue;
                }
                for quadrant in Quadrant::ALL {
                    for clockwise in [true, false] {
                        moves.push(PentagoMove {
                            row,
                            col,
                            quadrant,
                            clockwise,
                        });
                    }
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let me = self.current_player;
        self.board[mv.row * SIZE + mv.col] = me;

        // A win made by the placement alone stands; the twist is skipped.
        if check_line_win(&self.board, SIZE, SIZE, me, LINE) {
            self.outcome = Some(Some(me));
            return;
        }

        self.rotate(mv.quadrant, mv.clockwise);

        let mine = check_line_win(&self.board, SIZE, SIZE, me, LINE);
        let theirs = check_line_win(&self.board, SIZE, SIZE, 3 - me, LINE);
        self.outcome = match (mine, theirs) {
            (true, true) => Some(None), // simultaneous fives: draw
            (true, false) => Some(Some(me)),
            (false, true) => Some(Some(3 - me)),
            (false, false) if self.board.iter().all(|&c| c != 0) => Some(None),
            _ => None,
        };

        if self.outcome.is_none() {
            self.current_player = 3 - me;
        }
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    fn get_winner(&self) -> Option<i32> {
        self.outcome.flatten()
    }

    fn get_current_player(&self) -> i32 {
        self.current_player
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.outcome.is_none()
            && mv.row < SIZE
            && mv.col < SIZE
            && self.board[mv.row * SIZE + mv.col] == 0
    }
}

impl PentagoState {
    /// Creates a new empty game. Seat 1 starts.
    pub fn new() -> Self {
        PentagoState {
            board: vec![0; SIZE * SIZE],
            current_player: 1,
            outcome: None,
        }
    }

    /// Picks a move for the bot: an immediate win if one exists, else a
    /// placement denying the opponent their own immediate winning cell,
    /// else whatever maximizes the bot's longest line.
    pub fn suggest_move(&self) -> Option<PentagoMove> {
        let moves = self.get_possible_moves();
        if moves.is_empty() {
            return None;
        }
        let me = self.current_player;

        for mv in &moves {
            let mut probe = self.clone();
            probe.make_move(mv);
            if probe.get_winner() == Some(me) {
                return Some(*mv);
            }
        }

        // Cells where the opponent, moving now, would win outright.
        // Occupying one takes away the placement half of that move.
        let mut threat = self.clone();
        threat.current_player = 3 - me;
        let mut threat_cells: Vec<(usize, usize)> = Vec::new();
        for mv in threat.get_possible_moves() {
            let mut probe = threat.clone();
            probe.make_move(&mv);
            if probe.get_winner() == Some(3 - me) && !threat_cells.contains(&(mv.row, mv.col)) {
                threat_cells.push((mv.row, mv.col));
            }
        }

        moves.into_iter().max_by_key(|m| {
            let mut probe = self.clone();
            probe.make_move(m);
            let survives = probe.get_winner() != Some(3 - me);
            let blocks = threat_cells.contains(&(m.row, m.col));
            let line = crate::games::grid::longest_line(&probe.board, SIZE, SIZE, me);
            (survives, blocks, line)
        })
    }

    fn rotate(&mut self, quadrant: Quadrant, clockwise: bool) {
        let (r0, c0) = quadrant.origin();
        let mut cells = [[0i32; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                cells[r][c] = self.board[(r0 + r) * SIZE + (c0 + c)];
            }
        }
        for r in 0..3 {
            for c in 0..3 {
                let v = if clockwise {
                    cells[2 - c][r]
                } else {
                    cells[c][2 - r]
                };
                self.board[(r0 + r) * SIZE + (c0 + c)] = v;
            }
        }
    }

    #[cfg(test)]
    fn set(&mut self, row: usize, col: usize, seat: i32) {
        self.board[row * SIZE + col] = seat;
    }
}

impl Default for PentagoState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PentagoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..SIZE {
            write!(f, "{} ", c)?;
            if c == 2 {
                write!(f, "  ")?;
            }
        }
        writeln!(f)?;
        for r in 0..SIZE {
            write!(f, "{}  ", r)?;
            for c in 0..SIZE {
                let symbol = match self.board[r * SIZE + c] {
                    1 => "X",
                    2 => "O",
                    _ => ".",
                };
                write!(f, "{} ", symbol)?;
                if c == 2 {
                    write!(f, "| ")?;
                }
            }
            writeln!(f)?;
            if r == 2 {
                writeln!(f, "   ------+------")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PentagoMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {} {}",
            self.row,
            self.col,
            self.quadrant.tag(),
            if self.clockwise { "cw" } else { "ccw" }
        )
    }
}

impl FromStr for PentagoMove {
    type Err = String;

    /// Parses "row,col quadrant direction", e.g. "2,3 tl cw".
    /// Quadrants are tl/tr/bl/br; direction is cw or ccw.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err("Expected format: row,col quadrant cw|ccw (e.g. 2,3 tl cw)".to_string());
        }
        let coords: Vec<&str> = parts[0].split(',').collect();
        if coords.len() != 2 {
            return Err("Placement must be row,col".to_string());
        }
        let row = coords[0].trim().parse::<usize>().map_err(|e| e.to_string())?;
        let col = coords[1].trim().parse::<usize>().map_err(|e| e.to_string())?;
        if row >= SIZE || col >= SIZE {
            return Err(format!("Placement must be on the {}x{} board", SIZE, SIZE));
        }
        let quadrant = match parts[1].to_lowercase().as_str() {
            "tl" => Quadrant::TopLeft,
            "tr" => Quadrant::TopRight,
            "bl" => Quadrant::BottomLeft,
            "br" => Quadrant::BottomRight,
            other => return Err(format!("Unknown quadrant '{}', use tl/tr/bl/br", other)),
        };
        let clockwise = match parts[2].to_lowercase().as_str() {
            "cw" => true,
            "ccw" => false,
            other => return Err(format!("Unknown direction '{}', use cw or ccw", other)),
        };
        Ok(PentagoMove {
            row,
            col,
            quadrant,
            clockwise,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize, quadrant: Quadrant, clockwise: bool) -> PentagoMove {
        PentagoMove {
            row,
            col,
            quadrant,
            clockwise,
        }
    }

    #[test]
    fn test_opening_move_count() {
        let game = PentagoState::new();
        // 36 cells x 4 quadrants x 2 directions
        assert_eq!(game.get_possible_moves().len(), 36 * 4 * 2);
    }

    #[test]
    fn test_rotation_clockwise() {
        let mut game = PentagoState::new();
        game.set(0, 0, 1);
        game.rotate(Quadrant::TopLeft, true);
        // Top-left corner of the quadrant moves to the top-right corner
        assert_eq!(game.board[0 * SIZE + 2], 1);
        assert_eq!(game.board[0], 0);
    }

    #[test]
    fn test_rotation_counterclockwise_inverts() {
        let mut game = PentagoState::new();
        game.set(3, 5, 2);
        game.set(4, 4, 1);
        let before = game.board.clone();
        game.rotate(Quadrant::BottomRight, true);
        game.rotate(Quadrant::BottomRight, false);
        assert_eq!(game.board, before);
    }

    #[test]
    fn test_win_by_placement_skips_rotation() {
        let mut game = PentagoState::new();
        for c in 0..4 {
            game.set(0, c, 1);
        }
        game.set(5, 5, 2); // marker to detect an unwanted rotation
        game.set(5, 3, 2);
        // Completing the row of five; the twist names the bottom-right
        // quadrant, which must stay untouched because the win stands.
        game.make_move(&mv(0, 4, Quadrant::BottomRight, true));
        assert_eq!(game.get_winner(), Some(1));
        assert_eq!(game.board[5 * SIZE + 5], 2);
        assert_eq!(game.board[5 * SIZE + 3], 2);
    }

    #[test]
    fn test_win_after_rotation() {
        let mut game = PentagoState::new();
        // Clockwise, column 0 of the top-left quadrant becomes row 0:
        // dest(r,c) <- src(2-c, r), so (0,0),(1,0),(2,0) land on
        // (0,2),(0,1),(0,0). With (0,3) and (0,4) already placed the
        // twist completes five across the top row.
        game.set(0, 0, 1);
        game.set(1, 0, 1);
        game.set(2, 0, 1);
        game.set(0, 3, 1);
        game.set(0, 4, 1);
        game.make_move(&mv(5, 5, Quadrant::TopLeft, true));
        // The placement at (5,5) does not win; the twist makes the five.
        assert_eq!(game.get_winner(), Some(1));
        assert!(game.is_terminal());
    }

    #[test]
    fn test_simultaneous_five_is_draw() {
        let mut game = PentagoState::new();
        // Seat 1's twist will complete a five across row 0 (same shape
        // as test_win_after_rotation).
        game.set(0, 0, 1);
        game.set(1, 0, 1);
        game.set(2, 0, 1);
        game.set(0, 3, 1);
        game.set(0, 4, 1);
        // Seat 2 holds five in column 5, untouched by a top-left twist.
        // The outcome is only evaluated inside make_move, so both fives
        // surface together after the rotation.
        for r in 0..5 {
            game.set(r, 5, 2);
        }
        game.make_move(&mv(5, 0, Quadrant::TopLeft, true));
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), None);
    }

    #[test]
    fn test_bot_takes_immediate_win() {
        let mut game = PentagoState::new();
        for c in 0..4 {
            game.set(0, c, 1);
        }
        let chosen = game.suggest_move().expect("moves available");
        let mut probe = game.clone();
        probe.make_move(&chosen);
        assert_eq!(probe.get_winner(), Some(1));
    }

    #[test]
    fn test_move_parsing() {
        let parsed = PentagoMove::from_str("2,3 tl cw").unwrap();
        assert_eq!(parsed, mv(2, 3, Quadrant::TopLeft, true));
        let parsed = PentagoMove::from_str("0,5 BR ccw").unwrap();
        assert_eq!(parsed, mv(0, 5, Quadrant::BottomRight, false));
        assert!(PentagoMove::from_str("9,0 tl cw").is_err());
        assert!(PentagoMove::from_str("1,1 xx cw").is_err());
        assert!(PentagoMove::from_str("1,1 tl sideways").is_err());
    }
}
