//! # Minesweeper Game Implementation
//!
//! A solitaire grid puzzle. Reveal every safe cell without stepping on a
//! mine; flags are bookkeeping for the player.
//!
//! ## Rules
//! - Mines are laid out on the first reveal, never under it or its eight
//!   neighbours, so the opening click always opens an area
//! - Revealing a zero-count cell flood-reveals its neighbourhood
//! - Revealing a mine loses; revealing every safe cell wins
//! - Flagged cells cannot be revealed until unflagged

use crate::games::grid::neighbors8;
use crate::GameState;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::fmt;
use std::str::FromStr;

/// A Minesweeper action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MinesweeperMove {
    /// Uncover a cell
    Reveal(usize, usize),
    /// Toggle a flag on a covered cell
    Flag(usize, usize),
}

/// Complete state of a Minesweeper game.
#[derive(Debug, Clone)]
pub struct MinesweeperState {
    width: usize,
    height: usize,
    mine_count: usize,
    mines: Vec<bool>,
    revealed: Vec<bool>,
    flagged: Vec<bool>,
    mines_placed: bool,
    exploded: bool,
    rng: Xoshiro256StarStar,
}

impl GameState for MinesweeperState {
    type Move = MinesweeperMove;

    fn get_num_players(&self) -> i32 {
        1
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for r in 0..self.height {
            for c in 0..self.width {
                let idx = r * self.width + c;
                if self.revealed[idx] {
                    continue;
                }
                if !self.flagged[idx] {
                    moves.push(MinesweeperMove::Reveal(r, c));
                }
                moves.push(MinesweeperMove::Flag(r, c));
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        match *mv {
            MinesweeperMove::Reveal(r, c) => self.reveal(r, c),
            MinesweeperMove::Flag(r, c) => {
                let idx = r * self.width + c;
                if !self.revealed[idx] {
                    self.flagged[idx] = !self.flagged[idx];
                }
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.exploded || self.all_safe_revealed()
    }

    fn get_winner(&self) -> Option<i32> {
        if !self.exploded && self.all_safe_revealed() {
            Some(1)
        } else {
            None
        }
    }

    fn get_current_player(&self) -> i32 {
        1
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        if self.is_terminal() {
            return false;
        }
        let (r, c) = match *mv {
            MinesweeperMove::Reveal(r, c) | MinesweeperMove::Flag(r, c) => (r, c),
        };
        if r >= self.height || c >= self.width {
            return false;
        }
        let idx = r * self.width + c;
        if self.revealed[idx] {
            return false;
        }
        match *mv {
            MinesweeperMove::Reveal(..) => !self.flagged[idx],
            MinesweeperMove::Flag(..) => true,
        }
    }
}

impl MinesweeperState {
    /// Creates a new game.
    ///
    /// # Arguments
    /// * `width` / `height` - Grid dimensions, min 2x2
    /// * `mine_count` - Number of mines; clamped so the first-click safe
    ///   zone (a cell plus its neighbours) always fits
    /// * `seed` - Layout seed
    pub fn new(width: usize, height: usize, mine_count: usize, seed: u64) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        let cells = width * height;
        let mine_count = mine_count.clamp(1, cells.saturating_sub(9).max(1));
        MinesweeperState {
            width,
            height,
            mine_count,
            mines: vec![false; cells],
            revealed: vec![false; cells],
            flagged: vec![false; cells],
            mines_placed: false,
            exploded: false,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Grid dimensions as (width, height).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of mines in the layout.
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Whether the game ended by stepping on a mine.
    pub fn exploded(&self) -> bool {
        self.exploded
    }

    /// Mined neighbours of a cell.
    pub fn adjacent_mines(&self, r: usize, c: usize) -> usize {
        neighbors8(r, c, self.height, self.width)
            .into_iter()
            .filter(|&(nr, nc)| self.mines[nr * self.width + nc])
            .count()
    }

    /// Solitaire puzzle, no bot.
    pub fn suggest_move(&self) -> Option<MinesweeperMove> {
        None
    }

    fn reveal(&mut self, r: usize, c: usize) {
        let idx = r * self.width + c;
        if self.revealed[idx] || self.flagged[idx] {
            return;
        }
        if !self.mines_placed {
            self.place_mines(r, c);
        }
        if self.mines[idx] {
            self.revealed[idx] = true;
            self.exploded = true;
            return;
        }
        // Flood-reveal zero regions with an explicit stack.
        let mut stack = vec![(r, c)];
        while let Some((cr, cc)) = stack.pop() {
            let ci = cr * self.width + cc;
            if self.revealed[ci] || self.flagged[ci] || self.mines[ci] {
                continue;
            }
            self.revealed[ci] = true;
            if self.adjacent_mines(cr, cc) == 0 {
                for (nr, nc) in neighbors8(cr, cc, self.height, self.width) {
                    if !self.revealed[nr * self.width + nc] {
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    /// Lays out mines, keeping the first-clicked cell and its neighbours clear.
    fn place_mines(&mut self, first_r: usize, first_c: usize) {
        let mut forbidden = vec![first_r * self.width + first_c];
        for (nr, nc) in neighbors8(first_r, first_c, self.height, self.width) {
            forbidden.push(nr * self.width + nc);
        }

        let mut open: Vec<usize> = (0..self.width * self.height)
            .filter(|i| !forbidden.contains(i))
            .collect();
        let count = self.mine_count.min(open.len());
        for _ in 0..count {
            let pick = self.rng.gen_range(0..open.len());
            let idx = open.swap_remove(pick);
            self.mines[idx] = true;
        }
        self.mine_count = count;
        self.mines_placed = true;
    }

    fn all_safe_revealed(&self) -> bool {
        self.mines_placed
            && self
                .mines
                .iter()
                .zip(self.revealed.iter())
                .all(|(&mine, &rev)| mine || rev)
    }

    #[cfg(test)]
    fn with_layout(width: usize, height: usize, mines: &[(usize, usize)]) -> Self {
        let mut state = Self::new(width, height, mines.len(), 0);
        for &(r, c) in mines {
            state.mines[r * width + c] = true;
        }
        state.mine_count = mines.len();
        state.mines_placed = true;
        state
    }
}

impl fmt::Display for MinesweeperState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.width {
            write!(f, "{:2} ", c)?;
        }
        writeln!(f)?;
        for r in 0..self.height {
            write!(f, "{:2} ", r)?;
            for c in 0..self.width {
                let idx = r * self.width + c;
                let cell = if self.revealed[idx] {
                    if self.mines[idx] {
                        "*".to_string()
                    } else {
                        match self.adjacent_mines(r, c) {
                            0 => ".".to_string(),
                            n => n.to_string(),
                        }
                    }
                } else if self.exploded && self.mines[idx] {
                    "*".to_string() // show the field on a loss
                } else if self.flagged[idx] {
                    "P".to_string()
                } else {
                    "#".to_string()
                };
                write!(f, "{:>2} ", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "mines: {}", self.mine_count)
    }
}

impl fmt::Display for MinesweeperMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinesweeperMove::Reveal(r, c) => write!(f, "r {},{}", r, c),
            MinesweeperMove::Flag(r, c) => write!(f, "f {},{}", r, c),
        }
    }
}

impl FromStr for MinesweeperMove {
    type Err = String;

    /// Parses "r row,col" to reveal or "f row,col" to toggle a flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 2 {
            return Err("Expected: r row,col (reveal) or f row,col (flag)".to_string());
        }
        let coords: Vec<&str> = parts[1].split(',').collect();
        if coords.len() != 2 {
            return Err("Cell must be row,col".to_string());
        }
        let r = coords[0].trim().parse::<usize>().map_err(|e| e.to_string())?;
        let c = coords[1].trim().parse::<usize>().map_err(|e| e.to_string())?;
        match parts[0] {
            "r" | "reveal" => Ok(MinesweeperMove::Reveal(r, c)),
            "f" | "flag" => Ok(MinesweeperMove::Flag(r, c)),
            other => Err(format!("Unknown action '{}', use r or f", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reveal_is_safe() {
        for seed in 0..5 {
            let mut game = MinesweeperState::new(9, 9, 10, seed);
            game.make_move(&MinesweeperMove::Reveal(4, 4));
            assert!(!game.exploded());
            // The opening cell and its whole neighbourhood are mine-free.
            for (nr, nc) in neighbors8(4, 4, 9, 9) {
                assert!(!game.mines[nr * 9 + nc]);
            }
        }
    }

    #[test]
    fn test_reveal_mine_loses() {
        let mut game = MinesweeperState::with_layout(4, 4, &[(0, 0)]);
        game.make_move(&MinesweeperMove::Reveal(0, 0));
        assert!(game.exploded());
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), None);
    }

    #[test]
    fn test_win_by_revealing_all_safe() {
        let mut game = MinesweeperState::with_layout(3, 3, &[(0, 0)]);
        for r in 0..3 {
            for c in 0..3 {
                if (r, c) != (0, 0) {
                    game.make_move(&MinesweeperMove::Reveal(r, c));
                }
            }
        }
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_flood_reveal_opens_region() {
        // Single mine in a corner of a 5x5 grid; revealing the far
        // corner floods everything whose counts chain through zeros.
        let mut game = MinesweeperState::with_layout(5, 5, &[(0, 0)]);
        game.make_move(&MinesweeperMove::Reveal(4, 4));
        // Everything except the mine is revealed: the whole zero region
        // plus its numbered border.
        let revealed = game.revealed.iter().filter(|&&r| r).count();
        assert_eq!(revealed, 24);
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_flag_blocks_reveal() {
        let mut game = MinesweeperState::with_layout(4, 4, &[(0, 0)]);
        game.make_move(&MinesweeperMove::Flag(1, 1));
        assert!(!game.is_legal(&MinesweeperMove::Reveal(1, 1)));
        game.make_move(&MinesweeperMove::Reveal(1, 1));
        assert!(!game.revealed[1 * 4 + 1], "flagged cell must stay covered");
        game.make_move(&MinesweeperMove::Flag(1, 1)); // unflag
        game.make_move(&MinesweeperMove::Reveal(1, 1));
        assert!(game.revealed[1 * 4 + 1]);
    }

    #[test]
    fn test_adjacent_counts() {
        let game = MinesweeperState::with_layout(3, 3, &[(0, 0), (2, 2)]);
        assert_eq!(game.adjacent_mines(1, 1), 2);
        assert_eq!(game.adjacent_mines(0, 2), 0);
        assert_eq!(game.adjacent_mines(0, 1), 1);
    }

    #[test]
    fn test_mine_count_clamped() {
        let game = MinesweeperState::new(4, 4, 100, 1);
        assert!(game.mine_count() <= 7); // 16 cells - 9 safe zone
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!(
            MinesweeperMove::from_str("r 2,3"),
            Ok(MinesweeperMove::Reveal(2, 3))
        );
        assert_eq!(
            MinesweeperMove::from_str("flag 0,0"),
            Ok(MinesweeperMove::Flag(0, 0))
        );
        assert!(MinesweeperMove::from_str("x 1,1").is_err());
        assert!(MinesweeperMove::from_str("r 11").is_err());
    }
}
