//! # Picross (Nonogram) Game Implementation
//!
//! A grid-deduction puzzle: run-length clues describe every row and
//! column; fill cells until the picture satisfies all of them. Any grid
//! matching the clues wins, not just the one the clues were derived
//! from. Crossing a cell is bookkeeping for the player and never affects
//! the win check.

use crate::GameState;
use std::fmt;
use std::str::FromStr;

/// Built-in puzzles as (name, rows); `#` is filled, `.` is blank.
pub const PUZZLES: &[(&str, &[&str])] = &[
    ("heart", &[".#.#.", "#####", "#####", ".###.", "..#.."]),
    ("spiral", &["#####", "....#", "###.#", "#...#", "#####"]),
    ("checker", &["#.#.#", ".#.#.", "#.#.#", ".#.#.", "#.#.#"]),
];

/// Player marking of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Filled,
    Crossed,
}

/// A Picross action on one cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PicrossMove {
    Fill(usize, usize),
    Cross(usize, usize),
    Clear(usize, usize),
}

/// Complete state of a Picross puzzle.
#[derive(Debug, Clone)]
pub struct PicrossState {
    width: usize,
    height: usize,
    row_clues: Vec<Vec<usize>>,
    col_clues: Vec<Vec<usize>>,
    marks: Vec<Cell>,
}

impl GameState for PicrossState {
    type Move = PicrossMove;

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
                match self.marks[r * self.width + c] {
                    Cell::Empty => {
                        moves.push(PicrossMove::Fill(r, c));
                        moves.push(PicrossMove::Cross(r, c));
                    }
                    Cell::Filled => {
                        moves.push(PicrossMove::Cross(r, c));
                        moves.push(PicrossMove::Clear(r, c));
                    }
                    Cell::Crossed => {
                        moves.push(PicrossMove::Fill(r, c));
                        moves.push(PicrossMove::Clear(r, c));
                    }
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let (cell, r, c) = match *mv {
            PicrossMove::Fill(r, c) => (Cell::Filled, r, c),
            PicrossMove::Cross(r, c) => (Cell::Crossed, r, c),
            PicrossMove::Clear(r, c) => (Cell::Empty, r, c),
        };
        if r < self.height && c < self.width {
            self.marks[r * self.width + c] = cell;
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
        if self.is_solved() {
            return false;
        }
        let (r, c) = match *mv {
            PicrossMove::Fill(r, c) | PicrossMove::Cross(r, c) | PicrossMove::Clear(r, c) => (r, c),
        };
        let in_bounds = r < self.height && c < self.width;
        if !in_bounds {
            return false;
        }
        // Changing a cell to what it already is would be a wasted move.
        let current = self.marks[r * self.width + c];
        match *mv {
            PicrossMove::Fill(..) => current != Cell::Filled,
            PicrossMove::Cross(..) => current != Cell::Crossed,
            PicrossMove::Clear(..) => current != Cell::Empty,
        }
    }
}

impl PicrossState {
    /// Loads a built-in puzzle by index.
    pub fn builtin(index: usize) -> Result<Self, String> {
        let (_, rows) = PUZZLES
            .get(index)
            .ok_or_else(|| format!("No such puzzle {}; puzzles are 0-{}", index, PUZZLES.len() - 1))?;
        Self::from_picture(rows)
    }

    /// Number of built-in puzzles.
    pub fn puzzle_count() -> usize {
        PUZZLES.len()
    }

    /// Derives clues from a picture of `#` and `.` rows.
    pub fn from_picture(rows: &[&str]) -> Result<Self, String> {
        let height = rows.len();
        if height == 0 {
            return Err("Picture has no rows".to_string());
        }
        let width = rows[0].len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err("Picture rows must be equal non-empty lengths".to_string());
        }
        let mut target = vec![false; width * height];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    '#' => target[r * width + c] = true,
                    '.' | ' ' => {}
                    other => return Err(format!("Unknown picture character '{}'", other)),
                }
            }
        }

        let row_clues = (0..height)
            .map(|r| runs((0..width).map(|c| target[r * width + c])))
            .collect();
        let col_clues = (0..width)
            .map(|c| runs((0..height).map(|r| target[r * width + c])))
            .collect();

        Ok(PicrossState {
            width,
            height,
            row_clues,
            col_clues,
            marks: vec![Cell::Empty; width * height],
        })
    }

    /// Grid dimensions as (width, height).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Solitaire puzzle, no bot.
    pub fn suggest_move(&self) -> Option<PicrossMove> {
        None
    }

    fn is_solved(&self) -> bool {
        (0..self.height).all(|r| {
            runs((0..self.width).map(|c| self.marks[r * self.width + c] == Cell::Filled))
                == self.row_clues[r]
        }) && (0..self.width).all(|c| {
            runs((0..self.height).map(|r| self.marks[r * self.width + c] == Cell::Filled))
                == self.col_clues[c]
        })
    }
}

/// Run lengths of consecutive `true`s, the nonogram clue form.
fn runs(cells: impl Iterator<Item = bool>) -> Vec<usize> {
    let mut out = Vec::new();
    let mut current = 0usize;
    for filled in cells {
        if filled {
            current += 1;
        } else if current > 0 {
            out.push(current);
            current = 0;
        }
    }
    if current > 0 {
        out.push(current);
    }
    out
}

impl fmt::Display for PicrossState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column clues across the top, one line per clue depth.
        let col_depth = self.col_clues.iter().map(|c| c.len()).max().unwrap_or(0);
        let row_gutter = self
            .row_clues
            .iter()
            .map(|r| r.iter().map(|n| n.to_string().len() + 1).sum::<usize>())
            .max()
            .unwrap_or(0);
        for d in 0..col_depth {
            write!(f, "{:width$}", "", width = row_gutter)?;
            for clue in &self.col_clues {
                let pos = d as i32 - (col_depth as i32 - clue.len() as i32);
                if pos >= 0 {
                    write!(f, "{:2}", clue[pos as usize])?;
                } else {
                    write!(f, "  ")?;
                }
            }
            writeln!(f)?;
        }
        for r in 0..self.height {
            let gutter = self.row_clues[r]
                .iter()
                .map(|n| format!("{} ", n))
                .collect::<String>();
            write!(f, "{:>width$}", gutter, width = row_gutter)?;
            for c in 0..self.width {
                let ch = match self.marks[r * self.width + c] {
                    Cell::Empty => " .",
                    Cell::Filled => " #",
                    Cell::Crossed => " x",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for PicrossMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PicrossMove::Fill(r, c) => write!(f, "f {},{}", r, c),
            PicrossMove::Cross(r, c) => write!(f, "x {},{}", r, c),
            PicrossMove::Clear(r, c) => write!(f, "c {},{}", r, c),
        }
    }
}

impl FromStr for PicrossMove {
    type Err = String;

    /// Parses "f row,col" (fill), "x row,col" (cross), "c row,col" (clear).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 2 {
            return Err("Expected: f|x|c row,col".to_string());
        }
        let coords: Vec<&str> = parts[1].split(',').collect();
        if coords.len() != 2 {
            return Err("Cell must be row,col".to_string());
        }
        let r = coords[0].trim().parse::<usize>().map_err(|e| e.to_string())?;
        let c = coords[1].trim().parse::<usize>().map_err(|e| e.to_string())?;
        match parts[0] {
            "f" | "fill" => Ok(PicrossMove::Fill(r, c)),
            "x" | "cross" => Ok(PicrossMove::Cross(r, c)),
            "c" | "clear" => Ok(PicrossMove::Clear(r, c)),
            other => Err(format!("Unknown action '{}', use f, x or c", other)),
        }
    }
}
