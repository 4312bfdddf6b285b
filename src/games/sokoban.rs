//! # Sokoban Game Implementation
//!
//! Push every box onto a goal square. Levels are parsed from the
//! standard XSB text format:
//!
//! ```text
//! #  wall      @  player     $  box
//! .  goal      +  player on goal
//! *  box on goal, space is floor
//! ```
//!
//! The player walks one cell at a time and can push a single box; a push
//! into a wall or a second box is illegal. There is no undo: restarting
//! means constructing the level again.

use crate::GameState;
use std::fmt;
use std::str::FromStr;

/// Built-in starter levels, smallest first.
pub const LEVELS: &[&str] = &[
    "#####\n\
     #@$.#\n\
     #####",
    "######\n\
     #    #\n\
     # $$ #\n\
     # .. #\n\
     #@   #\n\
     ######",
    "####\n\
     # .#\n\
     #  ###\n\
     #*@  #\n\
     #  $ #\n\
     #  ###\n\
     ####",
    "########\n\
     #  @   #\n\
     # $  . #\n\
     # $  . #\n\
     #      #\n\
     ########",
];

/// A single step (and possibly push) in a compass direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SokobanMove {
    Up,
    Down,
    Left,
    Right,
}

impl SokobanMove {
    const ALL: [SokobanMove; 4] = [
        SokobanMove::Up,
        SokobanMove::Down,
        SokobanMove::Left,
        SokobanMove::Right,
    ];

    fn delta(self) -> (i32, i32) {
        match self {
            SokobanMove::Up => (-1, 0),
            SokobanMove::Down => (1, 0),
            SokobanMove::Left => (0, -1),
            SokobanMove::Right => (0, 1),
        }
    }
}

/// Complete state of a Sokoban level.
#[derive(Debug, Clone)]
pub struct SokobanState {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    goals: Vec<bool>,
    boxes: Vec<bool>,
    player: (usize, usize),
    steps: u32,
    pushes: u32,
}

impl GameState for SokobanState {
    type Move = SokobanMove;

    fn get_num_players(&self) -> i32 {
        1
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        SokobanMove::ALL
            .iter()
            .copied()
            .filter(|m| self.can_step(*m))
            .collect()
    }

    fn make_move(&mut self, mv: &Self::Move) {
        if !self.can_step(*mv) {
            return;
        }
        let (dr, dc) = mv.delta();
        let target = self.offset(self.player, dr, dc).expect("checked in can_step");
        let target_idx = target.0 * self.width + target.1;
        if self.boxes[target_idx] {
            let beyond = self.offset(target, dr, dc).expect("checked in can_step");
            self.boxes[target_idx] = false;
            self.boxes[beyond.0 * self.width + beyond.1] = true;
            self.pushes += 1;
        }
        self.player = target;
        self.steps += 1;
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
        !self.is_solved() && self.can_step(*mv)
    }
}

impl SokobanState {
    /// Loads a built-in level by index.
    pub fn builtin(level: usize) -> Result<Self, String> {
        let text = LEVELS
            .get(level)
            .ok_or_else(|| format!("No such level {}; levels are 0-{}", level, LEVELS.len() - 1))?;
        text.parse()
    }

    /// Number of built-in levels.
    pub fn level_count() -> usize {
        LEVELS.len()
    }

    /// (steps, pushes) made so far.
    pub fn counters(&self) -> (u32, u32) {
        (self.steps, self.pushes)
    }

    /// Solitaire puzzle, no bot.
    pub fn suggest_move(&self) -> Option<SokobanMove> {
        None
    }

    fn is_solved(&self) -> bool {
        self.boxes
            .iter()
            .zip(self.goals.iter())
            .all(|(&b, &g)| !b || g)
    }

    fn can_step(&self, mv: SokobanMove) -> bool {
        let (dr, dc) = mv.delta();
        let target = match self.offset(self.player, dr, dc) {
            Some(t) => t,
            None => return false,
        };
        let target_idx = target.0 * self.width + target.1;
        if self.walls[target_idx] {
            return false;
        }
        if self.boxes[target_idx] {
            let beyond = match self.offset(target, dr, dc) {
                Some(b) => b,
                None => return false,
            };
            let beyond_idx = beyond.0 * self.width + beyond.1;
            return !self.walls[beyond_idx] && !self.boxes[beyond_idx];
        }
        true
    }

    fn offset(&self, from: (usize, usize), dr: i32, dc: i32) -> Option<(usize, usize)> {
        let nr = from.0 as i32 + dr;
        let nc = from.1 as i32 + dc;
        if nr < 0 || nc < 0 || nr as usize >= self.height || nc as usize >= self.width {
            None
        } else {
            Some((nr as usize, nc as usize))
        }
    }
}

impl FromStr for SokobanState {
    type Err = String;

    /// Parses an XSB level. Ragged rows are padded with floor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.is_empty() {
            return Err("Empty level".to_string());
        }
        let height = lines.len();
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        if width == 0 {
            return Err("Empty level".to_string());
        }

        let mut walls = vec![false; width * height];
        let mut goals = vec![false; width * height];
        let mut boxes = vec![false; width * height];
        let mut player = None;

        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let idx = r * width + c;
                match ch {
                    '#' => walls[idx] = true,
                    '$' => boxes[idx] = true,
                    '.' => goals[idx] = true,
                    '*' => {
                        boxes[idx] = true;
                        goals[idx] = true;
                    }
                    '@' => {
                        if player.replace((r, c)).is_some() {
                            return Err("More than one player".to_string());
                        }
                    }
                    '+' => {
                        goals[idx] = true;
                        if player.replace((r, c)).is_some() {
                            return Err("More than one player".to_string());
                        }
                    }
                    ' ' | '-' | '_' => {}
                    other => return Err(format!("Unknown level character '{}'", other)),
                }
            }
        }

        let player = player.ok_or_else(|| "Level has no player".to_string())?;
        let box_count = boxes.iter().filter(|&&b| b).count();
        let goal_count = goals.iter().filter(|&&g| g).count();
        if box_count != goal_count {
            return Err(format!(
                "Level has {} boxes but {} goals",
                box_count, goal_count
            ));
        }
        if box_count == 0 {
            return Err("Level has no boxes".to_string());
        }

        Ok(SokobanState {
            width,
            height,
            walls,
            goals,
            boxes,
            player,
            steps: 0,
            pushes: 0,
        })
    }
}

impl fmt::Display for SokobanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                let idx = r * self.width + c;
                let ch = if self.walls[idx] {
                    '#'
                } else if self.player == (r, c) {
                    if self.goals[idx] {
                        '+'
                    } else {
                        '@'
                    }
                } else if self.boxes[idx] {
                    if self.goals[idx] {
                        '*'
                    } else {
                        '$'
                    }
                } else if self.goals[idx] {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "steps: {}  pushes: {}", self.steps, self.pushes)
    }
}

impl fmt::Display for SokobanMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SokobanMove::Up => "up",
            SokobanMove::Down => "down",
            SokobanMove::Left => "left",
            SokobanMove::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SokobanMove {
    type Err = String;

    /// Parses "u"/"up", "d"/"down", "l"/"left", "r"/"right".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "up" => Ok(SokobanMove::Up),
            "d" | "down" => Ok(SokobanMove::Down),
            "l" | "left" => Ok(SokobanMove::Left),
            "r" | "right" => Ok(SokobanMove::Right),
            other => Err(format!("Unknown direction '{}', use u/d/l/r", other)),
        }
    }
}
