//! # Farkle Game Implementation
//!
//! A push-your-luck dice race to 10,000. Roll six dice, set aside at
//! least one scoring combination after every roll, then either roll the
//! remainder or bank the turn. A roll with nothing scoring is a farkle
//! and the turn's points evaporate.
//!
//! ## Scoring
//! - Single 1 = 100, single 5 = 50
//! - Three of a kind = face x 100 (three 1s = 1000); four, five and six
//!   of a kind double the triple value each step (x2, x4, x8)
//! - Straight 1-6 = 1500, three pairs = 1500
//! - A kept selection is legal only if every kept die scores
//!
//! ## Flow
//! - Setting aside all six ("hot dice") re-arms all six dice
//! - A player's first bank must be worth at least 500 points
//! - Banking 10,000 or more triggers one final turn for every other
//!   player; highest total wins, ties going to whoever banked first

use crate::GameState;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::fmt;
use std::str::FromStr;

/// Points needed to trigger the final round.
pub const TARGET_SCORE: u32 = 10_000;
/// Minimum first bank to get "on the board".
pub const ENTRY_THRESHOLD: u32 = 500;

const DICE_COUNT: usize = 6;

/// A Farkle action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FarkleMove {
    /// Set aside the dice selected by this index bitmask
    Keep { mask: u8 },
    /// Reroll the dice not yet set aside (all six after hot dice)
    Roll,
    /// Bank the turn points and pass the dice
    Bank,
}

/// What the engine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// A roll just happened; the player must keep something
    AwaitKeep,
    /// Something was kept; roll again or bank
    AwaitDecision,
}

/// Complete state of a Farkle game.
#[derive(Debug, Clone)]
pub struct FarkleState {
    scores: Vec<u32>,
    on_board: Vec<bool>,
    current: usize,
    /// Dice from the last roll not yet set aside
    dice: Vec<u8>,
    turn_points: u32,
    phase: Phase,
    /// Seat that first banked past the target, if any
    trigger: Option<usize>,
    game_over: bool,
    /// Set while a farkle message is worth showing
    last_farkle: Option<(usize, Vec<u8>)>,
    rng: Xoshiro256StarStar,
}

impl GameState for FarkleState {
    type Move = FarkleMove;

    fn get_num_players(&self) -> i32 {
        self.scores.len() as i32
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.game_over {
            return Vec::new();
        }
        let mut moves = Vec::new();
        match self.phase {
            Phase::AwaitKeep => {
                for mask in 1u8..(1 << self.dice.len()) {
                    if score_selection(&masked_dice(&self.dice, mask)).is_some() {
                        moves.push(FarkleMove::Keep { mask });
                    }
                }
            }
            Phase::AwaitDecision => {
                moves.push(FarkleMove::Roll);
                if self.turn_points > 0
                    && (self.on_board[self.current] || self.turn_points >= ENTRY_THRESHOLD)
                {
                    moves.push(FarkleMove::Bank);
                }
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        if self.game_over {
            return;
        }
        match *mv {
            FarkleMove::Keep { mask } => {
                let kept = masked_dice(&self.dice, mask);
                let points = match score_selection(&kept) {
                    Some(p) => p,
                    None => return,
                };
                self.turn_points += points;
                let mut remaining = Vec::new();
                for (i, &d) in self.dice.iter().enumerate() {
                    if mask & (1 << i) == 0 {
                        remaining.push(d);
                    }
                }
                self.dice = remaining;
                self.phase = Phase::AwaitDecision;
            }
            FarkleMove::Roll => {
                let count = if self.dice.is_empty() {
                    DICE_COUNT // hot dice
                } else {
                    self.dice.len()
                };
                self.roll(count);
            }
            FarkleMove::Bank => {
                self.scores[self.current] += self.turn_points;
                self.on_board[self.current] = true;
                if self.trigger.is_none() && self.scores[self.current] >= TARGET_SCORE {
                    self.trigger = Some(self.current);
                }
                self.next_turn();
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }

    fn get_winner(&self) -> Option<i32> {
        if !self.game_over {
            return None;
        }
        let best = self.scores.iter().max().copied().unwrap_or(0);
        // The triggering seat wins ties: it crossed the target first.
        if let Some(t) = self.trigger {
            if self.scores[t] == best {
                return Some(t as i32 + 1);
            }
        }
        self.scores
            .iter()
            .position(|&s| s == best)
            .map(|i| i as i32 + 1)
    }

    fn get_current_player(&self) -> i32 {
        self.current as i32 + 1
    }
}

impl FarkleState {
    /// Creates a new game and rolls the first turn's dice.
    ///
    /// # Arguments
    /// * `players` - Seats at the table, clamped to 2-6
    /// * `seed` - Dice seed
    pub fn new(players: usize, seed: u64) -> Self {
        let players = players.clamp(2, 6);
        let mut state = FarkleState {
            scores: vec![0; players],
            on_board: vec![false; players],
            current: 0,
            dice: Vec::new(),
            turn_points: 0,
            phase: Phase::AwaitKeep,
            trigger: None,
            game_over: false,
            last_farkle: None,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        };
        state.roll(DICE_COUNT);
        state
    }

    /// Banked scores by seat.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Points accumulated this turn but not yet banked.
    pub fn turn_points(&self) -> u32 {
        self.turn_points
    }

    /// The dice currently available to keep or reroll.
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// The most recent farkle (seat, dice), if the last roll was one.
    pub fn last_farkle(&self) -> Option<(usize, &[u8])> {
        self.last_farkle.as_ref().map(|(s, d)| (*s, d.as_slice()))
    }

    /// Picks a move for the bot: keep the highest-scoring selection,
    /// then bank once the turn is worth enough relative to the dice
    /// left, pressing on when plenty of dice remain.
    pub fn suggest_move(&self) -> Option<FarkleMove> {
        match self.phase {
            Phase::AwaitKeep => self
                .get_possible_moves()
                .into_iter()
                .max_by_key(|mv| match mv {
                    FarkleMove::Keep { mask } => {
                        let kept = masked_dice(&self.dice, *mask);
                        // Prefer more points, then fewer dice spent.
                        (
                            score_selection(&kept).unwrap_or(0),
                            std::cmp::Reverse(kept.len()),
                        )
                    }
                    _ => (0, std::cmp::Reverse(0)),
                }),
            Phase::AwaitDecision => {
                if self.game_over {
                    return None;
                }
                let can_bank = self.turn_points > 0
                    && (self.on_board[self.current] || self.turn_points >= ENTRY_THRESHOLD);
                let dice_left = if self.dice.is_empty() {
                    DICE_COUNT
                } else {
                    self.dice.len()
                };
                if can_bank && (self.turn_points >= 1000 || (self.turn_points >= 300 && dice_left < 3))
                {
                    Some(FarkleMove::Bank)
                } else {
                    Some(FarkleMove::Roll)
                }
            }
        }
    }

    fn roll(&mut self, count: usize) {
        self.dice = (0..count).map(|_| self.rng.gen_range(1..=6)).collect();
        self.phase = Phase::AwaitKeep;
        self.last_farkle = None;

        if !roll_has_score(&self.dice) {
            // Farkle: the turn points are gone and the dice pass on.
            self.last_farkle = Some((self.current, self.dice.clone()));
            self.turn_points = 0;
            self.next_turn();
        }
    }

    fn next_turn(&mut self) {
        self.turn_points = 0;
        let next = (self.current + 1) % self.scores.len();
        if let Some(t) = self.trigger {
            if next == t {
                // Everyone has had their last turn.
                self.game_over = true;
                self.dice.clear();
                return;
            }
        }
        self.current = next;
        self.roll(DICE_COUNT);
    }
}

/// Dice selected by an index bitmask.
fn masked_dice(dice: &[u8], mask: u8) -> Vec<u8> {
    dice.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, &d)| d)
        .collect()
}

/// Whether a fresh roll contains anything keepable.
fn roll_has_score(dice: &[u8]) -> bool {
    (1u8..(1 << dice.len())).any(|mask| score_selection(&masked_dice(dice, mask)).is_some())
}

/// Scores a kept selection, or `None` if any kept die does not score.
pub fn score_selection(kept: &[u8]) -> Option<u32> {
    if kept.is_empty() || kept.len() > DICE_COUNT {
        return None;
    }
    let mut counts = [0usize; 7];
    for &d in kept {
        if !(1..=6).contains(&d) {
            return None;
        }
        counts[d as usize] += 1;
    }

    // Six-dice specials first.
    if kept.len() == 6 {
        if (1..=6).all(|f| counts[f] == 1) {
            return Some(1500); // straight
        }
        if (1..=6).filter(|&f| counts[f] == 2).count() == 3 {
            return Some(1500); // three pairs
        }
    }

    let mut total = 0u32;
    for face in 1..=6usize {
        let n = counts[face];
        if n == 0 {
            continue;
        }
        if n >= 3 {
            let triple = if face == 1 { 1000 } else { face as u32 * 100 };
            let multiplier = 1 << (n - 3); // 3 -> x1, 4 -> x2, 5 -> x4, 6 -> x8
            total += triple * multiplier as u32;
        } else {
            match face {
                1 => total += 100 * n as u32,
                5 => total += 50 * n as u32,
                _ => return None, // a kept die that does not score
            }
        }
    }
    Some(total)
}

impl fmt::Display for FarkleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, score) in self.scores.iter().enumerate() {
            let marker = if i == self.current { ">" } else { " " };
            writeln!(f, "{} seat {}: {}", marker, i + 1, score)?;
        }
        if let Some((seat, dice)) = self.last_farkle() {
            writeln!(f, "seat {} farkled with {:?}", seat + 1, dice)?;
        }
        if !self.dice.is_empty() {
            writeln!(f, "dice: {:?}  (turn points so far: {})", self.dice, self.turn_points)?;
        } else if !self.game_over {
            writeln!(f, "hot dice! all six come back (turn points: {})", self.turn_points)?;
        }
        if let Some(t) = self.trigger {
            writeln!(f, "final round: seat {} has banked {}", t + 1, self.scores[t])?;
        }
        Ok(())
    }
}

impl fmt::Display for FarkleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FarkleMove::Keep { mask } => {
                let indices: Vec<String> = (0..DICE_COUNT)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| i.to_string())
                    .collect();
                write!(f, "k {}", indices.join(" "))
            }
            FarkleMove::Roll => write!(f, "r"),
            FarkleMove::Bank => write!(f, "b"),
        }
    }
}

impl FromStr for FarkleMove {
    type Err = String;

    /// Parses "k 0 2 5" (keep dice by index), "r" (roll), "b" (bank).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.first() {
            Some(&"r") | Some(&"roll") => Ok(FarkleMove::Roll),
            Some(&"b") | Some(&"bank") => Ok(FarkleMove::Bank),
            Some(&"k") | Some(&"keep") => {
                if parts.len() < 2 {
                    return Err("Keep which dice? e.g. k 0 2 5".to_string());
                }
                let mut mask = 0u8;
                for p in &parts[1..] {
                    let i = p.parse::<usize>().map_err(|e| e.to_string())?;
                    if i >= DICE_COUNT {
                        return Err(format!("Die index {} out of range", i));
                    }
                    mask |= 1 << i;
                }
                Ok(FarkleMove::Keep { mask })
            }
            _ => Err("Expected k <indices>, r, or b".to_string()),
        }
    }
}
