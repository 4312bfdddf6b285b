//! # War Game Implementation
//!
//! The card game that plays itself: split a 52-card deck, both sides
//! turn their top card each battle, higher rank takes everything on the
//! table. Equal ranks start a war: each side buries three cards and
//! flips again. A side that cannot fund a war loses on the spot.
//!
//! A single engine move resolves one complete battle (wars included),
//! so the only decision left to the player is pressing on. Games that
//! refuse to end are called a draw at a battle cap.

use crate::GameState;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Battles after which an unfinished game is declared a draw.
pub const BATTLE_CAP: u32 = 2000;

/// Ranks run 2..=14 with aces high.
pub type Rank = u8;

/// The only move in War: flip the next battle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WarMove;

/// Outcome of the most recent battle, kept for display.
#[derive(Debug, Clone, Default)]
pub struct BattleReport {
    /// Cards each side committed, in flip order
    pub flips: Vec<(Rank, Rank)>,
    /// Number of nested wars in the battle
    pub wars: u32,
    /// Which seat took the spoils, if either could fund the battle
    pub taken_by: Option<i32>,
}

/// Complete state of a War game.
#[derive(Debug, Clone)]
pub struct WarState {
    pile1: VecDeque<Rank>,
    pile2: VecDeque<Rank>,
    battles: u32,
    /// Set when a side runs out of cards mid-war
    starved: Option<i32>,
    last_battle: Option<BattleReport>,
}

impl GameState for WarState {
    type Move = WarMove;

    fn get_num_players(&self) -> i32 {
        2
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.is_terminal() {
            Vec::new()
        } else {
            vec![WarMove]
        }
    }

    fn make_move(&mut self, _mv: &Self::Move) {
        if self.is_terminal() {
            return;
        }
        let mut table: Vec<Rank> = Vec::new();
        let mut report = BattleReport::default();

        loop {
            let c1 = match self.pile1.pop_front() {
                Some(c) => c,
                None => {
                    self.starved = Some(1);
                    break;
                }
            };
            let c2 = match self.pile2.pop_front() {
                Some(c) => c,
                None => {
                    self.pile1.push_front(c1);
                    self.starved = Some(2);
                    break;
                }
            };
            report.flips.push((c1, c2));
            table.push(c1);
            table.push(c2);

            if c1 != c2 {
                let winner = if c1 > c2 { 1 } else { 2 };
                report.taken_by = Some(winner);
                let pile = if winner == 1 {
                    &mut self.pile1
                } else {
                    &mut self.pile2
                };
                // Spoils go to the bottom in table order so replays from
                // the same seed stay identical.
                for card in table.drain(..) {
                    pile.push_back(card);
                }
                break;
            }

            // War: each side buries up to three cards face down.
            report.wars += 1;
            for _ in 0..3 {
                if self.pile1.len() > 1 {
                    if let Some(c) = self.pile1.pop_front() {
                        table.push(c);
                    }
                }
                if self.pile2.len() > 1 {
                    if let Some(c) = self.pile2.pop_front() {
                        table.push(c);
                    }
                }
            }
        }

        // A starved side loses everything, table cards included.
        if let Some(loser) = self.starved {
            let remainder = if loser == 1 {
                std::mem::take(&mut self.pile1)
            } else {
                std::mem::take(&mut self.pile2)
            };
            let winner_pile = if loser == 1 {
                &mut self.pile2
            } else {
                &mut self.pile1
            };
            for card in table.drain(..).chain(remainder) {
                winner_pile.push_back(card);
            }
        }

        self.battles += 1;
        self.last_battle = Some(report);
    }

    fn is_terminal(&self) -> bool {
        self.starved.is_some()
            || self.pile1.is_empty()
            || self.pile2.is_empty()
            || self.battles >= BATTLE_CAP
    }

    fn get_winner(&self) -> Option<i32> {
        if !self.is_terminal() {
            return None;
        }
        if let Some(loser) = self.starved {
            return Some(3 - loser);
        }
        match self.pile1.len().cmp(&self.pile2.len()) {
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Less => Some(2),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn get_current_player(&self) -> i32 {
        1
    }

    fn is_legal(&self, _mv: &Self::Move) -> bool {
        !self.is_terminal()
    }
}

impl WarState {
    /// Deals a shuffled 52-card deck into two piles of 26.
    pub fn new(seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut deck: Vec<Rank> = (2..=14).flat_map(|r| std::iter::repeat(r).take(4)).collect();
        deck.shuffle(&mut rng);
        let pile2 = deck.split_off(26);
        Self::from_piles(deck, pile2)
    }

    /// Builds a game from explicit piles, front card first.
    pub fn from_piles(pile1: Vec<Rank>, pile2: Vec<Rank>) -> Self {
        WarState {
            pile1: pile1.into(),
            pile2: pile2.into(),
            battles: 0,
            starved: None,
            last_battle: None,
        }
    }

    /// Pile sizes as (seat 1, seat 2).
    pub fn pile_counts(&self) -> (usize, usize) {
        (self.pile1.len(), self.pile2.len())
    }

    /// Battles resolved so far.
    pub fn battles(&self) -> u32 {
        self.battles
    }

    /// The most recent battle, for display.
    pub fn last_battle(&self) -> Option<&BattleReport> {
        self.last_battle.as_ref()
    }

    /// The bot flips; there is nothing else to decide.
    pub fn suggest_move(&self) -> Option<WarMove> {
        if self.is_terminal() {
            None
        } else {
            Some(WarMove)
        }
    }
}

fn rank_name(rank: Rank) -> String {
    match rank {
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        14 => "A".to_string(),
        n => n.to_string(),
    }
}

impl fmt::Display for WarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(report) = &self.last_battle {
            for (c1, c2) in &report.flips {
                writeln!(f, "  {} vs {}", rank_name(*c1), rank_name(*c2))?;
            }
            if report.wars > 0 {
                writeln!(f, "  ({} war{})", report.wars, if report.wars == 1 { "" } else { "s" })?;
            }
            match report.taken_by {
                Some(seat) => writeln!(f, "  seat {} takes the table", seat)?,
                None => writeln!(f, "  a side ran out of cards")?,
            }
        }
        writeln!(
            f,
            "battle {}: seat 1 holds {}, seat 2 holds {}",
            self.battles,
            self.pile1.len(),
            self.pile2.len()
        )
    }
}

impl fmt::Display for WarMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flip")
    }
}

impl FromStr for WarMove {
    type Err = String;

    /// Any of "f", "flip", or an empty line flips the next battle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "f" | "flip" => Ok(WarMove),
            other => Err(format!("'{}' is not a War move; press enter or type f", other)),
        }
    }
}
