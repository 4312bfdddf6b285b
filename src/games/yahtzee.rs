//! # Yahtzee Game Implementation
//!
//! Thirteen scorecard categories, three rolls a turn. Each seat fills
//! every category exactly once (zeroing one when nothing fits), with the
//! upper-section bonus and extra-Yahtzee bonus of the boxed game.
//!
//! ## Rules
//! - First roll is automatic; up to two rerolls of any dice subset
//! - Scoring into a used category is illegal; scoring zero is allowed
//! - Upper bonus: +35 when Ones..Sixes total at least 63
//! - Extra Yahtzees after a scored 50 earn +100 each and may fill any
//!   open category at that category's fixed/joker value

use crate::GameState;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::fmt;
use std::str::FromStr;

const DICE_COUNT: usize = 5;
const MAX_ROLLS: u8 = 3;
/// Upper section total needed for the bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
/// Upper section bonus points.
pub const UPPER_BONUS: u32 = 35;
/// Bonus per extra Yahtzee after the Yahtzee box holds 50.
pub const YAHTZEE_BONUS: u32 = 100;

/// A scorecard category.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// All categories in scorecard order.
    pub const ALL: [Category; 13] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    fn index(self) -> usize {
        Category::ALL.iter().position(|&c| c == self).expect("listed")
    }

    fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "trips",
            Category::FourOfAKind => "quads",
            Category::FullHouse => "fullhouse",
            Category::SmallStraight => "smallstraight",
            Category::LargeStraight => "largestraight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }
}

/// A Yahtzee action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum YahtzeeMove {
    /// Reroll the dice selected by this index bitmask
    Reroll { mask: u8 },
    /// Score the current dice into a category
    Score(Category),
}

/// Complete state of a Yahtzee game.
#[derive(Debug, Clone)]
pub struct YahtzeeState {
    cards: Vec<[Option<u32>; 13]>,
    bonuses: Vec<u32>,
    current: usize,
    dice: [u8; 5],
    rolls_used: u8,
    game_over: bool,
    rng: Xoshiro256StarStar,
}

impl GameState for YahtzeeState {
    type Move = YahtzeeMove;

    fn get_num_players(&self) -> i32 {
        self.cards.len() as i32
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.game_over {
            return Vec::new();
        }
        let mut moves = Vec::new();
        if self.rolls_used < MAX_ROLLS {
            for mask in 1u8..(1 << DICE_COUNT) {
                moves.push(YahtzeeMove::Reroll { mask });
            }
        }
        for category in Category::ALL {
            if self.cards[self.current][category.index()].is_none() {
                moves.push(YahtzeeMove::Score(category));
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        if self.game_over {
            return;
        }
        match *mv {
            YahtzeeMove::Reroll { mask } => {
                if self.rolls_used >= MAX_ROLLS {
                    return;
                }
                for i in 0..DICE_COUNT {
                    if mask & (1 << i) != 0 {
                        self.dice[i] = self.rng.gen_range(1..=6);
                    }
                }
                self.rolls_used += 1;
            }
            YahtzeeMove::Score(category) => {
                let idx = category.index();
                if self.cards[self.current][idx].is_some() {
                    return;
                }
                let joker = self.is_extra_yahtzee();
                if joker {
                    self.bonuses[self.current] += YAHTZEE_BONUS;
                }
                let points = score_category(&self.dice, category, joker);
                self.cards[self.current][idx] = Some(points);
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
        let totals: Vec<u32> = (0..self.cards.len()).map(|s| self.total(s)).collect();
        let best = totals.iter().max().copied()?;
        let mut leaders = totals.iter().filter(|&&t| t == best);
        let first = totals.iter().position(|&t| t == best)?;
        if leaders.nth(1).is_some() {
            return None; // shared top score is a draw
        }
        Some(first as i32 + 1)
    }

    fn get_current_player(&self) -> i32 {
        self.current as i32 + 1
    }
}

impl YahtzeeState {
    /// Creates a new game and rolls the first seat's opening dice.
    ///
    /// # Arguments
    /// * `players` - Seats at the table, clamped to 2-6
    /// * `seed` - Dice seed
    pub fn new(players: usize, seed: u64) -> Self {
        let players = players.clamp(2, 6);
        let mut state = YahtzeeState {
            cards: vec![[None; 13]; players],
            bonuses: vec![0; players],
            current: 0,
            dice: [1; 5],
            rolls_used: 0,
            game_over: false,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        };
        state.roll_all();
        state
    }

    /// The dice as currently showing.
    pub fn dice(&self) -> &[u8; 5] {
        &self.dice
    }

    /// Rolls used this turn, counting the opening roll.
    pub fn rolls_used(&self) -> u8 {
        self.rolls_used
    }

    /// Grand total for a seat: upper + bonus + lower + Yahtzee bonuses.
    pub fn total(&self, seat: usize) -> u32 {
        let card = &self.cards[seat];
        let upper: u32 = card[..6].iter().flatten().sum();
        let lower: u32 = card[6..].iter().flatten().sum();
        let bonus = if upper >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        };
        upper + bonus + lower + self.bonuses[seat]
    }

    /// A seat's scorecard entry for one category.
    pub fn card_entry(&self, seat: usize, category: Category) -> Option<u32> {
        self.cards[seat][category.index()]
    }

    /// Picks a move for the bot: with rerolls left, keep the most common
    /// face and reroll the rest; otherwise score the best open category.
    pub fn suggest_move(&self) -> Option<YahtzeeMove> {
        if self.game_over {
            return None;
        }
        let open: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| self.cards[self.current][c.index()].is_none())
            .collect();
        let joker = self.is_extra_yahtzee();
        let best = open
            .iter()
            .copied()
            .max_by_key(|&c| score_category(&self.dice, c, joker))?;
        let best_score = score_category(&self.dice, best, joker);

        if self.rolls_used < MAX_ROLLS && best_score < 25 {
            // Keep the most frequent face, reroll everything else.
            let mut counts = [0usize; 7];
            for &d in &self.dice {
                counts[d as usize] += 1;
            }
            let keep_face = (1..=6).max_by_key(|&f| counts[f as usize]).unwrap_or(6) as u8;
            let mut mask = 0u8;
            for (i, &d) in self.dice.iter().enumerate() {
                if d != keep_face {
                    mask |= 1 << i;
                }
            }
            if mask != 0 {
                return Some(YahtzeeMove::Reroll { mask });
            }
        }
        Some(YahtzeeMove::Score(best))
    }

    /// Whether the dice show a Yahtzee after the Yahtzee box already
    /// holds 50, which triggers the bonus and joker scoring.
    fn is_extra_yahtzee(&self) -> bool {
        is_yahtzee(&self.dice)
            && self.cards[self.current][Category::Yahtzee.index()] == Some(50)
    }

    fn roll_all(&mut self) {
        for d in self.dice.iter_mut() {
            *d = self.rng.gen_range(1..=6);
        }
        self.rolls_used = 1;
    }

    fn next_turn(&mut self) {
        if self.cards.iter().all(|card| card.iter().all(|e| e.is_some())) {
            self.game_over = true;
            return;
        }
        self.current = (self.current + 1) % self.cards.len();
        self.roll_all();
    }
}

fn is_yahtzee(dice: &[u8; 5]) -> bool {
    dice.iter().all(|&d| d == dice[0])
}

/// Scores `dice` in `category`. With `joker` set (an extra Yahtzee), the
/// fixed-value categories pay out regardless of the actual pattern.
pub fn score_category(dice: &[u8; 5], category: Category, joker: bool) -> u32 {
    let mut counts = [0usize; 7];
    let mut sum = 0u32;
    for &d in dice {
        counts[d as usize] += 1;
        sum += d as u32;
    }
    let face_sum = |f: u8| counts[f as usize] as u32 * f as u32;
    let has_run = |len: usize| {
        (1..=(7 - len)).any(|start| (start..start + len).all(|f| counts[f] > 0))
    };

    match category {
        Category::Ones => face_sum(1),
        Category::Twos => face_sum(2),
        Category::Threes => face_sum(3),
        Category::Fours => face_sum(4),
        Category::Fives => face_sum(5),
        Category::Sixes => face_sum(6),
        Category::ThreeOfAKind => {
            if counts.iter().any(|&n| n >= 3) {
                sum
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if counts.iter().any(|&n| n >= 4) {
                sum
            } else {
                0
            }
        }
        Category::FullHouse => {
            let pair = counts.iter().any(|&n| n == 2);
            let triple = counts.iter().any(|&n| n == 3);
            if (pair && triple) || joker {
                25
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if has_run(4) || joker {
                30
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if has_run(5) || joker {
                40
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if is_yahtzee(dice) {
                50
            } else {
                0
            }
        }
        Category::Chance => sum,
    }
}

impl fmt::Display for YahtzeeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seat in 0..self.cards.len() {
            let marker = if seat == self.current { ">" } else { " " };
            let filled = self.cards[seat].iter().flatten().count();
            writeln!(
                f,
                "{} seat {}: {} points ({}/13 boxes)",
                marker,
                seat + 1,
                self.total(seat),
                filled
            )?;
        }
        writeln!(
            f,
            "dice: {:?}  (roll {}/{})",
            self.dice, self.rolls_used, MAX_ROLLS
        )?;
        write!(f, "open: ")?;
        let open: Vec<&str> = Category::ALL
            .iter()
            .filter(|c| self.cards[self.current][c.index()].is_none())
            .map(|c| c.name())
            .collect();
        writeln!(f, "{}", open.join(" "))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for YahtzeeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YahtzeeMove::Reroll { mask } => {
                let indices: Vec<String> = (0..DICE_COUNT)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| i.to_string())
                    .collect();
                write!(f, "r {}", indices.join(" "))
            }
            YahtzeeMove::Score(c) => write!(f, "s {}", c.name()),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| format!("Unknown category '{}'", s.trim()))
    }
}

impl FromStr for YahtzeeMove {
    type Err = String;

    /// Parses "r 0 2 4" (reroll dice by index) or "s <category>".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.first() {
            Some(&"r") | Some(&"reroll") => {
                if parts.len() < 2 {
                    return Err("Reroll which dice? e.g. r 0 2 4".to_string());
                }
                let mut mask = 0u8;
                for p in &parts[1..] {
                    let i = p.parse::<usize>().map_err(|e| e.to_string())?;
                    if i >= DICE_COUNT {
                        return Err(format!("Die index {} out of range", i));
                    }
                    mask |= 1 << i;
                }
                Ok(YahtzeeMove::Reroll { mask })
            }
            Some(&"s") | Some(&"score") => {
                if parts.len() != 2 {
                    return Err("Score which category? e.g. s fullhouse".to_string());
                }
                Ok(YahtzeeMove::Score(parts[1].parse()?))
            }
            _ => Err("Expected r <indices> or s <category>".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case([1, 1, 2, 3, 4], Category::Ones => 2; "ones count")]
    #[test_case([6, 6, 6, 2, 1], Category::Sixes => 18; "sixes count")]
    #[test_case([3, 3, 3, 2, 1], Category::ThreeOfAKind => 12; "trips sum all dice")]
    #[test_case([3, 3, 2, 2, 1], Category::ThreeOfAKind => 0; "no trips")]
    #[test_case([4, 4, 4, 4, 1], Category::FourOfAKind => 17; "quads sum all dice")]
    #[test_case([2, 2, 3, 3, 3], Category::FullHouse => 25; "full house")]
    #[test_case([2, 2, 2, 3, 3], Category::FullHouse => 25; "full house other way")]
    #[test_case([2, 2, 2, 2, 3], Category::FullHouse => 0; "quads are not a full house")]
    #[test_case([1, 2, 3, 4, 6], Category::SmallStraight => 30; "small straight")]
    #[test_case([2, 3, 4, 5, 5], Category::SmallStraight => 30; "small straight with pair")]
    #[test_case([1, 2, 3, 5, 6], Category::SmallStraight => 0; "broken straight")]
    #[test_case([2, 3, 4, 5, 6], Category::LargeStraight => 40; "large straight")]
    #[test_case([1, 2, 3, 4, 5], Category::LargeStraight => 40; "low large straight")]
    #[test_case([1, 2, 3, 4, 6], Category::LargeStraight => 0; "not large")]
    #[test_case([5, 5, 5, 5, 5], Category::Yahtzee => 50; "yahtzee")]
    #[test_case([5, 5, 5, 5, 2], Category::Yahtzee => 0; "no yahtzee")]
    #[test_case([1, 2, 3, 4, 5], Category::Chance => 15; "chance sums")]
    fn test_scoring(dice: [u8; 5], category: Category) -> u32 {
        score_category(&dice, category, false)
    }

    #[test]
    fn test_joker_fills_fixed_categories() {
        let dice = [4, 4, 4, 4, 4];
        assert_eq!(score_category(&dice, Category::FullHouse, true), 25);
        assert_eq!(score_category(&dice, Category::SmallStraight, true), 30);
        assert_eq!(score_category(&dice, Category::LargeStraight, true), 40);
        assert_eq!(score_category(&dice, Category::FullHouse, false), 0);
    }

    #[test]
    fn test_reroll_changes_only_masked() {
        let mut game = YahtzeeState::new(2, 3);
        let before = *game.dice();
        game.make_move(&YahtzeeMove::Reroll { mask: 0b00001 });
        let after = *game.dice();
        assert_eq!(before[1..], after[1..], "unmasked dice must not change");
        assert_eq!(game.rolls_used(), 2);
    }

    #[test]
    fn test_roll_limit() {
        let mut game = YahtzeeState::new(2, 3);
        game.make_move(&YahtzeeMove::Reroll { mask: 0b11111 });
        game.make_move(&YahtzeeMove::Reroll { mask: 0b11111 });
        assert_eq!(game.rolls_used(), 3);
        assert!(game
            .get_possible_moves()
            .iter()
            .all(|m| matches!(m, YahtzeeMove::Score(_))));
    }

    #[test]
    fn test_score_fills_box_and_passes_turn() {
        let mut game = YahtzeeState::new(2, 3);
        game.make_move(&YahtzeeMove::Score(Category::Chance));
        assert!(game.card_entry(0, Category::Chance).is_some());
        assert_eq!(game.get_current_player(), 2);
        assert_eq!(game.rolls_used(), 1, "next seat gets a fresh roll");
    }

    #[test]
    fn test_double_score_illegal() {
        let mut game = YahtzeeState::new(2, 3);
        game.make_move(&YahtzeeMove::Score(Category::Chance)); // seat 1
        game.make_move(&YahtzeeMove::Score(Category::Chance)); // seat 2
        assert!(!game
            .get_possible_moves()
            .contains(&YahtzeeMove::Score(Category::Chance)));
    }

    #[test]
    fn test_upper_bonus() {
        let mut game = YahtzeeState::new(2, 3);
        game.cards[0] = [
            Some(3),
            Some(6),
            Some(9),
            Some(12),
            Some(15),
            Some(18), // upper = 63
            Some(0),
            Some(0),
            Some(0),
            Some(0),
            Some(0),
            Some(0),
            Some(0),
        ];
        assert_eq!(game.total(0), 63 + UPPER_BONUS);
        game.cards[0][5] = Some(17); // upper = 62
        assert_eq!(game.total(0), 62);
    }

    #[test]
    fn test_extra_yahtzee_bonus() {
        let mut game = YahtzeeState::new(2, 3);
        game.cards[0][Category::Yahtzee.index()] = Some(50);
        game.dice = [6, 6, 6, 6, 6];
        game.rolls_used = 3;
        game.make_move(&YahtzeeMove::Score(Category::FullHouse));
        assert_eq!(game.card_entry(0, Category::FullHouse), Some(25));
        assert_eq!(game.bonuses[0], YAHTZEE_BONUS);
    }

    #[test]
    fn test_game_end_and_winner() {
        let mut game = YahtzeeState::new(2, 3);
        // Fill every box except one per seat, then play out the last
        // turns through the engine.
        for seat in 0..2 {
            for idx in 0..12 {
                game.cards[seat][idx] = Some(if seat == 0 { 10 } else { 1 });
            }
        }
        // Seat 1 scores the last box (Chance).
        game.make_move(&YahtzeeMove::Score(Category::Chance));
        assert!(!game.is_terminal());
        game.make_move(&YahtzeeMove::Score(Category::Chance));
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), Some(1));
    }

    #[test]
    fn test_bot_plays_full_game() {
        let mut game = YahtzeeState::new(2, 9);
        let mut guard = 0;
        while !game.is_terminal() && guard < 2000 {
            let mv = game.suggest_move().expect("bot always has a move");
            assert!(game.is_legal(&mv), "bot move {:?} must be legal", mv);
            game.make_move(&mv);
            guard += 1;
        }
        assert!(game.is_terminal(), "bot self-play should finish 26 turns");
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!(
            YahtzeeMove::from_str("r 0 2 4"),
            Ok(YahtzeeMove::Reroll { mask: 0b10101 })
        );
        assert_eq!(
            YahtzeeMove::from_str("s fullhouse"),
            Ok(YahtzeeMove::Score(Category::FullHouse))
        );
        assert_eq!(
            YahtzeeMove::from_str("score yahtzee"),
            Ok(YahtzeeMove::Score(Category::Yahtzee))
        );
        assert!(YahtzeeMove::from_str("s nope").is_err());
        assert!(YahtzeeMove::from_str("r 7").is_err());
        assert!(YahtzeeMove::from_str("x").is_err());
    }
}
