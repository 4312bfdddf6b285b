//! # Hangman Game Implementation
//!
//! The engine picks a secret word; the player guesses letters. Six wrong
//! guesses lose the game. Repeating a used letter is rejected as invalid
//! input rather than spending a miss.

use crate::GameState;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::fmt;
use std::str::FromStr;

/// Wrong guesses allowed before the game is lost.
pub const MAX_MISSES: usize = 6;

/// Words the engine draws from when no explicit word is supplied.
const WORD_LIST: &[&str] = &[
    "abandon", "balloon", "cabbage", "dolphin", "elephant", "fortune", "gallery", "harvest",
    "island", "jigsaw", "kitchen", "lantern", "monsoon", "neutron", "obelisk", "padlock",
    "quarrel", "rhubarb", "sawdust", "tornado", "umbrella", "varnish", "whisper", "xylophone",
    "yogurt", "zeppelin", "anchor", "bridge", "candle", "drizzle", "ember", "fiddle", "goblet",
    "hammock", "icicle", "jungle", "kernel", "lagoon", "marble", "nugget", "orchard", "pepper",
    "quiver", "ribbon", "saddle", "timber", "unicorn", "velvet", "walnut", "yonder", "zipper",
];

/// A single letter guess.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HangmanMove(pub char);

/// Complete state of a Hangman game.
#[derive(Debug, Clone)]
pub struct HangmanState {
    word: String,
    guessed: Vec<char>,
    misses: usize,
}

impl GameState for HangmanState {
    type Move = HangmanMove;

    fn get_num_players(&self) -> i32 {
        1
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        ('a'..='z')
            .filter(|c| !self.guessed.contains(c))
            .map(HangmanMove)
            .collect()
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let letter = mv.0.to_ascii_lowercase();
        if self.guessed.contains(&letter) {
            return;
        }
        self.guessed.push(letter);
        if !self.word.contains(letter) {
            self.misses += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.misses >= MAX_MISSES || self.is_revealed()
    }

    fn get_winner(&self) -> Option<i32> {
        if self.is_revealed() && self.misses < MAX_MISSES {
            Some(1)
        } else {
            None
        }
    }

    fn get_current_player(&self) -> i32 {
        1
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        let letter = mv.0.to_ascii_lowercase();
        !self.is_terminal() && letter.is_ascii_lowercase() && !self.guessed.contains(&letter)
    }
}

impl HangmanState {
    /// Creates a game around a word drawn from the built-in list.
    pub fn new(seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let word = WORD_LIST[rng.gen_range(0..WORD_LIST.len())];
        Self::with_word(word)
    }

    /// Creates a game around an explicit secret word.
    pub fn with_word(word: &str) -> Self {
        HangmanState {
            word: word.to_ascii_lowercase(),
            guessed: Vec::new(),
            misses: 0,
        }
    }

    /// Number of wrong guesses so far.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// The secret word, revealed. Intended for end-of-game display.
    pub fn reveal(&self) -> &str {
        &self.word
    }

    /// The word with unguessed letters masked, e.g. `_ a _ _ e _`.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Picks a guess for the bot: the most frequent unused letter among
    /// built-in words still consistent with the revealed pattern, falling
    /// back to overall English letter frequency.
    pub fn suggest_move(&self) -> Option<HangmanMove> {
        if self.is_terminal() {
            return None;
        }
        let candidates: Vec<&&str> = WORD_LIST
            .iter()
            .filter(|w| self.is_consistent(w))
            .collect();

        let mut counts = [0usize; 26];
        for word in &candidates {
            for c in word.chars() {
                if c.is_ascii_lowercase() && !self.guessed.contains(&c) {
                    counts[(c as u8 - b'a') as usize] += 1;
                }
            }
        }
        // First index wins ties so the guess sequence is stable.
        let mut best: Option<(usize, usize)> = None;
        for (i, &count) in counts.iter().enumerate() {
            if count > best.map_or(0, |(c, _)| c) {
                best = Some((count, i));
            }
        }
        let best = best.map(|(_, i)| (b'a' + i as u8) as char);

        let letter = best.or_else(|| {
            "etaoinshrdlucmfwypvbgkjqxz"
                .chars()
                .find(|c| !self.guessed.contains(c))
        })?;
        Some(HangmanMove(letter))
    }

    fn is_revealed(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// Whether a candidate word could be the secret given every guess so far.
    fn is_consistent(&self, candidate: &str) -> bool {
        if candidate.len() != self.word.len() {
            return false;
        }
        for (sc, cc) in self.word.chars().zip(candidate.chars()) {
            let revealed = self.guessed.contains(&sc);
            if revealed {
                if sc != cc {
                    return false;
                }
            } else if self.guessed.contains(&cc) {
                // The candidate uses a guessed letter in a spot where the
                // secret does not show it.
                return false;
            }
        }
        true
    }
}

impl fmt::Display for HangmanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "word: {}", self.masked_word())?;
        let misses: Vec<String> = self
            .guessed
            .iter()
            .filter(|c| !self.word.contains(**c))
            .map(|c| c.to_string())
            .collect();
        writeln!(f, "misses ({}/{}): {}", self.misses, MAX_MISSES, misses.join(" "))
    }
}

impl fmt::Display for HangmanMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HangmanMove {
    type Err = String;

    /// Parses a single ASCII letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(HangmanMove(c.to_ascii_lowercase())),
            _ => Err("Guess a single letter".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_by_revealing() {
        let mut game = HangmanState::with_word("abba");
        game.make_move(&HangmanMove('a'));
        assert!(!game.is_terminal());
        game.make_move(&HangmanMove('b'));
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), Some(1));
        assert_eq!(game.misses(), 0);
    }

    #[test]
    fn test_loss_after_six_misses() {
        let mut game = HangmanState::with_word("zip");
        for c in ['a', 'b', 'c', 'd', 'e', 'f'] {
            game.make_move(&HangmanMove(c));
        }
        assert_eq!(game.misses(), MAX_MISSES);
        assert!(game.is_terminal());
        assert_eq!(game.get_winner(), None);
    }

    #[test]
    fn test_repeat_guess_is_illegal() {
        let mut game = HangmanState::with_word("zip");
        game.make_move(&HangmanMove('z'));
        assert!(!game.is_legal(&HangmanMove('z')));
        assert!(game.is_legal(&HangmanMove('i')));
        // Applying it anyway must not change anything.
        let misses_before = game.misses();
        game.make_move(&HangmanMove('z'));
        assert_eq!(game.misses(), misses_before);
    }

    #[test]
    fn test_masked_word() {
        let mut game = HangmanState::with_word("cab");
        game.make_move(&HangmanMove('a'));
        assert_eq!(game.masked_word(), "_ a _");
    }

    #[test]
    fn test_same_seed_same_word() {
        let a = HangmanState::new(11);
        let b = HangmanState::new(11);
        assert_eq!(a.reveal(), b.reveal());
    }

    #[test]
    fn test_bot_solves_listed_word() {
        let mut game = HangmanState::with_word("lantern");
        let mut guard = 0;
        while !game.is_terminal() && guard < 26 {
            let mv = game.suggest_move().expect("bot finds a guess");
            game.make_move(&mv);
            guard += 1;
        }
        assert!(game.is_terminal());
        // The word is on the list, so frequency filtering should get
        // there well inside the miss budget.
        assert_eq!(game.get_winner(), Some(1), "bot lost with {} misses", game.misses());
    }

    #[test]
    fn test_consistency_filter() {
        let mut game = HangmanState::with_word("kernel");
        game.make_move(&HangmanMove('k'));
        assert!(game.is_consistent("kernel"));
        assert!(game.is_consistent("kitten")); // matches the k_____ pattern
        assert!(!game.is_consistent("timber")); // no 'k' at position 0
        assert!(!game.is_consistent("kit")); // wrong length
        // A guessed letter may not hide in an unrevealed position.
        let mut game = HangmanState::with_word("cab");
        game.make_move(&HangmanMove('b'));
        assert!(!game.is_consistent("bat"));
        assert!(game.is_consistent("cab"));
    }
}
