//! # Game Wrapper Module - Unified Game Interface
//!
//! The abstraction layer that lets the controller and the terminal front
//! end drive any game through a single interface. Wrapper enums keep
//! each game's concrete state and move types while a macro implements
//! the shared [`GameState`] dispatch, so adding a game is one variant
//! plus one line in the macro invocation.
//!
//! Mismatched game/move pairings panic in `make_move` and simply fail
//! validation in `is_legal`.

use crate::games::farkle::{FarkleMove, FarkleState};
use crate::games::fifteen::{FifteenMove, FifteenState};
use crate::games::hangman::{HangmanMove, HangmanState};
use crate::games::mancala::{MancalaMove, MancalaState};
use crate::games::minesweeper::{MinesweeperMove, MinesweeperState};
use crate::games::othello::{OthelloMove, OthelloState};
use crate::games::pentago::{PentagoMove, PentagoState};
use crate::games::picross::{PicrossMove, PicrossState};
use crate::games::sokoban::{SokobanMove, SokobanState};
use crate::games::uno::{UnoGame, UnoMove};
use crate::games::war::{WarMove, WarState};
use crate::games::yahtzee::{YahtzeeMove, YahtzeeState};
use crate::GameState;
use std::fmt;
use std::str::FromStr;

/// Wrapper enum over every supported game state.
#[derive(Debug, Clone)]
pub enum GameWrapper {
    Uno(UnoGame),
    War(WarState),
    Farkle(FarkleState),
    Yahtzee(YahtzeeState),
    Mancala(MancalaState),
    Othello(OthelloState),
    Pentago(PentagoState),
    Minesweeper(MinesweeperState),
    Sokoban(SokobanState),
    Picross(PicrossState),
    Fifteen(FifteenState),
    Hangman(HangmanState),
}

/// Wrapper enum over every supported move type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveWrapper {
    Uno(UnoMove),
    War(WarMove),
    Farkle(FarkleMove),
    Yahtzee(YahtzeeMove),
    Mancala(MancalaMove),
    Othello(OthelloMove),
    Pentago(PentagoMove),
    Minesweeper(MinesweeperMove),
    Sokoban(SokobanMove),
    Picross(PicrossMove),
    Fifteen(FifteenMove),
    Hangman(HangmanMove),
}

macro_rules! impl_game_dispatch {
    ($($variant:ident),* $(,)?) => {
        impl GameState for GameWrapper {
            type Move = MoveWrapper;

            fn get_num_players(&self) -> i32 {
                match self {
                    $(GameWrapper::$variant(g) => g.get_num_players(),)*
                }
            }

            fn get_current_player(&self) -> i32 {
                match self {
                    $(GameWrapper::$variant(g) => g.get_current_player(),)*
                }
            }

            fn get_possible_moves(&self) -> Vec<Self::Move> {
                match self {
                    $(GameWrapper::$variant(g) => g
                        .get_possible_moves()
                        .into_iter()
                        .map(MoveWrapper::$variant)
                        .collect(),)*
                }
            }

            fn make_move(&mut self, mv: &Self::Move) {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => g.make_move(m),)*
                    _ => panic!("Mismatched game and move types"),
                }
            }

            fn is_terminal(&self) -> bool {
                match self {
                    $(GameWrapper::$variant(g) => g.is_terminal(),)*
                }
            }

            fn get_winner(&self) -> Option<i32> {
                match self {
                    $(GameWrapper::$variant(g) => g.get_winner(),)*
                }
            }

            fn is_legal(&self, mv: &Self::Move) -> bool {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => g.is_legal(m),)*
                    _ => false,
                }
            }
        }

        impl GameWrapper {
            /// Heuristic bot dispatch; `None` for games without a bot.
            pub fn suggest_move(&self) -> Option<MoveWrapper> {
                match self {
                    $(GameWrapper::$variant(g) => g.suggest_move().map(MoveWrapper::$variant),)*
                }
            }

            /// Parses a move in this game's text form.
            pub fn parse_move(&self, s: &str) -> Result<MoveWrapper, String> {
                match self {
                    $(GameWrapper::$variant(_) => FromStr::from_str(s).map(MoveWrapper::$variant),)*
                }
            }
        }

        impl fmt::Display for GameWrapper {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(GameWrapper::$variant(g) => write!(f, "{}", g),)*
                }
            }
        }

        impl fmt::Display for MoveWrapper {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(MoveWrapper::$variant(m) => write!(f, "{}", m),)*
                }
            }
        }
    };
}

impl_game_dispatch!(
    Uno,
    War,
    Farkle,
    Yahtzee,
    Mancala,
    Othello,
    Pentago,
    Minesweeper,
    Sokoban,
    Picross,
    Fifteen,
    Hangman,
);

impl GameWrapper {
    /// The game's roster name.
    pub fn name(&self) -> &'static str {
        match self {
            GameWrapper::Uno(_) => "uno",
            GameWrapper::War(_) => "war",
            GameWrapper::Farkle(_) => "farkle",
            GameWrapper::Yahtzee(_) => "yahtzee",
            GameWrapper::Mancala(_) => "mancala",
            GameWrapper::Othello(_) => "othello",
            GameWrapper::Pentago(_) => "pentago",
            GameWrapper::Minesweeper(_) => "minesweeper",
            GameWrapper::Sokoban(_) => "sokoban",
            GameWrapper::Picross(_) => "picross",
            GameWrapper::Fifteen(_) => "fifteen",
            GameWrapper::Hangman(_) => "hangman",
        }
    }

    /// One-line input help shown at the prompt.
    pub fn prompt(&self) -> &'static str {
        match self {
            GameWrapper::Uno(_) => {
                "p<i> [color] play, d draw, pd/k after drawing, a accept, c/n challenge, s<seat> swap, j<i>/pass jump-in"
            }
            GameWrapper::War(_) => "press enter (or f) to flip",
            GameWrapper::Farkle(_) => "k <dice indices> keep, r roll, b bank",
            GameWrapper::Yahtzee(_) => "r <dice indices> reroll, s <category> score",
            GameWrapper::Mancala(_) => "pit number 0-5",
            GameWrapper::Othello(_) => "row,col",
            GameWrapper::Pentago(_) => "row,col quadrant cw|ccw (e.g. 2,3 tl cw)",
            GameWrapper::Minesweeper(_) => "r row,col reveal, f row,col flag",
            GameWrapper::Sokoban(_) => "u/d/l/r to walk or push",
            GameWrapper::Picross(_) => "f row,col fill, x row,col cross, c row,col clear",
            GameWrapper::Fifteen(_) => "u/d/l/r slides the tile next to the gap",
            GameWrapper::Hangman(_) => "guess a letter",
        }
    }

    /// A name for a seat in this game, for transcripts and results.
    pub fn player_name(&self, seat: i32) -> String {
        match self {
            GameWrapper::Othello(_) => {
                if seat == 1 {
                    "Black".to_string()
                } else {
                    "White".to_string()
                }
            }
            _ => format!("Player {}", seat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_and_display() {
        let game = GameWrapper::Othello(OthelloState::new(8));
        assert_eq!(game.get_num_players(), 2);
        assert_eq!(game.get_current_player(), 1);
        assert_eq!(game.name(), "othello");
        assert_eq!(game.get_possible_moves().len(), 4);
        let _ = format!("{}", game);

        let mv = MoveWrapper::Othello(OthelloMove(2, 3));
        assert_eq!(format!("{}", mv), "2,3");
    }

    #[test]
    fn test_parse_move_routes_to_game() {
        let game = GameWrapper::Mancala(MancalaState::new());
        assert_eq!(
            game.parse_move("3"),
            Ok(MoveWrapper::Mancala(MancalaMove(3)))
        );
        assert!(game.parse_move("r 1,1").is_err());

        let game = GameWrapper::Minesweeper(MinesweeperState::new(9, 9, 10, 0));
        assert_eq!(
            game.parse_move("r 1,1"),
            Ok(MoveWrapper::Minesweeper(MinesweeperMove::Reveal(1, 1)))
        );
    }

    #[test]
    fn test_mismatched_move_fails_validation() {
        let game = GameWrapper::Othello(OthelloState::new(8));
        let mv = MoveWrapper::Mancala(MancalaMove(0));
        assert!(!game.is_legal(&mv));
    }

    #[test]
    #[should_panic(expected = "Mismatched game and move types")]
    fn test_mismatched_move_panics_on_apply() {
        let mut game = GameWrapper::Othello(OthelloState::new(8));
        game.make_move(&MoveWrapper::Mancala(MancalaMove(0)));
    }

    #[test]
    fn test_suggest_move_presence() {
        let game = GameWrapper::Othello(OthelloState::new(8));
        assert!(game.suggest_move().is_some());
        let game = GameWrapper::Fifteen(FifteenState::new(4, 1));
        assert!(game.suggest_move().is_none());
        let game = GameWrapper::War(WarState::new(1));
        assert!(matches!(
            game.suggest_move(),
            Some(MoveWrapper::War(WarMove))
        ));
    }
}
