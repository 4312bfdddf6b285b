//! # Game Controller Module - Central Game State Management
//!
//! The `GameController` owns the authoritative game state. Every move
//! from the prompt goes through validation here before it is applied;
//! bot moves produced by the engines' own heuristics are applied on the
//! trusted path. The controller also keeps the move history that backs
//! the `history` command.

use crate::game_wrapper::{GameWrapper, MoveWrapper};
use crate::GameState;
use std::time::SystemTime;

/// Result of attempting to apply a move
#[derive(Debug, Clone)]
pub enum MoveResult {
    /// Move was successfully applied
    Success {
        /// The applied move
        move_made: MoveWrapper,
        /// Seat that made the move
        player: i32,
        /// Whether the game is now over
        game_over: bool,
        /// Winner if the game is over (None for a draw or a lost puzzle)
        winner: Option<i32>,
    },
    /// Move was rejected as invalid
    Invalid {
        /// Reason the move was rejected
        reason: MoveValidationError,
    },
    /// Game is already over, no more moves allowed
    GameOver,
}

/// Errors that can occur during move validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveValidationError {
    /// Move is not legal in the current position
    IllegalMove,
    /// The game is already in a terminal state
    GameAlreadyOver,
}

impl std::fmt::Display for MoveValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveValidationError::IllegalMove => write!(f, "Illegal move"),
            MoveValidationError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

/// A single entry in the move history
#[derive(Debug, Clone)]
pub struct MoveHistoryEntry {
    /// When the move was made
    pub timestamp: SystemTime,
    /// Seat that made the move
    pub player: i32,
    /// The move that was made
    pub move_made: MoveWrapper,
    /// Move number (1-indexed)
    pub move_number: usize,
}

impl MoveHistoryEntry {
    fn new(player: i32, move_made: MoveWrapper, move_number: usize) -> Self {
        Self {
            timestamp: SystemTime::now(),
            player,
            move_made,
            move_number,
        }
    }
}

/// Current game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress,
    /// Game ended with a winning seat
    Win(i32),
    /// Game ended with no winner (draw, or a lost solitaire puzzle)
    Draw,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The central game controller that owns the authoritative game state.
///
/// All moves must go through the controller, which validates them before
/// application and records them in the history.
#[derive(Debug, Clone)]
pub struct GameController {
    /// The authoritative game state
    game_state: GameWrapper,
    /// Complete history of moves made
    move_history: Vec<MoveHistoryEntry>,
    /// Current game status
    status: GameStatus,
}

impl GameController {
    /// Create a new game controller with the given initial state
    pub fn new(initial_state: GameWrapper) -> Self {
        Self {
            game_state: initial_state,
            move_history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Validate a move without applying it
    pub fn validate_move(&self, mv: &MoveWrapper) -> Result<(), MoveValidationError> {
        if self.status.is_game_over() {
            return Err(MoveValidationError::GameAlreadyOver);
        }
        if !self.game_state.is_legal(mv) {
            return Err(MoveValidationError::IllegalMove);
        }
        Ok(())
    }

    /// Attempt to make a move, validating it first
    pub fn try_make_move(&mut self, mv: MoveWrapper) -> MoveResult {
        if let Err(reason) = self.validate_move(&mv) {
            return MoveResult::Invalid { reason };
        }
        self.apply(mv)
    }

    /// Apply a move without validation.
    ///
    /// Only for moves produced by the engines' own `suggest_move`, which
    /// come out of the same rule set that validation would consult.
    pub fn apply_trusted_move(&mut self, mv: MoveWrapper) -> MoveResult {
        if self.status.is_game_over() {
            return MoveResult::GameOver;
        }
        self.apply(mv)
    }

    fn apply(&mut self, mv: MoveWrapper) -> MoveResult {
        let player = self.game_state.get_current_player();
        let move_number = self.move_history.len() + 1;

        self.game_state.make_move(&mv);
        self.move_history
            .push(MoveHistoryEntry::new(player, mv.clone(), move_number));

        let game_over = self.game_state.is_terminal();
        let winner = if game_over {
            self.game_state.get_winner()
        } else {
            None
        };
        if game_over {
            self.status = match winner {
                Some(w) => GameStatus::Win(w),
                None => GameStatus::Draw,
            };
        }

        MoveResult::Success {
            move_made: mv,
            player,
            game_over,
            winner,
        }
    }

    /// Get a reference to the game state for rendering
    pub fn get_render_state(&self) -> &GameWrapper {
        &self.game_state
    }

    /// Get the current seat to act
    pub fn get_current_player(&self) -> i32 {
        self.game_state.get_current_player()
    }

    /// Get the current game status
    pub fn get_status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Get the winner if the game is over
    pub fn get_winner(&self) -> Option<i32> {
        match self.status {
            GameStatus::Win(w) => Some(w),
            _ => None,
        }
    }

    /// Get the complete move history
    pub fn get_move_history(&self) -> &[MoveHistoryEntry] {
        &self.move_history
    }

    /// Get the number of moves made
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Get legal moves for the current seat
    pub fn get_legal_moves(&self) -> Vec<MoveWrapper> {
        if self.status.is_game_over() {
            Vec::new()
        } else {
            self.game_state.get_possible_moves()
        }
    }

    /// Reset the controller around a fresh game state
    pub fn reset(&mut self, new_state: GameWrapper) {
        self.game_state = new_state;
        self.move_history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Format the move history as a plain-text transcript
    pub fn format_history(&self) -> String {
        if self.move_history.is_empty() {
            return String::from("No moves made yet.");
        }

        let mut output = format!("=== {} transcript ===\n", self.game_state.name());
        for entry in &self.move_history {
            output.push_str(&format!(
                "{}. {} - {}\n",
                entry.move_number,
                self.game_state.player_name(entry.player),
                entry.move_made
            ));
        }
        match self.status {
            GameStatus::Win(winner) => {
                output.push_str(&format!(
                    "\nResult: {} wins\n",
                    self.game_state.player_name(winner)
                ));
            }
            GameStatus::Draw => output.push_str("\nResult: no winner\n"),
            GameStatus::InProgress => {
                output.push_str(&format!(
                    "\n(in progress - {} to move)\n",
                    self.game_state.player_name(self.get_current_player())
                ));
            }
        }
        output
    }
}
