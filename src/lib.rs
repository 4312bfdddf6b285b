//! # Parlor Arena
//!
//! A collection of independent parlor game engines behind a single trait.
//! Each game lives in its own module under [`games`] and implements
//! [`GameState`], which gives the controller and the terminal front end a
//! uniform way to enumerate moves, apply them, and detect the end of a game.
//!
//! ## Supported games
//! - Card: Uno (with optional house rules), War
//! - Dice: Farkle, Yahtzee
//! - Board: Mancala, Othello, Pentago
//! - Solitaire puzzles: Minesweeper, Sokoban, Picross, Fifteen, Hangman
//!
//! ## Seats and chance
//! Players are numbered `1..=N`; solitaire puzzles have a single seat.
//! Games that involve chance (deals, dice, mine layout, word choice) own a
//! seedable RNG, so a game constructed with the same seed and fed the same
//! moves replays identically.

pub mod game_controller;
pub mod game_wrapper;
pub mod games;

/// The state of a game. Must be cloneable so callers can snapshot positions.
/// `Send` and `Sync` keep states usable from test harnesses and worker threads.
pub trait GameState: Clone + Send + Sync {
    /// The type of a move in the game.
    type Move: Clone + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync;

    /// Returns the number of seats at the table for this game instance.
    fn get_num_players(&self) -> i32;
    /// Returns the seat (1-based) that must act next. For games with
    /// interrupt phases (challenges, jump-in windows) this is whoever the
    /// engine is waiting on, which may differ from the nominal turn holder.
    fn get_current_player(&self) -> i32;
    /// Returns a vector of all legal moves for the current actor.
    /// Empty exactly when the game is over.
    fn get_possible_moves(&self) -> Vec<Self::Move>;
    /// Applies a move to the state, modifying it. Callers are expected to
    /// validate first; behavior on illegal moves is unspecified, but any
    /// move returned by `get_possible_moves` must apply cleanly.
    fn make_move(&mut self, mv: &Self::Move);
    /// Returns true if the game is over.
    fn is_terminal(&self) -> bool;
    /// Returns the winning seat, if any. `None` while the game is running,
    /// on a draw, or when a solitaire puzzle is lost.
    fn get_winner(&self) -> Option<i32>;
    /// Checks whether a move is legal in the current state. Games override
    /// this where a direct check is cheaper than enumerating moves.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.get_possible_moves().contains(mv)
    }
}
