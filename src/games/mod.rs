//! # Game Implementations Module
//!
//! One module per game. Every game implements the [`crate::GameState`]
//! trait so the controller and the terminal front end can drive any of
//! them through the same interface.
//!
//! ## Adding a new game
//! Create a module and provide:
//! 1. A move type (tuple struct or enum) with `Display` and `FromStr`
//! 2. A state type implementing `GameState`, plus `Display` for rendering
//! 3. A `suggest_move` heuristic (return `None` for pure puzzles)
//! 4. A `#[cfg(test)]` module covering the rules and their edge cases
//! Then add a variant to the wrapper enums in `game_wrapper`.

pub mod farkle;
pub mod fifteen;
pub mod grid;
pub mod hangman;
pub mod mancala;
pub mod minesweeper;
pub mod othello;
pub mod pentago;
pub mod picross;
pub mod sokoban;
pub mod uno;
pub mod war;
pub mod yahtzee;
