//! Perfect-play Tic-Tac-Toe
//!
//! This crate provides:
//! - A 3x3 board model with legal-move enumeration, win detection and
//!   terminal scoring
//! - Exhaustive minimax search and a deterministic move decision
//! - A self-play driver with a fixed-template board renderer

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{decision, minimax};
pub use tictactoe::{Board, Game, GameStatus, Move, Player};
