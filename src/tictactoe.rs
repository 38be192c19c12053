//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Move, Player, WIN_SCORE};
pub use game::{Game, GameRecord, GameStatus, Ply};
pub use lines::{LineAnalyzer, WINNING_LINES};
