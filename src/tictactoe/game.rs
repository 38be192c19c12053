//! Self-play game management

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    board::{Board, Move, Player},
    lines::LineAnalyzer,
};
use crate::search;

/// Whole-game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Classify a board
    pub fn from_board(board: &Board) -> Self {
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_over() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A single recorded ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub mv: Move,
    pub player: Player,
    /// Minimax value of the chosen move from the mover's point of view
    pub score: i32,
}

/// A game in progress: the board, whose turn it is, and the plies so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub to_move: Player,
    pub plies: Vec<Ply>,
}

impl Game {
    /// Empty board with X to move
    pub fn new() -> Self {
        Game {
            board: Board::empty(),
            to_move: Player::X,
            plies: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_board(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    /// Let the current mover play its minimax decision, then hand the turn over.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended, and
    /// propagates any board error (which would indicate a search bug).
    pub fn step(mut self) -> Result<Game, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move;
        let (mv, score) = search::best_move(&self.board, player)?;
        self.board.play(mv, player)?;
        self.plies.push(Ply { mv, player, score });
        self.to_move = -player;

        info!(ply = self.plies.len(), %player, %mv, score, "played move");
        Ok(self)
    }

    /// Play the game to the end, calling `observe` on the starting position
    /// and after every ply. An observer error stops the game.
    pub fn play_out<F>(self, mut observe: F) -> Result<Game, crate::Error>
    where
        F: FnMut(&Game) -> Result<(), crate::Error>,
    {
        let mut game = self;
        observe(&game)?;
        while !game.is_over() {
            game = game.step()?;
            observe(&game)?;
        }

        info!(status = ?game.status(), plies = game.plies.len(), "game finished");
        Ok(game)
    }

    /// Summary of the game for export
    pub fn record(&self) -> GameRecord {
        let winning_lines = match self.board.winner() {
            Some(winner) => LineAnalyzer::completed_lines(&self.board.cells, winner),
            None => Vec::new(),
        };

        GameRecord {
            plies: self.plies.clone(),
            final_board: self.board.to_string(),
            status: self.status(),
            winning_lines,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable summary of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub plies: Vec<Ply>,
    pub final_board: String,
    pub status: GameStatus,
    /// Cell indices of each completed line, empty unless someone won
    pub winning_lines: Vec<[usize; 3]>,
}
