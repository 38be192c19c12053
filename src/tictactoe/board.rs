//! Board state representation and basic operations

use std::{fmt, ops::Neg, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Score magnitude of a win found at depth 0
pub const WIN_SCORE: i32 = 10;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X is player one and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed unit for the player: +1 for X (maximizing), -1 for O (minimizing)
    pub fn sign(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl Neg for Player {
    type Output = Player;

    fn neg(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("x"),
            Player::O => f.write_str("o"),
        }
    }
}

/// A (row, column) coordinate, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major cell index, or `None` when the coordinate is off the board
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid stored in row-major order.
///
/// `Board` is `Copy`, so search code derives new boards with [`Board::with_move`]
/// and [`Board::children`] while the driver walks a single instance forward
/// with [`Board::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get the cell at a move's coordinate
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] for coordinates outside the grid.
    pub fn get(&self, mv: Move) -> Result<Cell, crate::Error> {
        let idx = Self::checked_index(mv)?;
        Ok(self.cells[idx])
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the number of marked cells on the board
    pub fn occupied_count(&self) -> usize {
        9 - self.count(Cell::Empty)
    }

    /// Check whether the player holds a full row, column or the main diagonal
    pub fn is_win_for(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Every empty cell, in row-major order
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    pub fn has_winner(&self) -> bool {
        self.is_win_for(Player::X) || self.is_win_for(Player::O)
    }

    /// Check if the game is over (win or full board)
    pub fn is_over(&self) -> bool {
        self.has_winner() || !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.is_win_for(Player::X) {
            Some(Player::X)
        } else if self.is_win_for(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Place `player`'s mark at `mv`.
    ///
    /// Exactly one cell changes from empty to the player's mark. Search code
    /// only ever plays legal moves, so an error here means a broken invariant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Occupied`] if the cell already holds a mark (the
    /// board is left unchanged) and [`crate::Error::OutOfBounds`] for
    /// coordinates outside the grid.
    pub fn play(&mut self, mv: Move, player: Player) -> Result<(), crate::Error> {
        let idx = Self::checked_index(mv)?;
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[idx] = player.to_cell();
        Ok(())
    }

    /// Play a move and return the new board
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, mv: Move, player: Player) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.play(mv, player)?;
        Ok(next)
    }

    /// Boards reachable by `player` in one ply, in [`Board::legal_moves`] order.
    ///
    /// Empty once the board is terminal.
    pub fn children(&self, player: Player) -> Vec<Board> {
        if self.is_over() {
            return Vec::new();
        }
        let mark = player.to_cell();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| {
                let mut child = *self;
                child.cells[i] = mark;
                child
            })
            .collect()
    }

    /// Terminal score: `10 - depth` for an X win, `depth - 10` for an O win, else 0.
    ///
    /// Faster wins score higher and slower losses score less badly. A
    /// non-terminal board scores 0, so callers check [`Board::is_over`] first.
    pub fn score(&self, depth: i32) -> i32 {
        if self.is_win_for(Player::X) {
            WIN_SCORE - depth
        } else if self.is_win_for(Player::O) {
            depth - WIN_SCORE
        } else {
            0
        }
    }

    fn checked_index(mv: Move) -> Result<usize, crate::Error> {
        mv.index().ok_or(crate::Error::OutOfBounds {
            row: mv.row,
            col: mv.col,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse nine cells (`x`, `o`, `.` or space); line breaks are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|&c| c != '\n' && c != '\r').collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("expected 9 cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidBoard {
                input: s.to_string(),
                reason: format!("invalid character '{c}' at position {i}"),
            })?;
        }

        Ok(Board { cells })
    }
}
