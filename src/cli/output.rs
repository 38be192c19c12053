//! Board rendering for the self-play transcript

use std::io::{self, Write};

use crate::tictactoe::{Board, Cell};

/// Display slots `1..=9` of the template, as storage indices.
///
/// The bottom row shows storage columns 0, 2, 1: its last two cells are
/// swapped relative to the grid. Transcripts depend on this layout.
const DISPLAY_ORDER: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 8, 7];

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::X => 'x',
        Cell::O => 'o',
    }
}

/// Render a board into the fixed seven-line template, without a trailing newline
pub fn render_board(board: &Board) -> String {
    let c = DISPLAY_ORDER.map(|idx| symbol(board.cells[idx]));
    let border = "   +-+-+-+";
    [
        border.to_string(),
        format!("   |{}|{}|{}|", c[0], c[1], c[2]),
        border.to_string(),
        format!("   |{}|{}|{}|", c[3], c[4], c[5]),
        border.to_string(),
        format!("   |{}|{}|{}|", c[6], c[7], c[8]),
        border.to_string(),
    ]
    .join("\n")
}

/// Write a rendered board followed by a blank line
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "{}\n\n", render_board(board))
}
