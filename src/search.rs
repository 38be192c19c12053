//! Exhaustive minimax search
//!
//! Scores are absolute: positive favors X, negative favors O. There is no
//! pruning and no memoization; the full remaining game tree is explored on
//! every call.

use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Move, Player},
};

/// Minimax value of `state` with `player` to move, `depth` plies below the root.
///
/// # Errors
///
/// Returns [`Error::NoActionsAvailable`] if a non-terminal board produces no
/// children, which a consistent [`Board`] never does.
pub fn minimax(state: &Board, player: Player, depth: i32) -> Result<i32> {
    if state.is_over() {
        return Ok(state.score(depth));
    }

    let mut best: Option<i32> = None;
    for child in state.children(player) {
        let value = minimax(&child, -player, depth + 1)?;
        best = Some(match (best, player) {
            (None, _) => value,
            (Some(b), Player::X) => b.max(value),
            (Some(b), Player::O) => b.min(value),
        });
    }

    best.ok_or_else(|| Error::NoActionsAvailable {
        board: state.to_string(),
    })
}

/// Mover-relative score of every legal move, in row-major order.
///
/// Each child is evaluated from depth 0 and multiplied by the mover's sign,
/// so a higher value is always better for `player`.
pub fn move_scores(state: &Board, player: Player) -> Result<Vec<(Move, i32)>> {
    let children = state.children(player);
    if children.is_empty() {
        return Err(Error::GameOver);
    }

    state
        .legal_moves()
        .into_iter()
        .zip(children)
        .map(|(mv, child)| -> Result<(Move, i32)> {
            Ok((mv, player.sign() * minimax(&child, -player, 0)?))
        })
        .collect()
}

/// Best move for `player`; ties go to the first move in row-major order.
///
/// # Errors
///
/// Returns [`Error::GameOver`] when the board is already terminal.
pub fn decision(state: &Board, player: Player) -> Result<Move> {
    best_move(state, player).map(|(mv, _)| mv)
}

/// Like [`decision`], also returning the chosen move's mover-relative score.
pub fn best_move(state: &Board, player: Player) -> Result<(Move, i32)> {
    let scores = move_scores(state, player)?;
    debug!(%player, ?scores, "scored candidate moves");

    let mut best: Option<(Move, i32)> = None;
    for (mv, score) in scores {
        // strict comparison keeps the first maximum
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((mv, score));
        }
    }

    best.ok_or(Error::GameOver)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_returns_its_score() {
        let won = board("xxxoo....");
        assert_eq!(minimax(&won, Player::O, 5).unwrap(), 5);

        let draw = board("xxooxxxoo");
        assert_eq!(minimax(&draw, Player::O, 9).unwrap(), 0);
    }

    #[test]
    fn test_minimax_prefers_the_immediate_win() {
        // xx.
        // oo.
        // ...
        let state = board("xx.oo....");
        assert_eq!(minimax(&state, Player::X, 0).unwrap(), 9);
        assert_eq!(minimax(&state, Player::O, 0).unwrap(), -9);
    }

    #[test]
    fn test_minimax_is_deterministic() {
        let state = board("x...o....");
        let first = minimax(&state, Player::X, 2).unwrap();
        for _ in 0..3 {
            assert_eq!(minimax(&state, Player::X, 2).unwrap(), first);
        }
    }

    #[test]
    fn test_decision_takes_the_win() {
        let state = board("xx.oo....");
        assert_eq!(decision(&state, Player::X).unwrap(), Move::new(0, 2));
        assert_eq!(decision(&state, Player::O).unwrap(), Move::new(1, 2));
    }

    #[test]
    fn test_decision_blocks_the_threat() {
        // x wins next at (0, 2) unless o blocks
        let state = board("xx..o....");
        assert_eq!(decision(&state, Player::O).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_decision_breaks_ties_in_row_major_order() {
        let (mv, score) = best_move(&Board::empty(), Player::X).unwrap();
        assert_eq!(mv, Move::new(0, 0));
        assert_eq!(score, 0);
    }

    #[test]
    fn test_move_scores_are_mover_relative() {
        let state = board("xx.oo....");
        let scores = move_scores(&state, Player::O).unwrap();
        let (mv, best) = scores.iter().copied().max_by_key(|&(_, s)| s).unwrap();
        assert_eq!(mv, Move::new(1, 2));
        assert_eq!(best, 10);
    }

    #[test]
    fn test_decision_on_finished_board_is_an_error() {
        let err = decision(&board("xxxoo...."), Player::O).unwrap_err();
        assert!(matches!(err, Error::GameOver));
    }
}
