//! Legality filter.
//!
//! Every externally visible move list is produced here: pseudo-legal moves
//! are applied to a scratch copy of the board and dropped when they leave the
//! mover's own king in check. The caller's board is never mutated.

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::pseudo_legal_moves;

/// Legal moves of the piece on `from`, whoever's turn it is.
///
/// An empty square yields an empty list.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, from)
        .into_iter()
        .filter(|mv| is_legal(board, *mv, piece.color))
        .collect()
}

/// Legal moves of every piece of `color`, in square order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| legal_moves(board, from))
        .collect()
}

/// Stops at the first legal move found.
pub fn has_any_legal_moves(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// Whether `mv` keeps `color`'s king out of check.
pub fn is_legal(board: &Board, mv: Move, color: Color) -> bool {
    match apply_move(board, mv) {
        Ok(applied) => {
            let leaves_check = is_king_in_check(&applied.board, color);
            if leaves_check {
                trace!(from = %mv.from, to = %mv.to, "rejected: leaves king in check");
            }
            !leaves_check
        }
        Err(err) => {
            trace!(from = %mv.from, to = %mv.to, %err, "rejected: cannot apply");
            false
        }
    }
}
