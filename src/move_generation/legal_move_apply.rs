use tracing::debug;

use crate::errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::castling::castle_squares;

/// Board produced by applying one move, with what it moved and captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl AppliedMove {
    /// Promotion the move triggered, if a pawn or chatur reached the far row.
    pub fn promotion(&self, to: Square) -> Option<PendingPromotion> {
        (self.moved.kind.promotes() && to.row() == self.moved.color.promotion_row()).then_some(
            PendingPromotion {
                square: to,
                color: self.moved.color,
            },
        )
    }
}

/// Applies `mv` to a copy of `board`. Legality is not checked here.
///
/// The moved piece (and the rook of a castle) is marked as moved. A pawn or
/// chatur reaching the far row stays what it is until a promotion is chosen.
pub fn apply_move(board: &Board, mv: Move) -> Result<AppliedMove, ChessErrors> {
    let mut next = *board;

    let moved = next.take(mv.from).ok_or(ChessErrors::EmptySquare(mv.from))?;
    let captured = next.take(mv.to);
    next.set(mv.to, Some(moved.moved()));

    if let Some(side) = mv.castling {
        let squares = castle_squares(moved.color, side);
        let rook = next
            .take(squares.rook_from)
            .filter(|rook| rook.kind == PieceKind::Rook)
            .ok_or(ChessErrors::IllegalMove {
                from: mv.from,
                to: mv.to,
            })?;
        next.set(squares.rook_to, Some(rook.moved()));
        debug!(color = ?moved.color, ?side, "castled");
    }

    Ok(AppliedMove {
        board: next,
        moved,
        captured,
    })
}
