//! Castling eligibility and geometry.
//!
//! Eligibility is read straight from the pieces' `has_moved` flags; there is no
//! separate castling-rights record to keep in sync.

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};

/// Squares touched by one castle of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

pub fn castle_squares(color: Color, side: CastleSide) -> CastleSquares {
    let row = color.home_row();
    let (rook_col, king_to_col, rook_to_col) = match side {
        CastleSide::Kingside => (
            KINGSIDE_ROOK_COL,
            KINGSIDE_KING_TARGET_COL,
            KINGSIDE_ROOK_TARGET_COL,
        ),
        CastleSide::Queenside => (
            QUEENSIDE_ROOK_COL,
            QUEENSIDE_KING_TARGET_COL,
            QUEENSIDE_ROOK_TARGET_COL,
        ),
    };

    CastleSquares {
        king_from: home_square(row, KING_HOME_COL),
        king_to: home_square(row, king_to_col),
        rook_from: home_square(row, rook_col),
        rook_to: home_square(row, rook_to_col),
    }
}

/// Whether the king of `color` on `king_square` may castle toward `side`.
///
/// Requires an unmoved king on its home square, an unmoved rook of the same
/// color in the matching corner, every square strictly between them empty,
/// and the king safe on its start, middle and destination squares. Safety on
/// the later squares is tested by simulating the king standing there.
pub fn can_castle(board: &Board, king_square: Square, color: Color, side: CastleSide) -> bool {
    let squares = castle_squares(color, side);
    if king_square != squares.king_from {
        return false;
    }

    let Some(king) = board.get(king_square) else {
        return false;
    };
    if king.kind != PieceKind::King || king.color != color || king.has_moved {
        return false;
    }

    let rook_ok = matches!(
        board.get(squares.rook_from),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
    );
    if !rook_ok {
        return false;
    }

    let row = color.home_row();
    let (low, high) = ordered(squares.king_from.col(), squares.rook_from.col());
    let path_clear = (low + 1..high).all(|col| board.is_empty(home_square(row, col)));
    if !path_clear {
        return false;
    }

    if is_square_attacked(board, king_square, color) {
        return false;
    }

    let step: i8 = if squares.king_to.col() > squares.king_from.col() {
        1
    } else {
        -1
    };
    let mut current = king_square;
    while current != squares.king_to {
        let Some(next) = current.offset(0, step) else {
            return false;
        };
        if king_lands_in_check(board, king_square, next, king) {
            return false;
        }
        current = next;
    }

    true
}

/// Pushes tagged castle moves for an unmoved king that is not in check.
pub(crate) fn generate_castling_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    if king.has_moved || is_square_attacked(board, from, king.color) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if can_castle(board, from, king.color, side) {
            let squares = castle_squares(king.color, side);
            out.push(Move::castle(from, squares.king_to, side));
        }
    }
}

fn king_lands_in_check(board: &Board, from: Square, to: Square, king: Piece) -> bool {
    let mut scratch = *board;
    scratch.set(from, None);
    scratch.set(to, Some(king));
    is_king_in_check(&scratch, king.color)
}

fn home_square(row: u8, col: u8) -> Square {
    Square::from_index(row * 8 + col)
}

fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
