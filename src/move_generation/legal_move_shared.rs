//! Dispatch from piece kind to its move and attack generators.
//!
//! One match arm per kind keeps the set of pieces closed; adding a kind is a
//! compile error everywhere a rule is missing.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_chatur::generate_chatur_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chatur_moves::chatur_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Pseudo-legal moves of whatever stands on `from`; empty for an empty square.
///
/// Moves that leave the mover's own king in check are still included.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    let Some(piece) = board.get(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut out),
        PieceKind::Chatur => generate_chatur_moves(board, from, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece, &mut out),
    }

    out
}

/// Squares threatened by `piece` standing on `from`.
///
/// Equals the move set for sliders and knights. Pawns and chaturs threaten
/// their capture squares regardless of occupancy; kings their neighbours.
#[inline]
pub fn attack_set(from: Square, piece: Piece, occupancy: SquareSet) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from),
        PieceKind::Chatur => chatur_attacks(piece.color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::King => king_attacks(from),
    }
}

/// Pushes a plain move from `from` to every member of `targets`.
#[inline]
pub(crate) fn push_targets(from: Square, targets: SquareSet, out: &mut Vec<Move>) {
    out.extend(squares_in(targets).map(|to| Move::new(from, to)));
}
