//! Attack and check oracle.
//!
//! Every query scans the occupied squares of the attacking side and tests its
//! attack set, so one call costs O(64 x attack generation). The legality filter
//! calls `is_king_in_check` once per candidate move, which makes this the
//! dominant cost of full move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::attack_set;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// True when `color`'s king is attacked. A board without that king is never
/// in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// True when any piece of the side opposing `defending_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, defending_color: Color) -> bool {
    let occupancy = board.occupancy_all();
    let target_mask = square.bit();

    board
        .pieces_of(defending_color.opposite())
        .any(|(from, piece)| attack_set(from, piece, occupancy) & target_mask != 0)
}

/// Every piece of `attacker_color` attacking `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let occupancy = board.occupancy_all();
    let target_mask = square.bit();

    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| attack_set(*from, *piece, occupancy) & target_mask != 0)
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}
