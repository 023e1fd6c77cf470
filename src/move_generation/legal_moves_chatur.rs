use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::chatur_moves::chatur_attacks;

/// Diagonal steps onto empty squares and the straight-ahead capture.
///
/// The double diagonal step needs the chatur on its starting row and still
/// unmoved, with both squares along the diagonal empty. Pawns only check the
/// row.
pub fn generate_chatur_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let side = piece.color;
    let forward = side.forward();
    let can_double = !piece.has_moved && from.row() == side.pawn_row();

    for d_col in [-1i8, 1i8] {
        let Some(one_step) = from.offset(forward, d_col) else {
            continue;
        };
        if !board.is_empty(one_step) {
            continue;
        }
        out.push(Move::new(from, one_step));

        if can_double {
            if let Some(two_step) = one_step.offset(forward, d_col) {
                if board.is_empty(two_step) {
                    out.push(Move::new(from, two_step));
                }
            }
        }
    }

    let enemy_occ = board.occupancy(side.opposite());
    push_targets(from, chatur_attacks(side, from) & enemy_occ, out);
}
