use crate::game_state::chess_types::*;
use crate::move_generation::castling::generate_castling_moves;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;

/// Single steps onto empty or enemy squares, plus any eligible castles.
pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let own_occ = board.occupancy(piece.color);
    push_targets(from, king_attacks(from) & !own_occ, out);

    generate_castling_moves(board, from, piece, out);
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::placement::parse_placement;

    #[test]
    fn boxed_in_king_has_no_moves() {
        let board = Board::starting_position();
        let from = Square::new(7, 4).unwrap();
        let mut out = Vec::new();
        generate_king_moves(&board, from, board.get(from).unwrap(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn castles_are_tagged() {
        let board = parse_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let from = Square::new(7, 4).unwrap();
        let mut out = Vec::new();
        generate_king_moves(&board, from, board.get(from).unwrap(), &mut out);

        let castles: Vec<_> = out.iter().filter_map(|mv| mv.castling).collect();
        assert_eq!(castles, vec![CastleSide::Kingside, CastleSide::Queenside]);
        assert_eq!(out.len(), 5 + 2);
    }
}
