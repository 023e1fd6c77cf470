use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let own_occ = board.occupancy(piece.color);
    push_targets(from, knight_attacks(from) & !own_occ, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_knight_skips_own_chatur() {
        let board = Board::starting_position();
        let from = Square::new(7, 1).unwrap();
        let mut out = Vec::new();
        generate_knight_moves(&board, from, board.get(from).unwrap(), &mut out);
        let targets: Vec<_> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(
            targets,
            vec![Square::new(5, 0).unwrap(), Square::new(5, 2).unwrap()]
        );
    }
}
