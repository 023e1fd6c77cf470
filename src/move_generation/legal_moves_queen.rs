use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let own_occ = board.occupancy(piece.color);
    let attacks = queen_attacks(from, board.occupancy_all());
    push_targets(from, attacks & !own_occ, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::placement::parse_placement;

    #[test]
    fn lone_queen_in_the_centre_has_twenty_seven_moves() {
        let board = parse_placement("k7/8/8/8/3Q4/8/8/7K").unwrap();
        let from = Square::new(4, 3).unwrap();
        let mut out = Vec::new();
        generate_queen_moves(&board, from, board.get(from).unwrap(), &mut out);
        assert_eq!(out.len(), 27);
    }
}
