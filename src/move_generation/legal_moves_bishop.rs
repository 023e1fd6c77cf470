use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let own_occ = board.occupancy(piece.color);
    let attacks = bishop_attacks(from, board.occupancy_all());
    push_targets(from, attacks & !own_occ, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_bishop_is_boxed_in_by_chaturs() {
        let board = Board::starting_position();
        let from = Square::new(7, 2).unwrap();
        let mut out = Vec::new();
        generate_bishop_moves(&board, from, board.get(from).unwrap(), &mut out);
        assert!(out.is_empty());
    }
}
