use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::rook_moves::rook_attacks;

/// Slides until the edge, stopping on an enemy (capture) or before a friend.
pub fn generate_rook_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let own_occ = board.occupancy(piece.color);
    let attacks = rook_attacks(from, board.occupancy_all());
    push_targets(from, attacks & !own_occ, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::placement::parse_placement;

    #[test]
    fn rook_captures_enemy_and_stops_before_friend() {
        let board = parse_placement("4k3/8/8/p6R/8/8/7P/4K3").unwrap();
        let from = Square::new(3, 7).unwrap();
        let mut out = Vec::new();
        generate_rook_moves(&board, from, board.get(from).unwrap(), &mut out);
        let targets: Vec<_> = out.iter().map(|mv| mv.to).collect();

        assert!(targets.contains(&Square::new(3, 0).unwrap()));
        assert!(targets.contains(&Square::new(0, 7).unwrap()));
        assert!(targets.contains(&Square::new(5, 7).unwrap()));
        assert!(!targets.contains(&Square::new(6, 7).unwrap()));
        assert_eq!(targets.len(), 7 + 3 + 2);
    }
}
