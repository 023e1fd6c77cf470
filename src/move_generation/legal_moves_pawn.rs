use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::pawn_moves::pawn_attacks;

/// Forward pushes onto empty squares, the double push from the starting row,
/// and diagonal captures. There is no en-passant.
pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let side = piece.color;
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(Move::new(from, one_step));

            if from.row() == side.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    let enemy_occ = board.occupancy(side.opposite());
    push_targets(from, pawn_attacks(side, from) & enemy_occ, out);
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::placement::parse_placement;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn targets(board: &Board, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        generate_pawn_moves(board, from, board.get(from).unwrap(), &mut out);
        let mut squares: Vec<_> = out.iter().map(|mv| mv.to).collect();
        squares.sort();
        squares
    }

    #[test]
    fn pawn_on_starting_row_has_single_and_double_push() {
        let board = Board::starting_position();
        assert_eq!(targets(&board, sq(6, 4)), vec![sq(4, 4), sq(5, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = parse_placement("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
        assert!(targets(&board, sq(6, 4)).is_empty());
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let board = parse_placement("4k3/8/8/8/4n3/8/4P3/4K3").unwrap();
        assert_eq!(targets(&board, sq(6, 4)), vec![sq(5, 4)]);
    }

    #[test]
    fn double_push_only_depends_on_the_row() {
        let mut board = Board::starting_position();
        let pawn = board.get(sq(6, 4)).unwrap();
        board.set(sq(6, 4), Some(pawn.moved()));
        assert_eq!(targets(&board, sq(6, 4)), vec![sq(4, 4), sq(5, 4)]);
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_enemies() {
        let board = parse_placement("4k3/8/8/8/8/3p1N2/4P3/4K3").unwrap();
        assert_eq!(targets(&board, sq(6, 4)), vec![sq(4, 4), sq(5, 3), sq(5, 4)]);
    }

    fn mirrored(board: &Board) -> Board {
        board.pieces().fold(Board::empty(), |acc, (square, piece)| {
            let flipped = Piece {
                color: piece.color.opposite(),
                ..piece
            };
            acc.with(sq(7 - square.row(), square.col()), flipped)
        })
    }

    #[test]
    fn black_pawn_mirrors_white() {
        for placement in [
            "rnbqkbnr/pcpcpcpc/8/8/8/8/PCPCPCPC/RNBQKBNR",
            "4k3/8/8/8/4n3/3p1N2/4P3/4K3",
            "4k3/8/2r1b3/3P4/8/8/8/4K3",
        ] {
            let board = parse_placement(placement).unwrap();
            let flipped = mirrored(&board);

            for (from, piece) in board.pieces_of(Color::White) {
                if piece.kind != PieceKind::Pawn {
                    continue;
                }
                let mut white: Vec<_> = targets(&board, from)
                    .iter()
                    .map(|s| sq(7 - s.row(), s.col()))
                    .collect();
                white.sort();
                let black = targets(&flipped, sq(7 - from.row(), from.col()));
                assert_eq!(white, black, "{placement} {from}");
            }
        }
    }
}
