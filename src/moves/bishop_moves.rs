use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(square, d_row, d_col, occupancy)
        })
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn bishop_in_the_centre_sees_thirteen_squares() {
        assert_eq!(bishop_attacks(sq(4, 3), 0).count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_diagonal() {
        let attacks = bishop_attacks(sq(7, 2), sq(5, 4).bit());
        assert_ne!(attacks & sq(6, 3).bit(), 0);
        assert_ne!(attacks & sq(5, 4).bit(), 0);
        assert_eq!(attacks & sq(4, 5).bit(), 0);
    }
}
