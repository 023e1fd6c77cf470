use crate::game_state::chess_types::{Square, SquareSet};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a rook on `square` reaches, including the first blocker on each ray.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(square, d_row, d_col, occupancy)
        })
}

/// Walks one direction until the board edge or the first occupied square.
pub(crate) fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: SquareSet) -> SquareSet {
    let mut attacks = 0u64;
    let mut current = square.offset(d_row, d_col);

    while let Some(target) = current {
        let bit = target.bit();
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        current = target.offset(d_row, d_col);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        assert_eq!(rook_attacks(sq(4, 3), 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let blocker = sq(4, 0).bit();
        let attacks = rook_attacks(sq(7, 0), blocker);

        assert_ne!(attacks & sq(4, 0).bit(), 0);
        assert_eq!(attacks & sq(3, 0).bit(), 0);
    }
}
