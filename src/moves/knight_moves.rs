use crate::game_state::chess_types::{Square, SquareSet};

pub const KNIGHT_ATTACKS: [SquareSet; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> SquareSet {
    KNIGHT_ATTACKS[square.index() as usize]
}

const fn generate_knight_attacks() -> [SquareSet; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row + 2, col + 1);
        attacks |= set_if_valid(row + 1, col + 2);
        attacks |= set_if_valid(row - 1, col + 2);
        attacks |= set_if_valid(row - 2, col + 1);
        attacks |= set_if_valid(row - 2, col - 1);
        attacks |= set_if_valid(row - 1, col - 2);
        attacks |= set_if_valid(row + 1, col - 2);
        attacks |= set_if_valid(row + 2, col - 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> SquareSet {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}
