//! Chatur attack tables.
//!
//! The chatur is the mirror image of a pawn: it walks diagonally forward and
//! attacks only the single square straight ahead of it.

use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_CHATUR_ATTACKS: [SquareSet; 64] = generate_chatur_attacks(-1);
pub const BLACK_CHATUR_ATTACKS: [SquareSet; 64] = generate_chatur_attacks(1);

#[inline]
pub const fn chatur_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => WHITE_CHATUR_ATTACKS[square.index() as usize],
        Color::Black => BLACK_CHATUR_ATTACKS[square.index() as usize],
    }
}

const fn generate_chatur_attacks(forward: i32) -> [SquareSet; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + forward;
        let col = sq % 8;

        if row >= 0 && row <= 7 {
            table[sq] = 1u64 << ((row as usize) * 8 + col);
        }
        sq += 1;
    }

    table
}
