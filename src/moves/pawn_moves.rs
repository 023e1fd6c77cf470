//! Pawn attack tables.
//!
//! A pawn attacks the two squares diagonally ahead of it whether or not they
//! are occupied; the forward push never attacks.

use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_ATTACKS: [SquareSet; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [SquareSet; 64] = generate_pawn_attacks(1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index() as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square.index() as usize],
    }
}

const fn generate_pawn_attacks(forward: i32) -> [SquareSet; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;

        table[sq] = set_if_valid(row + forward, col - 1) | set_if_valid(row + forward, col + 1);
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
