//! Mailbox board model.
//!
//! `Board` is plain data: an 8x8 grid of optional pieces. It is `Copy`, so
//! simulating a move is a 64-slot copy and never touches the caller's board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{BACK_RANK, PAWN_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Variant starting position with every piece unmoved.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_row() as usize;
            let pawns = color.pawn_row() as usize;
            for col in 0..8 {
                board.squares[home][col] = Some(Piece::new(BACK_RANK[col], color));
                board.squares[pawns][col] = Some(Piece::new(PAWN_RANK[col], color));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Removes and returns whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Builder-style placement for hand-built fixtures.
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    /// Every occupied square with its piece, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupancy(&self, color: Color) -> SquareSet {
        self.pieces_of(color)
            .fold(0u64, |acc, (sq, _)| acc | sq.bit())
    }

    pub fn occupancy_all(&self) -> SquareSet {
        self.pieces().fold(0u64, |acc, (sq, _)| acc | sq.bit())
    }

    /// First king of `color` found scanning from row 0, if any.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_alternates_pawns_and_chaturs() {
        let board = Board::starting_position();
        assert_eq!(board.get(sq(6, 0)).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(board.get(sq(6, 1)).map(|p| p.kind), Some(PieceKind::Chatur));
        assert_eq!(board.get(sq(1, 6)).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(board.get(sq(1, 7)).map(|p| p.kind), Some(PieceKind::Chatur));
        assert_eq!(board.get(sq(7, 4)).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.get(sq(0, 3)).map(|p| p.kind), Some(PieceKind::Queen));
        assert_eq!(board.pieces().count(), 32);
        assert!(board.pieces().all(|(_, p)| !p.has_moved));
    }

    #[test]
    fn occupancy_splits_by_color() {
        let board = Board::starting_position();
        assert_eq!(board.occupancy(Color::Black), 0xFFFF);
        assert_eq!(board.occupancy(Color::White), 0xFFFF_u64 << 48);
        assert_eq!(board.occupancy_all().count_ones(), 32);
    }

    #[test]
    fn king_square_is_none_on_kingless_board() {
        let board = Board::empty().with(sq(3, 3), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(board.king_square(Color::White), None);
        assert_eq!(board.count_kings(Color::White), 0);
    }

    #[test]
    fn take_moves_ownership_out_of_the_square() {
        let mut board = Board::starting_position();
        let piece = board.take(sq(7, 1));
        assert_eq!(piece.map(|p| p.kind), Some(PieceKind::Knight));
        assert!(board.is_empty(sq(7, 1)));
    }
}
