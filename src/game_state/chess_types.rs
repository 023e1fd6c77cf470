//! Value types shared by every layer of the engine.
//!
//! Board coordinates are `(row, col)` pairs where row 0 is Black's home rank
//! and row 7 is White's home rank. Squares are also addressed by a flat index
//! `row * 8 + col`, which is the bit position used by `SquareSet`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::game_status::GameStatus;

use crate::errors::ChessErrors;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single step "forward" for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding the back rank (king, rooks, ...).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row the pawns and chaturs start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which pawns and chaturs promote (the opponent's home row).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().home_row()
    }
}

/// Piece kind; color is carried separately on `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Chatur,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pawns and chaturs promote on reaching the far row.
    #[inline]
    pub const fn promotes(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Chatur)
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// A validated board coordinate, both components in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Builds a square, failing fast on coordinates off the 8x8 grid.
    pub fn new(row: u8, col: u8) -> Result<Self, ChessErrors> {
        if row > 7 || col > 7 {
            return Err(ChessErrors::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Index must be in `0..64`; used when walking `SquareSet` bits.
    #[inline]
    pub(crate) const fn from_index(index: u8) -> Self {
        Self {
            row: index / 8,
            col: index % 8,
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    #[inline]
    pub const fn bit(self) -> SquareSet {
        1u64 << self.index()
    }

    /// Square reached by stepping `(d_row, d_col)`, or `None` off the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square::from_index)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ChessErrors;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Set of squares packed into a bitboard, bit `row * 8 + col`.
pub type SquareSet = u64;

/// Iterates the members of a `SquareSet` in index order.
pub fn squares_in(set: SquareSet) -> impl Iterator<Item = Square> {
    let mut remaining = set;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let index = remaining.trailing_zeros() as u8;
        remaining &= remaining - 1;
        Some(Square::from_index(index))
    })
}

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Candidate move of the piece on `from`.
///
/// The castling tag is the only thing distinguishing a castle from a plain
/// two-square king step; appliers must dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub castling: Option<CastleSide>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castling: None,
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            from,
            to,
            castling: Some(side),
        }
    }
}

/// Promotion awaiting the collaborator's piece choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingPromotion {
    pub square: Square,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new_rejects_off_board_coordinates() {
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessErrors::OutOfBounds { row: 8, col: 0 })
        ));
        assert!(Square::new(0, 8).is_err());
    }

    #[test]
    fn offset_stays_on_the_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1).unwrap()));
    }

    #[test]
    fn squares_in_walks_bits_in_order() {
        let set = Square::new(0, 3).unwrap().bit() | Square::new(5, 1).unwrap().bit();
        let squares: Vec<_> = squares_in(set).collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 3).unwrap(), Square::new(5, 1).unwrap()]
        );
    }

    #[test]
    fn promotion_row_is_opponent_home_row() {
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn square_deserialization_validates_coordinates() {
        let square: Square = serde_json::from_str("[6, 3]").unwrap();
        assert_eq!(square, Square::new(6, 3).unwrap());
        assert!(serde_json::from_str::<Square>("[8, 3]").is_err());

        let mv = Move::new(square, Square::new(5, 2).unwrap());
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }
}
