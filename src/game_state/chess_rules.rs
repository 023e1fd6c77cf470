//! Canonical rule constants for the chatur variant.
//!
//! Starting layout, castling geometry and promotion choices live here so the
//! board setup, move generators and diagram utilities agree on them.

use crate::game_state::chess_types::PieceKind;

/// Back rank layout from column 0 to column 7, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Second rank: pawns and chaturs alternate, pawn on column 0.
pub const PAWN_RANK: [PieceKind; 8] = [
    PieceKind::Pawn,
    PieceKind::Chatur,
    PieceKind::Pawn,
    PieceKind::Chatur,
    PieceKind::Pawn,
    PieceKind::Chatur,
    PieceKind::Pawn,
    PieceKind::Chatur,
];

/// Starting position as a placement diagram, row 0 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pcpcpcpc/8/8/8/8/PCPCPCPC/RNBQKBNR";

/// Pieces a pawn or chatur may become. There is no default choice.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;
