//! Crate root module declarations for the chatur chess rules engine.
//!
//! The engine validates and applies moves for a chess variant in which the
//! second rank alternates pawns with chaturs, pieces that step diagonally
//! forward and capture straight ahead. Subsystems are grouped the same way
//! throughout: value types and the game state machine, per-piece attack
//! tables, legal move generation, and utilities for diagrams, rendering and
//! random self-play.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chatur_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_chatur;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod placement;
    pub mod playout;
    pub mod render_game_state;
}

pub use errors::ChessErrors;
pub use game_state::chess_types::{
    Board, CastleSide, Color, GameState, GameStatus, Move, Piece, PieceKind, Square,
};
