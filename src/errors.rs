//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by fallible operations.
//! Every variant describes a request that was rejected; the game state the
//! request was made against is never modified.
//!
//! Usage guidelines:
//! - Coordinate and diagram variants (`OutOfBounds`, `InvalidPlacement*`) come
//!   from malformed collaborator input and are suitable for showing to users.
//! - Game-rule variants (`IllegalMove`, `NotYourTurn`, `GameOver`, promotion
//!   variants) mean the request does not fit the current game state.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Coordinates outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    /// A move was requested from a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on `square` belongs to the side not on move.
    #[error("piece on {square} is {owner:?} but {to_move:?} is to move")]
    NotYourTurn {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    /// The move is not in the legal move set of its origin square.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game already reached a terminal status.
    #[error("game is over: {0:?}")]
    GameOver(GameStatus),

    /// A promotion choice must be supplied before anything else.
    #[error("promotion on {0} is waiting for a piece choice")]
    PromotionPending(Square),

    #[error("no promotion is pending")]
    NoPromotionPending,

    /// Promotions only accept queen, rook, bishop or knight.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    /// Unknown character in a placement diagram.
    #[error("invalid placement token '{0}'")]
    InvalidPlacementToken(char),

    /// Placement diagram with the wrong number of rows or columns.
    #[error("malformed placement '{0}'")]
    InvalidPlacementForm(String),

    /// A placement diagram put a second king of one color on the board.
    #[error("more than one {0:?} king")]
    DuplicateKing(Color),

    /// Raised by the playout harness when a reached position breaks an
    /// engine invariant.
    #[error("invariant violated at ply {ply}: {detail}")]
    InvariantViolation { ply: u16, detail: String },
}
