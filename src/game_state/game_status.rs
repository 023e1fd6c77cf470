//! Status evaluation for the side about to move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a reply. Not terminal.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Status of the position with `to_move` about to play.
pub fn game_status(board: &Board, to_move: Color) -> GameStatus {
    let in_check = is_king_in_check(board, to_move);
    let can_move = has_any_legal_moves(board, to_move);

    match (can_move, in_check) {
        (false, true) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::InProgress,
    }
}
