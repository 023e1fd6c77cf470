//! Game state machine.
//!
//! `GameState` is an immutable value between calls: every operation takes
//! `&self` and returns a new state, so a rejected request leaves the caller's
//! state exactly as it was. The collaborator owns the current instance and
//! threads it through calls.
//!
//! Turn flow: `apply_move` either completes the turn (the side to move flips
//! and the status is re-evaluated) or, when a pawn or chatur reaches the far
//! row, suspends it behind a `PendingPromotion`. Only `choose_promotion` can
//! complete a suspended turn.

use tracing::{debug, info, warn};

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::game_status;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{attackers_to_square, king_square};
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Color,
    status: GameStatus,
    pending_promotion: Option<PendingPromotion>,
    ply: u16,
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub captured: Option<Piece>,
    /// Set when the move stopped on the far row and awaits a piece choice.
    pub promotion_pending: Option<PendingPromotion>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard variant starting position, White to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Wraps an arbitrary board with `to_move` on turn and evaluates its status.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            status: game_status(&board, to_move),
            board,
            current_turn: to_move,
            pending_promotion: None,
            ply: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Half-moves completed so far.
    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    /// Legal moves of the piece on `(row, col)`, failing on off-board input.
    pub fn legal_moves_at(&self, row: u8, col: u8) -> Result<Vec<Move>, ChessErrors> {
        let from = Square::new(row, col)?;
        Ok(legal_moves(&self.board, from))
    }

    /// Legal moves of the side to move; empty once the game is over or while a
    /// promotion choice is outstanding.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        all_legal_moves(&self.board, self.current_turn)
    }

    /// Applies the legal move from `from` landing on `to`.
    ///
    /// A castle is found by its king destination, so callers never build the
    /// castling tag themselves.
    pub fn make_move(&self, from: Square, to: Square) -> Result<MoveOutcome, ChessErrors> {
        let mv = legal_moves(&self.board, from)
            .into_iter()
            .find(|mv| mv.to == to)
            .unwrap_or(Move::new(from, to));
        self.apply_move(mv)
    }

    /// Applies `mv` for the side to move.
    ///
    /// Rejected when the game is over, a promotion is outstanding, the origin
    /// is empty or holds an opponent's piece, or `mv` is not in the legal move
    /// list of its origin.
    pub fn apply_move(&self, mv: Move) -> Result<MoveOutcome, ChessErrors> {
        self.validate_move(mv).inspect_err(|err| {
            warn!(from = %mv.from, to = %mv.to, %err, "move rejected");
        })?;

        let applied = apply_move(&self.board, mv)?;
        debug!(
            color = ?self.current_turn,
            piece = ?applied.moved.kind,
            from = %mv.from,
            to = %mv.to,
            captured = ?applied.captured.map(|p| p.kind),
            "move applied"
        );

        let mut next = self.clone();
        next.board = applied.board;

        let promotion_pending = applied.promotion(mv.to);
        match promotion_pending {
            Some(pending) => {
                debug!(square = %pending.square, color = ?pending.color, "promotion pending");
                next.pending_promotion = Some(pending);
            }
            None => next.finish_turn(),
        }

        Ok(MoveOutcome {
            state: next,
            captured: applied.captured,
            promotion_pending,
        })
    }

    /// Completes a suspended promotion with `kind` and finishes the turn.
    pub fn choose_promotion(&self, kind: PieceKind) -> Result<GameState, ChessErrors> {
        let pending = self.pending_promotion.ok_or(ChessErrors::NoPromotionPending)?;
        if !PROMOTION_CHOICES.contains(&kind) {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }

        let mut next = self.clone();
        next.board.set(
            pending.square,
            Some(Piece {
                kind,
                color: pending.color,
                has_moved: true,
            }),
        );
        next.pending_promotion = None;
        debug!(square = %pending.square, ?kind, "promoted");
        next.finish_turn();

        Ok(next)
    }

    fn validate_move(&self, mv: Move) -> Result<(), ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameOver(self.status));
        }
        if let Some(pending) = self.pending_promotion {
            return Err(ChessErrors::PromotionPending(pending.square));
        }

        let piece = self
            .board
            .get(mv.from)
            .ok_or(ChessErrors::EmptySquare(mv.from))?;
        if piece.color != self.current_turn {
            return Err(ChessErrors::NotYourTurn {
                square: mv.from,
                owner: piece.color,
                to_move: self.current_turn,
            });
        }

        if !legal_moves(&self.board, mv.from).contains(&mv) {
            return Err(ChessErrors::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        Ok(())
    }

    fn finish_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();
        self.ply = self.ply.saturating_add(1);
        self.status = game_status(&self.board, self.current_turn);

        match self.status {
            GameStatus::Check => {
                if let Some(king) = king_square(&self.board, self.current_turn) {
                    let checkers =
                        attackers_to_square(&self.board, king, self.current_turn.opposite());
                    debug!(color = ?self.current_turn, ?checkers, "in check");
                }
            }
            GameStatus::Checkmate { winner } => {
                info!(?winner, ply = self.ply, "checkmate");
            }
            GameStatus::Stalemate => {
                info!(ply = self.ply, "stalemate");
            }
            GameStatus::InProgress => {}
        }
    }
}
