//! Perft: exhaustive legal move tree walk used to validate move generation.
//!
//! Promotions are expanded into one child per promotion choice, so a single
//! pawn or chatur move onto the far row contributes four leaves.

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::MoveOutcome;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in game_state.all_legal_moves() {
        let outcome = game_state.apply_move(mv)?;
        for child in completed_children(&outcome)? {
            if depth == 1 {
                total.merge(leaf_counts(&outcome, mv, &child));
            } else {
                total.merge(perft(&child, depth - 1)?);
            }
        }
    }

    Ok(total)
}

/// Per-root-move node counts, handy when hunting generator bugs.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Result<Vec<(Move, usize)>, ChessErrors> {
    let mut out = Vec::new();
    for mv in game_state.all_legal_moves() {
        let outcome = game_state.apply_move(mv)?;
        let mut nodes = 0;
        for child in completed_children(&outcome)? {
            nodes += perft(&child, depth.saturating_sub(1))?.nodes;
        }
        out.push((mv, nodes));
    }
    Ok(out)
}

fn completed_children(outcome: &MoveOutcome) -> Result<Vec<GameState>, ChessErrors> {
    if outcome.promotion_pending.is_none() {
        return Ok(vec![outcome.state.clone()]);
    }

    PROMOTION_CHOICES
        .iter()
        .map(|&kind| outcome.state.choose_promotion(kind))
        .collect()
}

fn leaf_counts(outcome: &MoveOutcome, mv: Move, child: &GameState) -> PerftCounts {
    let to_move = child.current_turn();
    PerftCounts {
        nodes: 1,
        captures: usize::from(outcome.captured.is_some()),
        castles: usize::from(mv.castling.is_some()),
        promotions: usize::from(outcome.promotion_pending.is_some()),
        checks: usize::from(is_king_in_check(child.board(), to_move)),
        checkmates: usize::from(matches!(child.status(), GameStatus::Checkmate { .. })),
    }
}
