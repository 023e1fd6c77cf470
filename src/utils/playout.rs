//! Seeded random self-play for validating the rules engine.
//!
//! Each game picks uniformly among the legal moves of the side to move (and
//! uniformly among promotion choices) until the game ends or the ply cap is
//! hit. After every ply the reached position is checked against the engine's
//! invariants; the first violation aborts the run with
//! `ChessErrors::InvariantViolation`.

use std::str::FromStr;

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use tracing::{debug, warn};

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

pub const GAMES_ENV: &str = "CHATUR_PLAYOUT_GAMES";
pub const SEED_ENV: &str = "CHATUR_PLAYOUT_SEED";
pub const MAX_PLIES_ENV: &str = "CHATUR_PLAYOUT_MAX_PLIES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub games: u16,
    pub base_seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 16,
            base_seed: 0x5EED,
            max_plies: 200,
        }
    }
}

impl PlayoutConfig {
    /// Defaults overridden by `CHATUR_PLAYOUT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            games: parse_or(&lookup, GAMES_ENV, defaults.games),
            base_seed: parse_or(&lookup, SEED_ENV, defaults.base_seed),
            max_plies: parse_or(&lookup, MAX_PLIES_ENV, defaults.max_plies),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, ?default, "unparseable setting, using default");
            default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    pub captures: u32,
    pub castles: u32,
    pub promotions: u32,
    pub final_state: GameState,
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSummary {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub stalemates: u16,
    pub unfinished: u16,
    pub total_plies: u32,
    pub captures: u32,
    pub castles: u32,
    pub promotions: u32,
    pub results: Vec<PlayoutResult>,
}

impl PlayoutSummary {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} stalemates={} unfinished={} plies={} captures={} castles={} promotions={}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.stalemates,
            self.unfinished,
            self.total_plies,
            self.captures,
            self.castles,
            self.promotions
        )
    }

    fn record(&mut self, result: PlayoutResult) {
        self.games += 1;
        match result.outcome {
            PlayoutOutcome::Checkmate {
                winner: Color::White,
            } => self.white_wins += 1,
            PlayoutOutcome::Checkmate {
                winner: Color::Black,
            } => self.black_wins += 1,
            PlayoutOutcome::Stalemate => self.stalemates += 1,
            PlayoutOutcome::MaxPlies => self.unfinished += 1,
        }
        self.total_plies += u32::from(result.plies);
        self.captures += result.captures;
        self.castles += result.castles;
        self.promotions += result.promotions;
        self.results.push(result);
    }
}

/// Plays one random game from the standard start.
pub fn play_random_game(seed: u64, max_plies: u16) -> Result<PlayoutResult, ChessErrors> {
    play_random_game_from_state(GameState::new_game(), seed, max_plies)
}

/// Plays one random game from `start` with an `StdRng` seeded by `seed`.
pub fn play_random_game_from_state(
    start: GameState,
    seed: u64,
    max_plies: u16,
) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = start;
    let mut plies = 0u16;
    let (mut captures, mut castles, mut promotions) = (0u32, 0u32, 0u32);

    while !state.is_game_over() && plies < max_plies {
        let legal = state.all_legal_moves();
        let Some(&mv) = legal.choose(&mut rng) else {
            return Err(ChessErrors::InvariantViolation {
                ply: plies,
                detail: format!("{:?} has no moves in a live position", state.current_turn()),
            });
        };

        let mover = state.current_turn();
        let outcome = state.apply_move(mv)?;
        captures += u32::from(outcome.captured.is_some());
        castles += u32::from(mv.castling.is_some());
        plies += 1;

        state = match outcome.promotion_pending {
            Some(pending) => {
                check_pending_promotion(&outcome.state, pending, plies)?;
                promotions += 1;
                let kind = choose_promotion_kind(&PROMOTION_CHOICES, &mut rng, plies)?;
                outcome.state.choose_promotion(kind)?
            }
            None => outcome.state,
        };

        check_invariants(&state, mover, plies)?;
    }

    let outcome = match state.status() {
        GameStatus::Checkmate { winner } => PlayoutOutcome::Checkmate { winner },
        GameStatus::Stalemate => PlayoutOutcome::Stalemate,
        GameStatus::InProgress | GameStatus::Check => PlayoutOutcome::MaxPlies,
    };
    debug!(seed, ?outcome, plies, captures, "playout finished");

    Ok(PlayoutResult {
        outcome,
        plies,
        captures,
        castles,
        promotions,
        final_state: state,
    })
}

/// Random pick among `choices`; an empty list is an error, never a default.
fn choose_promotion_kind(
    choices: &[PieceKind],
    rng: &mut StdRng,
    ply: u16,
) -> Result<PieceKind, ChessErrors> {
    choices
        .choose(rng)
        .copied()
        .ok_or_else(|| ChessErrors::InvariantViolation {
            ply,
            detail: "no promotion choices available".to_owned(),
        })
}

/// Plays `config.games` games with seeds `base_seed`, `base_seed + 1`, ...
pub fn play_random_games(config: PlayoutConfig) -> Result<PlayoutSummary, ChessErrors> {
    let mut summary = PlayoutSummary::default();
    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        summary.record(play_random_game(seed, config.max_plies)?);
    }
    Ok(summary)
}

/// Checks the position reached after `mover` completed a turn.
fn check_invariants(state: &GameState, mover: Color, ply: u16) -> Result<(), ChessErrors> {
    let violation = |detail: String| -> Result<(), ChessErrors> {
        Err(ChessErrors::InvariantViolation { ply, detail })
    };
    let board = state.board();

    for color in [Color::White, Color::Black] {
        let kings = board.count_kings(color);
        if kings > 1 {
            return violation(format!("{color:?} has {kings} kings"));
        }
    }

    if is_king_in_check(board, mover) {
        return violation(format!("{mover:?} left its own king in check"));
    }

    let to_move = state.current_turn();
    if to_move != mover.opposite() {
        return violation(format!("turn did not pass from {mover:?}"));
    }
    if matches!(state.status(), GameStatus::Check) != is_king_in_check(board, to_move)
        && !state.is_game_over()
    {
        return violation(format!("status {:?} disagrees with board", state.status()));
    }

    Ok(())
}

fn check_pending_promotion(
    state: &GameState,
    pending: PendingPromotion,
    ply: u16,
) -> Result<(), ChessErrors> {
    let on_far_row = pending.square.row() == pending.color.promotion_row();
    let promotes = state
        .board()
        .get(pending.square)
        .is_some_and(|piece| piece.color == pending.color && piece.kind.promotes());

    if on_far_row && promotes {
        Ok(())
    } else {
        Err(ChessErrors::InvariantViolation {
            ply,
            detail: format!("promotion pending on {} without a promoting piece", pending.square),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::utils::placement::parse_placement;

    #[test]
    fn config_reads_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [(GAMES_ENV, "3"), (SEED_ENV, "not-a-number")]
            .into_iter()
            .collect();
        let config = PlayoutConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.games, 3);
        assert_eq!(config.base_seed, PlayoutConfig::default().base_seed);
        assert_eq!(config.max_plies, 200);
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let first = play_random_game(42, 60).unwrap();
        let second = play_random_game(42, 60).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_games_hold_invariants() {
        let config = PlayoutConfig {
            games: 6,
            base_seed: 7,
            max_plies: 150,
        };
        let summary = play_random_games(config).unwrap();

        assert_eq!(summary.games, 6);
        assert_eq!(summary.results.len(), 6);
        assert_eq!(
            summary.white_wins + summary.black_wins + summary.stalemates + summary.unfinished,
            6
        );
        for result in &summary.results {
            assert!(result.plies <= 150);
            if result.outcome == PlayoutOutcome::MaxPlies {
                assert_eq!(result.plies, 150);
            }
        }
    }

    #[test]
    fn finished_position_plays_no_plies() {
        let board = parse_placement("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
        let start = GameState::from_board(board, Color::Black);
        let result = play_random_game_from_state(start, 1, 50).unwrap();

        assert_eq!(result.plies, 0);
        assert_eq!(
            result.outcome,
            PlayoutOutcome::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn zero_ply_cap_stops_immediately() {
        let result = play_random_game(1, 0).unwrap();
        assert_eq!(result.outcome, PlayoutOutcome::MaxPlies);
        assert_eq!(result.final_state, GameState::new_game());
    }

    #[test]
    fn promotions_are_resolved_during_playout() {
        let board = parse_placement("7k/C7/8/8/8/8/8/K7").unwrap();
        let start = GameState::from_board(board, Color::White);
        let far_square = Square::new(0, 1).unwrap();

        for seed in 0..8 {
            let result = play_random_game_from_state(start.clone(), seed, 1).unwrap();
            let state = &result.final_state;
            assert!(state.pending_promotion().is_none());

            let promoted = state.board().get(far_square);
            assert_eq!(result.promotions, u32::from(promoted.is_some()));
            if let Some(piece) = promoted {
                assert!(PROMOTION_CHOICES.contains(&piece.kind));
                assert_eq!(state.current_turn(), Color::Black);
            }
        }
    }

    #[test]
    fn promotion_pick_never_falls_back_to_a_default() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            choose_promotion_kind(&[], &mut rng, 9),
            Err(ChessErrors::InvariantViolation { ply: 9, .. })
        ));
        for _ in 0..16 {
            let kind = choose_promotion_kind(&PROMOTION_CHOICES, &mut rng, 9).unwrap();
            assert!(PROMOTION_CHOICES.contains(&kind));
        }
    }

    #[test]
    fn self_check_is_reported() {
        let board = parse_placement("4r2k/8/8/8/8/8/8/4K3").unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert!(matches!(
            check_invariants(&state, Color::White, 1),
            Err(ChessErrors::InvariantViolation { ply: 1, .. })
        ));
    }
}
