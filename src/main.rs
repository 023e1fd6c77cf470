//! Random self-play smoke runner.
//!
//! Run with:
//! `cargo run --release --bin chatur_playout`
//! `CHATUR_PLAYOUT_GAMES=100 RUST_LOG=debug cargo run --release --bin chatur_playout`
//!
//! Add `--show-final` to print the last game's final position.

use chatur_chess::utils::playout::{play_random_games, PlayoutConfig};
use chatur_chess::utils::render_game_state::render_game_state;
use chatur_chess::ChessErrors;

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatur_chess=info,chatur_playout=info".into()),
        )
        .init();

    let show_final = std::env::args().any(|a| a == "--show-final");
    let config = PlayoutConfig::from_env();
    tracing::info!(
        games = config.games,
        base_seed = config.base_seed,
        max_plies = config.max_plies,
        "starting random playouts"
    );

    let summary = play_random_games(config).inspect_err(|err| {
        tracing::error!(%err, "playout aborted");
    })?;

    println!("{}", summary.report());
    if show_final {
        if let Some(last) = summary.results.last() {
            println!("{}", render_game_state(&last.final_state));
        }
    }

    Ok(())
}
