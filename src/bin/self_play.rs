//! Standalone random-vs-random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --verbose`

use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::utils::match_harness::{play_match, MatchConfig};
use quince_chess::utils::render_game_state::render_game_state;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let mut white = RandomEngine::new();
    let mut black = RandomEngine::new();

    let report = play_match(
        &mut white,
        &mut black,
        &MatchConfig {
            max_plies: 200,
            ..MatchConfig::default()
        },
    )?;

    if verbose {
        for (index, notation) in report.moves.iter().enumerate() {
            if index % 2 == 0 {
                print!("{}. {notation}", index / 2 + 1);
            } else {
                println!(" {notation}");
            }
        }
        if report.plies % 2 == 1 {
            println!();
        }
    }

    println!("{}", render_game_state(&report.final_state));
    println!(
        "outcome: {:?} after {} plies ({:.3} ms per move)",
        report.outcome, report.plies, report.avg_ms_per_move
    );
    Ok(())
}
