//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a private
//! `GameState`, with an optional seeded random opening prefix so repeated
//! runs diverge reproducibly. Draw detection is limited to stalemate and
//! the ply cap; repetition and fifty-move accounting are out of scope for
//! the rules core.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::{Color, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Plies played as uniformly random legal moves before the engines
    /// take over.
    pub opening_plies: u8,
    pub seed: u64,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_plies: 4,
            seed: 1234,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub plies: u16,
    /// Minimal algebraic notation of every move played, oldest first.
    pub moves: Vec<String>,
    pub avg_ms_per_move: f64,
    pub final_state: GameState,
}

/// Play one game between `white` and `black` and report how it ended.
///
/// The shared lifetime lets the turn loop reborrow whichever engine is on
/// the move through one binding.
pub fn play_match<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchReport, String> {
    let mut state = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut moves = Vec::new();

    white.new_game();
    black.new_game();

    let started = Instant::now();
    let mut plies = 0u16;
    let outcome = loop {
        let legal = state.valid_moves();
        if legal.is_empty() {
            break if state.checkmate {
                // The side to move is the one that got mated.
                match state.side_to_move {
                    Color::White => MatchOutcome::BlackWinCheckmate,
                    Color::Black => MatchOutcome::WhiteWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
        }
        if plies >= config.max_plies {
            break MatchOutcome::DrawMaxPlies;
        }

        let chosen = if plies < u16::from(config.opening_plies) {
            legal
                .as_slice()
                .choose(&mut rng)
                .copied()
                .ok_or("opening selection from a non-empty move list failed")?
        } else {
            let engine = match state.side_to_move {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let output = engine.choose_move(&state, &config.go_params)?;
            match output.best_move {
                Some(mv) => {
                    if !legal.contains(&mv) {
                        return Err(format!(
                            "{} returned a move outside the legal set: {mv}",
                            engine.name()
                        ));
                    }
                    mv
                }
                // "No move" from the search: fall back to an arbitrary
                // legal move.
                None => legal
                    .as_slice()
                    .choose(&mut rng)
                    .copied()
                    .ok_or("fallback selection from a non-empty move list failed")?,
            }
        };

        moves.push(chosen.to_string());
        state.make_move(chosen);
        plies += 1;
    };

    let elapsed = started.elapsed();
    let avg_ms_per_move = if plies == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() * 1000.0 / f64::from(plies)
    };

    Ok(MatchReport {
        outcome,
        plies,
        moves,
        avg_ms_per_move,
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::{play_match, MatchConfig};
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_self_play_terminates_and_logs_every_ply() {
        let mut white = RandomEngine::new();
        let mut black = RandomEngine::new();
        let config = MatchConfig {
            max_plies: 60,
            ..MatchConfig::default()
        };

        let report = play_match(&mut white, &mut black, &config)
            .expect("random self-play should not error");
        assert!(report.plies <= 60);
        assert_eq!(report.moves.len(), usize::from(report.plies));
        assert_eq!(
            usize::from(report.plies),
            report.final_state.history.len()
        );
    }

    #[test]
    fn both_engines_are_consulted_without_an_opening_prefix() {
        let mut white = RandomEngine::new();
        let mut black = RandomEngine::new();
        let config = MatchConfig {
            max_plies: 10,
            opening_plies: 0,
            ..MatchConfig::default()
        };

        // From ply one the turn loop alternates between the two engine
        // borrows; ten plies gives each side several turns.
        let report = play_match(&mut white, &mut black, &config)
            .expect("engine-driven self-play should not error");
        assert_eq!(report.plies, 10);
        assert_eq!(report.moves.len(), 10);
    }
}
