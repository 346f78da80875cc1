//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used as the
//! arbitrary-move fallback, for diagnostics, and for self-play testing.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        // Private copy: legal-move derivation refreshes flags on the state
        // and the caller's instance stays untouched.
        let mut scratch = game_state.clone();
        let legal_moves = scratch.valid_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::GameState;

    #[test]
    fn picks_a_member_of_the_legal_set_without_mutating_the_caller() {
        let state = GameState::new_game();
        let mut engine = RandomEngine::new();

        let output = engine
            .choose_move(&state, &GoParams::default())
            .expect("random engine should always answer");
        let chosen = output.best_move.expect("startpos has legal moves");

        let mut verify = state.clone();
        assert!(verify.valid_moves().contains(&chosen));
        assert!(state.history.is_empty());
        assert_eq!(state.side_to_move, GameState::new_game().side_to_move);
    }
}
