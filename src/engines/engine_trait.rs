//! The interface boundary toward external move-search collaborators.
//!
//! The rules engine hands a search an immutable reference to the state;
//! `GameState` is `Clone`, so a search that wants to explore applies moves
//! to its own private copy. A `None` best move means "no move chosen" and
//! callers fall back to picking any legal move arbitrarily.

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
