//! Queen pseudo-legal generation: the union of the rook and bishop rays.
//!
//! Delegation keeps the pin handling in one place; a queen pinned
//! diagonally simply generates nothing during the orthogonal pass.

use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::attack_scan::Pin;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_queen_moves(
    state: &GameState,
    from: Square,
    pins: &[Pin],
    moves: &mut Vec<ChessMove>,
) {
    generate_rook_moves(state, from, pins, moves);
    generate_bishop_moves(state, from, pins, moves);
}
