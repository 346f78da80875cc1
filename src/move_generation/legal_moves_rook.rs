//! Rook pseudo-legal generation over the four orthogonal rays.

use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::attack_scan::Pin;
use crate::move_generation::legal_move_shared::{generate_slider_moves, ORTHOGONAL_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(
    state: &GameState,
    from: Square,
    pins: &[Pin],
    moves: &mut Vec<ChessMove>,
) {
    let Some(piece) = state.board.piece_at(from) else {
        return;
    };
    generate_slider_moves(
        &state.board,
        from,
        piece,
        &ORTHOGONAL_DIRECTIONS,
        pins,
        moves,
    );
}
