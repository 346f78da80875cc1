//! Knight pseudo-legal generation.
//!
//! A knight's move is never colinear with a pin line, so a pinned knight
//! contributes no moves at all rather than being direction-filtered.

use crate::game_state::chess_types::{GameState, Piece, PieceKind, Square};
use crate::move_generation::attack_scan::{Pin, KNIGHT_OFFSETS};
use crate::move_generation::legal_move_shared::pin_direction_at;
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(
    state: &GameState,
    from: Square,
    pins: &[Pin],
    moves: &mut Vec<ChessMove>,
) {
    if pin_direction_at(pins, from).is_some() {
        return;
    }

    let side = state.side_to_move;
    let knight = Piece::new(side, PieceKind::Knight);

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Some(end) = from.offset(d_row, d_col) else {
            continue;
        };
        match state.board.piece_at(end) {
            Some(occupant) if occupant.color == side => {}
            _ => moves.push(ChessMove::normal(from, end, knight, &state.board)),
        }
    }
}
