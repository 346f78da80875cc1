//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::{Board, Color, Piece, Square};
use crate::move_generation::attack_scan::Pin;
use crate::moves::chess_move::ChessMove;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The pin line touching `square`, if any. Directions point from the king
/// toward the pinning piece.
#[inline]
pub fn pin_direction_at(pins: &[Pin], square: Square) -> Option<(i8, i8)> {
    pins.iter()
        .find(|pin| pin.square == square)
        .map(|pin| pin.direction)
}

/// Whether a move along `direction` keeps a piece on its pin line (either
/// toward the pinner or back toward the king).
#[inline]
pub fn stays_on_pin_line(pin: Option<(i8, i8)>, direction: (i8, i8)) -> bool {
    match pin {
        None => true,
        Some((pin_row, pin_col)) => {
            direction == (pin_row, pin_col) || direction == (-pin_row, -pin_col)
        }
    }
}

/// Ray-cast generation shared by rook, bishop, and queen: walk each
/// direction up to seven squares, stopping before a friendly piece and on
/// (inclusive of) an enemy piece.
pub fn generate_slider_moves(
    board: &Board,
    from: Square,
    piece_moved: Piece,
    directions: &[(i8, i8)],
    pins: &[Pin],
    moves: &mut Vec<ChessMove>,
) {
    let pin = pin_direction_at(pins, from);
    let enemy: Color = piece_moved.color.opposite();

    for &direction in directions {
        if !stays_on_pin_line(pin, direction) {
            continue;
        }
        for step in 1..8i8 {
            let Some(end) = from.offset(direction.0 * step, direction.1 * step) else {
                break;
            };
            match board.piece_at(end) {
                None => moves.push(ChessMove::normal(from, end, piece_moved, board)),
                Some(occupant) if occupant.color == enemy => {
                    moves.push(ChessMove::normal(from, end, piece_moved, board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
