//! Pawn pseudo-legal generation: pushes, captures, promotion flagging, and
//! en passant with its horizontal discovered-check guard.

use crate::game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
use crate::move_generation::attack_scan::Pin;
use crate::move_generation::legal_move_shared::{pin_direction_at, stays_on_pin_line};
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(
    state: &GameState,
    from: Square,
    pins: &[Pin],
    moves: &mut Vec<ChessMove>,
) {
    let board = &state.board;
    let side = state.side_to_move;
    let pawn = Piece::new(side, PieceKind::Pawn);
    let pin = pin_direction_at(pins, from);
    let forward = side.pawn_direction();

    if let Some(one_ahead) = from.offset(forward, 0) {
        if board.piece_at(one_ahead).is_none() && stays_on_pin_line(pin, (forward, 0)) {
            moves.push(ChessMove::normal(from, one_ahead, pawn, board));

            if from.row == side.pawn_start_row() {
                if let Some(two_ahead) = from.offset(2 * forward, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        moves.push(ChessMove::normal(from, two_ahead, pawn, board));
                    }
                }
            }
        }
    }

    for side_step in [-1i8, 1i8] {
        if !stays_on_pin_line(pin, (forward, side_step)) {
            continue;
        }
        let Some(end) = from.offset(forward, side_step) else {
            continue;
        };

        match board.piece_at(end) {
            Some(occupant) if occupant.color == side.opposite() => {
                moves.push(ChessMove::normal(from, end, pawn, board));
            }
            Some(_) => {}
            None => {
                if state.en_passant_square == Some(end)
                    && en_passant_keeps_king_safe(board, state.king_square(side), side, from, end.col)
                {
                    moves.push(ChessMove::en_passant(from, end, pawn));
                }
            }
        }
    }
}

/// Guard for the horizontal discovered-check edge case: both the capturing
/// pawn and the captured pawn leave the rank at once, so a pin scan of the
/// capturing pawn alone is not enough. Walk the king's rank outward past
/// the vacated pair; an unobstructed enemy rook or queen beyond it makes
/// the capture illegal.
fn en_passant_keeps_king_safe(
    board: &Board,
    king_square: Square,
    side: Color,
    from: Square,
    captured_col: u8,
) -> bool {
    if king_square.row != from.row {
        return true;
    }

    let row = from.row;
    let enemy = side.opposite();
    let pair_min = from.col.min(captured_col);
    let pair_max = from.col.max(captured_col);

    let inside: Box<dyn Iterator<Item = u8>> = if king_square.col < pair_min {
        Box::new(king_square.col + 1..pair_min)
    } else {
        Box::new(pair_max + 1..king_square.col)
    };
    for col in inside {
        // A piece between king and pawns shields the rank; order is moot.
        if board.piece_at(Square::new(row, col)).is_some() {
            return true;
        }
    }

    let outside: Box<dyn Iterator<Item = u8>> = if king_square.col < pair_min {
        Box::new(pair_max + 1..8)
    } else {
        Box::new((0..pair_min).rev())
    };
    for col in outside {
        if let Some(piece) = board.piece_at(Square::new(row, col)) {
            let attacks_rank = piece.color == enemy
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen);
            return !attacks_rank;
        }
    }

    true
}
