//! King pseudo-legal generation, including castling.
//!
//! The king is the one piece whose generator consults the scanner itself:
//! each candidate square is probed with a hypothetical scan, relying on the
//! scanner treating friendly kings as transparent so the board never needs
//! to be edited and restored.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{GameState, Piece, PieceKind, Square};
use crate::move_generation::attack_scan::{
    scan_pins_and_checks, square_under_attack, RAY_DIRECTIONS,
};
use crate::moves::chess_move::ChessMove;

pub fn generate_king_moves(state: &GameState, from: Square, moves: &mut Vec<ChessMove>) {
    let side = state.side_to_move;
    let king = Piece::new(side, PieceKind::King);

    for &(d_row, d_col) in &RAY_DIRECTIONS {
        let Some(end) = from.offset(d_row, d_col) else {
            continue;
        };
        if let Some(occupant) = state.board.piece_at(end) {
            if occupant.color == side {
                continue;
            }
        }
        if !scan_pins_and_checks(&state.board, end, side).in_check {
            moves.push(ChessMove::normal(from, end, king, &state.board));
        }
    }
}

/// Append the castle moves currently available to the king on `from`.
///
/// Callers only invoke this when the side is not in check; the explicit
/// guard keeps the contract local. Rights imply the king and the relevant
/// rook still stand on their home squares.
pub fn generate_castle_moves(state: &GameState, from: Square, moves: &mut Vec<ChessMove>) {
    let side = state.side_to_move;
    // Rights imply the king never moved; custom setups may violate that.
    if from != Square::new(side.back_row(), 4) {
        return;
    }
    if square_under_attack(&state.board, from, side) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);

    if state.castle_rights.kingside(side) {
        let rook_home = Square::new(side.back_row(), KINGSIDE_ROOK_COL);
        let transit = [Square::new(from.row, from.col + 1), Square::new(from.row, from.col + 2)];
        if clear_and_safe(state, &transit, &transit) && state.board.piece_at(rook_home).is_some() {
            moves.push(ChessMove::castle(from, transit[1], king));
        }
    }

    if state.castle_rights.queenside(side) {
        let rook_home = Square::new(side.back_row(), QUEENSIDE_ROOK_COL);
        let between = [
            Square::new(from.row, from.col - 1),
            Square::new(from.row, from.col - 2),
            Square::new(from.row, from.col - 3),
        ];
        let transit = [between[0], between[1]];
        if clear_and_safe(state, &between, &transit) && state.board.piece_at(rook_home).is_some() {
            moves.push(ChessMove::castle(from, between[1], king));
        }
    }
}

/// All `between` squares empty and all `transit` squares unattacked. The
/// rook's path may be longer than the king's, which is why the queenside
/// b-file square must be empty but may be attacked.
fn clear_and_safe(state: &GameState, between: &[Square], transit: &[Square]) -> bool {
    between
        .iter()
        .all(|&square| state.board.piece_at(square).is_none())
        && transit
            .iter()
            .all(|&square| !square_under_attack(&state.board, square, state.side_to_move))
}

#[cfg(test)]
mod tests {
    use super::{generate_castle_moves, generate_king_moves};
    use crate::game_state::castle_rights::CastleRights;
    use crate::game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
    use crate::utils::algebraic::coordinate_to_square;

    fn sq(coordinate: &str) -> Square {
        coordinate_to_square(coordinate).expect("test coordinate should parse")
    }

    fn place(board: &mut Board, coordinate: &str, color: Color, kind: PieceKind) {
        board.place(sq(coordinate), Piece::new(color, kind));
    }

    fn castle_setup() -> Board {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, PieceKind::King);
        place(&mut board, "a1", Color::White, PieceKind::Rook);
        place(&mut board, "h1", Color::White, PieceKind::Rook);
        place(&mut board, "e8", Color::Black, PieceKind::King);
        board
    }

    #[test]
    fn king_avoids_attacked_squares_and_enemy_king_contact() {
        let mut board = Board::empty();
        place(&mut board, "e4", Color::White, PieceKind::King);
        place(&mut board, "e6", Color::Black, PieceKind::King);
        place(&mut board, "a3", Color::Black, PieceKind::Rook);

        let state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_king_moves(&state, sq("e4"), &mut moves);

        // Rank 3 is swept by the rook; d5/e5/f5 touch the black king.
        let ends: Vec<Square> = moves.iter().map(|mv| mv.end).collect();
        assert!(ends.contains(&sq("d4")));
        assert!(ends.contains(&sq("f4")));
        assert!(!ends.contains(&sq("d3")));
        assert!(!ends.contains(&sq("e3")));
        assert!(!ends.contains(&sq("f3")));
        assert!(!ends.contains(&sq("e5")));
        assert!(!ends.contains(&sq("d5")));
        assert!(!ends.contains(&sq("f5")));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn both_castles_generate_on_an_open_back_rank() {
        let state = GameState::from_board(castle_setup(), Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_castle_moves(&state, sq("e1"), &mut moves);

        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_castle));
        assert!(moves.iter().any(|mv| mv.end == sq("g1")));
        assert!(moves.iter().any(|mv| mv.end == sq("c1")));
    }

    #[test]
    fn cleared_rights_suppress_castling_on_an_open_back_rank() {
        let mut state = GameState::from_board(castle_setup(), Color::White)
            .expect("custom board should produce a state");
        state.castle_rights = CastleRights::none();

        let mut moves = Vec::new();
        generate_castle_moves(&state, sq("e1"), &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn castling_is_rejected_when_a_transit_square_is_attacked() {
        let mut board = castle_setup();
        place(&mut board, "f8", Color::Black, PieceKind::Rook);

        let state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_castle_moves(&state, sq("e1"), &mut moves);

        // f1 is swept, so only the queenside castle survives.
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end, sq("c1"));
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // A rook sweeping only b1 does not stop the queenside castle.
        let mut board = castle_setup();
        place(&mut board, "b8", Color::Black, PieceKind::Rook);

        let state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_castle_moves(&state, sq("e1"), &mut moves);
        assert!(moves.iter().any(|mv| mv.end == sq("c1")));

        // But a piece on b1 blocks it.
        let mut board = castle_setup();
        place(&mut board, "b1", Color::White, PieceKind::Knight);
        let state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_castle_moves(&state, sq("e1"), &mut moves);
        assert!(moves.iter().all(|mv| mv.end != sq("c1")));
    }

    #[test]
    fn no_castling_while_in_check() {
        let mut board = castle_setup();
        place(&mut board, "e5", Color::Black, PieceKind::Rook);

        let state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_castle_moves(&state, sq("e1"), &mut moves);
        assert!(moves.is_empty());
    }
}
