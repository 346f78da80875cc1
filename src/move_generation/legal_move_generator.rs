//! Full legal move derivation for the side to move.
//!
//! One scanner pass per query classifies the position (no check / single
//! check / double check); pseudo-legal generation is constrained by the
//! pin list and then filtered against the check data, so no apply-and-test
//! loop is needed.

use crate::game_state::chess_types::{GameState, PieceKind, Square};
use crate::move_generation::attack_scan::{scan_pins_and_checks, CheckThreat, Pin};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Every strictly legal move for `state.side_to_move`.
///
/// Also refreshes `in_check`, the terminal flags, and the cached pin and
/// check lists on the state. Castling rights are read but never written.
pub fn generate_valid_moves(state: &mut GameState) -> Vec<ChessMove> {
    let side = state.side_to_move;
    let king_square = state.king_square(side);
    let report = scan_pins_and_checks(&state.board, king_square, side);

    let mut moves = Vec::with_capacity(64);

    if report.in_check {
        if report.checks.len() == 1 {
            generate_pseudo_legal_moves(state, &report.pins, &mut moves);
            let resolutions = check_resolution_squares(state, king_square, report.checks[0]);
            moves.retain(|mv| {
                mv.piece_moved.kind == PieceKind::King || resolutions.contains(&mv.end)
            });
        } else {
            // Double check: nothing but the king can address both lines.
            generate_king_moves(state, king_square, &mut moves);
        }
    } else {
        generate_pseudo_legal_moves(state, &report.pins, &mut moves);
        generate_castle_moves(state, king_square, &mut moves);
    }

    state.in_check = report.in_check;
    state.pins = report.pins;
    state.checks = report.checks;

    if moves.is_empty() {
        state.checkmate = state.in_check;
        state.stalemate = !state.in_check;
    } else {
        state.checkmate = false;
        state.stalemate = false;
    }

    moves
}

/// Pin-constrained pseudo-legal moves for every piece of the side to move,
/// dispatched exhaustively by kind.
fn generate_pseudo_legal_moves(state: &GameState, pins: &[Pin], moves: &mut Vec<ChessMove>) {
    for (square, piece) in state.board.occupied() {
        if piece.color != state.side_to_move {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(state, square, pins, moves),
            PieceKind::Knight => generate_knight_moves(state, square, pins, moves),
            PieceKind::Bishop => generate_bishop_moves(state, square, pins, moves),
            PieceKind::Rook => generate_rook_moves(state, square, pins, moves),
            PieceKind::Queen => generate_queen_moves(state, square, pins, moves),
            PieceKind::King => generate_king_moves(state, square, moves),
        }
    }
}

/// Squares a non-king move may land on to neutralize a single checker: the
/// checker's own square, plus — for a sliding checker — every square on
/// the ray strictly between it and the king.
fn check_resolution_squares(
    state: &GameState,
    king_square: Square,
    check: CheckThreat,
) -> Vec<Square> {
    let is_knight = state
        .board
        .piece_at(check.attacker)
        .map(|piece| piece.kind == PieceKind::Knight)
        .unwrap_or(false);
    if is_knight {
        return vec![check.attacker];
    }

    let mut squares = Vec::new();
    for step in 1..8i8 {
        let Some(square) = king_square.offset(check.direction.0 * step, check.direction.1 * step)
        else {
            break;
        };
        squares.push(square);
        if square == check.attacker {
            break;
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
    use crate::move_generation::attack_scan::scan_pins_and_checks;
    use crate::moves::chess_move::ChessMove;
    use crate::utils::algebraic::coordinate_to_square;

    fn sq(coordinate: &str) -> Square {
        coordinate_to_square(coordinate).expect("test coordinate should parse")
    }

    fn place(board: &mut Board, coordinate: &str, color: Color, kind: PieceKind) {
        board.place(sq(coordinate), Piece::new(color, kind));
    }

    fn play(state: &mut GameState, from: &str, to: &str) {
        let mv = ChessMove::new(sq(from), sq(to), &state.board)
            .expect("start square should hold a piece");
        let legal = state.valid_moves();
        let mv = *legal
            .iter()
            .find(|candidate| **candidate == mv)
            .expect("scripted move should be legal");
        state.make_move(mv);
    }

    #[test]
    fn the_starting_position_has_exactly_twenty_moves() {
        let mut state = GameState::new_game();
        assert_eq!(state.valid_moves().len(), 20);
        assert!(!state.in_check);
        assert!(!state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn no_legal_move_leaves_the_mover_in_check() {
        let mut state = GameState::new_game();
        // A short tactical line producing pins and checks along the way.
        for (from, to) in [
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "b5"),
            ("g8", "f6"),
        ] {
            play(&mut state, from, to);
        }

        let side = state.side_to_move;
        for mv in state.valid_moves() {
            state.make_move(mv);
            let report =
                scan_pins_and_checks(&state.board, state.king_square(side), side);
            assert!(
                !report.in_check,
                "{mv} leaves the {side:?} king attacked"
            );
            state.undo_move();
        }
    }

    #[test]
    fn single_check_restricts_non_king_moves_to_resolution_squares() {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, PieceKind::King);
        place(&mut board, "h3", Color::White, PieceKind::Queen);
        place(&mut board, "e8", Color::Black, PieceKind::Rook);
        place(&mut board, "a8", Color::Black, PieceKind::King);

        let mut state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let moves = state.valid_moves();

        assert!(state.in_check);
        // The queen's only useful squares are the e-file blocks it can
        // actually reach: e3 along the rank and e6 along the diagonal.
        let queen_ends: Vec<Square> = moves
            .iter()
            .filter(|mv| mv.piece_moved.kind == PieceKind::Queen)
            .map(|mv| mv.end)
            .collect();
        assert_eq!(queen_ends.len(), 2);
        assert!(queen_ends.contains(&sq("e3")));
        assert!(queen_ends.contains(&sq("e6")));
    }

    #[test]
    fn knight_check_can_only_be_answered_by_capture_or_king_move() {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, PieceKind::King);
        place(&mut board, "h3", Color::White, PieceKind::Rook);
        place(&mut board, "d3", Color::Black, PieceKind::Knight);
        place(&mut board, "a8", Color::Black, PieceKind::King);

        let mut state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let moves = state.valid_moves();

        assert!(state.in_check);
        for mv in &moves {
            assert!(
                mv.piece_moved.kind == PieceKind::King || mv.end == sq("d3"),
                "{mv} neither moves the king nor captures the knight"
            );
        }
        assert!(moves.iter().any(|mv| mv.end == sq("d3") && mv.is_capture()));
    }

    #[test]
    fn double_check_permits_only_king_moves() {
        let mut board = Board::empty();
        place(&mut board, "e8", Color::Black, PieceKind::King);
        place(&mut board, "d8", Color::Black, PieceKind::Queen);
        place(&mut board, "e1", Color::White, PieceKind::Rook);
        place(&mut board, "f6", Color::White, PieceKind::Knight);
        place(&mut board, "h1", Color::White, PieceKind::King);

        let mut state = GameState::from_board(board, Color::Black)
            .expect("custom board should produce a state");
        let moves = state.valid_moves();

        assert!(state.in_check);
        assert_eq!(state.checks.len(), 2);
        assert!(!moves.is_empty());
        assert!(moves
            .iter()
            .all(|mv| mv.piece_moved.kind == PieceKind::King));
    }

    #[test]
    fn fools_mate_sets_checkmate_and_not_stalemate() {
        let mut state = GameState::new_game();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            play(&mut state, from, to);
        }

        assert!(state.valid_moves().is_empty());
        assert!(state.in_check);
        assert!(state.checkmate);
        assert!(!state.stalemate);

        // Undo re-opens the game.
        state.undo_move();
        assert!(!state.checkmate);
        assert!(!state.valid_moves().is_empty());
    }

    #[test]
    fn a_cornered_king_with_no_moves_is_stalemated() {
        let mut board = Board::empty();
        place(&mut board, "a8", Color::Black, PieceKind::King);
        place(&mut board, "b6", Color::White, PieceKind::Queen);
        place(&mut board, "h1", Color::White, PieceKind::King);

        let mut state = GameState::from_board(board, Color::Black)
            .expect("custom board should produce a state");

        assert!(state.valid_moves().is_empty());
        assert!(!state.in_check);
        assert!(state.stalemate);
        assert!(!state.checkmate);
    }

    #[test]
    fn generation_leaves_castling_rights_untouched() {
        let mut state = GameState::new_game();
        let before = state.castle_rights;
        let _ = state.valid_moves();
        assert_eq!(state.castle_rights, before);
    }
}
