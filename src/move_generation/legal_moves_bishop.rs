//! Bishop pseudo-legal generation over the four diagonal rays.

use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::attack_scan::Pin;
use crate::move_generation::legal_move_shared::{generate_slider_moves, DIAGONAL_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
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
        &DIAGONAL_DIRECTIONS,
        pins,
        moves,
    );
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
    use crate::utils::algebraic::coordinate_to_square;

    fn sq(coordinate: &str) -> Square {
        coordinate_to_square(coordinate).expect("test coordinate should parse")
    }

    #[test]
    fn bishop_covers_both_open_diagonals() {
        let mut board = Board::empty();
        board.place(sq("a1"), Piece::new(Color::White, PieceKind::King));
        board.place(sq("h8"), Piece::new(Color::Black, PieceKind::King));
        board.place(sq("c1"), Piece::new(Color::White, PieceKind::Bishop));
        board.place(sq("g5"), Piece::new(Color::Black, PieceKind::Pawn));

        let state = GameState::from_board(board, Color::White)
            .expect("custom board should produce a state");
        let mut moves = Vec::new();
        generate_bishop_moves(&state, sq("c1"), &[], &mut moves);

        // Up-right: d2, e3, f4, g5 (capture). Up-left: b2, a3.
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().any(|mv| mv.end == sq("g5") && mv.is_capture()));
        assert!(moves.iter().all(|mv| mv.end != sq("h6")));
    }
}
