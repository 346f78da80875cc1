//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals: the standard starting
//! layout and the home squares that castling-rights maintenance keys on.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

pub const WHITE_KING_START: Square = Square::new(7, 4);
pub const BLACK_KING_START: Square = Square::new(0, 4);

pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Build the standard starting position.
pub fn starting_board() -> Board {
    let mut board = Board::empty();

    for (col, &kind) in BACK_RANK_ORDER.iter().enumerate() {
        let col = col as u8;
        board.place(Square::new(0, col), Piece::new(Color::Black, kind));
        board.place(Square::new(7, col), Piece::new(Color::White, kind));
    }
    for col in 0..8u8 {
        board.place(
            Square::new(1, col),
            Piece::new(Color::Black, PieceKind::Pawn),
        );
        board.place(
            Square::new(6, col),
            Piece::new(Color::White, PieceKind::Pawn),
        );
    }

    board
}

#[cfg(test)]
mod tests {
    use super::{starting_board, BLACK_KING_START, WHITE_KING_START};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn starting_board_has_thirty_two_pieces_and_both_kings() {
        let board = starting_board();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(
            board.piece_at(WHITE_KING_START),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(BLACK_KING_START),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
    }
}
