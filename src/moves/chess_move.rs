//! The immutable per-ply move description.
//!
//! A `ChessMove` snapshots everything `make_move`/`undo_move` need: the
//! squares, the mover, the pre-move occupant of the destination, and the
//! special-move flags. Equality deliberately compares only the square
//! geometry — in standard chess at most one legal move exists per from/to
//! pair, so a move built from two user-selected squares matches the fully
//! annotated move in the legal set.

use std::fmt;

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_coordinate;

#[derive(Debug, Clone, Copy, Eq)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl ChessMove {
    /// Input-layer constructor: build a move from two selected squares and
    /// the current board. Returns `None` when the start square is empty.
    ///
    /// No legality is checked here; callers test the result for membership
    /// in the current legal-move set before applying it.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        board
            .piece_at(start)
            .map(|piece| Self::normal(start, end, piece, board))
    }

    /// Build an ordinary (non-castle, non-en-passant) move, capturing the
    /// pre-move occupant of the destination.
    pub fn normal(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board.piece_at(end),
            is_pawn_promotion: piece_moved.kind == PieceKind::Pawn
                && end.row == piece_moved.color.promotion_row(),
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Build an en passant capture. The captured pawn sits beside the
    /// start square rather than on the destination, so it is recorded
    /// explicitly.
    pub fn en_passant(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn)),
            is_pawn_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Build a castle move, described by the king's two-square hop. The
    /// rook relocation is implied and handled by apply/undo.
    pub fn castle(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: None,
            is_pawn_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }
}

impl PartialEq for ChessMove {
    /// Geometry-only equality: two moves with the same start and end
    /// squares are the same move regardless of how they were annotated.
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl fmt::Display for ChessMove {
    /// Minimal algebraic notation without disambiguation: `0-0`/`0-0-0`,
    /// `e4`, `exd5`, `e8Q`, `Nf3`, `Nxd4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return f.write_str(if self.end.col == 6 { "0-0" } else { "0-0-0" });
        }

        let end_square = square_to_coordinate(self.end);

        if self.piece_moved.kind == PieceKind::Pawn {
            if self.is_capture() {
                let start_file = char::from(b'a' + self.start.col);
                return write!(f, "{start_file}x{end_square}");
            }
            if self.is_pawn_promotion {
                return write!(f, "{end_square}Q");
            }
            return f.write_str(&end_square);
        }

        let letter = self.piece_moved.kind.letter();
        if self.is_capture() {
            write!(f, "{letter}x{end_square}")
        } else {
            write!(f, "{letter}{end_square}")
        }
    }
}
