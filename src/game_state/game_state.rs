//! Central game state: board ownership, move application, and undo.
//!
//! `GameState` owns the board, the turn flag, the cached king squares, the
//! castling rights, the en passant target, and a single history stack of
//! per-ply undo records. Legal move derivation lives in
//! `move_generation::legal_move_generator`; this module is responsible for
//! keeping every one of those fields exactly reversible.

use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::{
    starting_board, BLACK_KING_START, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL, WHITE_KING_START,
};
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::attack_scan::{CheckThreat, Pin};
use crate::move_generation::legal_move_generator::generate_valid_moves;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub white_king_square: Square,
    pub black_king_square: Square,
    pub castle_rights: CastleRights,
    pub en_passant_square: Option<Square>,

    /// Per-ply undo records; the newest entry is the last move played.
    pub history: Vec<UndoState>,

    // Derived by the last `valid_moves` call.
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<CheckThreat>,
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::White,
            white_king_square: WHITE_KING_START,
            black_king_square: BLACK_KING_START,
            castle_rights: CastleRights::initial(),
            en_passant_square: None,
            history: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
            pins: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Build a state from an arbitrary board, for studies, tests, and
    /// search-collaborator setups.
    ///
    /// Errors when either side does not have exactly one king. Castling
    /// rights default to intact and the en passant target to empty; adjust
    /// the public fields for positions with more history behind them.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, String> {
        let mut white_king = None;
        let mut black_king = None;

        for (square, piece) in board.occupied() {
            if piece.kind != PieceKind::King {
                continue;
            }
            let slot = match piece.color {
                Color::White => &mut white_king,
                Color::Black => &mut black_king,
            };
            if slot.replace(square).is_some() {
                return Err(format!("more than one {:?} king on the board", piece.color));
            }
        }

        let white_king_square =
            white_king.ok_or_else(|| "no white king on the board".to_owned())?;
        let black_king_square =
            black_king.ok_or_else(|| "no black king on the board".to_owned())?;

        Ok(Self {
            board,
            side_to_move,
            white_king_square,
            black_king_square,
            castle_rights: CastleRights::initial(),
            en_passant_square: None,
            history: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
            pins: Vec::new(),
            checks: Vec::new(),
        })
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    #[inline]
    fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_square = square,
            Color::Black => self.black_king_square = square,
        }
    }

    /// The moves played so far, oldest first, for history display.
    pub fn move_log(&self) -> impl Iterator<Item = &ChessMove> {
        self.history.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last().map(|undo| &undo.mv)
    }

    /// Every strictly legal move for the side to move. Refreshes the
    /// check/checkmate/stalemate flags and the cached pin/check data.
    #[inline]
    pub fn valid_moves(&mut self) -> Vec<ChessMove> {
        generate_valid_moves(self)
    }

    /// Apply a move taken from the current legal-move set.
    pub fn make_move(&mut self, mv: ChessMove) {
        let undo = UndoState {
            mv,
            prev_castle_rights: self.castle_rights,
            prev_en_passant_square: self.en_passant_square,
        };
        let mover = mv.piece_moved;

        self.board.clear(mv.start);
        self.board.place(mv.end, mover);
        self.side_to_move = self.side_to_move.opposite();

        if mover.kind == PieceKind::King {
            self.set_king_square(mover.color, mv.end);
        }

        // The engine always promotes to a queen.
        if mv.is_pawn_promotion {
            self.board
                .place(mv.end, Piece::new(mover.color, PieceKind::Queen));
        }

        // The en passant victim sits beside the start square, not on the
        // destination.
        if mv.is_en_passant {
            self.board.clear(Square::new(mv.start.row, mv.end.col));
        }

        self.en_passant_square = if mover.kind == PieceKind::Pawn
            && mv.start.row.abs_diff(mv.end.row) == 2
        {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            if let Some(rook) = self.board.take(rook_from) {
                self.board.place(rook_to, rook);
            }
        }

        self.update_castle_rights(&mv);
        self.history.push(undo);
    }

    /// Take back the last move. Safe no-op on an empty history; returns
    /// the move that was undone.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let undo = self.history.pop()?;
        let mv = undo.mv;
        let mover = mv.piece_moved;

        self.board.place(mv.start, mover);
        match mv.piece_captured {
            Some(captured) if !mv.is_en_passant => self.board.place(mv.end, captured),
            _ => self.board.clear(mv.end),
        }
        self.side_to_move = self.side_to_move.opposite();

        if mover.kind == PieceKind::King {
            self.set_king_square(mover.color, mv.start);
        }

        if mv.is_en_passant {
            if let Some(captured) = mv.piece_captured {
                self.board.place(Square::new(mv.start.row, mv.end.col), captured);
            }
        }

        self.en_passant_square = undo.prev_en_passant_square;
        self.castle_rights = undo.prev_castle_rights;

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            if let Some(rook) = self.board.take(rook_to) {
                self.board.place(rook_from, rook);
            }
        }

        // An undone position is never terminal until re-derived.
        self.checkmate = false;
        self.stalemate = false;

        Some(mv)
    }

    /// Clear castling rights affected by `mv`: a king move clears both of
    /// its wings, a rook moving off its home corner clears that wing, and
    /// capturing a rook on its home corner clears the victim's wing.
    fn update_castle_rights(&mut self, mv: &ChessMove) {
        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook && mv.end.row == captured.color.back_row() {
                if mv.end.col == QUEENSIDE_ROOK_COL {
                    self.castle_rights.clear_queenside(captured.color);
                } else if mv.end.col == KINGSIDE_ROOK_COL {
                    self.castle_rights.clear_kingside(captured.color);
                }
            }
        }

        let mover = mv.piece_moved;
        match mover.kind {
            PieceKind::King => self.castle_rights.clear_both(mover.color),
            PieceKind::Rook if mv.start.row == mover.color.back_row() => {
                if mv.start.col == QUEENSIDE_ROOK_COL {
                    self.castle_rights.clear_queenside(mover.color);
                } else if mv.start.col == KINGSIDE_ROOK_COL {
                    self.castle_rights.clear_kingside(mover.color);
                }
            }
            _ => {}
        }
    }
}

/// The rook relocation implied by a castle move: from the corner to the
/// square the king passed over.
fn castle_rook_squares(mv: &ChessMove) -> (Square, Square) {
    if mv.end.col > mv.start.col {
        (
            Square::new(mv.end.row, KINGSIDE_ROOK_COL),
            Square::new(mv.end.row, mv.end.col - 1),
        )
    } else {
        (
            Square::new(mv.end.row, QUEENSIDE_ROOK_COL),
            Square::new(mv.end.row, mv.end.col + 1),
        )
    }
}
