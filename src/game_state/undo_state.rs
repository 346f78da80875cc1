use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::Square;
use crate::moves::chess_move::ChessMove;

/// Single undo record for `make_move` / `undo_move`.
///
/// The pre-move castling rights and en passant target travel with the move
/// in one record so the three pieces of history can never drift out of
/// lockstep.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: ChessMove,
    pub prev_castle_rights: CastleRights,
    pub prev_en_passant_square: Option<Square>,
}
