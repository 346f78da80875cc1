//! Castling rights as four independent flags.
//!
//! A flag once cleared never becomes true again for the rest of the game;
//! the only mutation paths are the per-color clearers used by
//! `GameState::update_castle_rights`. Undo restores an earlier snapshot
//! wholesale rather than re-setting individual flags.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    /// Rights at the start of a game: every wing available.
    #[inline]
    pub const fn initial() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[inline]
    pub const fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    #[inline]
    pub fn clear_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    #[inline]
    pub fn clear_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    /// Clear both wings for one side, as a king move does.
    #[inline]
    pub fn clear_both(&mut self, color: Color) {
        self.clear_kingside(color);
        self.clear_queenside(color);
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::initial()
    }
}
