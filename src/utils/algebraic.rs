//! Square conversions for human-readable board coordinates.
//!
//! Converts between coordinate strings (e.g., `e4`) and the internal
//! row/col squares, reused by move notation, the renderer, and tests.

use crate::game_state::chess_types::Square;

/// Convert a coordinate string (for example: "e4") to a square.
#[inline]
pub fn coordinate_to_square(coordinate: &str) -> Result<Square, String> {
    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid coordinate: {coordinate}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid rank: {}", rank as char));
    }

    // Row 0 is rank 8, so ranks count down from the top of the grid.
    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to a coordinate string (for example: "e4").
#[inline]
pub fn square_to_coordinate(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}
