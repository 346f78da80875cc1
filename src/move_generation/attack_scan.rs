//! Attack, pin, and check detection by scanning outward from the king.
//!
//! Legality here is decided up front rather than by apply-and-test: one
//! scan per ply yields whether the king is attacked, which friendly pieces
//! are pinned to it (and along which line), and where any checkers sit.
//! The move generators then constrain themselves with that data.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};

/// Ray directions 0..4 are orthogonal, 4..8 diagonal. The scanner's threat
/// matching keys on that split.
pub const RAY_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A friendly piece that may only move along a fixed line toward or away
/// from its king. The direction points from the king toward the pinning
/// piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: (i8, i8),
}

/// An enemy piece currently attacking the king. For sliding and contact
/// checkers the direction is the king-to-attacker ray; for knights it is
/// the knight offset, a non-ray marker with exactly one resolution square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckThreat {
    pub attacker: Square,
    pub direction: (i8, i8),
}

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<CheckThreat>,
}

/// Scan the board from `king_square` for the side `friendly`.
///
/// Friendly kings are transparent to the rays, so a hypothetical king
/// square can be probed while the real king still occupies its board
/// square (the king-move generator relies on this).
pub fn scan_pins_and_checks(board: &Board, king_square: Square, friendly: Color) -> ScanReport {
    let enemy = friendly.opposite();
    let mut report = ScanReport::default();

    for (ray_index, &(d_row, d_col)) in RAY_DIRECTIONS.iter().enumerate() {
        let mut possible_pin: Option<Pin> = None;

        for step in 1..8i8 {
            let Some(square) = king_square.offset(d_row * step, d_col * step) else {
                break;
            };
            let Some(piece) = board.piece_at(square) else {
                continue;
            };

            if piece.color == friendly {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if possible_pin.is_none() {
                    possible_pin = Some(Pin {
                        square,
                        direction: (d_row, d_col),
                    });
                    continue;
                }
                // Second friendly piece shields this ray entirely.
                break;
            }

            if threatens_along_ray(piece.kind, enemy, ray_index, step) {
                match possible_pin {
                    None => {
                        report.in_check = true;
                        report.checks.push(CheckThreat {
                            attacker: square,
                            direction: (d_row, d_col),
                        });
                    }
                    Some(pin) => report.pins.push(pin),
                }
            }
            break;
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Some(square) = king_square.offset(d_row, d_col) else {
            continue;
        };
        if let Some(piece) = board.piece_at(square) {
            if piece.color == enemy && piece.kind == PieceKind::Knight {
                report.in_check = true;
                report.checks.push(CheckThreat {
                    attacker: square,
                    direction: (d_row, d_col),
                });
            }
        }
    }

    report
}

/// Whether an enemy piece of `kind`, sitting `step` squares out on ray
/// `ray_index`, attacks the scanned square.
fn threatens_along_ray(kind: PieceKind, enemy: Color, ray_index: usize, step: i8) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => ray_index < 4,
        PieceKind::Bishop => ray_index >= 4,
        PieceKind::King => step == 1,
        PieceKind::Pawn => {
            // A pawn only attacks one square along the two diagonals that
            // face its forward direction: downward rays (6, 7) for a white
            // pawn below the square, upward rays (4, 5) for a black pawn
            // above it.
            step == 1
                && match enemy {
                    Color::White => ray_index == 6 || ray_index == 7,
                    Color::Black => ray_index == 4 || ray_index == 5,
                }
        }
        PieceKind::Knight => false,
    }
}

/// Whether `square` is attacked from `friendly`'s point of view. Used for
/// the castle transit squares; equivalent to scanning a hypothetical king
/// standing there.
#[inline]
pub fn square_under_attack(board: &Board, square: Square, friendly: Color) -> bool {
    scan_pins_and_checks(board, square, friendly).in_check
}
