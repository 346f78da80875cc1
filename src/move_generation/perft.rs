//! Move-path enumeration for correctness auditing.
//!
//! Walks the game tree with `make_move`/`undo_move`, so matching the known
//! node counts exercises generation and reversal together.

use crate::game_state::chess_types::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

/// Count move paths of length `depth` from the current position.
pub fn perft(state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(state, depth, &mut counts);
    counts
}

fn perft_recurse(state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in state.valid_moves() {
        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if mv.is_en_passant {
                counts.en_passant += 1;
            }
            if mv.is_castle {
                counts.castles += 1;
            }
            if mv.is_pawn_promotion {
                counts.promotions += 1;
            }
            continue;
        }
        state.make_move(mv);
        perft_recurse(state, depth - 1, counts);
        state.undo_move();
    }
}
