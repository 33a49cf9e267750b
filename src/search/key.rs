//! Packed state keys for position identification
//!
//! A position fits a single `u64` exactly, so the key IS the position:
//! equal keys mean semantically equal states, with no hash collisions to
//! reason about. The same key feeds the transposition table, the
//! in-search cycle guard and the game's repetition history.

use rustc_hash::FxHashSet;

use crate::board::{Board, Mark};

/// A complete position fingerprint: board cells, window corner, side to
/// move and both placement counters.
pub type StateKey = u64;

/// Key sets used for the search path and the game history
pub type KeySet = FxHashSet<StateKey>;

/// Pack a position into its key.
///
/// Layout (low -> high bits):
/// - cells: 25 x 2 bits (0 empty, 1 X, 2 O), row-major  = 50 bits
/// - window corner: x then y, 2 bits each               =  4 bits
/// - side to move: 0 X, 1 O                             =  1 bit
/// - placement counters: X then O, 3 bits each          =  6 bits
///
/// Total: 61 bits.
#[must_use]
pub fn state_key(board: &Board, side_to_move: Mark) -> StateKey {
    debug_assert!(side_to_move.is_player());

    let mut x: u64 = 0;
    let mut shift: u32 = 0;

    for &cell in board.cells() {
        let tag: u64 = match cell {
            Mark::Empty => 0,
            Mark::X => 1,
            Mark::O => 2,
        };
        x |= tag << shift;
        shift += 2;
    }

    x |= (board.window_x() as u64) << shift;
    shift += 2;
    x |= (board.window_y() as u64) << shift;
    shift += 2;

    if side_to_move == Mark::O {
        x |= 1 << shift;
    }
    shift += 1;

    x |= (board.placements(Mark::X) as u64) << shift;
    shift += 3;
    x |= (board.placements(Mark::O) as u64) << shift;

    x
}
