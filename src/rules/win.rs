//! Win condition checking for the sliding-window game
//!
//! A player wins with three markers on one of the eight lines of the
//! active window (3 rows, 3 columns, 2 diagonals). Lines are only ever
//! counted in window-relative coordinates: a completed line elsewhere on
//! the board is worth nothing until a shift brings it back inside.
//!
//! A draw requires a completely full board with no winning line in the
//! window.

use crate::board::{Board, Mark, Pos, WINDOW_SIZE};

/// The eight candidate lines of the current window, each as three
/// positions: rows first, then columns, then the two diagonals.
#[must_use]
pub fn window_lines(board: &Board) -> [[Pos; 3]; 8] {
    let (x, y) = (board.window_x(), board.window_y());
    let w = WINDOW_SIZE as u8;
    let mut lines = [[Pos::new(0, 0); 3]; 8];

    for i in 0..w {
        for j in 0..w {
            lines[i as usize][j as usize] = Pos::new(y + i, x + j); // row i
            lines[(w + i) as usize][j as usize] = Pos::new(y + j, x + i); // column i
        }
    }
    for j in 0..w {
        lines[6][j as usize] = Pos::new(y + j, x + j); // main diagonal
        lines[7][j as usize] = Pos::new(y + j, x + w - 1 - j); // anti-diagonal
    }

    lines
}

/// True if `mark` holds all three cells of some window line
#[must_use]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    debug_assert!(mark.is_player());
    window_lines(board)
        .iter()
        .any(|line| line.iter().all(|&p| board.get(p) == mark))
}

/// The winning player, if the current window shows a completed line.
///
/// X is scanned before O: if a single shift uncovers completed lines for
/// both players at once, X is reported.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    if has_line(board, Mark::X) {
        Some(Mark::X)
    } else if has_line(board, Mark::O) {
        Some(Mark::O)
    } else {
        None
    }
}

/// Full board, nobody won
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
