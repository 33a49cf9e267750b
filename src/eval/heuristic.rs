//! Built-in evaluation functions
//!
//! Two plugins ship with the engine:
//! - `terminal_eval` ("default"): decisive outcomes only, everything
//!   else is neutral
//! - `positional_eval` ("positional"): adds a heuristic over window
//!   threats, window presence and centre control

use crate::board::{Board, Mark};
use crate::rules::window_lines;

/// Scoring weights for the built-in evaluations
pub struct EvalWeights;

impl EvalWeights {
    /// Terminal magnitude of the terminal-only plugin. A win this many
    /// plies out and a draw score the same, so keep search depths below
    /// it when using that plugin.
    pub const TERMINAL_WIN: i32 = 10;

    /// Terminal magnitude of the positional plugin; safe up to depth 99
    pub const POSITIONAL_WIN: i32 = 100;

    /// Two own markers on a window line with the third cell empty
    pub const THREAT: i32 = 3;
    /// Own marker inside the window
    pub const PRESENCE: i32 = 1;
    /// Holding the window centre
    pub const CENTER: i32 = 2;
}

/// Terminal-only evaluation (the "default" plugin).
///
/// Wins taper with depth so the search prefers the fastest win and the
/// slowest loss; draws and non-terminal positions are neutral.
#[must_use]
pub fn terminal_eval(_board: &Board, winner: Option<Mark>, ai_side: Mark, depth: u8) -> i32 {
    match winner {
        Some(w) if w == ai_side => EvalWeights::TERMINAL_WIN - depth as i32,
        Some(_) => depth as i32 - EvalWeights::TERMINAL_WIN,
        None => 0,
    }
}

/// Positional evaluation (the "positional" plugin).
///
/// Terminal positions use a wide `±(100 - depth)` band; everything else
/// sums three features, each counted for the AI and against the
/// opponent:
/// - open pairs on window lines (two markers plus an empty cell)
/// - markers inside the window
/// - occupation of the window centre
#[must_use]
pub fn positional_eval(board: &Board, winner: Option<Mark>, ai_side: Mark, depth: u8) -> i32 {
    if let Some(w) = winner {
        return if w == ai_side {
            EvalWeights::POSITIONAL_WIN - depth as i32
        } else {
            depth as i32 - EvalWeights::POSITIONAL_WIN
        };
    }

    let opponent = ai_side.opponent();

    let threat_score = (open_pairs(board, ai_side) - open_pairs(board, opponent))
        * EvalWeights::THREAT;

    let presence_score = (window_presence(board, ai_side) - window_presence(board, opponent))
        * EvalWeights::PRESENCE;

    let center_mark = board.get(board.window_center());
    let center_score = if center_mark == ai_side {
        EvalWeights::CENTER
    } else if center_mark == opponent {
        -EvalWeights::CENTER
    } else {
        0
    };

    threat_score + presence_score + center_score
}

/// Window lines holding exactly two of `mark` and one empty cell
fn open_pairs(board: &Board, mark: Mark) -> i32 {
    window_lines(board)
        .iter()
        .filter(|line| {
            let own = line.iter().filter(|&&p| board.get(p) == mark).count();
            let empty = line.iter().filter(|&&p| board.is_empty(p)).count();
            own == 2 && empty == 1
        })
        .count() as i32
}

/// Markers of `mark` inside the active window
fn window_presence(board: &Board, mark: Mark) -> i32 {
    board
        .window_positions()
        .filter(|&p| board.get(p) == mark)
        .count() as i32
}
