//! Terminal rendering
//!
//! Board frames, engine progress lines, and the screen-clear control
//! sequence (disabled with `NO_CLEAR_SCREEN=1`).

use std::io::stdout;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::board::{pos_to_notation, Board, Mark, Pos, BOARD_SIZE, MAX_PLACEMENTS};
use crate::engine::EngineProgress;
use crate::rules::Action;

/// Clear the terminal, unless `NO_CLEAR_SCREEN=1` asks us not to
pub fn clear_screen() {
    if std::env::var("NO_CLEAR_SCREEN").as_deref() == Ok("1") {
        return;
    }
    let _ = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Render the board with row/column labels; window cells are bracketed.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..BOARD_SIZE as u8 {
        out.push_str(&format!(" {}  ", col + 1));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE as u8 {
        out.push_str(&format!(" {}  ", (b'A' + row) as char));
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if board.in_window(pos) {
                out.push_str(&format!("[{}] ", board.get(pos)));
            } else {
                out.push_str(&format!(" {}  ", board.get(pos)));
            }
        }
        out.push('\n');
    }

    let corner = Pos::new(board.window_y(), board.window_x());
    out.push_str(&format!(
        "\n window {}   X placed {}/{}   O placed {}/{}\n",
        pos_to_notation(corner),
        board.placements(Mark::X),
        MAX_PLACEMENTS,
        board.placements(Mark::O),
        MAX_PLACEMENTS,
    ));

    out
}

/// One progress snapshot as printable lines: a stats header and the
/// ranked lines underneath.
#[must_use]
pub fn render_progress(progress: &EngineProgress<'_>) -> String {
    let mut out = format!(
        "depth {}/{}  eval {}  nodes {}  tt hits {}  cutoffs {}\n",
        progress.depth,
        progress.max_depth,
        progress.eval_name,
        progress.stats.nodes_visited,
        progress.stats.cache_hits,
        progress.stats.cutoffs,
    );
    for (rank, evaluation) in progress.evaluations.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}  score {}  pv: {}\n",
            rank + 1,
            evaluation.action,
            evaluation.score,
            format_pv(&evaluation.pv),
        ));
    }
    out
}

/// Principal variation as a readable action chain
#[must_use]
pub fn format_pv(pv: &[Action]) -> String {
    pv.iter()
        .map(Action::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
