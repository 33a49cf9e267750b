//! Computer-vs-computer driver
//!
//! Runs the engine against itself without interactive input. Each side
//! may use its own evaluation plugin. A game ends on a win, a draw, a
//! side with no legal actions left, or a configured turn cap.

use crate::board::{Board, Mark};
use crate::engine::{choose_best_action, EngineError};
use crate::eval::EvalPlugin;
use crate::rules::{apply, is_draw, winner, Action, ActionError};
use crate::search::{state_key, KeySet};

/// Configuration for one self-play run
#[derive(Clone)]
pub struct SelfPlayConfig {
    /// Hard cap on committed moves
    pub max_turns: u32,
    /// Search depth for both engines
    pub depth_limit: u8,
    pub eval_x: EvalPlugin,
    pub eval_o: EvalPlugin,
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Winner(Mark),
    Draw,
    /// The side to move had no action that avoids repeating history
    NoLegalMoves(Mark),
    /// Turn cap reached
    MaxTurns,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Termination::Winner(mark) => write!(f, "{mark} wins"),
            Termination::Draw => write!(f, "draw"),
            Termination::NoLegalMoves(mark) => write!(f, "no legal moves for {mark}"),
            Termination::MaxTurns => write!(f, "terminated by max turns"),
        }
    }
}

/// Report of a finished self-play run
#[derive(Debug, Clone)]
pub struct SelfPlayReport {
    pub turns_played: u32,
    pub termination: Termination,
    pub final_board: Board,
}

/// Play one computer-vs-computer game.
///
/// The observer sees every committed move: turn number (1-based), the
/// side that moved, the action, and the board afterwards. The engine
/// only hands back enumerated actions, so the `ActionError` branch is
/// plumbing rather than an expected outcome.
pub fn run_self_play(
    config: &SelfPlayConfig,
    observer: &mut dyn FnMut(u32, Mark, Action, &Board),
) -> Result<SelfPlayReport, ActionError> {
    let mut board = Board::new();
    let mut history = KeySet::default();
    history.insert(state_key(&board, Mark::X));

    let mut side = Mark::X;
    let mut turns_played = 0u32;

    let termination = loop {
        if let Some(won) = winner(&board) {
            break Termination::Winner(won);
        }
        if is_draw(&board) {
            break Termination::Draw;
        }
        if turns_played >= config.max_turns {
            break Termination::MaxTurns;
        }

        let eval = if side == Mark::X {
            &config.eval_x
        } else {
            &config.eval_o
        };
        let action = match choose_best_action(&board, side, &history, config.depth_limit, eval) {
            Ok(action) => action,
            Err(EngineError::NoLegalMoves) => break Termination::NoLegalMoves(side),
        };
        log::debug!("turn {}: {side} ({}) plays {action}", turns_played + 1, eval.name);

        board = apply(&board, action, side)?;
        log::trace!("position after {action}:\n{board}");
        turns_played += 1;
        history.insert(state_key(&board, side.opponent()));
        observer(turns_played, side, action, &board);
        side = side.opponent();
    };

    Ok(SelfPlayReport {
        turns_played,
        termination,
        final_board: board,
    })
}
