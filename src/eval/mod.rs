//! Position evaluation for the AI engine
//!
//! Evaluation functions score a position from the AI side's point of
//! view: larger is better for the AI, regardless of whose turn it is.
//! Two built-ins ship with the engine and custom functions can be added
//! through the [`registry`].

pub mod heuristic;
pub mod registry;

// Re-exports
pub use heuristic::{positional_eval, terminal_eval, EvalWeights};
pub use registry::{EvalPlugin, EvalRegistry, RegistryError, DEFAULT_EVAL, POSITIONAL_EVAL};

use crate::board::{Board, Mark};

/// Evaluation callback: `(board, winner, ai_side, depth) -> score`.
///
/// `winner` is the detected winning side, or `None` for draws and
/// non-terminal heuristic calls. Every plugin must honour three rules:
///
/// - faster wins for the AI score strictly higher than slower ones, and
///   faster losses strictly lower than slower ones (achieved by folding
///   `depth` into the terminal magnitude);
/// - draw and heuristic scores stay strictly below every terminal score
///   in magnitude;
/// - same inputs, same output.
pub type EvalFn = fn(&Board, Option<Mark>, Mark, u8) -> i32;
