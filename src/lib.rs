//! Sliding-window three-in-a-row with an alpha-beta AI engine
//!
//! A variant of three-in-a-row on a 5x5 board: a 3x3 active window
//! slides around the board and only lines fully inside it score. Each
//! player owns at most four markers; once they are all placed, a turn
//! relocates a marker or shifts the window. Repeating a position that
//! already occurred in the game is illegal.
//!
//! # Architecture
//!
//! - [`board`]: the 25-cell board, window geometry and placement
//!   counters — a 29-byte `Copy` value
//! - [`rules`]: legal-action enumeration/application and win detection
//! - [`search`]: depth-limited alpha-beta with transposition table,
//!   cycle guard and move ordering
//! - [`eval`]: evaluation plugins and their registry
//! - [`engine`]: multi-PV ranking and the iterative-deepening driver
//! - [`selfplay`]: computer-vs-computer driver
//! - [`ui`]: line-oriented terminal front-end
//!
//! # Quick Start
//!
//! ```
//! use shiftac::board::{Board, Mark};
//! use shiftac::engine::choose_best_action;
//! use shiftac::eval::EvalRegistry;
//! use shiftac::rules::apply;
//! use shiftac::search::KeySet;
//!
//! let registry = EvalRegistry::with_builtins();
//! let eval = registry.get_or_default("default");
//!
//! let board = Board::new();
//! let history = KeySet::default();
//!
//! // Engine picks X's opening move
//! if let Ok(action) = choose_best_action(&board, Mark::X, &history, 4, &eval) {
//!     if let Ok(board) = apply(&board, action, Mark::X) {
//!         assert_eq!(board.placements(Mark::X), 1);
//!     }
//! }
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use engine::{choose_best_action, get_engine_evaluations, EngineError, EngineReport};
pub use rules::{Action, ActionError};
