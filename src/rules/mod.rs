//! Game rules for the sliding-window game
//!
//! This module implements the rule set:
//! - Action legality (enumeration and application)
//! - Win conditions (three-in-a-row inside the active window)
//! - Draw detection (full board, no winner)

pub mod action;
pub mod win;

// Re-exports for convenient access
pub use action::{
    apply, legal_actions, parse_shift_name, shift_name, shift_offsets, Action, ActionError,
};
pub use win::{is_draw, window_lines, winner};
