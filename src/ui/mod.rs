//! Terminal front-end for the game
//!
//! Line-oriented prompt flow over stdin/stdout. The engine itself stays
//! pure; everything that prints or reads lives here.

pub mod app;
pub mod render;

pub use app::{
    parse_action_command, parse_start_choice, run_interactive, run_self_play_with_output,
    AppConfig, StartChoice,
};
pub use render::{clear_screen, render_board, render_progress};
