//! Interactive game loop
//!
//! Prompt flow: pick a side (or self-play), then alternate human
//! commands and engine turns until the game ends. All engine calls go
//! through the public driver functions; the loop only renders and
//! validates input.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{notation_to_pos, Board, Mark};
use crate::engine::{choose_best_action, iterative_engine_evaluations, EngineError};
use crate::eval::EvalPlugin;
use crate::rules::{apply, is_draw, parse_shift_name, winner, Action};
use crate::search::{state_key, KeySet};
use crate::selfplay::{run_self_play, SelfPlayConfig};
use crate::ui::render::{clear_screen, render_board, render_progress};

/// Default turn cap for self-play games started from the front-end
const SELF_PLAY_MAX_TURNS: u32 = 200;

/// What the player picked at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    PlayX,
    PlayO,
    SelfPlay,
}

/// Front-end configuration distilled from the command line
#[derive(Clone)]
pub struct AppConfig {
    pub engine_depth: u8,
    pub multi_pv: i32,
    pub eval_x: EvalPlugin,
    pub eval_o: EvalPlugin,
}

impl AppConfig {
    fn eval_for(&self, side: Mark) -> &EvalPlugin {
        if side == Mark::X {
            &self.eval_x
        } else {
            &self.eval_o
        }
    }
}

/// Parse the startup choice token, case-insensitively. Empty input
/// defaults to playing X; anything outside the vocabulary is rejected.
#[must_use]
pub fn parse_start_choice(input: &str) -> Option<StartChoice> {
    let token = input.trim().to_ascii_uppercase();
    match token.as_str() {
        "" | "X" => Some(StartChoice::PlayX),
        "O" => Some(StartChoice::PlayO),
        "C" | "AI" | "AUTO" | "COMPUTER" | "COMPUTERVSCOMPUTER" | "SELF" | "SELFPLAY"
        | "SELFPLAYMODE" => Some(StartChoice::SelfPlay),
        _ => None,
    }
}

/// Parse a human action command: `place C3`, `move A1 C3`, `shift NE`.
pub fn parse_action_command(input: &str) -> Result<Action, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        ["place", cell] => notation_to_pos(cell)
            .map(Action::Place)
            .ok_or_else(|| format!("unknown cell '{cell}' (try A1..E5)")),
        ["move", from, to] => {
            let from = notation_to_pos(from)
                .ok_or_else(|| format!("unknown cell '{from}' (try A1..E5)"))?;
            let to =
                notation_to_pos(to).ok_or_else(|| format!("unknown cell '{to}' (try A1..E5)"))?;
            Ok(Action::Move { from, to })
        }
        ["shift", dir] => parse_shift_name(dir)
            .map(|(dx, dy)| Action::Shift { dx, dy })
            .ok_or_else(|| format!("unknown direction '{dir}' (try N, NE, E, SE, S, SW, W, NW)")),
        _ => Err("commands: place <cell> | move <from> <to> | shift <dir> | quit".to_string()),
    }
}

/// Run the interactive front-end until the player quits.
pub fn run_interactive(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("Play as X, O, or run self-play? [X/o/self]");
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        let Some(choice) = parse_start_choice(&line) else {
            println!("unrecognised choice '{}'", line.trim());
            continue;
        };

        match choice {
            StartChoice::SelfPlay => run_self_play_with_output(config)?,
            StartChoice::PlayX => run_game(Mark::X, config, &mut input)?,
            StartChoice::PlayO => run_game(Mark::O, config, &mut input)?,
        }

        println!("play again? [y/N]");
        match read_line(&mut input)? {
            Some(line) if line.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

/// Self-play with every move and the final verdict printed
pub fn run_self_play_with_output(config: &AppConfig) -> Result<()> {
    let sp_config = SelfPlayConfig {
        max_turns: SELF_PLAY_MAX_TURNS,
        depth_limit: config.engine_depth,
        eval_x: config.eval_x.clone(),
        eval_o: config.eval_o.clone(),
    };
    let report = run_self_play(&sp_config, &mut |turn, side, action, board| {
        println!("turn {turn}: {side} plays {action}");
        println!("{}", render_board(board));
    })?;
    println!(
        "game over after {} turns: {}",
        report.turns_played, report.termination
    );
    Ok(())
}

/// One human-vs-engine game; returns when the game ends or the player
/// quits.
fn run_game(human: Mark, config: &AppConfig, input: &mut impl BufRead) -> Result<()> {
    let mut board = Board::new();
    let mut history = KeySet::default();
    history.insert(state_key(&board, Mark::X));
    let mut side = Mark::X;

    loop {
        clear_screen();
        print!("{}", render_board(&board));

        if let Some(won) = winner(&board) {
            if won == human {
                println!("you win!");
            } else {
                println!("the engine wins.");
            }
            return Ok(());
        }
        if is_draw(&board) {
            println!("draw: the board is full.");
            return Ok(());
        }

        let (action, next) = if side == human {
            match prompt_human_action(&board, side, &history, input)? {
                Some(pair) => pair,
                None => return Ok(()), // quit or closed stdin
            }
        } else {
            let eval = config.eval_for(side);
            let chosen = if config.multi_pv > 0 {
                let report = iterative_engine_evaluations(
                    &board,
                    side,
                    &history,
                    config.engine_depth,
                    config.multi_pv,
                    eval,
                    &mut |progress| print!("{}", render_progress(progress)),
                );
                report
                    .evaluations
                    .first()
                    .map(|evaluation| evaluation.action)
                    .ok_or(EngineError::NoLegalMoves)
            } else {
                choose_best_action(&board, side, &history, config.engine_depth, eval)
            };
            let action = match chosen {
                Ok(action) => action,
                Err(EngineError::NoLegalMoves) => {
                    println!("the engine has no move that avoids repeating a position.");
                    return Ok(());
                }
            };
            match apply(&board, action, side) {
                Ok(next) => {
                    println!("engine plays {action}");
                    (action, next)
                }
                Err(reason) => {
                    println!("engine action {action} was rejected: {reason}");
                    return Ok(());
                }
            }
        };

        board = next;
        log::debug!("{side} plays {action}");
        history.insert(state_key(&board, side.opponent()));
        side = side.opponent();
    }
}

/// Prompt until the human enters a legal, non-repeating action, and
/// hand back the action together with the board it produces so the
/// caller does not re-apply it. Returns `None` on `quit` or end of
/// input.
fn prompt_human_action(
    board: &Board,
    side: Mark,
    history: &KeySet,
    input: &mut impl BufRead,
) -> Result<Option<(Action, Board)>> {
    loop {
        print!("{side} to move> ");
        io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }

        let action = match parse_action_command(&trimmed.to_ascii_lowercase()) {
            Ok(action) => action,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        let next = match apply(board, action, side) {
            Ok(next) => next,
            Err(reason) => {
                println!("illegal action: {reason}");
                continue;
            }
        };
        if history.contains(&state_key(&next, side.opponent())) {
            println!("that would repeat an earlier position; pick something else.");
            continue;
        }

        return Ok(Some((action, next)));
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_start_choice_vocabulary() {
        assert_eq!(parse_start_choice(""), Some(StartChoice::PlayX));
        assert_eq!(parse_start_choice("  "), Some(StartChoice::PlayX));
        assert_eq!(parse_start_choice("x"), Some(StartChoice::PlayX));
        assert_eq!(parse_start_choice("O"), Some(StartChoice::PlayO));
        for token in [
            "c",
            "ai",
            "auto",
            "computer",
            "ComputerVsComputer",
            "self",
            "selfplay",
            "SelfPlayMode",
        ] {
            assert_eq!(
                parse_start_choice(token),
                Some(StartChoice::SelfPlay),
                "token {token}"
            );
        }
        assert_eq!(parse_start_choice("z"), None);
        assert_eq!(parse_start_choice("selfplaying"), None);
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(
            parse_action_command("place c3"),
            Ok(Action::Place(Pos::new(2, 2)))
        );
        assert_eq!(
            parse_action_command("move a1 c3"),
            Ok(Action::Move {
                from: Pos::new(0, 0),
                to: Pos::new(2, 2)
            })
        );
        assert_eq!(
            parse_action_command("shift ne"),
            Ok(Action::Shift { dx: 1, dy: -1 })
        );

        assert!(parse_action_command("place z9").is_err());
        assert!(parse_action_command("shift up").is_err());
        assert!(parse_action_command("dance").is_err());
        assert!(parse_action_command("").is_err());
    }
}
