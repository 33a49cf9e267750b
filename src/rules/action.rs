//! Action enumeration and application
//!
//! The three action kinds a player may take on their turn:
//! - place a marker on an empty window cell (until four markers are placed)
//! - relocate one of their markers to an empty window cell
//! - shift the active window by one step in any of eight directions
//!
//! Moves and shifts unlock once a player has placed two markers.
//! `legal_actions` only emits actions `apply` accepts; `apply` itself
//! rejects crafted illegal actions with a specific error.

use thiserror::Error;

use crate::board::{
    pos_to_notation, Board, Mark, Pos, MAX_PLACEMENTS, MOBILITY_THRESHOLD, WINDOW_MAX,
};

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Put a new marker on a cell
    Place(Pos),
    /// Relocate an own marker
    Move { from: Pos, to: Pos },
    /// Translate the active window; dx, dy in {-1, 0, 1}, not both zero
    Shift { dx: i8, dy: i8 },
}

/// Why an action was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("all four markers already placed")]
    PlacementOverLimit,
    #[error("cell is occupied")]
    CellOccupied,
    #[error("moving requires two placed markers")]
    MovementPremature,
    #[error("no own marker on the source cell")]
    NotOwnPiece,
    #[error("destination cell is occupied")]
    DestinationOccupied,
    #[error("destination lies outside the active window")]
    DestinationOutsideWindow,
    #[error("shifting requires two placed markers")]
    ShiftPremature,
    #[error("shift would push the window off the board")]
    ShiftOutOfBounds,
}

/// The eight window shift offsets in scan order (row by row, skipping
/// the null offset). dx moves the window right, dy moves it down.
pub const fn shift_offsets() -> [(i8, i8); 8] {
    [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ]
}

/// Enumerate every legal action for `mark` in deterministic order:
/// placements (ascending cell index), then moves (ascending source, then
/// destination index), then shifts in scan order. The searcher re-sorts
/// this list; the order here only fixes tie-breaks.
#[must_use]
pub fn legal_actions(board: &Board, mark: Mark) -> Vec<Action> {
    debug_assert!(mark.is_player());
    let mut actions = Vec::with_capacity(32);
    let placed = board.placements(mark);

    if placed < MAX_PLACEMENTS {
        for pos in board.empty_window_positions() {
            actions.push(Action::Place(pos));
        }
    }

    if placed >= MOBILITY_THRESHOLD {
        for from in board.marker_positions(mark) {
            for to in board.empty_window_positions() {
                actions.push(Action::Move { from, to });
            }
        }

        for (dx, dy) in shift_offsets() {
            if window_corner_in_bounds(board, dx, dy) {
                actions.push(Action::Shift { dx, dy });
            }
        }
    }

    actions
}

/// Apply an action for `mark`, returning the successor board.
///
/// Placement counters are bumped by `Place` only; `Move` relocates without
/// touching them, `Shift` moves the window corner.
pub fn apply(board: &Board, action: Action, mark: Mark) -> Result<Board, ActionError> {
    debug_assert!(mark.is_player());
    let mut next = *board;
    match action {
        Action::Place(pos) => {
            if board.placements(mark) >= MAX_PLACEMENTS {
                return Err(ActionError::PlacementOverLimit);
            }
            if !board.is_empty(pos) {
                return Err(ActionError::CellOccupied);
            }
            next.place_mark(pos, mark);
            next.set_placements(mark, board.placements(mark) + 1);
        }
        Action::Move { from, to } => {
            if board.placements(mark) < MOBILITY_THRESHOLD {
                return Err(ActionError::MovementPremature);
            }
            if board.get(from) != mark {
                return Err(ActionError::NotOwnPiece);
            }
            if !board.is_empty(to) {
                return Err(ActionError::DestinationOccupied);
            }
            if !board.in_window(to) {
                return Err(ActionError::DestinationOutsideWindow);
            }
            next.remove_mark(from);
            next.place_mark(to, mark);
        }
        Action::Shift { dx, dy } => {
            if board.placements(mark) < MOBILITY_THRESHOLD {
                return Err(ActionError::ShiftPremature);
            }
            if !window_corner_in_bounds(board, dx, dy) {
                return Err(ActionError::ShiftOutOfBounds);
            }
            next.set_window(
                (board.window_x() as i8 + dx) as u8,
                (board.window_y() as i8 + dy) as u8,
            );
        }
    }
    Ok(next)
}

#[inline]
fn window_corner_in_bounds(board: &Board, dx: i8, dy: i8) -> bool {
    let nx = board.window_x() as i8 + dx;
    let ny = board.window_y() as i8 + dy;
    nx >= 0 && nx <= WINDOW_MAX as i8 && ny >= 0 && ny <= WINDOW_MAX as i8
}

/// Compass label for a shift offset: dy = -1 is north, dx = 1 is east.
#[must_use]
pub fn shift_name(dx: i8, dy: i8) -> &'static str {
    match (dx, dy) {
        (0, -1) => "N",
        (1, -1) => "NE",
        (1, 0) => "E",
        (1, 1) => "SE",
        (0, 1) => "S",
        (-1, 1) => "SW",
        (-1, 0) => "W",
        (-1, -1) => "NW",
        _ => "?",
    }
}

/// Parse a compass label back into a shift offset
#[must_use]
pub fn parse_shift_name(s: &str) -> Option<(i8, i8)> {
    match s.to_ascii_uppercase().as_str() {
        "N" => Some((0, -1)),
        "NE" => Some((1, -1)),
        "E" => Some((1, 0)),
        "SE" => Some((1, 1)),
        "S" => Some((0, 1)),
        "SW" => Some((-1, 1)),
        "W" => Some((-1, 0)),
        "NW" => Some((-1, -1)),
        _ => None,
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Action::Place(pos) => write!(f, "place {}", pos_to_notation(pos)),
            Action::Move { from, to } => {
                write!(f, "move {} {}", pos_to_notation(from), pos_to_notation(to))
            }
            Action::Shift { dx, dy } => write!(f, "shift {}", shift_name(dx, dy)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_actions_are_window_placements() {
        let board = Board::new();
        let actions = legal_actions(&board, Mark::X);

        // Window at (1,1), all nine cells empty, no mobility yet
        assert_eq!(actions.len(), 9);
        assert!(actions.iter().all(|a| matches!(a, Action::Place(_))));
        assert_eq!(actions[0], Action::Place(Pos::new(1, 1)));
        assert_eq!(actions[8], Action::Place(Pos::new(3, 3)));
    }

    #[test]
    fn test_mobility_unlocks_at_two_placements() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 1), Mark::X);
        board.set_placements(Mark::X, 1);

        let actions = legal_actions(&board, Mark::X);
        assert!(actions.iter().all(|a| matches!(a, Action::Place(_))));

        board.place_mark(Pos::new(1, 2), Mark::X);
        board.set_placements(Mark::X, 2);

        let actions = legal_actions(&board, Mark::X);
        assert!(actions.iter().any(|a| matches!(a, Action::Move { .. })));
        assert!(actions.iter().any(|a| matches!(a, Action::Shift { .. })));
    }

    #[test]
    fn test_enumeration_order_place_move_shift() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 1), Mark::X);
        board.place_mark(Pos::new(3, 3), Mark::X);
        board.set_placements(Mark::X, 2);

        let actions = legal_actions(&board, Mark::X);
        let first_move = actions
            .iter()
            .position(|a| matches!(a, Action::Move { .. }))
            .unwrap();
        let first_shift = actions
            .iter()
            .position(|a| matches!(a, Action::Shift { .. }))
            .unwrap();
        let last_place = actions
            .iter()
            .rposition(|a| matches!(a, Action::Place(_)))
            .unwrap();

        assert!(last_place < first_move);
        assert!(first_move < first_shift);
    }

    #[test]
    fn test_enumerated_actions_all_apply() {
        // Walk a few plies and check the §-free invariant: whatever the
        // enumerator emits, application accepts.
        let mut board = Board::new();
        let mut side = Mark::X;
        for _ in 0..8 {
            let actions = legal_actions(&board, side);
            for &action in &actions {
                assert!(
                    apply(&board, action, side).is_ok(),
                    "enumerated action {action} must apply"
                );
            }
            let Some(&first) = actions.first() else { break };
            board = apply(&board, first, side).unwrap();
            side = side.opponent();
        }
    }

    #[test]
    fn test_reachable_states_keep_invariants() {
        // Deep greedy walks along different action picks: every reached
        // state keeps its counters capped, its marker counts covered by
        // the counters, and its window on the board.
        for pick in 0..7usize {
            let mut board = Board::new();
            let mut side = Mark::X;
            for _ in 0..30 {
                let actions = legal_actions(&board, side);
                if actions.is_empty() {
                    break;
                }
                let action = actions[pick % actions.len()];
                board = apply(&board, action, side).unwrap();
                side = side.opponent();

                for mark in [Mark::X, Mark::O] {
                    assert!(board.placements(mark) <= MAX_PLACEMENTS);
                    assert!(board.count_marks(mark) <= board.placements(mark));
                }
                assert!(board.window_x() <= WINDOW_MAX);
                assert!(board.window_y() <= WINDOW_MAX);
            }
        }
    }

    #[test]
    fn test_place_bumps_counter() {
        let board = Board::new();
        let next = apply(&board, Action::Place(Pos::new(2, 2)), Mark::X).unwrap();
        assert_eq!(next.get(Pos::new(2, 2)), Mark::X);
        assert_eq!(next.placements(Mark::X), 1);
        assert_eq!(next.placements(Mark::O), 0);
        // Source board untouched
        assert!(board.is_empty(Pos::new(2, 2)));
    }

    #[test]
    fn test_place_over_limit() {
        let mut board = Board::new();
        board.set_placements(Mark::X, MAX_PLACEMENTS);
        let err = apply(&board, Action::Place(Pos::new(2, 2)), Mark::X).unwrap_err();
        assert_eq!(err, ActionError::PlacementOverLimit);
    }

    #[test]
    fn test_place_occupied() {
        let mut board = Board::new();
        board.place_mark(Pos::new(2, 2), Mark::O);
        let err = apply(&board, Action::Place(Pos::new(2, 2)), Mark::X).unwrap_err();
        assert_eq!(err, ActionError::CellOccupied);
    }

    #[test]
    fn test_move_preserves_counters() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 1), Mark::X);
        board.place_mark(Pos::new(1, 2), Mark::X);
        board.set_placements(Mark::X, 2);

        let action = Action::Move {
            from: Pos::new(1, 1),
            to: Pos::new(3, 3),
        };
        let next = apply(&board, action, Mark::X).unwrap();
        assert!(next.is_empty(Pos::new(1, 1)));
        assert_eq!(next.get(Pos::new(3, 3)), Mark::X);
        assert_eq!(next.placements(Mark::X), 2);
    }

    #[test]
    fn test_move_errors() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 1), Mark::X);
        board.set_placements(Mark::X, 1);

        let premature = Action::Move {
            from: Pos::new(1, 1),
            to: Pos::new(2, 2),
        };
        assert_eq!(
            apply(&board, premature, Mark::X).unwrap_err(),
            ActionError::MovementPremature
        );

        board.place_mark(Pos::new(1, 2), Mark::X);
        board.set_placements(Mark::X, 2);
        board.place_mark(Pos::new(2, 2), Mark::O);
        board.set_placements(Mark::O, 1);

        let not_own = Action::Move {
            from: Pos::new(2, 2),
            to: Pos::new(3, 3),
        };
        assert_eq!(
            apply(&board, not_own, Mark::X).unwrap_err(),
            ActionError::NotOwnPiece
        );

        let occupied = Action::Move {
            from: Pos::new(1, 1),
            to: Pos::new(2, 2),
        };
        assert_eq!(
            apply(&board, occupied, Mark::X).unwrap_err(),
            ActionError::DestinationOccupied
        );

        let outside = Action::Move {
            from: Pos::new(1, 1),
            to: Pos::new(0, 0),
        };
        assert_eq!(
            apply(&board, outside, Mark::X).unwrap_err(),
            ActionError::DestinationOutsideWindow
        );
    }

    #[test]
    fn test_shift_errors() {
        let mut board = Board::new();
        assert_eq!(
            apply(&board, Action::Shift { dx: 1, dy: 0 }, Mark::X).unwrap_err(),
            ActionError::ShiftPremature
        );

        board.place_mark(Pos::new(1, 1), Mark::X);
        board.place_mark(Pos::new(1, 2), Mark::X);
        board.set_placements(Mark::X, 2);
        board.set_window(2, 2);
        assert_eq!(
            apply(&board, Action::Shift { dx: 1, dy: 0 }, Mark::X).unwrap_err(),
            ActionError::ShiftOutOfBounds
        );
    }

    #[test]
    fn test_shift_inverse_round_trip() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 1), Mark::X);
        board.place_mark(Pos::new(1, 2), Mark::X);
        board.set_placements(Mark::X, 2);

        for (dx, dy) in shift_offsets() {
            let Ok(shifted) = apply(&board, Action::Shift { dx, dy }, Mark::X) else {
                continue;
            };
            let back = apply(&shifted, Action::Shift { dx: -dx, dy: -dy }, Mark::X).unwrap();
            assert_eq!(back.window_x(), board.window_x());
            assert_eq!(back.window_y(), board.window_y());
        }
    }

    #[test]
    fn test_corner_window_has_three_shifts() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 1), Mark::X);
        board.place_mark(Pos::new(1, 2), Mark::X);
        board.set_placements(Mark::X, 2);
        board.set_window(0, 0);

        let shifts = legal_actions(&board, Mark::X)
            .into_iter()
            .filter(|a| matches!(a, Action::Shift { .. }))
            .count();
        // Only E, S, SE remain from the corner
        assert_eq!(shifts, 3);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Place(Pos::new(2, 2)).to_string(), "place C3");
        assert_eq!(
            Action::Move {
                from: Pos::new(0, 0),
                to: Pos::new(2, 2)
            }
            .to_string(),
            "move A1 C3"
        );
        assert_eq!(Action::Shift { dx: 1, dy: -1 }.to_string(), "shift NE");
    }

    #[test]
    fn test_shift_name_round_trip() {
        for (dx, dy) in shift_offsets() {
            assert_eq!(parse_shift_name(shift_name(dx, dy)), Some((dx, dy)));
        }
        assert_eq!(parse_shift_name("ne"), Some((1, -1)));
        assert_eq!(parse_shift_name("x"), None);
    }
}
