//! Depth-limited alpha-beta search with transposition table
//!
//! This module implements the core search algorithm for the AI engine:
//! minimax with alpha-beta pruning, expressed in the AI side's frame (the
//! AI side maximises, the opponent minimises, scores never flip sign).
//!
//! # Features
//!
//! - Transposition table probe/store with bound flags
//! - In-search cycle guard over a path set of state keys
//! - History filtering: actions recreating a real game position are
//!   never searched
//! - Move ordering to surface likely-best actions early
//! - Principal-variation reconstruction
//!
//! The path set and the game history are deliberately separate: the path
//! set guards the current recursion against shift/move cycles, while the
//! history encodes the game's repetition rule and persists across turns.

use std::cmp::Reverse;

use crate::board::{Board, Mark};
use crate::eval::EvalFn;
use crate::rules::{apply, is_draw, legal_actions, winner, Action};

use super::key::{state_key, KeySet, StateKey};
use super::tt::{EntryType, TranspositionTable};

/// Infinity for alpha-beta bounds; far above any evaluation magnitude
pub const INF: i32 = 1_000_000;

/// Transposition table size per search invocation
const TT_SIZE_MB: usize = 1;

/// Search counters reported alongside results.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes entered, including terminal and cached ones
    pub nodes_visited: u64,
    /// Exact transposition-table hits
    pub cache_hits: u64,
    /// Alpha-beta cutoffs, from both the TT and the child loop
    pub cutoffs: u64,
}

/// Result of one search call: the score in the AI side's frame, the
/// chosen action (if any child was searched) and the principal variation
/// starting with that action.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub score: i32,
    pub best_action: Option<Action>,
    pub pv: Vec<Action>,
}

impl SearchOutcome {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_action: None,
            pv: Vec::new(),
        }
    }
}

/// Ordering priority of an action; higher is searched first.
///
/// Placing beats moving beats shifting, and inside the window the centre
/// and corners dominate three-in-a-row counting:
///
/// - place at the window centre: 100
/// - place at a window corner: 80
/// - place elsewhere in the window: 60
/// - move: 40
/// - shift: 20
#[must_use]
pub fn action_priority(board: &Board, action: Action) -> i32 {
    match action {
        Action::Place(pos) => {
            if pos == board.window_center() {
                100
            } else if board.is_window_corner(pos) {
                80
            } else {
                60
            }
        }
        Action::Move { .. } => 40,
        Action::Shift { .. } => 20,
    }
}

/// Alpha-beta searcher for one engine invocation.
///
/// Owns the transposition table and the in-search path set; the driver
/// keeps one searcher per depth iteration so the table is shared across
/// all root actions of that iteration. The game history is borrowed
/// read-only for the whole search.
pub struct Searcher<'a> {
    ai_side: Mark,
    max_depth: u8,
    eval: EvalFn,
    history: &'a KeySet,
    path: KeySet,
    tt: TranspositionTable,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(ai_side: Mark, max_depth: u8, eval: EvalFn, history: &'a KeySet) -> Self {
        debug_assert!(ai_side.is_player());
        Self {
            ai_side,
            max_depth,
            eval,
            history,
            path: KeySet::default(),
            tt: TranspositionTable::new(TT_SIZE_MB),
            stats: SearchStats::default(),
        }
    }

    /// Accumulated counters for this searcher
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pre-mark a position as on the search path. The driver seeds the
    /// root position here so no branch can cycle back through it.
    pub fn seed_path(&mut self, key: StateKey) {
        self.path.insert(key);
    }

    /// Recursive alpha-beta search.
    ///
    /// `depth` is the distance from the engine's root; the search stops
    /// evaluating at `max_depth`. Scores are always from the AI side's
    /// point of view; `side` decides whether this node maximises or
    /// minimises them.
    pub fn search(
        &mut self,
        board: &Board,
        side: Mark,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchOutcome {
        self.stats.nodes_visited += 1;

        // Terminal and horizon returns evaluate in place
        if let Some(won) = winner(board) {
            return SearchOutcome::leaf((self.eval)(board, Some(won), self.ai_side, depth));
        }
        if is_draw(board) {
            return SearchOutcome::leaf((self.eval)(board, None, self.ai_side, depth));
        }
        if depth >= self.max_depth {
            return SearchOutcome::leaf((self.eval)(board, None, self.ai_side, depth));
        }

        // Cycle guard: a position already on the recursion path scores as
        // a quiet heuristic leaf instead of recursing forever
        let key = state_key(board, side);
        if self.path.contains(&key) {
            return SearchOutcome::leaf((self.eval)(board, None, self.ai_side, depth));
        }

        let remaining = self.max_depth - depth;
        let (alpha0, beta0) = (alpha, beta);

        if let Some(entry) = self.tt.probe(key, remaining) {
            match entry.entry_type {
                EntryType::Exact => {
                    self.stats.cache_hits += 1;
                    return SearchOutcome {
                        score: entry.score,
                        best_action: entry.best_action,
                        pv: entry.best_action.into_iter().collect(),
                    };
                }
                EntryType::LowerBound => alpha = alpha.max(entry.score),
                EntryType::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                return SearchOutcome {
                    score: entry.score,
                    best_action: entry.best_action,
                    pv: Vec::new(),
                };
            }
        }

        self.path.insert(key);

        // Generate successors, dropping any that would recreate a real
        // game position (repetition rule)
        let mut children: Vec<(Action, Board)> = legal_actions(board, side)
            .into_iter()
            .filter_map(|action| apply(board, action, side).ok().map(|next| (action, next)))
            .filter(|(_, next)| !self.history.contains(&state_key(next, side.opponent())))
            .collect();

        if children.is_empty() {
            self.path.remove(&key);
            return SearchOutcome::leaf((self.eval)(board, None, self.ai_side, depth));
        }

        // Stable priority sort keeps the enumeration order for ties; a
        // remembered TT action is rotated to the front afterwards
        children.sort_by_key(|(action, _)| Reverse(action_priority(board, *action)));
        if let Some(tt_action) = self.tt.best_action(key) {
            if let Some(idx) = children.iter().position(|(a, _)| *a == tt_action) {
                let front = children.remove(idx);
                children.insert(0, front);
            }
        }

        let maximizing = side == self.ai_side;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_action = None;
        let mut best_pv = Vec::new();

        for (action, next) in children {
            let child = self.search(&next, side.opponent(), depth + 1, alpha, beta);

            let improved = if maximizing {
                child.score > best_score
            } else {
                child.score < best_score
            };
            if improved {
                best_score = child.score;
                best_action = Some(action);
                best_pv.clear();
                best_pv.push(action);
                best_pv.extend(child.pv);
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // Classify against the window this node was entered with
        let entry_type = if best_score <= alpha0 {
            EntryType::UpperBound
        } else if best_score >= beta0 {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.tt.store(key, remaining, best_score, entry_type, best_action);

        self.path.remove(&key);

        SearchOutcome {
            score: best_score,
            best_action,
            pv: best_pv,
        }
    }
}
