//! Engine driver: multi-PV ranking and iterative deepening
//!
//! This module is the surface the front-ends consume. It ranks every
//! legal root action by a full-window alpha-beta search, reports the
//! top-K principal variations with scores, and drives iterative
//! deepening with a progress snapshot published after every depth.
//!
//! One transposition table is shared across all root actions of a
//! depth — reuse between sibling subtrees is where the table earns its
//! keep. Depth iterations start with a fresh table and fresh counters,
//! keeping every iteration's bounds trivially sound.
//!
//! # Example
//!
//! ```
//! use shiftac::board::{Board, Mark};
//! use shiftac::engine::get_engine_evaluations;
//! use shiftac::eval::EvalRegistry;
//! use shiftac::search::KeySet;
//!
//! let registry = EvalRegistry::with_builtins();
//! let eval = registry.get_or_default("positional");
//! let history = KeySet::default();
//!
//! let report = get_engine_evaluations(&Board::new(), Mark::X, &history, 3, 3, &eval);
//! assert!(!report.evaluations.is_empty());
//! println!("best: {}", report.evaluations[0].action);
//! ```

use thiserror::Error;

use crate::board::{Board, Mark};
use crate::eval::EvalPlugin;
use crate::rules::{apply, legal_actions, Action};
use crate::search::{state_key, KeySet, SearchStats, Searcher, INF};

/// A ranked root action with its score (AI frame) and the principal
/// variation starting with that action.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub action: Action,
    pub score: i32,
    pub pv: Vec<Action>,
}

/// Result of one engine invocation: ranked evaluations plus the search
/// counters accumulated across every root branch.
#[derive(Debug, Clone, Default)]
pub struct EngineReport {
    pub evaluations: Vec<Evaluation>,
    pub stats: SearchStats,
}

/// Snapshot published to the progress sink after each completed depth.
/// The only cooperative yield points of a search live between depths:
/// whatever the sink does (rendering, interrupt checks) happens here.
#[derive(Debug)]
pub struct EngineProgress<'a> {
    pub depth: u8,
    pub max_depth: u8,
    pub stats: SearchStats,
    pub evaluations: &'a [Evaluation],
    pub eval_name: &'a str,
}

/// Engine-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("every legal action would repeat an earlier position")]
    NoLegalMoves,
}

/// Rank the legal root actions for `ai_side` by a depth-limited search.
///
/// Root actions whose successor repeats a recorded history position are
/// dropped before searching. The returned evaluations are sorted by
/// score descending and truncated to `multi_pv` when it is positive;
/// zero or negative keeps every line.
#[must_use]
pub fn get_engine_evaluations(
    board: &Board,
    ai_side: Mark,
    history: &KeySet,
    max_depth: u8,
    multi_pv: i32,
    eval: &EvalPlugin,
) -> EngineReport {
    let roots: Vec<(Action, Board)> = legal_actions(board, ai_side)
        .into_iter()
        .filter_map(|action| apply(board, action, ai_side).ok().map(|next| (action, next)))
        .filter(|(_, next)| !history.contains(&state_key(next, ai_side.opponent())))
        .collect();

    if roots.is_empty() {
        return EngineReport::default();
    }

    let mut searcher = Searcher::new(ai_side, max_depth, eval.func, history);
    // No branch may cycle back through the root position itself
    searcher.seed_path(state_key(board, ai_side));

    let mut evaluations: Vec<Evaluation> = Vec::with_capacity(roots.len());
    for (action, next) in roots {
        let outcome = searcher.search(&next, ai_side.opponent(), 1, -INF, INF);
        let mut pv = Vec::with_capacity(outcome.pv.len() + 1);
        pv.push(action);
        pv.extend(outcome.pv);
        evaluations.push(Evaluation {
            action,
            score: outcome.score,
            pv,
        });
    }

    evaluations.sort_by(|a, b| b.score.cmp(&a.score));
    if multi_pv > 0 {
        evaluations.truncate(multi_pv as usize);
    }

    EngineReport {
        evaluations,
        stats: searcher.stats(),
    }
}

/// Iterative-deepening wrapper: searches depths `1..=max_depth`,
/// publishing each completed depth to `on_depth` before the next one
/// starts. Returns the final depth's report.
pub fn iterative_engine_evaluations(
    board: &Board,
    ai_side: Mark,
    history: &KeySet,
    max_depth: u8,
    multi_pv: i32,
    eval: &EvalPlugin,
    on_depth: &mut dyn FnMut(&EngineProgress<'_>),
) -> EngineReport {
    let mut report = EngineReport::default();
    for depth in 1..=max_depth {
        report = get_engine_evaluations(board, ai_side, history, depth, multi_pv, eval);
        on_depth(&EngineProgress {
            depth,
            max_depth,
            stats: report.stats,
            evaluations: &report.evaluations,
            eval_name: &eval.name,
        });
    }
    report
}

/// The engine's move choice: the single top-ranked root action.
pub fn choose_best_action(
    board: &Board,
    ai_side: Mark,
    history: &KeySet,
    max_depth: u8,
    eval: &EvalPlugin,
) -> Result<Action, EngineError> {
    get_engine_evaluations(board, ai_side, history, max_depth, 1, eval)
        .evaluations
        .first()
        .map(|evaluation| evaluation.action)
        .ok_or(EngineError::NoLegalMoves)
}
