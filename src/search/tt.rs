//! Transposition table for caching search results
//!
//! The transposition table stores search results indexed by state key,
//! enabling reuse of previous results when the search reaches the same
//! position again. Each entry records the score, its bound flag, the best
//! action and the remaining depth the score was computed with.
//!
//! # Example
//!
//! ```
//! use shiftac::board::{Board, Mark, Pos};
//! use shiftac::rules::Action;
//! use shiftac::search::{state_key, EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1); // 1 MB
//! let key = state_key(&Board::new(), Mark::X);
//!
//! tt.store(key, 4, 7, EntryType::Exact, Some(Action::Place(Pos::new(2, 2))));
//! if let Some(entry) = tt.probe(key, 4) {
//!     assert_eq!(entry.score, 7);
//! }
//! ```

use crate::rules::Action;
use crate::search::key::StateKey;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    /// State key of the position
    pub key: StateKey,
    /// Remaining search depth the score was computed with
    pub depth: u8,
    /// Evaluation score, always in the AI side's frame
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best action found for this position
    pub best_action: Option<Action>,
}

/// Transposition table for caching search results.
///
/// Uses a direct-mapped layout where each key maps to exactly one slot,
/// verified by the stored key. A same-position entry is only overwritten
/// by a result from a deeper remaining search; slot collisions between
/// different positions fall back to depth-preferred replacement.
pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TtEntry>>();
        let size = (size_mb * 1024 * 1024) / entry_size;

        // Ensure at least some entries
        let size = size.max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    /// Probe the table for a position.
    ///
    /// Returns the entry only when it was computed with at least
    /// `remaining_depth` plies left; shallower entries stay invisible to
    /// scoring (use [`best_action`](Self::best_action) for ordering).
    #[must_use]
    pub fn probe(&self, key: StateKey, remaining_depth: u8) -> Option<TtEntry> {
        let idx = (key as usize) % self.size;
        let entry = self.entries[idx]?;

        if entry.key != key || entry.depth < remaining_depth {
            return None;
        }

        Some(entry)
    }

    /// Get best action from the table for move ordering, regardless of
    /// the entry's depth.
    #[must_use]
    pub fn best_action(&self, key: StateKey) -> Option<Action> {
        let idx = (key as usize) % self.size;
        self.entries[idx].and_then(|e| if e.key == key { e.best_action } else { None })
    }

    /// Store a search result.
    ///
    /// A result for a position already in the table only replaces the old
    /// entry when it comes from a strictly deeper remaining search. An
    /// unrelated position occupying the slot is replaced when the new
    /// result is at least as deep.
    pub fn store(
        &mut self,
        key: StateKey,
        depth: u8,
        score: i32,
        entry_type: EntryType,
        best_action: Option<Action>,
    ) {
        let idx = (key as usize) % self.size;

        let should_store = match &self.entries[idx] {
            None => true,
            Some(e) if e.key == key => e.depth < depth,
            Some(e) => e.depth <= depth,
        };

        if should_store {
            self.entries[idx] = Some(TtEntry {
                key,
                depth,
                score,
                entry_type,
                best_action,
            });
        }
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TtStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TtStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TtStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}
