//! Search module for the AI engine
//!
//! Contains:
//! - Packed state keys for position identification
//! - Transposition table for caching search results
//! - Depth-limited alpha-beta search with move ordering and
//!   principal-variation tracking

pub mod alphabeta;
pub mod key;
pub mod tt;

pub use alphabeta::{action_priority, SearchOutcome, SearchStats, Searcher, INF};
pub use key::{state_key, KeySet, StateKey};
pub use tt::{EntryType, TranspositionTable, TtEntry, TtStats};
