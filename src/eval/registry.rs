//! Named evaluation-plugin registry
//!
//! The engine looks evaluation functions up by name so the CLI can select
//! them per side. A registry starts populated with the two built-ins;
//! unknown names fall back to the default plugin so a typo never leaves
//! the engine without an evaluation.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::heuristic::{positional_eval, terminal_eval};
use super::EvalFn;

/// Name of the built-in terminal-only plugin, also the fallback
pub const DEFAULT_EVAL: &str = "default";

/// Name of the built-in positional plugin
pub const POSITIONAL_EVAL: &str = "positional";

/// A named evaluation function, resolved from the registry
#[derive(Clone)]
pub struct EvalPlugin {
    pub name: String,
    pub func: EvalFn,
}

impl std::fmt::Debug for EvalPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalPlugin").field("name", &self.name).finish()
    }
}

/// Why a registration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("evaluation plugin name must not be empty")]
    InvalidPlugin,
}

/// Keyed store of evaluation plugins.
///
/// Passed explicitly into the engine drivers; `with_builtins` gives the
/// default-populated instance the binary constructs at startup.
pub struct EvalRegistry {
    plugins: FxHashMap<String, EvalFn>,
}

impl EvalRegistry {
    /// Registry holding the two built-in plugins
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut plugins: FxHashMap<String, EvalFn> = FxHashMap::default();
        plugins.insert(DEFAULT_EVAL.to_string(), terminal_eval);
        plugins.insert(POSITIONAL_EVAL.to_string(), positional_eval);
        Self { plugins }
    }

    /// Register a plugin under a name. Re-registering a name replaces
    /// the previous function.
    pub fn register(&mut self, name: &str, func: EvalFn) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidPlugin);
        }
        self.plugins.insert(name.to_string(), func);
        Ok(())
    }

    /// Look up a plugin by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<EvalPlugin> {
        self.plugins.get(name).map(|&func| EvalPlugin {
            name: name.to_string(),
            func,
        })
    }

    /// Look up a plugin, falling back to the default for unknown names.
    /// The built-in terminal evaluation backs the fallback even if the
    /// default entry was re-registered away.
    #[must_use]
    pub fn get_or_default(&self, name: &str) -> EvalPlugin {
        match self.get(name).or_else(|| self.get(DEFAULT_EVAL)) {
            Some(plugin) => plugin,
            None => EvalPlugin {
                name: DEFAULT_EVAL.to_string(),
                func: terminal_eval,
            },
        }
    }

    /// Registered plugin names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for EvalRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
