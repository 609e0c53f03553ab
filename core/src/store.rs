//! Parameter store populated by a parse.
//!
//! A [`ParameterStore`] maps canonical option names to their raw string
//! values, plus two side slots: the variadic trailing-positional list and
//! the selected action. The key set is fixed when the store is initialized
//! from the registry; parsing only assigns values to existing keys. A fresh
//! store is built for every parse call.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::registry::ArgumentRegistry;
use crate::types::FALSE_TOKEN;

/// Mapping from canonical option name to parsed raw value.
///
/// Absence is represented as emptiness: [`get`](ParameterStore::get) returns
/// the empty string both for unset keys and for unknown names, never an
/// error. Boolean options are pre-seeded to the canonical false token so an
/// unset flag still reads as a determinate `False`.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    values: HashMap<String, String>,
    bool_keys: HashSet<String>,
    trailing_positionals: Vec<String>,
    selected_action: String,
}

impl ParameterStore {
    /// Builds a store whose key set is exactly the names known to the
    /// registry.
    ///
    /// Flagged `Bool` options are seeded with [`FALSE_TOKEN`]; every other
    /// key starts empty.
    pub fn initialize(registry: &ArgumentRegistry) -> Self {
        let mut store = Self::default();
        for option in registry.flagged() {
            if option.value_kind().is_bool() {
                store
                    .values
                    .insert(option.name().to_string(), FALSE_TOKEN.to_string());
                store.bool_keys.insert(option.name().to_string());
            } else {
                store.values.insert(option.name().to_string(), String::new());
            }
        }
        for option in registry.positionals() {
            if option.value_kind().is_bool() {
                store.bool_keys.insert(option.name().to_string());
            }
            store
                .values
                .entry(option.name().to_string())
                .or_default();
        }
        store
    }

    /// Assigns a value to an existing key.
    ///
    /// Unknown names are a warned no-op; the key set never grows after
    /// [`initialize`](ParameterStore::initialize).
    pub fn set(&mut self, name: &str, value: &str) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value.to_string(),
            None => warn!(name, "value assigned to unknown parameter"),
        }
    }

    /// Stored value, or the empty string for unknown names.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether the store tracks this name at all.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether a value is available for this name.
    ///
    /// Boolean keys are always specified: they hold a determinate
    /// true/false state from initialization on. Other keys are specified
    /// once they hold non-empty text.
    pub fn is_specified(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(value) => !value.is_empty() || self.bool_keys.contains(name),
            None => false,
        }
    }

    /// Replaces the variadic trailing-positional list.
    pub fn set_trailing_positionals(&mut self, tokens: Vec<String>) {
        self.trailing_positionals = tokens;
    }

    /// Tokens absorbed by the variadic tail; empty unless it triggered.
    pub fn trailing_positionals(&self) -> &[String] {
        &self.trailing_positionals
    }

    /// Records the selected action.
    pub fn set_action(&mut self, action: &str) {
        self.selected_action = action.to_string();
    }

    /// The selected action; empty unless actions are enabled and one was
    /// parsed.
    pub fn action(&self) -> &str {
        &self.selected_action
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
