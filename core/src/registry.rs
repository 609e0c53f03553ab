//! Registries for argument and action definitions.
//!
//! [`ArgumentRegistry`] owns every registered [`OptionDef`], partitioned
//! into positionals and flagged options, and provides the classification
//! and lookup services the parsing engine runs on. [`ActionRegistry`] is
//! the ordered set of sub-command names; a command line either uses
//! actions or does not.
//!
//! Registration is idempotent: a second definition under an existing name
//! is silently dropped, so modules may re-register shared options without
//! coordinating.

use tracing::debug;

use crate::error::QueryError;
use crate::types::{Action, OptionDef};

/// Owns all registered option definitions.
///
/// Both partitions keep declaration order: positional order is the order
/// slots are filled during parsing, flagged order only matters for help
/// display.
///
/// # Examples
///
/// ```
/// use argline_core::{ArgumentRegistry, OptionDef, ValueKind};
///
/// let mut registry = ArgumentRegistry::new();
/// registry.register(OptionDef::positional("PATH", "", ValueKind::String).unwrap());
/// registry.register(OptionDef::flagged("iterations", "n", "", ValueKind::Int).unwrap());
///
/// assert!(registry.is_flagged("--iterations"));
/// assert!(registry.is_flagged("-n"));
/// assert!(!registry.is_flagged("PATH"));
/// assert_eq!(registry.lookup_flagged("-n").unwrap().name(), "iterations");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentRegistry {
    positionals: Vec<OptionDef>,
    flagged: Vec<OptionDef>,
}

impl ArgumentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, classifying it by short-form presence.
    ///
    /// Duplicate names (in either partition) are ignored so registration
    /// stays idempotent.
    pub fn register(&mut self, option: OptionDef) {
        if self.knows_name(option.name()) {
            debug!(name = option.name(), "ignoring duplicate option registration");
            return;
        }
        if option.is_positional() {
            self.positionals.push(option);
        } else {
            self.flagged.push(option);
        }
    }

    fn knows_name(&self, name: &str) -> bool {
        self.positionals.iter().any(|o| o.name() == name)
            || self.flagged.iter().any(|o| o.name() == name)
    }

    /// Strips one or two leading dashes; `None` when there are none.
    fn strip_dashes(token: &str) -> Option<&str> {
        if let Some(rest) = token.strip_prefix("--") {
            Some(rest)
        } else {
            token.strip_prefix('-')
        }
    }

    /// Whether the token references a flagged option.
    ///
    /// The token must start with `-` or `--`; the remainder is compared
    /// against every flagged name and short form.
    pub fn is_flagged(&self, token: &str) -> bool {
        let Some(stripped) = Self::strip_dashes(token) else {
            return false;
        };
        self.flagged
            .iter()
            .any(|o| o.name() == stripped || o.short_form() == Some(stripped))
    }

    /// Whether the token literally matches a positional name.
    ///
    /// Diagnostic only: the parser places positionals by order, not by
    /// literal matching.
    pub fn is_positional(&self, token: &str) -> bool {
        if token.starts_with('-') {
            return false;
        }
        self.positionals.iter().any(|o| o.name() == token)
    }

    /// Resolves a flagged option from a token or bare name.
    ///
    /// Leading dashes are stripped when present, then the remainder is
    /// matched against long and short forms.
    pub fn lookup_flagged(&self, token: &str) -> Result<&OptionDef, QueryError> {
        let name = Self::strip_dashes(token).unwrap_or(token);
        self.flagged
            .iter()
            .find(|o| o.name() == name || o.short_form() == Some(name))
            .ok_or_else(|| QueryError::NotFound {
                name: token.to_string(),
            })
    }

    /// Resolves a positional by exact name.
    pub fn lookup_positional(&self, name: &str) -> Result<&OptionDef, QueryError> {
        self.positionals
            .iter()
            .find(|o| o.name() == name)
            .ok_or_else(|| QueryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Positional definitions in declaration order.
    pub fn positionals(&self) -> &[OptionDef] {
        &self.positionals
    }

    /// Flagged definitions in declaration order.
    pub fn flagged(&self) -> &[OptionDef] {
        &self.flagged
    }
}

/// Ordered set of registered actions.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: Vec<Action>,
}

impl ActionRegistry {
    /// Creates an empty action registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action; a duplicate name is ignored.
    pub fn register(&mut self, action: Action) {
        if self.contains(action.name()) {
            debug!(name = action.name(), "ignoring duplicate action registration");
            return;
        }
        self.actions.push(action);
    }

    /// True once at least one action has been registered.
    pub fn enabled(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Exact match against registered action names.
    pub fn contains(&self, token: &str) -> bool {
        self.actions.iter().any(|a| a.name() == token)
    }

    /// Actions in declaration order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
