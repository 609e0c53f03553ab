//! Error types for definition, parsing, and retrieval failures.
//!
//! The three enums mirror the three phases of use: [`DefineError`] is raised
//! while constructing definitions, [`ParseError`] aborts a whole
//! [`parse`](crate::CommandLine::parse) call, and [`QueryError`] is a
//! per-call failure of the query surface that leaves parsed state intact.

use thiserror::Error;

use crate::types::ValueKind;

/// Errors raised while constructing an [`OptionDef`](crate::OptionDef) or
/// [`Action`](crate::Action).
///
/// An invalid definition fails at construction rather than producing a
/// silently broken entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    /// Option name is empty or whitespace-only.
    #[error("option name cannot be empty")]
    EmptyName,
    /// Short form has length 0 or more than 3 characters.
    #[error("short form must be 1 to 3 characters, got {0:?}")]
    InvalidShortForm(String),
    /// Action name is empty or whitespace-only.
    #[error("action name cannot be empty")]
    EmptyActionName,
}

/// Errors that abort a parse call.
///
/// No partial parameter store is exposed after either of these; callers
/// typically render help and exit non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-boolean flagged option appeared as the last token with no
    /// following value.
    #[error("no value supplied for option '{option}'")]
    MissingValue {
        /// The flag token as it appeared in the argument vector.
        option: String,
    },
    /// Fewer positional tokens were supplied than declared.
    #[error("expected {expected} positional arguments, got {supplied}")]
    IncompletePositionals {
        /// Number of declared positional slots.
        expected: usize,
        /// Number of slots actually filled.
        supplied: usize,
    },
}

/// Errors raised by the query surface after a parse.
///
/// These never corrupt the store; a caller may retry with a different name
/// or kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The name matches neither a flagged nor a positional definition.
    #[error("no option or positional named '{name}'")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// The requested value kind differs from the declared one.
    #[error("option '{name}' is declared {declared}, requested as {requested}")]
    TypeMismatch {
        /// Canonical option name.
        name: String,
        /// Kind the option was registered with.
        declared: ValueKind,
        /// Kind implied by the caller's requested type.
        requested: ValueKind,
    },
    /// The stored text cannot be converted to the requested kind.
    #[error("cannot decode {value:?} for option '{name}' as {requested}")]
    Decode {
        /// Canonical option name.
        name: String,
        /// The raw stored text.
        value: String,
        /// Kind the conversion targeted.
        requested: ValueKind,
    },
    /// The selected action was queried but no actions were ever registered.
    #[error("no actions have been defined")]
    ActionsDisabled,
}
