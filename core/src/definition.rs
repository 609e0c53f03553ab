//! Serializable program definitions.
//!
//! A [`ProgramDefinition`] is the file form of a command line: program
//! metadata plus option and action entries, round-trippable through JSON.
//! Entries are plain data; invariants (non-empty names, short-form length)
//! are enforced when the definition is built into a [`CommandLine`], so a
//! hand-edited file fails loudly instead of producing a broken parser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cmdline::CommandLine;
use crate::error::DefineError;
use crate::types::{Action, OptionDef, ValueKind};

/// Errors raised while loading or building a definition file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry violates a definition invariant.
    #[error(transparent)]
    Define(#[from] DefineError),
}

/// One option entry in a definition file.
///
/// An entry with a `short_form` becomes a flagged option, one without
/// becomes a positional, matching the in-memory discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Canonical name (long form or positional label).
    pub name: String,
    /// Short alias; presence makes the entry flagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_form: Option<String>,
    /// Help text.
    #[serde(default)]
    pub help: String,
    /// Declared value kind.
    #[serde(default)]
    pub kind: ValueKind,
}

/// One action entry in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    /// Action name.
    pub name: String,
    /// Help text.
    #[serde(default)]
    pub help: String,
}

/// The file form of a whole command line.
///
/// # Examples
///
/// ```
/// use argline_core::ProgramDefinition;
///
/// let json = r#"{
///     "program": "filetool",
///     "description": "A simple file tool.",
///     "options": [
///         { "name": "PATH", "help": "File to operate on." },
///         { "name": "iterations", "short_form": "n", "kind": "Int" }
///     ],
///     "actions": [ { "name": "read" }, { "name": "write" } ]
/// }"#;
///
/// let definition = ProgramDefinition::from_json(json).unwrap();
/// let mut cmd = definition.build().unwrap();
/// let argv: Vec<String> = ["filetool", "read", "-n", "2", "/tmp/f"]
///     .iter().map(|s| s.to_string()).collect();
/// cmd.parse(&argv).unwrap();
/// assert_eq!(cmd.selected_action().unwrap(), "read");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDefinition {
    /// Program name.
    pub program: String,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Version string.
    #[serde(default)]
    pub version: String,
    /// Usage example lines for rendered help.
    #[serde(default)]
    pub usage_examples: Vec<String>,
    /// Option entries, positional order preserved.
    #[serde(default)]
    pub options: Vec<OptionEntry>,
    /// Action entries.
    #[serde(default)]
    pub actions: Vec<ActionEntry>,
}

impl ProgramDefinition {
    /// Parses a definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a definition from a JSON file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, DefinitionError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a ready-to-parse [`CommandLine`], validating every entry.
    pub fn build(&self) -> Result<CommandLine, DefineError> {
        let mut cmd = CommandLine::new();
        cmd.set_program_name(&self.program);
        cmd.set_description(&self.description);
        cmd.set_version(&self.version);
        for example in &self.usage_examples {
            cmd.add_usage_example(example);
        }
        for entry in &self.options {
            let option = match &entry.short_form {
                Some(short) => OptionDef::flagged(&entry.name, short, &entry.help, entry.kind)?,
                None => OptionDef::positional(&entry.name, &entry.help, entry.kind)?,
            };
            cmd.define_option(option);
        }
        for entry in &self.actions {
            cmd.define_action(Action::new(&entry.name, &entry.help)?);
        }
        Ok(cmd)
    }
}
