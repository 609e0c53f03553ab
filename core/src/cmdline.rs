//! The caller-facing command-line object.
//!
//! [`CommandLine`] ties the registries, the parsing engine, and the typed
//! retrieval layer together behind one explicit, caller-constructed value.
//! There is no process-wide singleton: construct one, register definitions,
//! parse, then query.
//!
//! ```
//! use argline_core::{Action, CommandLine, OptionDef, ValueKind};
//!
//! let mut cmd = CommandLine::new();
//! cmd.set_program_name("filetool");
//! cmd.define_option(OptionDef::positional("PATH", "File to operate on.", ValueKind::String).unwrap());
//! cmd.define_option(OptionDef::flagged("iterations", "n", "Iteration count.", ValueKind::Int).unwrap());
//! cmd.define_action(Action::new("read", "Read the file.").unwrap());
//!
//! let argv: Vec<String> = ["filetool", "read", "-n", "5", "/tmp/f"]
//!     .iter().map(|s| s.to_string()).collect();
//! cmd.parse(&argv).unwrap();
//!
//! assert_eq!(cmd.selected_action().unwrap(), "read");
//! assert_eq!(cmd.get("PATH"), "/tmp/f");
//! assert_eq!(cmd.read::<i32>("iterations").unwrap(), 5);
//! ```

use crate::convert::{self, FromParameter};
use crate::error::{ParseError, QueryError};
use crate::help;
use crate::parse::{self, ParseOutcome};
use crate::registry::{ActionRegistry, ArgumentRegistry};
use crate::store::ParameterStore;
use crate::types::{Action, OptionDef, ValueKind};

/// A declarative command line: registered definitions, program metadata,
/// and the parameters of the most recent parse.
///
/// Registration is expected to finish before [`parse`](CommandLine::parse)
/// is invoked; nothing is synchronized internally, callers needing shared
/// access serialize externally.
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    program_name: String,
    description: String,
    version: String,
    usage_examples: Vec<String>,
    arguments: ArgumentRegistry,
    actions: ActionRegistry,
    parameters: ParameterStore,
}

impl CommandLine {
    /// Creates an empty command line with no definitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option definition; duplicates by name are ignored.
    pub fn define_option(&mut self, option: OptionDef) -> &mut Self {
        self.arguments.register(option);
        self
    }

    /// Registers an action; duplicates by name are ignored.
    pub fn define_action(&mut self, action: Action) -> &mut Self {
        self.actions.register(action);
        self
    }

    /// Sets the program name shown in rendered help.
    pub fn set_program_name(&mut self, name: &str) -> &mut Self {
        self.program_name = name.to_string();
        self
    }

    /// Sets the one-line program description.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = description.to_string();
        self
    }

    /// Sets the program version string.
    pub fn set_version(&mut self, version: &str) -> &mut Self {
        self.version = version.to_string();
        self
    }

    /// Adds a usage example line to the rendered help.
    pub fn add_usage_example(&mut self, example: &str) -> &mut Self {
        self.usage_examples.push(example.to_string());
        self
    }

    /// Parses a raw token vector; token 0 is the program path.
    ///
    /// A vector of length 0 or 1 is the soft [`ParseOutcome::Empty`] case.
    /// On failure the previous parameters are left untouched; no partial
    /// store is exposed.
    pub fn parse(&mut self, tokens: &[String]) -> Result<ParseOutcome, ParseError> {
        let (store, outcome) = parse::run(&self.arguments, &self.actions, tokens)?;
        self.parameters = store;
        Ok(outcome)
    }

    /// Convenience wrapper collecting [`std::env::args`].
    pub fn parse_env(&mut self) -> Result<ParseOutcome, ParseError> {
        let tokens: Vec<String> = std::env::args().collect();
        self.parse(&tokens)
    }

    /// Raw stored value; empty string for unset or unknown names.
    pub fn get(&self, name: &str) -> &str {
        self.parameters.get(name)
    }

    /// Whether a value is available for this name.
    ///
    /// Boolean options are always specified, even before the first parse:
    /// they carry a determinate false state from registration on.
    pub fn is_specified(&self, name: &str) -> bool {
        if self.parameters.contains(name) {
            self.parameters.is_specified(name)
        } else {
            self.value_kind_of(name).is_bool()
        }
    }

    /// Declared kind of a name, or [`ValueKind::None`] when unknown.
    pub fn value_kind_of(&self, name: &str) -> ValueKind {
        self.arguments
            .lookup_flagged(name)
            .or_else(|_| self.arguments.lookup_positional(name))
            .map(|option| option.value_kind())
            .unwrap_or(ValueKind::None)
    }

    /// The action selected by the most recent parse.
    ///
    /// Empty when actions are enabled but none was supplied; an error when
    /// no actions were ever registered.
    pub fn selected_action(&self) -> Result<&str, QueryError> {
        if !self.actions.enabled() {
            return Err(QueryError::ActionsDisabled);
        }
        Ok(self.parameters.action())
    }

    /// Tokens absorbed by the variadic tail of the most recent parse.
    pub fn trailing_positionals(&self) -> &[String] {
        self.parameters.trailing_positionals()
    }

    /// Reads a value decoded as `T`, validating the declared kind.
    pub fn read<T: FromParameter>(&self, name: &str) -> Result<T, QueryError> {
        convert::read(&self.arguments, &self.parameters, name)
    }

    /// Renders the help text for the registered definitions.
    pub fn render_help(&self) -> String {
        help::render(
            &self.program_name,
            &self.description,
            &self.usage_examples,
            &self.arguments,
            &self.actions,
        )
    }

    /// Renders the one-line version banner.
    pub fn version_line(&self) -> String {
        help::version_line(&self.program_name, &self.version)
    }

    /// Registered program name.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Read access to the argument definitions, for display layers.
    pub fn arguments(&self) -> &ArgumentRegistry {
        &self.arguments
    }

    /// Read access to the action definitions, for display layers.
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }
}
