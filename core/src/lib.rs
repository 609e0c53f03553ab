//! Declarative command-line definitions, parsing, and typed retrieval.
//!
//! This crate replaces manual `argv` scanning with a registered definition
//! model:
//!
//! - [`OptionDef`]: one argument, positional or flagged, with a declared
//!   [`ValueKind`].
//! - [`Action`]: a named sub-command selected by the first positional
//!   token.
//! - [`CommandLine`]: the caller-constructed object that owns the
//!   registries, runs the left-to-right parse, and answers typed queries.
//! - [`ProgramDefinition`]: the JSON file form of a whole command line.
//!
//! Flagged options may appear anywhere in the vector; positionals are
//! filled in declaration order. The final positional slot can absorb an
//! open-ended token list (the variadic tail). Parse failures
//! ([`ParseError`]) abort the call; query failures ([`QueryError`]) are
//! per-call and leave parsed state intact.
//!
//! # Example
//!
//! ```
//! use argline_core::{CommandLine, OptionDef, ValueKind};
//!
//! let mut cmd = CommandLine::new();
//! cmd.set_program_name("filetool");
//! cmd.define_option(OptionDef::positional("PATH", "File to operate on.", ValueKind::String).unwrap());
//! cmd.define_option(OptionDef::flagged("iterations", "n", "Iteration count.", ValueKind::Int).unwrap());
//!
//! let argv: Vec<String> = ["filetool", "-n", "5", "/tmp/f"]
//!     .iter().map(|s| s.to_string()).collect();
//! cmd.parse(&argv).unwrap();
//!
//! assert_eq!(cmd.get("PATH"), "/tmp/f");
//! if cmd.is_specified("iterations") {
//!     assert_eq!(cmd.read::<i32>("iterations").unwrap(), 5);
//! }
//! ```

mod cmdline;
mod convert;
mod definition;
mod error;
mod help;
mod parse;
mod registry;
mod store;
mod types;

pub use cmdline::CommandLine;
pub use convert::FromParameter;
pub use definition::{ActionEntry, DefinitionError, OptionEntry, ProgramDefinition};
pub use error::{DefineError, ParseError, QueryError};
pub use parse::ParseOutcome;
pub use registry::{ActionRegistry, ArgumentRegistry};
pub use store::ParameterStore;
pub use types::{Action, FALSE_TOKEN, OptionDef, TRUE_TOKEN, ValueKind};
