//! Definition types for command-line arguments.
//!
//! This module defines the data model a program registers before parsing:
//! [`OptionDef`] describes one argument (positional or flagged), [`Action`]
//! describes a named sub-command token, and [`ValueKind`] declares how an
//! argument's raw text is later decoded.

use serde::{Deserialize, Serialize};

use crate::error::DefineError;

/// Canonical text stored for a boolean option that was supplied.
pub const TRUE_TOKEN: &str = "True";

/// Canonical text a boolean option is pre-seeded with when absent.
pub const FALSE_TOKEN: &str = "False";

/// Value kind an option's raw text is decoded as.
///
/// `None` is the sentinel for "no value type": it is what
/// [`CommandLine::value_kind_of`](crate::CommandLine::value_kind_of) returns
/// for names unknown to the registry.
///
/// # Examples
///
/// ```
/// use argline_core::ValueKind;
///
/// assert_eq!(ValueKind::default(), ValueKind::String);
/// assert!(ValueKind::Bool.is_bool());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueKind {
    /// Boolean flag; carries no following value token.
    Bool,
    /// 64-bit floating point value.
    Double,
    /// 64-bit signed integer.
    Long,
    /// 32-bit signed integer.
    Int,
    /// 16-bit signed integer.
    Short,
    /// Free-form string (the default).
    #[default]
    String,
    /// 64-bit unsigned integer.
    UnsignedLong,
    /// 32-bit unsigned integer.
    UnsignedInt,
    /// 16-bit unsigned integer.
    UnsignedShort,
    /// No value type; sentinel for unknown names.
    None,
}

impl ValueKind {
    /// Whether this kind is [`ValueKind::Bool`].
    pub fn is_bool(self) -> bool {
        self == ValueKind::Bool
    }

    /// Uppercase placeholder used in rendered usage lines (e.g. `<INT>`).
    pub fn placeholder(self) -> &'static str {
        match self {
            ValueKind::Bool => "BOOL",
            ValueKind::Double => "DOUBLE",
            ValueKind::Long => "LONG",
            ValueKind::Int => "INT",
            ValueKind::Short => "SHORT",
            ValueKind::String => "STRING",
            ValueKind::UnsignedLong => "ULONG",
            ValueKind::UnsignedInt => "UINT",
            ValueKind::UnsignedShort => "USHORT",
            ValueKind::None => "NONE",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Bool => "Bool",
            ValueKind::Double => "Double",
            ValueKind::Long => "Long",
            ValueKind::Int => "Int",
            ValueKind::Short => "Short",
            ValueKind::String => "String",
            ValueKind::UnsignedLong => "UnsignedLong",
            ValueKind::UnsignedInt => "UnsignedInt",
            ValueKind::UnsignedShort => "UnsignedShort",
            ValueKind::None => "None",
        };
        f.write_str(name)
    }
}

/// Replaces embedded line breaks with spaces.
///
/// Help text is appended incrementally and rendered into single flowing
/// paragraphs, so raw breaks are never kept.
fn normalize_help(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Definition of one command-line argument.
///
/// An `OptionDef` is either *positional* (identified purely by its place in
/// the argument vector) or *flagged* (introduced by a `-`/`--` token). The
/// presence of a short form is the sole discriminator: definitions built
/// with [`OptionDef::positional`] have none, definitions built with
/// [`OptionDef::flagged`] always have one.
///
/// Definitions are immutable once registered; validation happens here, at
/// construction time.
///
/// # Examples
///
/// ```
/// use argline_core::{OptionDef, ValueKind};
///
/// let path = OptionDef::positional("PATH", "File to operate on", ValueKind::String).unwrap();
/// assert!(path.is_positional());
///
/// let iterations = OptionDef::flagged("iterations", "n", "Iteration count", ValueKind::Int).unwrap();
/// assert!(iterations.is_flagged());
/// assert_eq!(iterations.short_form(), Some("n"));
///
/// // Short forms are limited to 1-3 characters.
/// assert!(OptionDef::flagged("verbose", "verb", "", ValueKind::Bool).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDef {
    name: String,
    short_form: Option<String>,
    help_text: String,
    value_kind: ValueKind,
}

impl OptionDef {
    /// Creates a positional definition.
    ///
    /// Positionals are filled in declaration order during parsing; `name` is
    /// the label its value is stored and queried under.
    pub fn positional(
        name: &str,
        help_text: &str,
        value_kind: ValueKind,
    ) -> Result<Self, DefineError> {
        if name.trim().is_empty() {
            return Err(DefineError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            short_form: None,
            help_text: normalize_help(help_text),
            value_kind,
        })
    }

    /// Creates a flagged definition with a mandatory short form.
    ///
    /// `name` is the long form (matched against `--name`), `short_form` the
    /// alias (matched against `-s`) and must be 1-3 characters.
    pub fn flagged(
        name: &str,
        short_form: &str,
        help_text: &str,
        value_kind: ValueKind,
    ) -> Result<Self, DefineError> {
        if name.trim().is_empty() {
            return Err(DefineError::EmptyName);
        }
        if short_form.is_empty() || short_form.len() > 3 {
            return Err(DefineError::InvalidShortForm(short_form.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            short_form: Some(short_form.to_string()),
            help_text: normalize_help(help_text),
            value_kind,
        })
    }

    /// Appends to the help text, normalizing embedded line breaks to spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use argline_core::{OptionDef, ValueKind};
    ///
    /// let mut opt = OptionDef::flagged("iterations", "n", "Iteration count.", ValueKind::Int).unwrap();
    /// opt.append_help("\nNeeded for benchmarking.");
    /// assert_eq!(opt.help_text(), "Iteration count. Needed for benchmarking.");
    /// ```
    pub fn append_help(&mut self, text: &str) -> &mut Self {
        self.help_text.push_str(&normalize_help(text));
        self
    }

    /// Canonical identifier: the long form for flagged options, the label
    /// for positionals.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short alias, present only for flagged definitions.
    pub fn short_form(&self) -> Option<&str> {
        self.short_form.as_deref()
    }

    /// Accumulated help text.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Whether any help text was supplied.
    pub fn has_help_text(&self) -> bool {
        !self.help_text.is_empty()
    }

    /// Declared value kind.
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// True when this definition has no short form.
    pub fn is_positional(&self) -> bool {
        self.short_form.is_none()
    }

    /// True when this definition carries a short form.
    pub fn is_flagged(&self) -> bool {
        self.short_form.is_some()
    }

    /// Whether this definition consumes a following value token.
    ///
    /// Boolean options never do; every other kind consumes exactly one.
    pub fn takes_value(&self) -> bool {
        !self.value_kind.is_bool()
    }
}

/// Definition of a named sub-command selected by the first positional token.
///
/// # Examples
///
/// ```
/// use argline_core::Action;
///
/// let mut read = Action::new("read", "Read the file.").unwrap();
/// read.append_help("\nThis is the default mode.");
/// assert_eq!(read.help_text(), "Read the file. This is the default mode.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    help_text: String,
}

impl Action {
    /// Creates an action; the name must be non-empty.
    pub fn new(name: &str, help_text: &str) -> Result<Self, DefineError> {
        if name.trim().is_empty() {
            return Err(DefineError::EmptyActionName);
        }
        Ok(Self {
            name: name.to_string(),
            help_text: normalize_help(help_text),
        })
    }

    /// Name of the action.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accumulated help text.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Appends to the help text, normalizing line breaks to spaces.
    pub fn append_help(&mut self, text: &str) -> &mut Self {
        self.help_text.push_str(&normalize_help(text));
        self
    }
}
