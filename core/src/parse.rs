//! The left-to-right parsing engine.
//!
//! A single scan over the raw token vector resolves each token against the
//! [`ArgumentRegistry`](crate::ArgumentRegistry) and populates a fresh
//! [`ParameterStore`](crate::ParameterStore). Token 0 is the program path
//! and is always skipped.
//!
//! Flagged options are order-independent and may be interleaved with
//! positionals; positionals are filled strictly in declaration order since
//! nothing names them on the command line. When the last declared positional
//! slot is reached with more than one positional token left, the scan
//! switches to variadic-tail mode and the remaining parse is abandoned in
//! favor of the trailing-positional list.

use tracing::{debug, warn};

use crate::error::ParseError;
use crate::registry::{ActionRegistry, ArgumentRegistry};
use crate::store::ParameterStore;
use crate::types::TRUE_TOKEN;

/// How a successful parse call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The token vector was scanned and the store populated.
    Parsed,
    /// Nothing to parse: the vector held at most the program path.
    ///
    /// A soft condition, not an error; the store is initialized but holds
    /// no supplied values.
    Empty,
}

impl ParseOutcome {
    /// True for the nothing-to-parse case.
    pub fn is_empty(self) -> bool {
        self == ParseOutcome::Empty
    }
}

/// Runs the scan and returns the populated store.
///
/// Failures abort the whole call; no partial store escapes.
pub(crate) fn run(
    arguments: &ArgumentRegistry,
    actions: &ActionRegistry,
    tokens: &[String],
) -> Result<(ParameterStore, ParseOutcome), ParseError> {
    let mut store = ParameterStore::initialize(arguments);
    if tokens.len() <= 1 {
        debug!("no parameters to parse");
        return Ok((store, ParseOutcome::Empty));
    }

    let slots = arguments.positionals();
    let mut filled = 0usize;
    let mut variadic = false;
    let mut action_routed = false;

    let mut a = 1usize;
    while a < tokens.len() {
        let tok = tokens[a].as_str();

        // A token only counts as a flag reference when it is dash-prefixed
        // and resolves; anything else falls through as a positional token.
        let flag = if tok.starts_with('-') {
            arguments.lookup_flagged(tok).ok()
        } else {
            None
        };
        if let Some(option) = flag {
            if option.value_kind().is_bool() {
                let name = option.name().to_string();
                store.set(&name, TRUE_TOKEN);
                a += 1;
            } else {
                if a + 1 >= tokens.len() {
                    return Err(ParseError::MissingValue {
                        option: tok.to_string(),
                    });
                }
                let name = option.name().to_string();
                store.set(&name, &tokens[a + 1]);
                a += 2;
            }
            continue;
        }

        // Everything without a matching flag form is a positional token.
        if actions.enabled() && !action_routed {
            // Action resolution takes precedence over slot assignment.
            if !actions.contains(tok) {
                warn!(token = tok, "selected action is not a registered action");
            }
            store.set_action(tok);
            action_routed = true;
            a += 1;
            continue;
        }

        if filled + 1 == slots.len() && positional_tokens_from(arguments, tokens, a) > 1 {
            // The final slot absorbs an open-ended list instead; the whole
            // original vector is kept, and scanning stops here.
            store.set_trailing_positionals(tokens.to_vec());
            variadic = true;
            break;
        }

        match slots.get(filled) {
            Some(slot) => {
                store.set(slot.name(), tok);
                filled += 1;
            }
            None => warn!(token = tok, "positional token with no declared slot"),
        }
        a += 1;
    }

    if !variadic && filled != slots.len() {
        return Err(ParseError::IncompletePositionals {
            expected: slots.len(),
            supplied: filled,
        });
    }

    Ok((store, ParseOutcome::Parsed))
}

/// Counts the tokens from `from` onward that would land in positional
/// slots.
///
/// Flag tokens and the value token a non-boolean flag consumes are
/// skipped, so interleaved options never count toward the variadic-tail
/// decision.
fn positional_tokens_from(arguments: &ArgumentRegistry, tokens: &[String], from: usize) -> usize {
    let mut count = 0usize;
    let mut i = from;
    while i < tokens.len() {
        let tok = tokens[i].as_str();
        let flag = if tok.starts_with('-') {
            arguments.lookup_flagged(tok).ok()
        } else {
            None
        };
        match flag {
            Some(option) if option.takes_value() => i += 2,
            Some(_) => i += 1,
            None => {
                count += 1;
                i += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, FALSE_TOKEN, OptionDef, ValueKind};

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn file_tool() -> ArgumentRegistry {
        let mut registry = ArgumentRegistry::new();
        registry.register(OptionDef::positional("PATH", "", ValueKind::String).unwrap());
        registry.register(OptionDef::flagged("iterations", "n", "", ValueKind::Int).unwrap());
        registry.register(OptionDef::flagged("help", "h", "", ValueKind::Bool).unwrap());
        registry
    }

    #[test]
    fn test_options_interleave_with_positionals() {
        let registry = file_tool();
        let (store, outcome) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "-n", "5", "/tmp/f"]),
        )
        .unwrap();

        assert_eq!(outcome, ParseOutcome::Parsed);
        assert_eq!(store.get("PATH"), "/tmp/f");
        assert_eq!(store.get("iterations"), "5");

        // Positional first, option after.
        let (store, _) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "/tmp/f", "--iterations", "7"]),
        )
        .unwrap();
        assert_eq!(store.get("PATH"), "/tmp/f");
        assert_eq!(store.get("iterations"), "7");
    }

    #[test]
    fn test_bool_flag_consumes_no_value() {
        let registry = file_tool();
        let (store, _) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "-h", "/tmp/f"]),
        )
        .unwrap();
        assert_eq!(store.get("help"), TRUE_TOKEN);
        assert_eq!(store.get("PATH"), "/tmp/f");
    }

    #[test]
    fn test_absent_bool_flag_reads_false() {
        let registry = file_tool();
        let (store, _) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "/tmp/f"]),
        )
        .unwrap();
        assert_eq!(store.get("help"), FALSE_TOKEN);
        assert!(store.is_specified("help"));
    }

    #[test]
    fn test_missing_value_for_trailing_option() {
        let registry = file_tool();
        let err = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "/tmp/f", "-n"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingValue {
                option: "-n".to_string()
            }
        );
    }

    #[test]
    fn test_incomplete_positionals() {
        let mut registry = file_tool();
        registry.register(OptionDef::positional("DEST", "", ValueKind::String).unwrap());

        let err = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "-n", "5"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::IncompletePositionals {
                expected: 2,
                supplied: 0
            }
        );
    }

    #[test]
    fn test_empty_vector_is_soft() {
        let registry = file_tool();
        let (_, outcome) = run(&registry, &ActionRegistry::new(), &tokens(&["prog"])).unwrap();
        assert!(outcome.is_empty());
        let (_, outcome) = run(&registry, &ActionRegistry::new(), &[]).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_first_positional_routes_to_action() {
        let registry = file_tool();
        let mut actions = ActionRegistry::new();
        actions.register(Action::new("read", "").unwrap());
        actions.register(Action::new("write", "").unwrap());

        let (store, _) = run(&registry, &actions, &tokens(&["prog", "read", "/tmp/f"])).unwrap();
        assert_eq!(store.action(), "read");
        assert_eq!(store.get("PATH"), "/tmp/f");
    }

    #[test]
    fn test_action_routed_before_interleaved_options() {
        let registry = file_tool();
        let mut actions = ActionRegistry::new();
        actions.register(Action::new("write", "").unwrap());

        let (store, _) = run(
            &registry,
            &actions,
            &tokens(&["prog", "-n", "3", "write", "/tmp/f"]),
        )
        .unwrap();
        assert_eq!(store.action(), "write");
        assert_eq!(store.get("iterations"), "3");
        assert_eq!(store.get("PATH"), "/tmp/f");
    }

    #[test]
    fn test_unregistered_action_token_still_routed() {
        let registry = file_tool();
        let mut actions = ActionRegistry::new();
        actions.register(Action::new("read", "").unwrap());

        let (store, _) = run(&registry, &actions, &tokens(&["prog", "wipe", "/tmp/f"])).unwrap();
        assert_eq!(store.action(), "wipe");
    }

    #[test]
    fn test_flag_tokens_after_last_positional_are_not_a_tail() {
        let registry = file_tool();
        let (store, _) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "/tmp/f", "--iterations", "7", "-h"]),
        )
        .unwrap();

        assert_eq!(store.get("PATH"), "/tmp/f");
        assert_eq!(store.get("iterations"), "7");
        assert_eq!(store.get("help"), TRUE_TOKEN);
        assert!(store.trailing_positionals().is_empty());
    }

    #[test]
    fn test_missing_value_after_last_positional_still_fails() {
        let registry = file_tool();
        // The valueless flag must not be absorbed by a variadic tail.
        let err = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "/tmp/f", "-h", "-n"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingValue {
                option: "-n".to_string()
            }
        );
    }

    #[test]
    fn test_variadic_tail_absorbs_whole_vector() {
        let mut registry = ArgumentRegistry::new();
        registry.register(OptionDef::positional("SRC", "", ValueKind::String).unwrap());

        let (store, outcome) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "a", "b", "c"]),
        )
        .unwrap();
        assert_eq!(outcome, ParseOutcome::Parsed);
        // The tail replicates the full original vector, consumed tokens
        // included, and the ordinary slot stays unset.
        assert_eq!(store.trailing_positionals(), ["prog", "a", "b", "c"]);
        assert_eq!(store.get("SRC"), "");
    }

    #[test]
    fn test_variadic_tail_not_triggered_for_exact_supply() {
        let mut registry = ArgumentRegistry::new();
        registry.register(OptionDef::positional("SRC", "", ValueKind::String).unwrap());
        registry.register(OptionDef::positional("DEST", "", ValueKind::String).unwrap());

        let (store, _) = run(&registry, &ActionRegistry::new(), &tokens(&["prog", "x", "y"])).unwrap();
        assert_eq!(store.get("SRC"), "x");
        assert_eq!(store.get("DEST"), "y");
        assert!(store.trailing_positionals().is_empty());
    }

    #[test]
    fn test_variadic_tail_on_last_slot_of_many() {
        let mut registry = ArgumentRegistry::new();
        registry.register(OptionDef::positional("SRC", "", ValueKind::String).unwrap());
        registry.register(OptionDef::positional("DEST", "", ValueKind::String).unwrap());

        let (store, _) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "x", "y", "z"]),
        )
        .unwrap();
        // The earlier slot keeps its value; only the final slot switches.
        assert_eq!(store.get("SRC"), "x");
        assert_eq!(store.get("DEST"), "");
        assert_eq!(store.trailing_positionals(), ["prog", "x", "y", "z"]);
    }

    #[test]
    fn test_stray_positional_without_slot_is_ignored() {
        let registry = file_tool();
        let (store, _) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "-h", "/tmp/f"]),
        )
        .unwrap();
        assert_eq!(store.get("PATH"), "/tmp/f");

        // No declared positionals at all: tokens fall through harmlessly.
        let mut registry = ArgumentRegistry::new();
        registry.register(OptionDef::flagged("verbose", "v", "", ValueKind::Bool).unwrap());
        let (store, outcome) = run(
            &registry,
            &ActionRegistry::new(),
            &tokens(&["prog", "stray", "-v"]),
        )
        .unwrap();
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert_eq!(store.get("verbose"), TRUE_TOKEN);
    }

    #[test]
    fn test_unknown_dash_token_is_treated_as_positional() {
        let registry = file_tool();
        // "-x" matches no flag, so it lands in the PATH slot.
        let (store, _) = run(&registry, &ActionRegistry::new(), &tokens(&["prog", "-x"])).unwrap();
        assert_eq!(store.get("PATH"), "-x");
    }
}
