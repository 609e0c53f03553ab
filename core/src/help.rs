//! Help text rendering.
//!
//! Pure string formatting over the ordered definition lists; the library
//! never prints or exits. The layout follows the usual two-column scheme:
//! a left column with the argument form, a right column with its help text,
//! aligned across each section.

use crate::registry::{ActionRegistry, ArgumentRegistry};
use crate::types::OptionDef;

fn format_flagged_left(option: &OptionDef) -> String {
    let mut out = String::new();
    if let Some(short) = option.short_form() {
        out.push_str(&format!("-{short}, "));
    }
    out.push_str(&format!("--{}", option.name()));
    if option.takes_value() {
        out.push_str(&format!(" <{}>", option.value_kind().placeholder()));
    }
    out
}

fn push_rows(out: &mut String, rows: &[(String, String)]) {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {left}\n"));
        } else {
            out.push_str(&format!("  {left:width$}  {help}\n"));
        }
    }
}

/// Renders the full help text for a program definition.
pub(crate) fn render(
    program_name: &str,
    description: &str,
    usage_examples: &[String],
    arguments: &ArgumentRegistry,
    actions: &ActionRegistry,
) -> String {
    let name = if program_name.is_empty() {
        "<program>"
    } else {
        program_name
    };

    let mut out = String::new();
    if description.is_empty() {
        out.push_str(name);
        out.push('\n');
    } else {
        out.push_str(&format!("{name} - {description}\n"));
    }

    let mut usage = format!("\nUsage: {name}");
    if actions.enabled() {
        usage.push_str(" <ACTION>");
    }
    if !arguments.flagged().is_empty() {
        usage.push_str(" [OPTIONS]");
    }
    for positional in arguments.positionals() {
        usage.push_str(&format!(" <{}>", positional.name()));
    }
    out.push_str(&usage);
    out.push('\n');

    if actions.enabled() {
        out.push_str("\nActions:\n");
        let rows: Vec<(String, String)> = actions
            .actions()
            .iter()
            .map(|a| (a.name().to_string(), a.help_text().to_string()))
            .collect();
        push_rows(&mut out, &rows);
    }

    if !arguments.positionals().is_empty() {
        out.push_str("\nArguments:\n");
        let rows: Vec<(String, String)> = arguments
            .positionals()
            .iter()
            .map(|o| (format!("<{}>", o.name()), o.help_text().to_string()))
            .collect();
        push_rows(&mut out, &rows);
    }

    if !arguments.flagged().is_empty() {
        out.push_str("\nOptions:\n");
        let rows: Vec<(String, String)> = arguments
            .flagged()
            .iter()
            .map(|o| (format_flagged_left(o), o.help_text().to_string()))
            .collect();
        push_rows(&mut out, &rows);
    }

    if !usage_examples.is_empty() {
        out.push_str("\nExamples:\n");
        for example in usage_examples {
            if example.trim().is_empty() {
                continue;
            }
            out.push_str(&format!("  {}\n", example.trim_end()));
        }
    }

    out
}

/// Renders the one-line version banner.
pub(crate) fn version_line(program_name: &str, version: &str) -> String {
    if version.is_empty() {
        format!("{program_name}\n")
    } else {
        format!("{program_name} {version}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, OptionDef, ValueKind};

    #[test]
    fn test_render_sections() {
        let mut arguments = ArgumentRegistry::new();
        arguments.register(
            OptionDef::positional("PATH", "The path to the file to operate on.", ValueKind::String)
                .unwrap(),
        );
        arguments.register(
            OptionDef::flagged("iterations", "n", "Number of iterations.", ValueKind::Int).unwrap(),
        );
        arguments.register(OptionDef::flagged("help", "h", "Show this help.", ValueKind::Bool).unwrap());
        let mut actions = ActionRegistry::new();
        actions.register(Action::new("read", "Read the file.").unwrap());

        let text = render(
            "filetool",
            "A simple file tool.",
            &["filetool read /tmp/f".to_string()],
            &arguments,
            &actions,
        );

        assert!(text.contains("filetool - A simple file tool."));
        assert!(text.contains("Usage: filetool <ACTION> [OPTIONS] <PATH>"));
        assert!(text.contains("Actions:"));
        assert!(text.contains("read"));
        assert!(text.contains("<PATH>"));
        assert!(text.contains("-n, --iterations <INT>"));
        assert!(text.contains("-h, --help"));
        assert!(!text.contains("--help <"));
        assert!(text.contains("Examples:"));
        assert!(text.contains("filetool read /tmp/f"));
    }

    #[test]
    fn test_render_without_metadata() {
        let text = render("", "", &[], &ArgumentRegistry::new(), &ActionRegistry::new());
        assert!(text.starts_with("<program>\n"));
        assert!(!text.contains("Options:"));
    }

    #[test]
    fn test_version_line() {
        assert_eq!(version_line("filetool", "1.2.0"), "filetool 1.2.0\n");
        assert_eq!(version_line("filetool", ""), "filetool\n");
    }
}
