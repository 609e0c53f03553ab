//! Dry-run front-end for argline program definitions.
//!
//! Loads a [`ProgramDefinition`] JSON file, parses a candidate argument
//! vector against it, and reports the populated parameter store. The
//! binary's own argument vector is parsed with `argline-core` itself: the
//! definition path fills the one positional slot and the variadic tail
//! picks up the candidate tokens.
//!
//! ```text
//! argline show <DEFS>                 # render the definition's help text
//! argline parse <DEFS> <TOKENS>...    # parse TOKENS and report as JSON
//! ```

use argline_core::{
    Action, CommandLine, DefineError, OptionDef, ParseOutcome, ProgramDefinition, ValueKind,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The binary's own command line, defined with the library it fronts.
fn own_command_line() -> Result<CommandLine, DefineError> {
    let mut cmd = CommandLine::new();
    cmd.set_program_name("argline");
    cmd.set_description("Dry-run command lines against a JSON program definition.");
    cmd.set_version(PACKAGE_VERSION);
    cmd.define_action(Action::new(
        "parse",
        "Parse the trailing tokens against the definition and report the result.",
    )?);
    cmd.define_action(Action::new("show", "Render the definition's help text.")?);
    cmd.define_option(OptionDef::positional(
        "DEFS",
        "Path to the JSON program definition.",
        ValueKind::String,
    )?);
    cmd.define_option(OptionDef::flagged(
        "help",
        "h",
        "Show this help.",
        ValueKind::Bool,
    )?);
    cmd.add_usage_example("argline show filetool.json");
    cmd.add_usage_example("argline parse filetool.json filetool read -n 5 /tmp/f");
    Ok(cmd)
}

/// One parameter row of the parse report, in declaration order.
#[derive(Debug, Serialize)]
struct ParameterReport {
    name: String,
    kind: String,
    specified: bool,
    value: String,
}

/// JSON report printed by the `parse` action.
#[derive(Debug, Serialize)]
struct Report {
    program: String,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    parameters: Vec<ParameterReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trailing_positionals: Vec<String>,
}

impl Report {
    fn collect(definition: &ProgramDefinition, cmd: &CommandLine, outcome: ParseOutcome) -> Self {
        let parameters = definition
            .options
            .iter()
            .map(|entry| ParameterReport {
                name: entry.name.clone(),
                kind: cmd.value_kind_of(&entry.name).to_string(),
                specified: cmd.is_specified(&entry.name),
                value: cmd.get(&entry.name).to_string(),
            })
            .collect();
        Self {
            program: definition.program.clone(),
            outcome: if outcome.is_empty() { "empty" } else { "parsed" },
            action: cmd.selected_action().ok().map(str::to_string),
            parameters,
            trailing_positionals: cmd.trailing_positionals().to_vec(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut own = own_command_line().map_err(|err| err.to_string())?;
    let argv: Vec<String> = std::env::args().collect();

    let outcome = match own.parse(&argv) {
        Ok(outcome) => outcome,
        Err(err) => {
            // A help request wins even when the rest of the vector is
            // invalid; the failed parse keeps no store to query, so the
            // raw tokens are checked against the registry directly.
            if wants_help(&own, &argv) {
                print!("{}", own.render_help());
                return Ok(());
            }
            eprint!("{}", own.render_help());
            return Err(err.to_string());
        }
    };

    if outcome.is_empty() || own.read::<bool>("help").map_err(|err| err.to_string())? {
        print!("{}", own.render_help());
        return Ok(());
    }

    let (defs_path, target) = split_invocation(&own);
    let action = own
        .selected_action()
        .map_err(|err| err.to_string())?
        .to_string();

    match action.as_str() {
        "show" => run_show(&defs_path),
        "parse" => run_parse(&defs_path, &target),
        other => {
            eprint!("{}", own.render_help());
            Err(format!("unknown action '{other}'"))
        }
    }
}

/// Whether any token resolves to the help flag.
fn wants_help(own: &CommandLine, argv: &[String]) -> bool {
    argv.iter().skip(1).any(|tok| {
        tok.starts_with('-')
            && own
                .arguments()
                .lookup_flagged(tok)
                .is_ok_and(|option| option.name() == "help")
    })
}

/// Recovers the definition path and candidate tokens.
///
/// When the variadic tail triggered it holds the full original vector
/// (`argline <action> <defs> <tokens>...`), so the consumed prefix is
/// skipped here; otherwise the definition path sits in its ordinary slot
/// and there are no candidate tokens.
fn split_invocation(own: &CommandLine) -> (String, Vec<String>) {
    let tail = own.trailing_positionals();
    if tail.len() >= 4 {
        (tail[2].clone(), tail[3..].to_vec())
    } else {
        (own.get("DEFS").to_string(), Vec::new())
    }
}

fn load_definition(defs_path: &str) -> Result<ProgramDefinition, String> {
    ProgramDefinition::from_path(defs_path)
        .map_err(|err| format!("cannot load definition '{defs_path}': {err}"))
}

fn run_show(defs_path: &str) -> Result<(), String> {
    let definition = load_definition(defs_path)?;
    let cmd = definition.build().map_err(|err| err.to_string())?;
    print!("{}", cmd.render_help());
    Ok(())
}

fn run_parse(defs_path: &str, target: &[String]) -> Result<(), String> {
    let definition = load_definition(defs_path)?;
    let mut cmd = definition.build().map_err(|err| err.to_string())?;

    let outcome = cmd.parse(target).map_err(|err| {
        eprint!("{}", cmd.render_help());
        err.to_string()
    })?;

    let report = Report::collect(&definition, &cmd, outcome);
    let json = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}
