//! mkinds - driving adapter for matcher-kinds.
//!
//! Subcommands:
//! - `kinds` - list every matcher type with its code
//! - `schema` - print the schema descriptor for the `type` field
//! - `parse <literal>...` - resolve literals to canonical names
//! - `check <file>` - validate the matcher types of a JSON/YAML rule document

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use matcher_kinds::{parse_kind, supported_kinds, MatcherKindHolder, SchemaDescriptor};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mkinds", version, about = "Inspect matcher types and validate rule documents")]
struct Cli {
    /// Log lookups at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List supported matcher types, ascending by code.
    Kinds,
    /// Print the JSON schema fragment for the matcher `type` field.
    Schema,
    /// Resolve each literal to its canonical matcher type.
    Parse {
        /// Literals to resolve (case and surrounding whitespace are ignored).
        #[arg(required = true)]
        literals: Vec<String>,
    },
    /// Validate the matcher types of a rule document (.json, otherwise YAML).
    Check {
        /// Path to the rule document.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Kinds => Ok(cmd_kinds()),
        Command::Schema => cmd_schema(),
        Command::Parse { literals } => cmd_parse(literals),
        Command::Check { path } => cmd_check(path),
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_kinds() -> String {
    supported_kinds()
        .iter()
        .map(|kind| format!("{}\t{kind}\n", kind.code()))
        .collect()
}

fn cmd_schema() -> Result<String, String> {
    let descriptor = SchemaDescriptor::matcher_kind();
    serde_json::to_string_pretty(&descriptor)
        .map(|json| json + "\n")
        .map_err(|e| format!("failed to render schema: {e}"))
}

fn cmd_parse(literals: &[String]) -> Result<String, String> {
    let mut out = String::new();
    for literal in literals {
        let kind = parse_kind(literal).map_err(|e| e.to_string())?;
        out.push_str(kind.as_str());
        out.push('\n');
    }
    Ok(out)
}

fn cmd_check(path: &str) -> Result<String, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;
    let documents = load_documents(path, &content)?;
    tracing::debug!(path, documents = documents.len(), "loaded rule document");

    let mut out = String::new();
    let mut index = 0usize;
    for document in &documents {
        for entry in &document.matchers {
            let kind = entry.kind.kind().map_err(|e| e.to_string())?;
            let name = entry.name.as_deref().unwrap_or("-");
            out.push_str(&format!("{index}\t{name}\t{kind}\n"));
            index += 1;
        }
    }
    Ok(out)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

/// A rule document. Only each matcher's `type` (and optional `name`) is read here;
/// the remaining matcher fields belong to the rule engine.
#[derive(Debug, Deserialize)]
struct RuleDocument {
    matchers: Vec<MatcherEntry>,
}

#[derive(Debug, Deserialize)]
struct MatcherEntry {
    #[serde(rename = "type")]
    kind: MatcherKindHolder,
    #[serde(default)]
    name: Option<String>,
}

fn load_documents(path: &str, content: &str) -> Result<Vec<RuleDocument>, String> {
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let document =
            serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))?;
        return Ok(vec![document]);
    }

    // Default to YAML (handles .yaml and .yml), one rule document per `---`
    serde_yaml::Deserializer::from_str(content)
        .map(|doc| RuleDocument::deserialize(doc).map_err(|e| format!("YAML parse error: {e}")))
        .collect()
}
