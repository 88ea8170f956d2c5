//! `cemjson` CLI: normalize, inspect and query lenient JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize a JS object literal to strict JSON (stdin → stdout)
//! echo "{b:'x', a:[1,,3]}" | cemjson format
//!
//! # Loose output keeps bare identifier keys
//! cemjson format --loose -i response.js -o response.out.js
//!
//! # Pretty-printed standard JSON
//! cemjson format --pretty -i response.js
//!
//! # Classified type of the document, or of a value inside it
//! cemjson type -i response.js --key results.0.price
//!
//! # Coerced string value under a key path
//! cemjson get -i response.js results.0.name
//!
//! # More logging (RUST_LOG overrides)
//! cemjson -vv format -i response.js
//! ```

use anyhow::{bail, Context, Result};
use cem_json::Value;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cemjson",
    version,
    about = "Lenient JSON / JavaScript object literal tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write it back out
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Leave identifier keys unquoted
        #[arg(long, conflicts_with = "pretty")]
        loose: bool,
        /// Pretty-print as standard JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the classified type of the document or of one of its values
    Type {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Dot-separated path to a nested value (`a.b.0`)
        #[arg(long)]
        key: Option<String>,
    },
    /// Print the string form of the value at a key path
    Get {
        /// Dot-separated path to a nested value (`a.b.0`)
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Format {
            input,
            output,
            loose,
            pretty,
        } => {
            let value = read_document(input.as_deref())?;
            let mut text = if pretty {
                serde_json::to_string_pretty(&value).context("Failed to render pretty JSON")?
            } else {
                value.to_json(!loose)
            };
            text.push('\n');
            write_output(output.as_deref(), &text)?;
        }
        Commands::Type { input, key } => {
            let value = read_document(input.as_deref())?;
            let target = match key.as_deref() {
                Some(path) => lookup(&value, path)?,
                None => &value,
            };
            println!("{}", target.kind());
        }
        Commands::Get { key, input } => {
            let value = read_document(input.as_deref())?;
            let target = lookup(&value, &key)?;
            let text = match target {
                Value::Array(_) | Value::Object(_) => target.to_json(true),
                scalar => scalar.as_string().unwrap_or_else(|| scalar.kind().to_string()),
            };
            println!("{text}");
        }
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let source = read_input(path)?;
    info!(bytes = source.len(), "read document");
    cem_json::eval(&source).context("Failed to parse document")
}

/// Walk a dot-separated path. Segments index objects by key and arrays by position.
fn lookup<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    if path.is_empty() {
        bail!("Key path must not be empty");
    }
    let mut current = value;
    for segment in path.split('.') {
        debug!(segment, "resolving key path segment");
        current = match current {
            Value::Object(object) => object.get(segment),
            Value::Array(array) => segment.parse::<usize>().ok().and_then(|i| array.get(i)),
            _ => None,
        }
        .with_context(|| format!("No value at '{path}' (missing '{segment}')"))?;
    }
    Ok(current)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
