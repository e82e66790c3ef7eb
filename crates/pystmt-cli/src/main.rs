//! `pystmt` CLI — convert JSON documents into executable Python statements.
//!
//! ## Usage
//!
//! ```sh
//! # Convert JSON from stdin
//! echo '{"name":"Alice"}' | pystmt
//!
//! # Convert a file, naming the root variable "data"
//! pystmt input.json --root data
//!
//! # Shorten long keys and values for display (-1 means unlimited)
//! pystmt input.json --max-value-length 20 --max-key-length 12
//!
//! # Write the statements to a file
//! pystmt input.json -o statements.py
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pystmt_core::StatementOptions;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "pystmt",
    version,
    about = "Convert JSON to executable Python statements"
)]
struct Cli {
    /// JSON file to process (reads from stdin if omitted)
    file: Option<String>,

    /// Root variable name for the emitted statements
    #[arg(short, long, default_value = "root")]
    root: String,

    /// Display limit for each path segment, -1 for unlimited
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    max_key_length: i64,

    /// Display limit for each scalar value, -1 for unlimited
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    max_value_length: i64,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.root.is_empty() {
        anyhow::bail!("Root variable name must not be empty");
    }

    let opts = StatementOptions {
        root_name: cli.root,
        max_key_len: length_limit(cli.max_key_length),
        max_value_len: length_limit(cli.max_value_length),
    };

    let json = read_input(cli.file.as_deref())?;
    let lines = pystmt_core::convert(&json, &opts).context("Failed to parse JSON input")?;

    let mut content = lines.join("\n");
    content.push('\n');
    write_output(cli.output.as_deref(), &content)?;

    Ok(())
}

/// Map the CLI's `-1` sentinel to "unlimited"; clap has already rejected
/// anything below -1.
fn length_limit(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
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
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
