//! `json-unset` — remove the value at a path from a JSON document.
//!
//! Usage:
//!   json-unset [--pointer] [--pretty] [--removed] '<path>'
//!
//! The document is read from stdin and the result is written to stdout.
//! Log verbosity is controlled with `RUST_LOG`.

use std::io::{self, Read, Write};

use clap::Parser;
use json_unset::cli::{run, CliError, UnsetOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "json-unset", version, about = "Remove the value at a path from a JSON document read from stdin")]
struct Args {
    /// Dot-delimited path such as `user.name` or `items.1`.
    path: String,
    /// Interpret PATH as a JSON Pointer (`/user/name`).
    #[arg(long)]
    pointer: bool,
    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
    /// Print the removed value instead of the document.
    #[arg(long)]
    removed: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = execute(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn execute(args: &Args) -> Result<(), CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    let options = UnsetOptions {
        pointer: args.pointer,
        pretty: args.pretty,
        removed: args.removed,
    };
    let result = run(buf.trim(), &args.path, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
