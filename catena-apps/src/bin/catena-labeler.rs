//! Counts connected components in every image of an XML dataset.
//!
//! Usage: `catena-labeler [PATH]`. Without an argument the path is read as
//! the first whitespace-separated token on stdin. Prints `error` when the
//! document is malformed, otherwise one `<name> <count>` line per image.
//! Logs go to stderr; set `RUST_LOG` to change the level (default `info`).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use catena_apps::report;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn input_path() -> io::Result<Option<String>> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok(Some(path));
    }
    let mut stdin = String::new();
    io::stdin().read_to_string(&mut stdin)?;
    Ok(stdin.split_whitespace().next().map(str::to_owned))
}

fn main() -> ExitCode {
    enable_tracing();

    let path = match input_path() {
        Ok(Some(path)) => path,
        Ok(None) => {
            tracing::error!("no input path given on the command line or stdin");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::error!("Failed to read stdin: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let document = match std::fs::read_to_string(&path) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Labeling {} ({} bytes)", path, document.len());

    let output = report::render(&document);
    if let Err(e) = io::stdout().lock().write_all(output.as_bytes()) {
        tracing::error!("Failed to write report: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
