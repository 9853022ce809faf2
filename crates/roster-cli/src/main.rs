//! `roster` — create and check person records from the terminal.
//!
//! # Usage
//!
//! ```
//! roster new              # interactive fill, JSON record on stdout
//! roster import FILE      # batch-fill records from a token file
//! roster load FILE        # decode a JSON-lines file, report each record
//! ```

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_core::Error;
use roster_fill::{BatchSource, ConsoleSource, fill_person};
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Create and check person records")]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Fill one person interactively and print it as JSON.
  New,
  /// Batch-fill person records from a token file (one token per line).
  Import {
    file: std::path::PathBuf,
  },
  /// Decode a JSON-lines file, reporting each record separately.
  Load {
    file: std::path::PathBuf,
  },
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so record output on stdout stays machine-readable.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_writer(io::stderr)
    .init();

  match Args::parse().command {
    Command::New => new_record(),
    Command::Import { file } => import_records(&file),
    Command::Load { file } => load_records(&file),
  }
}

// ─── Commands ────────────────────────────────────────────────────────────────

fn new_record() -> Result<()> {
  let stdin = io::stdin();
  let mut source = ConsoleSource::new(stdin.lock(), io::stdout());
  let person = fill_person(&mut source).context("filling person")?;
  println!("{person}");
  Ok(())
}

fn import_records(file: &std::path::Path) -> Result<()> {
  let raw = std::fs::read_to_string(file)
    .with_context(|| format!("reading token file {}", file.display()))?;
  let mut source = BatchSource::new(io::Cursor::new(raw));

  let mut imported = 0usize;
  while !source.at_end() {
    match fill_person(&mut source) {
      Ok(person) => {
        println!("{person}");
        imported += 1;
      }
      Err(Error::InputExhausted) => {
        tracing::error!(imported, "token file ended inside a record");
        anyhow::bail!("token file ended inside a record");
      }
      Err(err) => {
        // A bad token desynchronizes the record boundary; later lines
        // cannot be trusted to line up with fields.
        tracing::error!(imported, %err, "import stopped");
        return Err(err).context("importing records");
      }
    }
  }

  tracing::info!(imported, "import finished");
  Ok(())
}

fn load_records(file: &std::path::Path) -> Result<()> {
  let raw = std::fs::read_to_string(file)
    .with_context(|| format!("reading record file {}", file.display()))?;

  let mut loaded = 0usize;
  let mut failed = 0usize;
  for (index, result) in roster_json::parse_many(&raw).into_iter().enumerate()
  {
    match result {
      Ok(person) => {
        println!("{person}");
        loaded += 1;
      }
      Err(err) => {
        // One bad record never discards the others.
        tracing::warn!(record = index + 1, %err, "skipping record");
        failed += 1;
      }
    }
  }

  tracing::info!(loaded, failed, "load finished");
  if failed > 0 {
    anyhow::bail!("{failed} record(s) failed to decode");
  }
  Ok(())
}
