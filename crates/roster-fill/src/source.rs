//! Token sources consumed by the fill pathways.

use std::io::{BufRead, Write};

/// Where fill tokens come from: an interactive console or a pre-supplied
/// batch of lines. One token per line.
pub trait TokenSource {
  /// Show `prompt` when the source is interactive, then produce the next
  /// input line with its trailing newline removed. `None` means the source
  /// is exhausted.
  fn next_line(&mut self, prompt: &str) -> Option<String>;

  /// Interactive sources get re-prompted after a bad token; batch sources
  /// fail fast instead.
  fn interactive(&self) -> bool {
    false
  }
}

// ─── Console ─────────────────────────────────────────────────────────────────

/// Prompts on `out` and reads lines from `input`. In production this wraps
/// locked stdin and stdout; tests substitute buffers.
pub struct ConsoleSource<R, W> {
  input: R,
  out:   W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
  pub fn new(input: R, out: W) -> Self {
    Self { input, out }
  }
}

impl<R: BufRead, W: Write> TokenSource for ConsoleSource<R, W> {
  fn next_line(&mut self, prompt: &str) -> Option<String> {
    if !prompt.is_empty() {
      write!(self.out, "{prompt}").ok();
      self.out.flush().ok();
    }
    let mut line = String::new();
    match self.input.read_line(&mut line) {
      Ok(0) | Err(_) => None,
      Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
  }

  fn interactive(&self) -> bool {
    true
  }
}

// ─── Batch ───────────────────────────────────────────────────────────────────

/// Reads pre-supplied lines silently, e.g. from a script file.
pub struct BatchSource<R> {
  input: R,
}

impl<R: BufRead> BatchSource<R> {
  pub fn new(input: R) -> Self {
    Self { input }
  }

  /// Whether the underlying reader has no more bytes. Lets a caller filling
  /// record after record tell clean end-of-file apart from a record cut off
  /// halfway.
  pub fn at_end(&mut self) -> bool {
    self.input.fill_buf().map(|buf| buf.is_empty()).unwrap_or(true)
  }
}

impl<R: BufRead> TokenSource for BatchSource<R> {
  fn next_line(&mut self, _prompt: &str) -> Option<String> {
    let mut line = String::new();
    match self.input.read_line(&mut line) {
      Ok(0) | Err(_) => None,
      Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
