//! Checked line reading shared by the console and batch pathways.

use roster_core::{Error, Result};

use crate::source::TokenSource;

fn next_token<S: TokenSource + ?Sized>(
  source: &mut S,
  prompt: &str,
) -> Result<String> {
  source.next_line(prompt).ok_or(Error::InputExhausted)
}

/// Read one required field.
///
/// `convert` turns the trimmed token into the field value; every predicate
/// in `checks` must accept the converted value. Interactive sources are
/// re-prompted after a bad token; batch sources fail with
/// [`Error::BadToken`] on the first one. Source exhaustion is always
/// [`Error::InputExhausted`].
pub fn read_field<T, S: TokenSource + ?Sized>(
  source: &mut S,
  prompt: &str,
  field: &'static str,
  convert: impl Fn(&str) -> Option<T>,
  checks: &[&dyn Fn(&T) -> bool],
) -> Result<T> {
  loop {
    let token = next_token(source, prompt)?;
    match convert(token.trim()) {
      Some(value) if checks.iter().all(|check| check(&value)) => {
        return Ok(value);
      }
      _ if source.interactive() => continue,
      _ => return Err(Error::BadToken { field, token }),
    }
  }
}

/// Read one optional field; a blank token means "left blank".
pub fn read_optional_field<T, S: TokenSource + ?Sized>(
  source: &mut S,
  prompt: &str,
  field: &'static str,
  convert: impl Fn(&str) -> Option<T>,
  checks: &[&dyn Fn(&T) -> bool],
) -> Result<Option<T>> {
  loop {
    let token = next_token(source, prompt)?;
    let trimmed = token.trim();
    if trimmed.is_empty() {
      return Ok(None);
    }
    match convert(trimmed) {
      Some(value) if checks.iter().all(|check| check(&value)) => {
        return Ok(Some(value));
      }
      _ if source.interactive() => continue,
      _ => return Err(Error::BadToken { field, token }),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
