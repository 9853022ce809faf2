//! Structural decode plus the raw-text `y` presence re-check.

use roster_core::{CandidatePerson, Error, Field, Person, Result, validate};

/// Decode one person record from `text`.
///
/// Stages: serde decode into a candidate, field validation, then the
/// raw-text check that the coordinate `y` key is assigned exactly once and
/// not `null`. The stage order means a validator error wins when a record
/// fails both.
pub fn parse(text: &str) -> Result<Person> {
  let candidate: CandidatePerson = match serde_json::from_str(text) {
    Ok(candidate) => candidate,
    Err(err) => {
      // A duplicated y key trips the derived decoder before the raw check
      // can see it; prefer the more specific error when a coordinates
      // object is there to check.
      if coordinates_span(text).is_some() {
        check_y_assignment(text)?;
      }
      return Err(Error::Json(err));
    }
  };
  validate::validate(&candidate)?;
  check_y_assignment(text)?;
  Person::try_from(candidate)
}

/// Decode one record per non-empty line.
///
/// A bad line yields `Err` in its position without touching the rest, so a
/// caller loading a multi-record file keeps every record that did decode.
pub fn parse_many(text: &str) -> Vec<Result<Person>> {
  text
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(parse)
    .collect()
}

// ─── Raw-text y check ────────────────────────────────────────────────────────

/// Verify against the raw text that the `coordinates` object assigns `y`
/// exactly once and not to `null`. The structural decoder fills a missing
/// or `null` `y` with zero, and a decoded value tree would silently collapse
/// duplicate keys, so only the original text can answer this.
fn check_y_assignment(text: &str) -> Result<()> {
  let Some(object) = coordinates_span(text) else {
    return Err(Error::InvalidField(Field::CoordinatesY));
  };

  let bytes = object.as_bytes();
  let needle: &[u8] = b"\"y\"";
  let mut assignments = 0usize;
  let mut null_value = false;

  let mut i = 0;
  while i + needle.len() <= bytes.len() {
    if &bytes[i..i + needle.len()] != needle {
      i += 1;
      continue;
    }
    let mut j = i + needle.len();
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
      j += 1;
    }
    // only a following colon makes this a key, not a string value
    if j < bytes.len() && bytes[j] == b':' {
      assignments += 1;
      j += 1;
      while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
      }
      if bytes[j..].starts_with(b"null") {
        null_value = true;
      }
    }
    i += needle.len();
  }

  if assignments != 1 || null_value {
    return Err(Error::InvalidField(Field::CoordinatesY));
  }
  Ok(())
}

/// The text of the `{...}` object assigned to the top-level `coordinates`
/// key. Brace matching skips string contents so braces inside values cannot
/// derail it.
fn coordinates_span(text: &str) -> Option<&str> {
  let key = "\"coordinates\"";
  let key_at = text.find(key)?;
  let after_key = &text[key_at + key.len()..];
  let colon_at = after_key.find(':')?;
  let from_value = after_key[colon_at + 1..].trim_start();
  if !from_value.starts_with('{') {
    return None;
  }

  let mut depth = 0usize;
  let mut in_string = false;
  let mut escaped = false;
  for (i, c) in from_value.char_indices() {
    if in_string {
      if escaped {
        escaped = false;
      } else if c == '\\' {
        escaped = true;
      } else if c == '"' {
        in_string = false;
      }
      continue;
    }
    match c {
      '"' => in_string = true,
      '{' => depth += 1,
      '}' => {
        depth -= 1;
        if depth == 0 {
          return Some(&from_value[..=i]);
        }
      }
      _ => {}
    }
  }
  None
}

// ─── Tests ───────────────────────────────────────────────────────────────────
