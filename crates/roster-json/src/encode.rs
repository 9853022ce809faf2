//! Person-to-JSON encoding.

use roster_core::{Person, Result};

/// Encode `person` with every field written out, `null`s included, so the
/// decoder's presence checks see each key even when the optional fields are
/// absent.
pub fn to_json(person: &Person) -> Result<String> {
  Ok(serde_json::to_string(person)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
