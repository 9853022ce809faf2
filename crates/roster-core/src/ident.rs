//! Person identifier generation.

use uuid::Uuid;

/// 31-based rolling hash over the identifier text, truncated to 32 bits.
fn text_hash32(s: &str) -> i32 {
  s.bytes()
    .fold(0i32, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(b)))
}

/// Produce a pseudo-random person identifier.
///
/// A fresh v4 UUID is hashed down to 32 bits and the sign is dropped from
/// its decimal text before re-parsing. The result fits comfortably in an
/// `i64` but only spans a ~31-bit keyspace, so collisions within a run are
/// unlikely rather than impossible. Callers that need hard uniqueness must
/// track issued identifiers themselves.
pub fn generate_id() -> i64 {
  let hash = text_hash32(&Uuid::new_v4().to_string());
  let digits = hash.to_string().replace('-', "");
  // pure ASCII digits after the strip, at most ten of them
  digits.parse().unwrap_or_default()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn ids_are_never_negative() {
    for _ in 0..1_000 {
      assert!(generate_id() >= 0);
    }
  }

  #[test]
  fn ids_are_mostly_unique() {
    // The keyspace is ~31 bits, so a strict all-distinct assertion would be
    // wrong by construction. A few thousand draws should still collide
    // almost never.
    let n = 3_000;
    let distinct: HashSet<i64> = (0..n).map(|_| generate_id()).collect();
    assert!(distinct.len() >= n - 5, "distinct: {}", distinct.len());
  }

  #[test]
  fn hash_matches_reference_values() {
    // h = 31*h + byte, wrapping at 32 bits
    assert_eq!(text_hash32(""), 0);
    assert_eq!(text_hash32("a"), 97);
    assert_eq!(text_hash32("ab"), 31 * 97 + 98);
  }
}
