//! Value objects owned by a person record.
//!
//! Each type carries its own parsing and serde rules; the person-level
//! validator only checks top-level presence (and `coordinates.x`), never
//! their internals.

use std::{
  fmt,
  hash::{Hash, Hasher},
  str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// Treat an explicit `null` like an absent key. Matches the defaulting
/// behavior of lenient decoders, which is exactly what the codec's raw-text
/// `y` re-check exists to catch.
fn null_to_zero<'de, D>(de: D) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<f64>::deserialize(de)?.unwrap_or_default())
}

/// A coordinate pair.
///
/// `x` stays optional so a structurally decoded pair can be presence-checked
/// afterwards. `y` decodes an absent or `null` value as `0.0`; the codec is
/// responsible for rejecting both shapes against the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub x: Option<f64>,
  #[serde(default, deserialize_with = "null_to_zero")]
  pub y: f64,
}

impl Coordinates {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x: Some(x), y }
  }
}

impl Hash for Coordinates {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.x.map(f64::to_bits).hash(state);
    self.y.to_bits().hash(state);
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// A named point. Owned exclusively by its person; no independent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
  pub x:    i64,
  pub y:    f64,
  pub name: String,
}

impl Hash for Location {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.x.hash(state);
    self.y.to_bits().hash(state);
    self.name.hash(state);
  }
}

// ─── Hair color ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
  Red,
  Black,
  Blue,
  Yellow,
  White,
}

impl Color {
  pub const ALL: [Color; 5] =
    [Self::Red, Self::Black, Self::Blue, Self::Yellow, Self::White];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Red => "RED",
      Self::Black => "BLACK",
      Self::Blue => "BLUE",
      Self::Yellow => "YELLOW",
      Self::White => "WHITE",
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s.trim().to_ascii_uppercase().as_str() {
      "RED" => Ok(Self::Red),
      "BLACK" => Ok(Self::Black),
      "BLUE" => Ok(Self::Blue),
      "YELLOW" => Ok(Self::Yellow),
      "WHITE" => Ok(Self::White),
      _ => Err(Error::BadToken {
        field: "hairColor",
        token: s.to_string(),
      }),
    }
  }
}

// ─── Nationality ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
  Russia,
  Usa,
  Germany,
  Italy,
  Thailand,
}

impl Country {
  pub const ALL: [Country; 5] = [
    Self::Russia,
    Self::Usa,
    Self::Germany,
    Self::Italy,
    Self::Thailand,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Russia => "RUSSIA",
      Self::Usa => "USA",
      Self::Germany => "GERMANY",
      Self::Italy => "ITALY",
      Self::Thailand => "THAILAND",
    }
  }
}

impl fmt::Display for Country {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Country {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s.trim().to_ascii_uppercase().as_str() {
      "RUSSIA" => Ok(Self::Russia),
      "USA" => Ok(Self::Usa),
      "GERMANY" => Ok(Self::Germany),
      "ITALY" => Ok(Self::Italy),
      "THAILAND" => Ok(Self::Thailand),
      _ => Err(Error::BadToken {
        field: "nationality",
        token: s.to_string(),
      }),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
