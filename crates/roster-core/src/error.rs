//! Error types shared by the Roster crates.

use std::fmt;

use thiserror::Error;

/// The person field (or check) a validation failure points at.
///
/// Rendered with the JSON key of the offending field, so error messages and
/// the wire format agree on naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Id,
  Name,
  Coordinates,
  CreationDate,
  Height,
  HairColor,
  Location,
  /// The `x` component inside `coordinates`.
  CoordinatesX,
  /// The `y` component inside `coordinates`; only reported by the codec's
  /// raw-text presence check, never by the structural validator.
  CoordinatesY,
  PassportId,
}

impl Field {
  pub fn key(self) -> &'static str {
    match self {
      Self::Id => "id",
      Self::Name => "name",
      Self::Coordinates => "coordinates",
      Self::CreationDate => "creationDate",
      Self::Height => "height",
      Self::HairColor => "hairColor",
      Self::Location => "location",
      Self::CoordinatesX => "coordinates (X)",
      Self::CoordinatesY => "coordinates (Y)",
      Self::PassportId => "passportID",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(Debug, Error)]
pub enum Error {
  /// A field failed a structural or range check.
  #[error("invalid person field: {0}")]
  InvalidField(Field),

  /// The creation date did not survive its date/time round-trip re-parse.
  #[error("creation date is not a valid calendar date/time")]
  BadDateTime,

  /// The token source ended before every field was read.
  #[error("input ended before the person was fully read")]
  InputExhausted,

  /// A batch token could not be converted into its field's value.
  #[error("unusable {field} token: {token:?}")]
  BadToken {
    field: &'static str,
    token: String,
  },

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
