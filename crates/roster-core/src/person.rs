//! The person record and its comparison contract.
//!
//! Two types: [`CandidatePerson`] is what decoding and filling produce, with
//! every field optional; [`Person`] only exists after the validator has
//! accepted a candidate, so its required fields are plain values.

use std::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Field, Result},
  validate,
  value::{Color, Coordinates, Country, Location},
};

// ─── Person ──────────────────────────────────────────────────────────────────

/// A validated person record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:            i64,
  pub name:          String,
  pub coordinates:   Coordinates,
  /// Stamped once at creation, never read from user input.
  pub creation_date: NaiveDateTime,
  pub height:        f64,
  #[serde(rename = "passportID")]
  pub passport_id:   Option<String>,
  pub hair_color:    Color,
  pub nationality:   Option<Country>,
  pub location:      Location,
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// A structurally decoded or partially filled person awaiting validation.
///
/// Every field is optional so the validator can report the first missing or
/// out-of-range field by name instead of the decoder bailing on the first
/// absent key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePerson {
  pub id:            Option<i64>,
  pub name:          Option<String>,
  pub coordinates:   Option<Coordinates>,
  pub creation_date: Option<NaiveDateTime>,
  pub height:        Option<f64>,
  #[serde(rename = "passportID")]
  pub passport_id:   Option<String>,
  pub hair_color:    Option<Color>,
  pub nationality:   Option<Country>,
  pub location:      Option<Location>,
}

fn require<T>(value: Option<T>, field: Field) -> Result<T> {
  value.ok_or(Error::InvalidField(field))
}

impl TryFrom<CandidatePerson> for Person {
  type Error = Error;

  /// Validate the candidate and unwrap it into a [`Person`].
  fn try_from(candidate: CandidatePerson) -> Result<Self> {
    validate::validate(&candidate)?;
    Ok(Self {
      id:            require(candidate.id, Field::Id)?,
      name:          require(candidate.name, Field::Name)?,
      coordinates:   require(candidate.coordinates, Field::Coordinates)?,
      creation_date: require(candidate.creation_date, Field::CreationDate)?,
      height:        require(candidate.height, Field::Height)?,
      passport_id:   candidate.passport_id,
      hair_color:    require(candidate.hair_color, Field::HairColor)?,
      nationality:   candidate.nationality,
      location:      require(candidate.location, Field::Location)?,
    })
  }
}

// ─── Equality, hashing, ordering ─────────────────────────────────────────────

// Equality and hashing cover the descriptive fields only. `id` and
// `creation_date` are assignment artifacts, so two fills of the same data
// compare equal. Ordering by id lives in [`Person::cmp_by_id`] and does not
// imply equality.

impl PartialEq for Person {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
      && self.location == other.location
      && self.coordinates == other.coordinates
      && self.hair_color == other.hair_color
      && self.nationality == other.nationality
      && self.passport_id == other.passport_id
  }
}

impl Hash for Person {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
    self.location.hash(state);
    self.coordinates.hash(state);
    self.hair_color.hash(state);
    self.nationality.hash(state);
    self.passport_id.hash(state);
  }
}

impl Person {
  /// Total order by identifier, ascending. Two persons with the same id
  /// compare as equal here even when their other fields differ, so this
  /// order must not be used as an equality check.
  pub fn cmp_by_id(&self, other: &Self) -> Ordering {
    self.id.cmp(&other.id)
  }
}

impl fmt::Display for Person {
  /// The default textual form is the JSON encoding.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match serde_json::to_string(self) {
      Ok(json) => f.write_str(&json),
      Err(_) => Err(fmt::Error),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
