//! Field-by-field validation of a candidate person.
//!
//! The check order is fixed and the first failing field names the error:
//! id, name, coordinates, creationDate, height, hairColor, location,
//! coordinates (X), passportID, and finally the creation-date round-trip.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
  error::{Error, Field, Result},
  person::CandidatePerson,
};

/// Check every invariant of a candidate person. Pure; no side effects
/// beyond the returned error.
pub fn validate(candidate: &CandidatePerson) -> Result<()> {
  if candidate.id.is_none_or(|id| id <= 0) {
    return Err(Error::InvalidField(Field::Id));
  }
  if candidate.name.as_deref().is_none_or(str::is_empty) {
    return Err(Error::InvalidField(Field::Name));
  }
  let Some(coordinates) = &candidate.coordinates else {
    return Err(Error::InvalidField(Field::Coordinates));
  };
  let Some(creation_date) = &candidate.creation_date else {
    return Err(Error::InvalidField(Field::CreationDate));
  };
  if candidate.height.is_none_or(|h| h <= 0.0) {
    return Err(Error::InvalidField(Field::Height));
  }
  if candidate.hair_color.is_none() {
    return Err(Error::InvalidField(Field::HairColor));
  }
  if candidate.location.is_none() {
    return Err(Error::InvalidField(Field::Location));
  }
  if coordinates.x.is_none() {
    return Err(Error::InvalidField(Field::CoordinatesX));
  }
  if let Some(passport) = &candidate.passport_id
    && passport.len() < 4
  {
    return Err(Error::InvalidField(Field::PassportId));
  }
  if !round_trips(creation_date) {
    return Err(Error::BadDateTime);
  }
  Ok(())
}

/// Re-parse the date and time components independently; either failing
/// marks the timestamp as corrupt or sentinel.
fn round_trips(stamp: &NaiveDateTime) -> bool {
  NaiveDate::parse_from_str(&stamp.date().to_string(), "%Y-%m-%d").is_ok()
    && NaiveTime::parse_from_str(&stamp.time().to_string(), "%H:%M:%S%.f")
      .is_ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::value::{Color, Coordinates, Country, Location};

  fn valid_candidate() -> CandidatePerson {
    CandidatePerson {
      id:            Some(42),
      name:          Some("Alice".to_string()),
      coordinates:   Some(Coordinates::new(1.0, 2.0)),
      creation_date: NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0),
      height:        Some(170.5),
      passport_id:   Some("AB1234".to_string()),
      hair_color:    Some(Color::Black),
      nationality:   Some(Country::Italy),
      location:      Some(Location {
        x:    10,
        y:    20.5,
        name: "Home".to_string(),
      }),
    }
  }

  fn failing_field(candidate: CandidatePerson) -> Field {
    match validate(&candidate).unwrap_err() {
      Error::InvalidField(field) => field,
      other => panic!("expected a field error, got {other:?}"),
    }
  }

  #[test]
  fn a_valid_candidate_passes() {
    assert!(validate(&valid_candidate()).is_ok());
  }

  #[test]
  fn id_must_be_positive() {
    let mut c = valid_candidate();
    c.id = Some(0);
    assert_eq!(failing_field(c), Field::Id);

    let mut c = valid_candidate();
    c.id = None;
    assert_eq!(failing_field(c), Field::Id);
  }

  #[test]
  fn name_must_be_non_empty() {
    let mut c = valid_candidate();
    c.name = Some(String::new());
    assert_eq!(failing_field(c), Field::Name);

    let mut c = valid_candidate();
    c.name = None;
    assert_eq!(failing_field(c), Field::Name);
  }

  #[test]
  fn coordinates_must_be_present() {
    let mut c = valid_candidate();
    c.coordinates = None;
    assert_eq!(failing_field(c), Field::Coordinates);
  }

  #[test]
  fn creation_date_must_be_present() {
    let mut c = valid_candidate();
    c.creation_date = None;
    assert_eq!(failing_field(c), Field::CreationDate);
  }

  #[test]
  fn height_must_be_positive() {
    let mut c = valid_candidate();
    c.height = Some(0.0);
    assert_eq!(failing_field(c), Field::Height);

    let mut c = valid_candidate();
    c.height = Some(-1.0);
    assert_eq!(failing_field(c), Field::Height);
  }

  #[test]
  fn hair_color_must_be_present() {
    let mut c = valid_candidate();
    c.hair_color = None;
    assert_eq!(failing_field(c), Field::HairColor);
  }

  #[test]
  fn location_must_be_present() {
    let mut c = valid_candidate();
    c.location = None;
    assert_eq!(failing_field(c), Field::Location);
  }

  #[test]
  fn coordinates_x_must_be_present() {
    let mut c = valid_candidate();
    c.coordinates = Some(Coordinates { x: None, y: 2.0 });
    assert_eq!(failing_field(c), Field::CoordinatesX);
  }

  #[test]
  fn short_passport_is_rejected_but_absent_is_fine() {
    let mut c = valid_candidate();
    c.passport_id = Some("AB1".to_string());
    assert_eq!(failing_field(c), Field::PassportId);

    let mut c = valid_candidate();
    c.passport_id = None;
    assert!(validate(&c).is_ok());
  }

  #[test]
  fn first_failing_field_wins() {
    // Both name and height are broken; name is checked first.
    let mut c = valid_candidate();
    c.name = None;
    c.height = Some(-5.0);
    assert_eq!(failing_field(c), Field::Name);
  }

  #[test]
  fn nationality_is_optional() {
    let mut c = valid_candidate();
    c.nationality = None;
    assert!(validate(&c).is_ok());
  }
}
