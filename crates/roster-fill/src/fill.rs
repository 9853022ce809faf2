//! The shared field-population sequence.
//!
//! Console and batch fills run the same sequence over their
//! [`TokenSource`]; the creation date and the identifier are stamped here,
//! never read from the source.

use chrono::Local;
use roster_core::{
  CandidatePerson, Person, Result, ident,
  value::{Color, Coordinates, Country, Location},
};

use crate::{
  read::{read_field, read_optional_field},
  source::TokenSource,
};

// ─── Value-object fills ──────────────────────────────────────────────────────

/// A value type that can populate itself from a token source.
pub trait FillValue: Sized {
  fn fill(source: &mut dyn TokenSource) -> Result<Self>;
}

impl FillValue for Coordinates {
  fn fill(source: &mut dyn TokenSource) -> Result<Self> {
    let x = read_field(
      source,
      "Coordinate x: ",
      "coordinates (X)",
      |t| t.parse::<f64>().ok(),
      &[],
    )?;
    let y = read_field(
      source,
      "Coordinate y: ",
      "coordinates (Y)",
      |t| t.parse::<f64>().ok(),
      &[],
    )?;
    Ok(Self::new(x, y))
  }
}

impl FillValue for Color {
  fn fill(source: &mut dyn TokenSource) -> Result<Self> {
    read_field(
      source,
      "Hair color (RED, BLACK, BLUE, YELLOW, WHITE): ",
      "hairColor",
      |t| t.parse().ok(),
      &[],
    )
  }
}

impl FillValue for Location {
  fn fill(source: &mut dyn TokenSource) -> Result<Self> {
    let x = read_field(
      source,
      "Location x: ",
      "location.x",
      |t| t.parse::<i64>().ok(),
      &[],
    )?;
    let y = read_field(
      source,
      "Location y: ",
      "location.y",
      |t| t.parse::<f64>().ok(),
      &[],
    )?;
    let name = read_field(
      source,
      "Location name: ",
      "location.name",
      |t| Some(t.to_string()),
      &[&|n: &String| !n.is_empty()],
    )?;
    Ok(Self { x, y, name })
  }
}

// ─── Person fill ─────────────────────────────────────────────────────────────

/// Run the population sequence against `source` and return the validated
/// person.
///
/// Field order: name, coordinates, height, optional passport id, hair
/// color, optional nationality, location. The identifier comes from
/// [`roster_core::ident::generate_id`] and the creation date from the local
/// clock.
pub fn fill_person(source: &mut dyn TokenSource) -> Result<Person> {
  let name = read_field(
    source,
    "Name: ",
    "name",
    |t| Some(t.to_string()),
    &[&|n: &String| !n.is_empty()],
  )?;
  let coordinates = Coordinates::fill(source)?;
  let height = read_field(
    source,
    "Height: ",
    "height",
    |t| t.parse::<f64>().ok(),
    &[&|h: &f64| *h > 0.0],
  )?;
  let passport_id = read_optional_field(
    source,
    "Passport ID (blank to skip): ",
    "passportID",
    |t| Some(t.to_string()),
    &[&|p: &String| p.len() >= 4],
  )?;
  let hair_color = Color::fill(source)?;
  let nationality = read_optional_field(
    source,
    "Nationality (RUSSIA, USA, GERMANY, ITALY, THAILAND; blank to skip): ",
    "nationality",
    |t| t.parse::<Country>().ok(),
    &[],
  )?;
  let location = Location::fill(source)?;

  let candidate = CandidatePerson {
    id:            Some(ident::generate_id()),
    name:          Some(name),
    coordinates:   Some(coordinates),
    creation_date: Some(Local::now().naive_local()),
    height:        Some(height),
    passport_id,
    hair_color:    Some(hair_color),
    nationality,
    location:      Some(location),
  };

  let person = Person::try_from(candidate)?;
  if !source.interactive() {
    tracing::info!(name = %person.name, id = person.id, "person record filled");
  }
  Ok(person)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use roster_core::Error;

  use super::*;
  use crate::source::{BatchSource, ConsoleSource};

  const FULL: &str =
    "Alice\n1.5\n2.5\n170.5\nAB1234\nBLACK\nITALY\n10\n20.5\nHome\n";

  #[test]
  fn batch_fill_reads_every_field_in_order() {
    let mut source = BatchSource::new(Cursor::new(FULL));
    let person = fill_person(&mut source).unwrap();

    assert_eq!(person.name, "Alice");
    assert_eq!(person.coordinates.x, Some(1.5));
    assert_eq!(person.coordinates.y, 2.5);
    assert_eq!(person.height, 170.5);
    assert_eq!(person.passport_id.as_deref(), Some("AB1234"));
    assert_eq!(person.hair_color, Color::Black);
    assert_eq!(person.nationality, Some(Country::Italy));
    assert_eq!(person.location.name, "Home");
    assert!(person.id > 0);
    assert!(source.at_end());
  }

  #[test]
  fn blank_optionals_are_skipped() {
    let tokens = "Bob\n0\n0\n180\n\nWHITE\n\n1\n1\nWork\n";
    let mut source = BatchSource::new(Cursor::new(tokens));
    let person = fill_person(&mut source).unwrap();
    assert_eq!(person.passport_id, None);
    assert_eq!(person.nationality, None);
  }

  #[test]
  fn batch_bad_height_token_fails_fast() {
    let tokens = "Alice\n1.5\n2.5\ntall\n";
    let mut source = BatchSource::new(Cursor::new(tokens));
    let err = fill_person(&mut source).unwrap_err();
    assert!(matches!(err, Error::BadToken { field: "height", .. }));
  }

  #[test]
  fn truncated_batch_input_is_exhaustion() {
    let tokens = "Alice\n1.5\n";
    let mut source = BatchSource::new(Cursor::new(tokens));
    let err = fill_person(&mut source).unwrap_err();
    assert!(matches!(err, Error::InputExhausted));
  }

  #[test]
  fn console_fill_reprompts_past_bad_tokens() {
    // bad height and bad hair color each get one retry
    let tokens =
      "Alice\n1.5\n2.5\n-1\n170.5\nAB1234\nGREEN\nBLACK\n\n10\n20.5\nHome\n";
    let mut out = Vec::new();
    let mut source = ConsoleSource::new(Cursor::new(tokens), &mut out);
    let person = fill_person(&mut source).unwrap();
    assert_eq!(person.height, 170.5);
    assert_eq!(person.hair_color, Color::Black);

    let shown = String::from_utf8(out).unwrap();
    assert_eq!(shown.matches("Height: ").count(), 2);
    assert_eq!(shown.matches("Hair color").count(), 2);
  }

  #[test]
  fn two_records_back_to_back_from_one_batch() {
    let tokens = format!("{FULL}{FULL}");
    let mut source = BatchSource::new(Cursor::new(tokens));

    let first = fill_person(&mut source).unwrap();
    assert!(!source.at_end());
    let second = fill_person(&mut source).unwrap();
    assert!(source.at_end());

    // same descriptive fields, so they compare equal despite fresh ids
    assert_eq!(first, second);
  }
}
