//! JSON codec for person records.
//!
//! Decoding runs in two stages: a structural pass with serde, then a
//! raw-text re-check of the coordinate `y` key. The structural stage fills a
//! missing or `null` `y` with zero (the lenient-decoder behavior), so
//! "present and non-null" has to be verified against the original text.
//!
//! # Quick start
//!
//! ```
//! let text = r#"{"id":1,"name":"Alice","coordinates":{"x":1.0,"y":2.0},
//!   "creationDate":"2024-01-01T10:00:00","height":170.5,"passportID":null,
//!   "hairColor":"BLACK","nationality":null,
//!   "location":{"x":10,"y":20.5,"name":"Home"}}"#;
//! let person = roster_json::parse(&text.replace('\n', "")).unwrap();
//! assert_eq!(person.name, "Alice");
//! ```

mod decode;
mod encode;

pub use decode::{parse, parse_many};
pub use encode::to_json;
pub use roster_core::{Error, Result};

// ─── Round-trip tests ────────────────────────────────────────────────────────


// ─── Shared test helpers ─────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_helpers {
  use chrono::NaiveDate;
  use roster_core::{
    Person,
    value::{Color, Coordinates, Country, Location},
  };

  pub(crate) fn sample_person() -> Person {
    Person {
      id:            42,
      name:          "Alice".to_string(),
      coordinates:   Coordinates::new(1.0, 2.0),
      creation_date: NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap(),
      height:        170.5,
      passport_id:   Some("AB1234".to_string()),
      hair_color:    Color::Black,
      nationality:   Some(Country::Italy),
      location:      Location {
        x:    10,
        y:    20.5,
        name: "Home".to_string(),
      },
    }
  }
}
