//! Core types for the Roster person registry.
//!
//! This crate holds the person record itself: its value objects, the
//! field-by-field validator, the identifier generator, and the shared error
//! type. It is deliberately free of I/O; the codec and the fill pathways
//! live in `roster-json` and `roster-fill`.

pub mod error;
pub mod ident;
pub mod person;
pub mod validate;
pub mod value;

pub use error::{Error, Field, Result};
pub use person::{CandidatePerson, Person};
