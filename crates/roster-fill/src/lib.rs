//! Interactive and batch fill pathways for person records.
//!
//! One field-population sequence serves both pathways; only the
//! [`TokenSource`] differs. The console source prompts and re-prompts on bad
//! input, the batch source is silent and fails fast on the first bad token.
//!
//! # Quick start
//!
//! ```
//! use std::io::Cursor;
//!
//! use roster_fill::{BatchSource, fill_person};
//!
//! let tokens = "Alice\n1.5\n2.5\n170.5\n\nBLACK\n\n10\n20.5\nHome\n";
//! let mut source = BatchSource::new(Cursor::new(tokens));
//! let person = fill_person(&mut source).unwrap();
//! assert_eq!(person.name, "Alice");
//! ```

mod fill;
mod read;
mod source;

pub use fill::{FillValue, fill_person};
pub use read::{read_field, read_optional_field};
pub use roster_core::{Error, Result};
pub use source::{BatchSource, ConsoleSource, TokenSource};
