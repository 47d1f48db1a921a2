//! # gridout-csv
//!
//! Delimiter-separated text writer for gridout.
//!
//! Quoting follows the RFC 4180 convention: a field is wrapped in double
//! quotes when it contains the separator, a quote, or a line break, and
//! literal quotes are doubled. See [`escape`] for the exact rules.

pub mod escape;

mod error;
mod writer;

pub use error::{CsvError, CsvResult};
pub use writer::CsvWriter;
