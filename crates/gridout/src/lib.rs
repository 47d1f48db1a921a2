//! # gridout
//!
//! A Rust library for exporting an in-memory grid of typed cells as a
//! minimal XLSX package or as delimiter-separated text.
//!
//! The XLSX writer assembles the OOXML package by hand: six fixed
//! entries, a style table with one number-format slot per distinct
//! currency code, and date/time values encoded as day serials from the
//! 1899-12-30 epoch. The CSV writer applies RFC 4180-style quoting with
//! a configurable separator.
//!
//! ## Example
//!
//! ```rust
//! use gridout::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut xlsx = ExcelWriter::with_sheet_name("EmployeeData");
//! xlsx.add_row(vec![
//!     Cell::string("Name"),
//!     Cell::string("Salary"),
//!     Cell::string("Hired"),
//! ]);
//! xlsx.add_row(vec![
//!     Cell::string("John Doe"),
//!     Cell::currency(75_000.0),
//!     Cell::date(NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()),
//! ]);
//! // xlsx.write_to_file("employees.xlsx").unwrap();
//!
//! let mut csv = CsvWriter::new();
//! csv.add_row(vec!["Name", "Salary"]);
//! csv.add_row(vec!["John Doe", "75000"]);
//! // csv.write_to_file("employees.csv").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use gridout_core::{
    cell_ref, column_to_letters, letters_to_column, serial, Cell, CellKind, Error, Result, Row,
    DEFAULT_CURRENCY,
};

// Re-export writers
pub use gridout_csv::{CsvError, CsvResult, CsvWriter};
pub use gridout_xlsx::{ExcelWriter, StyleRegistry, XlsxError, XlsxResult};
