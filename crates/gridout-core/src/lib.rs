//! # gridout-core
//!
//! Core data structures for the gridout tabular-export library.
//!
//! This crate provides the types shared by the XLSX and CSV writers:
//! - [`Cell`] and [`CellKind`] - typed cell values with a format tag
//! - [`column`] - bijective base-26 column letters and A1 references
//! - [`serial`] - calendar string to spreadsheet day-serial conversion
//!
//! ## Example
//!
//! ```rust
//! use gridout_core::Cell;
//! use chrono::NaiveDate;
//!
//! let row = vec![
//!     Cell::string("Invoice"),
//!     Cell::number(42.0),
//!     Cell::date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
//!     Cell::currency_in(1200.50, "EUR"),
//! ];
//! assert_eq!(row[2].value(), "2024-03-01");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod serial;

// Re-exports for convenience
pub use cell::{Cell, CellKind, Row};
pub use column::{cell_ref, column_to_letters, letters_to_column};
pub use error::{Error, Result};

/// Currency code assumed when a currency cell carries none
pub const DEFAULT_CURRENCY: &str = "USD";
