//! Typed cell values
//!
//! A [`Cell`] carries its value pre-formatted as a string plus a
//! [`CellKind`] tag telling the writers how to emit it. Date-like
//! constructors format to fixed canonical patterns (`%Y-%m-%d`,
//! `%Y-%m-%d %H:%M:%S`, `%H:%M:%S`); the XLSX writer re-parses those
//! strings when computing day serials, so the patterns are part of the
//! contract between this crate and the writers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// The format tag attached to a cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Literal text
    String,
    /// Plain number, no grouping
    Number,
    /// Calendar date, `yyyy-mm-dd`
    Date,
    /// Date and time of day, `yyyy-mm-dd hh:mm:ss`
    DateTime,
    /// Time of day, `hh:mm:ss`
    Time,
    /// Monetary value with a currency symbol
    Currency,
    /// Thousands-grouped two-decimal number, no symbol
    Amount,
}

/// A single typed cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: String,
    kind: CellKind,
    /// Set only for `CellKind::Currency`; `None` means USD
    currency_code: Option<String>,
}

/// One ordered row of cells; column position is the index within the row
pub type Row = Vec<Cell>;

impl Cell {
    /// Create a string cell
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            kind: CellKind::String,
            currency_code: None,
        }
    }

    /// Create a plain number cell
    pub fn number(value: f64) -> Self {
        Self {
            value: value.to_string(),
            kind: CellKind::Number,
            currency_code: None,
        }
    }

    /// Create a date cell
    pub fn date(date: NaiveDate) -> Self {
        Self {
            value: date.format("%Y-%m-%d").to_string(),
            kind: CellKind::Date,
            currency_code: None,
        }
    }

    /// Create a date/time cell
    pub fn date_time(date_time: NaiveDateTime) -> Self {
        Self {
            value: date_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: CellKind::DateTime,
            currency_code: None,
        }
    }

    /// Create a time-of-day cell
    pub fn time(time: NaiveTime) -> Self {
        Self {
            value: time.format("%H:%M:%S").to_string(),
            kind: CellKind::Time,
            currency_code: None,
        }
    }

    /// Create a currency cell in the default currency (USD)
    pub fn currency(value: f64) -> Self {
        Self {
            value: value.to_string(),
            kind: CellKind::Currency,
            currency_code: None,
        }
    }

    /// Create a currency cell with an explicit 3-letter currency code
    ///
    /// Unknown codes still get a currency slot; their symbol falls back
    /// to `$` in the emitted number format.
    pub fn currency_in<S: Into<String>>(value: f64, code: S) -> Self {
        Self {
            value: value.to_string(),
            kind: CellKind::Currency,
            currency_code: Some(code.into()),
        }
    }

    /// Create an amount cell (thousands-grouped, two decimals, no symbol)
    pub fn amount(value: f64) -> Self {
        Self {
            value: value.to_string(),
            kind: CellKind::Amount,
            currency_code: None,
        }
    }

    /// Create a cell from an already-formatted raw value
    ///
    /// Low-level escape hatch: the caller is responsible for the value
    /// matching the canonical pattern for `kind`. A date-like value the
    /// serial converter cannot parse serializes as serial 0.
    pub fn from_raw<S: Into<String>>(value: S, kind: CellKind) -> Self {
        Self {
            value: value.into(),
            kind,
            currency_code: None,
        }
    }

    /// The pre-formatted string value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The format tag
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The currency code, if this is a currency cell with one set
    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }
}
