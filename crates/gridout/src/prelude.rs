//! Convenience prelude
//!
//! ```rust
//! use gridout::prelude::*;
//! ```

pub use gridout_core::{Cell, CellKind, Row};
pub use gridout_csv::{CsvError, CsvResult, CsvWriter};
pub use gridout_xlsx::{ExcelWriter, XlsxError, XlsxResult};
