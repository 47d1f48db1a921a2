//! # gridout-xlsx
//!
//! Minimal XLSX (Office Open XML) package writer for gridout.
//!
//! The package is assembled by hand: every XML part is built as a string
//! and the six required entries are written to the ZIP container in the
//! fixed order consumers expect. Number formats (dates, times, one slot
//! per distinct currency, amounts) are allocated by [`StyleRegistry`]
//! before any style-dependent XML is emitted.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use styles::StyleRegistry;
pub use writer::ExcelWriter;
