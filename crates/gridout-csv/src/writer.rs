//! CSV writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CsvResult;
use crate::escape::escape_field;

/// Buffered CSV writer with a configurable single-character separator
///
/// Rows are appended in order and serialized on [`write`](Self::write),
/// one row per line, terminated by `\n` regardless of platform. The
/// separator is fixed at construction so buffered rows cannot change
/// their quoting rules mid-document.
#[derive(Debug)]
pub struct CsvWriter {
    separator: char,
    rows: Vec<Vec<String>>,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    /// Create a writer with the default comma separator
    pub fn new() -> Self {
        Self::with_separator(',')
    }

    /// Create a writer with the given separator
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            rows: Vec::new(),
        }
    }

    /// The active separator character
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Number of buffered rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row of fields
    ///
    /// No header semantics apply; every row, including the first, is
    /// just data.
    pub fn add_row<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(fields.into_iter().map(Into::into).collect());
    }

    /// Write all rows as UTF-8 text
    pub fn write<W: Write>(&self, mut writer: W) -> CsvResult<()> {
        for row in &self.rows {
            let mut line = String::new();
            for (i, field) in row.iter().enumerate() {
                if i > 0 {
                    line.push(self.separator);
                }
                line.push_str(&escape_field(Some(field), self.separator));
            }
            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write all rows to a file path
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> CsvResult<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }
}
