//! Column letters and cell references
//!
//! Spreadsheet columns use bijective base-26: there is no zero digit, so
//! index 0 is `A`, 25 is `Z`, 26 is `AA` and so on.

use crate::error::{Error, Result};

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA, ...)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26, ...)
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    Ok(col - 1)
}

/// Build an A1-style cell reference from 0-based row and column indices
///
/// The row prints 1-based, so `cell_ref(2, 1)` is `"B3"`.
pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", column_to_letters(col), row + 1)
}
