//! Field escaping rules
//!
//! Quoting is keyed on a trigger set: the active separator, the double
//! quote, `\n` and `\r`. Quote-doubling is applied to every field
//! regardless of whether the field ends up quoted; since a literal quote
//! is itself a trigger, any field containing one is always quoted in
//! practice.

/// True iff the field must be wrapped in quotes
pub fn needs_quoting(field: &str, separator: char) -> bool {
    field
        .chars()
        .any(|c| c == separator || c == '"' || c == '\n' || c == '\r')
}

/// Escape one field for output
///
/// An absent field is treated as the empty string.
pub fn escape_field(field: Option<&str>, separator: char) -> String {
    let field = field.unwrap_or("");

    let escaped = field.replace('"', "\"\"");

    if needs_quoting(field, separator) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}
