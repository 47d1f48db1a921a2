//! Style table and number-format registry (styles.xml)
//!
//! The style table is one ordered list of cell formats (xfs). The first
//! five slots are fixed; currency slots follow in first-seen order, one
//! per distinct code; the final slot is the plain grouped-amount format.
//! Both `styles.xml` and the sheet part reference slots by index, so the
//! registry must be fully populated by a pre-scan of the grid before any
//! style-dependent XML is emitted - the two parts are written in sequence
//! and cannot patch each other afterwards.

use std::collections::HashMap;

use gridout_core::{Cell, CellKind, Row, DEFAULT_CURRENCY};

/// Default/string slot (numFmtId 0)
pub const XF_DEFAULT: u32 = 0;
/// Plain number slot
pub const XF_NUMBER: u32 = 1;
/// Date slot, `yyyy-mm-dd`
pub const XF_DATE: u32 = 2;
/// Date-time slot, `yyyy-mm-dd hh:mm:ss`
pub const XF_DATE_TIME: u32 = 3;
/// Time slot, `hh:mm:ss`
pub const XF_TIME: u32 = 4;

/// First dynamically allocated slot; currencies start here
const CURRENCY_BASE_XF: u32 = 5;

/// First numFmtId available for custom formats in a styleSheet
const NUMFMT_BASE: u32 = 164;

/// Insertion-ordered map from currency code to allocated style slot
#[derive(Debug, Default)]
pub struct StyleRegistry {
    /// Distinct codes in first-seen order; position = slot offset
    currencies: Vec<String>,
    slot_by_code: HashMap<String, u32>,
}

impl StyleRegistry {
    /// Phase 1 (discover): walk the whole grid read-only and allocate a
    /// slot for each distinct currency code in encounter order.
    pub fn build(rows: &[Row]) -> Self {
        let mut registry = Self::default();
        for row in rows {
            for cell in row {
                if cell.kind() == CellKind::Currency {
                    registry.register(cell.currency_code());
                }
            }
        }
        registry
    }

    fn register(&mut self, code: Option<&str>) -> u32 {
        let code = normalize(code);
        match self.slot_by_code.get(&code) {
            Some(&xf) => xf,
            None => {
                let xf = CURRENCY_BASE_XF + self.currencies.len() as u32;
                self.currencies.push(code.clone());
                self.slot_by_code.insert(code, xf);
                xf
            }
        }
    }

    /// Phase 2 (emit): look up the slot for a currency code. Never
    /// inserts; repeated lookups of the same code yield the same index.
    /// A code the pre-scan did not see falls back to the default slot,
    /// which cannot happen when `build` scanned the same grid.
    pub fn currency_xf(&self, code: Option<&str>) -> u32 {
        self.slot_by_code
            .get(&normalize(code))
            .copied()
            .unwrap_or(XF_DEFAULT)
    }

    /// The amount slot sits after the last currency slot
    pub fn amount_xf(&self) -> u32 {
        CURRENCY_BASE_XF + self.currencies.len() as u32
    }

    /// Style slot for a cell, resolving currency codes through the table
    pub fn xf_for(&self, cell: &Cell) -> u32 {
        match cell.kind() {
            CellKind::String => XF_DEFAULT,
            CellKind::Number => XF_NUMBER,
            CellKind::Date => XF_DATE,
            CellKind::DateTime => XF_DATE_TIME,
            CellKind::Time => XF_TIME,
            CellKind::Currency => self.currency_xf(cell.currency_code()),
            CellKind::Amount => self.amount_xf(),
        }
    }

    /// Number of distinct currency codes discovered
    pub fn currency_count(&self) -> usize {
        self.currencies.len()
    }

    /// Render the complete styleSheet part
    pub fn styles_xml(&self) -> String {
        // numFmtIds: 164 date, 165 date-time, 166 time, then one per
        // currency in slot order, then the amount format.
        let currency_fmt_base = NUMFMT_BASE + 3;
        let amount_fmt_id = currency_fmt_base + self.currencies.len() as u32;

        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <styleSheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\n",
        );

        xml.push_str(&format!(
            "<numFmts count=\"{}\">\n",
            4 + self.currencies.len()
        ));
        xml.push_str(&format!(
            "<numFmt numFmtId=\"{}\" formatCode=\"yyyy-mm-dd\"/>\n",
            NUMFMT_BASE
        ));
        xml.push_str(&format!(
            "<numFmt numFmtId=\"{}\" formatCode=\"yyyy-mm-dd hh:mm:ss\"/>\n",
            NUMFMT_BASE + 1
        ));
        xml.push_str(&format!(
            "<numFmt numFmtId=\"{}\" formatCode=\"hh:mm:ss\"/>\n",
            NUMFMT_BASE + 2
        ));
        for (i, code) in self.currencies.iter().enumerate() {
            xml.push_str(&format!(
                "<numFmt numFmtId=\"{}\" formatCode=\"{}\"/>\n",
                currency_fmt_base + i as u32,
                currency_format_code(code)
            ));
        }
        xml.push_str(&format!(
            "<numFmt numFmtId=\"{}\" formatCode=\"#,##0.00\"/>\n",
            amount_fmt_id
        ));
        xml.push_str("</numFmts>\n");

        xml.push_str(
            "<fonts count=\"1\">\n\
             <font><sz val=\"11\"/><name val=\"Calibri\"/></font>\n\
             </fonts>\n\
             <fills count=\"1\">\n\
             <fill><patternFill patternType=\"none\"/></fill>\n\
             </fills>\n\
             <borders count=\"1\">\n\
             <border><left/><right/><top/><bottom/><diagonal/></border>\n\
             </borders>\n",
        );

        // One xf per slot, in slot order: default, number, date,
        // date-time, time, currencies, amount.
        let mut num_fmt_ids = vec![0, 0, NUMFMT_BASE, NUMFMT_BASE + 1, NUMFMT_BASE + 2];
        for i in 0..self.currencies.len() as u32 {
            num_fmt_ids.push(currency_fmt_base + i);
        }
        num_fmt_ids.push(amount_fmt_id);

        xml.push_str(&format!("<cellXfs count=\"{}\">\n", num_fmt_ids.len()));
        for id in num_fmt_ids {
            xml.push_str(&format!(
                "<xf numFmtId=\"{}\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/>\n",
                id
            ));
        }
        xml.push_str("</cellXfs>\n</styleSheet>");

        xml
    }
}

fn normalize(code: Option<&str>) -> String {
    code.unwrap_or(DEFAULT_CURRENCY).to_ascii_uppercase()
}

fn currency_symbol(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        // Unknown codes still render, just with the generic symbol
        _ => "$",
    }
}

/// Number-format pattern for a currency code, ready for embedding in a
/// formatCode attribute (the symbol quotes become `&quot;`).
fn currency_format_code(code: &str) -> String {
    let symbol = currency_symbol(code);
    // JPY has no minor unit, so it gets the integer pattern
    if code == "JPY" {
        format!("&quot;{}&quot;#,##0", symbol)
    } else {
        format!("&quot;{}&quot;#,##0.00", symbol)
    }
}
