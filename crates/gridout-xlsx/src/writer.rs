//! XLSX package writer
//!
//! Assembles the six-entry OOXML package by hand. Entry order is fixed:
//! content types, package relationships, workbook relationships,
//! workbook, styles, sheet. The styles part and the sheet part are
//! independent documents written in sequence, so the style registry is
//! populated by a pre-scan before either is emitted.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::XlsxResult;
use crate::styles::StyleRegistry;
use gridout_core::{cell_ref, serial, Cell, CellKind, Row};

/// Buffered spreadsheet writer
///
/// Rows are appended in order and serialized on [`write`](Self::write).
/// Serialization consumes nothing, so a writer may be written more than
/// once. Instances are single-owner; they are not meant for concurrent
/// mutation.
#[derive(Debug)]
pub struct ExcelWriter {
    sheet_name: String,
    rows: Vec<Row>,
}

impl Default for ExcelWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcelWriter {
    /// Create a writer with the default sheet name "Sheet1"
    pub fn new() -> Self {
        Self::with_sheet_name("Sheet1")
    }

    /// Create a writer with the given sheet name
    ///
    /// The name is XML-escaped when embedded in the workbook part.
    pub fn with_sheet_name<S: Into<String>>(sheet_name: S) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row of cells
    pub fn add_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.rows.push(cells.into_iter().collect());
    }

    /// The sheet name this writer will emit
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Number of buffered rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Write the package to a writer
    ///
    /// I/O failures propagate; a partially written stream is not undone.
    pub fn write<W: Write + Seek>(&self, writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        // Phase 1 (discover): allocate currency slots before any
        // style-dependent part is emitted.
        let registry = StyleRegistry::build(&self.rows);
        debug!(
            "writing xlsx package: {} rows, {} distinct currencies",
            self.rows.len(),
            registry.currency_count()
        );

        // Phase 2 (emit), in the required entry order.
        Self::write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES_XML)?;
        Self::write_part(&mut zip, "_rels/.rels", ROOT_RELS_XML)?;
        Self::write_part(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML)?;
        Self::write_part(&mut zip, "xl/workbook.xml", &self.workbook_xml())?;
        Self::write_part(&mut zip, "xl/styles.xml", &registry.styles_xml())?;
        Self::write_part(&mut zip, "xl/worksheets/sheet1.xml", &self.sheet_xml(&registry))?;

        zip.finish()?;
        Ok(())
    }

    /// Write the package to a file path
    ///
    /// The handle is released on every exit path. A truncated file may
    /// remain on disk if a failure occurs mid-write.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        self.write(file)
    }

    fn write_part<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        name: &str,
        xml: &str,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(name, options)?;
        zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn workbook_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
             xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\n\
             <sheets>\n\
             <sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/>\n\
             </sheets>\n\
             </workbook>",
            escape_xml(&self.sheet_name)
        )
    }

    fn sheet_xml(&self, registry: &StyleRegistry) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\n\
             <sheetData>\n",
        );

        for (row_index, row) in self.rows.iter().enumerate() {
            let row_number = row_index as u32 + 1;
            xml.push_str(&format!("<row r=\"{}\">\n", row_number));

            for (col_index, cell) in row.iter().enumerate() {
                let reference = cell_ref(row_index as u32, col_index as u32);
                Self::push_cell(&mut xml, &reference, cell, registry);
            }

            xml.push_str("</row>\n");
        }

        xml.push_str("</sheetData>\n</worksheet>");
        xml
    }

    fn push_cell(xml: &mut String, reference: &str, cell: &Cell, registry: &StyleRegistry) {
        if cell.kind() == CellKind::String {
            xml.push_str(&format!(
                "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>\n",
                reference,
                escape_xml(cell.value())
            ));
            return;
        }

        // Date-like kinds re-parse the canonical string into a day
        // serial; the rest carry their literal numeric text.
        let value = match cell.kind() {
            CellKind::Date => {
                Self::serial_or_zero(cell, serial::date_serial(cell.value())).to_string()
            }
            CellKind::DateTime => {
                Self::serial_or_zero(cell, serial::date_time_serial(cell.value())).to_string()
            }
            CellKind::Time => {
                Self::serial_or_zero(cell, serial::time_serial(cell.value())).to_string()
            }
            _ => cell.value().to_string(),
        };

        xml.push_str(&format!(
            "<c r=\"{}\" s=\"{}\"><v>{}</v></c>\n",
            reference,
            registry.xf_for(cell),
            value
        ));
    }

    /// Soft failure: a value the converter cannot parse serializes as
    /// serial 0 rather than failing the whole write.
    fn serial_or_zero(cell: &Cell, serial: Option<f64>) -> f64 {
        serial.unwrap_or_else(|| {
            warn!(
                "unparseable {:?} value {:?}; emitting serial 0",
                cell.kind(),
                cell.value()
            );
            0.0
        })
    }
}

/// Escape text for embedding in XML content or attribute values.
/// The ampersand goes first so already-escaped output is never
/// escaped twice.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

const CONTENT_TYPES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\n\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\n\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\n\
<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\n\
<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\n\
<Override PartName=\"/xl/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml\"/>\n\
</Types>";

const ROOT_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\n\
</Relationships>";

const WORKBOOK_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>\n\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\n\
</Relationships>";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Read};

    fn write_to_buffer(writer: &ExcelWriter) -> Vec<u8> {
        let mut buf = Vec::new();
        writer.write(Cursor::new(&mut buf)).unwrap();
        buf
    }

    fn read_entry(data: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn entries_appear_in_required_order() {
        let data = write_to_buffer(&ExcelWriter::new());
        let mut archive = zip::ZipArchive::new(Cursor::new(&data)).unwrap();

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "xl/_rels/workbook.xml.rels",
                "xl/workbook.xml",
                "xl/styles.xml",
                "xl/worksheets/sheet1.xml",
            ]
        );
    }

    #[test]
    fn sheet_name_is_escaped_into_workbook_part() {
        let writer = ExcelWriter::with_sheet_name("P&L <2024>");
        let workbook = read_entry(&write_to_buffer(&writer), "xl/workbook.xml");

        assert!(workbook.contains("name=\"P&amp;L &lt;2024&gt;\""));
        assert!(workbook.contains("sheetId=\"1\" r:id=\"rId1\""));
    }

    #[test]
    fn cells_get_a1_references_and_style_slots() {
        let mut writer = ExcelWriter::new();
        writer.add_row(vec![Cell::string("Name"), Cell::number(30.0)]);
        writer.add_row(vec![
            Cell::date(NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()),
            Cell::amount(1234.5),
        ]);

        let sheet = read_entry(&write_to_buffer(&writer), "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<row r=\"1\">"));
        assert!(sheet.contains("<c r=\"A1\" t=\"inlineStr\"><is><t>Name</t></is></c>"));
        assert!(sheet.contains("<c r=\"B1\" s=\"1\"><v>30</v></c>"));
        assert!(sheet.contains("<c r=\"A2\" s=\"2\"><v>44576</v></c>"));
        // No currencies discovered, so the amount slot is 5
        assert!(sheet.contains("<c r=\"B2\" s=\"5\"><v>1234.5</v></c>"));
    }

    #[test]
    fn string_cells_escape_xml_entities() {
        let mut writer = ExcelWriter::new();
        writer.add_row(vec![Cell::string("a<b & \"c\" 'd'")]);

        let sheet = read_entry(&write_to_buffer(&writer), "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<t>a&lt;b &amp; &quot;c&quot; &apos;d&apos;</t>"));
    }

    #[test]
    fn currency_cells_reference_their_discovered_slots() {
        let mut writer = ExcelWriter::new();
        writer.add_row(vec![
            Cell::currency(75000.0),
            Cell::currency_in(1200.50, "EUR"),
            Cell::currency(100.0),
            Cell::currency_in(180000.0, "JPY"),
            Cell::amount(42.0),
        ]);

        let data = write_to_buffer(&writer);
        let sheet = read_entry(&data, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<c r=\"A1\" s=\"5\"><v>75000</v></c>"));
        assert!(sheet.contains("<c r=\"B1\" s=\"6\"><v>1200.5</v></c>"));
        // Repeated USD reuses the first slot
        assert!(sheet.contains("<c r=\"C1\" s=\"5\"><v>100</v></c>"));
        assert!(sheet.contains("<c r=\"D1\" s=\"7\"><v>180000</v></c>"));
        // Amount slot comes after all three currency slots
        assert!(sheet.contains("<c r=\"E1\" s=\"8\"><v>42</v></c>"));

        let styles = read_entry(&data, "xl/styles.xml");
        assert!(styles.contains("formatCode=\"&quot;$&quot;#,##0.00\""));
        assert!(styles.contains("formatCode=\"&quot;€&quot;#,##0.00\""));
        assert!(styles.contains("formatCode=\"&quot;¥&quot;#,##0\""));
        assert!(styles.contains("<cellXfs count=\"9\">"));
    }

    #[test]
    fn time_and_date_time_serials() {
        let mut writer = ExcelWriter::new();
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        writer.add_row(vec![
            Cell::date(date),
            Cell::date_time(date.and_hms_opt(6, 0, 0).unwrap()),
            Cell::time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
        ]);

        let sheet = read_entry(&write_to_buffer(&writer), "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<c r=\"A1\" s=\"2\"><v>2</v></c>"));
        assert!(sheet.contains("<c r=\"B1\" s=\"3\"><v>2.25</v></c>"));
        assert!(sheet.contains("<c r=\"C1\" s=\"4\"><v>0.5</v></c>"));
    }

    #[test]
    fn escaping_round_trips_through_entity_decoding() {
        let original = "tags <a> & <b>, quotes \" and ', already-escaped &amp;";
        let escaped = escape_xml(original);

        // Decode the way an XML reader would; &amp; must come last so
        // escaped ampersands cannot spawn new entities.
        let decoded = escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&");

        assert_eq!(decoded, original);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn malformed_date_value_emits_serial_zero() {
        let mut writer = ExcelWriter::new();
        writer.add_row(vec![Cell::from_raw("yesterday-ish", CellKind::Date)]);

        let sheet = read_entry(&write_to_buffer(&writer), "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<c r=\"A1\" s=\"2\"><v>0</v></c>"));
    }

    #[test]
    fn write_may_be_repeated() {
        let mut writer = ExcelWriter::new();
        writer.add_row(vec![Cell::currency_in(5.0, "GBP")]);

        let first = write_to_buffer(&writer);
        let second = write_to_buffer(&writer);
        assert_eq!(
            read_entry(&first, "xl/worksheets/sheet1.xml"),
            read_entry(&second, "xl/worksheets/sheet1.xml")
        );
    }

    #[test]
    fn write_to_file_creates_readable_package() {
        let mut writer = ExcelWriter::new();
        writer.add_row(vec![Cell::string("hello")]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        writer.write_to_file(&path).unwrap();

        let data = std::fs::read(&path).unwrap();
        let workbook = read_entry(&data, "xl/workbook.xml");
        assert!(workbook.contains("name=\"Sheet1\""));
    }
}
