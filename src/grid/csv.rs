//! Export-and-parse grid source.
//!
//! Instead of windowed API reads, this strategy fetches the entire grid as
//! one delimited-text export, discards everything before the first line
//! that begins with the header sentinel, and parses the remainder as CSV
//! with standard quoting rules (doubled quotes, embedded newlines inside
//! quoted fields, irregular column counts per line).

use memchr::memchr_iter;

use super::cell::{CellValue, Row};
use super::source::GridSource;
use crate::codec::HEADER_SENTINEL;
use crate::error::{Error, Result};

/// Collaborator contract for exporting the whole grid as delimited text.
///
/// Authorization and transport are the implementor's business; the codec
/// only sees the exported payload.
pub trait CsvExporter {
    /// Export the entire grid as a CSV payload.
    fn export(&self) -> Result<Vec<u8>>;
}

/// Grid source that parses a single CSV export of the grid.
#[derive(Debug)]
pub struct CsvSource<E: CsvExporter> {
    exporter: E,
}

impl<E: CsvExporter> CsvSource<E> {
    /// Create a source over the given exporter.
    pub fn new(exporter: E) -> Self {
        CsvSource { exporter }
    }
}

impl<E: CsvExporter> GridSource for CsvSource<E> {
    type Rows<'a>
        = CsvRows
    where
        Self: 'a;

    fn open(&self) -> Result<Self::Rows<'_>> {
        let payload = self.exporter.export()?;
        let text = String::from_utf8(payload)
            .map_err(|err| Error::SourceExportType(err.to_string()))?;

        let rows = parse_export(&text)?;
        if rows.is_empty() {
            return Err(Error::EmptySource);
        }

        Ok(CsvRows {
            rows: rows.into_iter(),
        })
    }
}

/// Row iterator over a parsed CSV export.
pub struct CsvRows {
    rows: std::vec::IntoIter<Row>,
}

impl Iterator for CsvRows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(Ok)
    }
}

/// Parse a CSV export, skipping any preamble before the header sentinel.
fn parse_export(text: &str) -> Result<Vec<Row>> {
    let offset = header_line_offset(text).unwrap_or(0);
    let mut parser = CsvParser::new(&text.as_bytes()[offset..]);

    let mut rows = Vec::new();
    while let Some(row) = parser.parse_row()? {
        rows.push(row);
    }

    Ok(rows)
}

/// Byte offset of the first line that begins with the header sentinel.
fn header_line_offset(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.starts_with(HEADER_SENTINEL.as_bytes()) {
        return Some(0);
    }

    memchr_iter(b'\n', bytes)
        .map(|nl| nl + 1)
        .find(|&start| bytes[start..].starts_with(HEADER_SENTINEL.as_bytes()))
}

/// Streaming parser for the exported CSV payload.
struct CsvParser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CsvParser<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        CsvParser { bytes, pos: 0 }
    }

    /// Parse the next row, or `None` at end of input.
    fn parse_row(&mut self) -> Result<Option<Row>> {
        if self.pos >= self.bytes.len() {
            return Ok(None);
        }

        let mut fields = Vec::new();
        let mut current_field = Vec::new();
        let mut in_quotes = false;
        let mut field_start = true;

        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            self.pos += 1;

            match byte {
                b'\n' => {
                    if in_quotes {
                        // Newline inside quotes is part of the field
                        current_field.push(byte);
                    } else {
                        finish_field(&mut current_field, &mut fields);
                        return Ok(Some(fields));
                    }
                }
                b'\r' => {
                    // Handle CRLF - skip CR, let LF handle the line end
                    if in_quotes {
                        current_field.push(byte);
                    }
                }
                b'"' => {
                    if in_quotes {
                        if self.pos < self.bytes.len() && self.bytes[self.pos] == b'"' {
                            // Escaped quote (doubled quote)
                            current_field.push(b'"');
                            self.pos += 1;
                        } else {
                            in_quotes = false;
                        }
                    } else if field_start {
                        in_quotes = true;
                    } else {
                        // Quote inside an unquoted field, keep it verbatim
                        current_field.push(byte);
                    }
                }
                b',' if !in_quotes => {
                    finish_field(&mut current_field, &mut fields);
                    field_start = true;
                    continue;
                }
                _ => {
                    current_field.push(byte);
                }
            }

            field_start = false;
        }

        // End of input
        if in_quotes {
            return Err(Error::SourceParse(
                "unterminated quoted field".to_string(),
            ));
        }

        finish_field(&mut current_field, &mut fields);
        Ok(Some(fields))
    }
}

fn finish_field(current_field: &mut Vec<u8>, fields: &mut Row) {
    let field_bytes = std::mem::take(current_field);
    let field = String::from_utf8_lossy(&field_bytes);
    fields.push(CellValue::from_field(&field));
}
