//! Tests for the grid sources

use std::cell::RefCell;

use super::*;
use crate::error::{Error, Result};

/// Exporter backed by a fixed payload.
struct StaticExporter(Vec<u8>);

impl CsvExporter for StaticExporter {
    fn export(&self) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

fn csv_rows(payload: &str) -> Vec<Row> {
    let source = CsvSource::new(StaticExporter(payload.as_bytes().to_vec()));
    source
        .open()
        .unwrap()
        .collect::<Result<Vec<Row>>>()
        .unwrap()
}

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

#[test]
fn test_csv_simple_rows() {
    let rows = csv_rows("###,>>>,en\n,key1,value1\n,key2,value2");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec![text("###"), text(">>>"), text("en")]);
    assert_eq!(rows[1], vec![CellValue::Empty, text("key1"), text("value1")]);
    assert_eq!(rows[2], vec![CellValue::Empty, text("key2"), text("value2")]);
}

#[test]
fn test_csv_discards_preamble_before_header_sentinel() {
    let rows = csv_rows("junk line\nanother,row\n###,>>>,en\n,key1,value1");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], text("###"));
}

#[test]
fn test_csv_without_sentinel_parses_from_start() {
    // Header detection is the decoder's business; the source just parses
    let rows = csv_rows("a,b\nc,d");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec![text("a"), text("b")]);
}

#[test]
fn test_csv_quoted_fields() {
    let rows = csv_rows("###,en\n,\"Hello, World\"\n,\"Value with \"\"quotes\"\"\"");
    assert_eq!(rows[1][1], text("Hello, World"));
    assert_eq!(rows[2][1], text("Value with \"quotes\""));
}

#[test]
fn test_csv_embedded_newline_in_quoted_field() {
    let rows = csv_rows("###,en\n,\"line one\nline two\"");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], text("line one\nline two"));
}

#[test]
fn test_csv_crlf_line_endings() {
    let rows = csv_rows("###,>>>,en\r\n,key1,value1\r\n");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec![CellValue::Empty, text("key1"), text("value1")]);
}

#[test]
fn test_csv_blank_cells_normalize_to_empty() {
    let rows = csv_rows("###,en\n,  \n,x");
    assert_eq!(rows[1], vec![CellValue::Empty, CellValue::Empty]);
    assert_eq!(rows[2], vec![CellValue::Empty, text("x")]);
}

#[test]
fn test_csv_ragged_rows_are_tolerated() {
    let rows = csv_rows("###,>>>,en,pl\n,key1,value1");
    assert_eq!(rows[0].len(), 4);
    assert_eq!(rows[1].len(), 3);
}

#[test]
fn test_csv_empty_export_fails() {
    let source = CsvSource::new(StaticExporter(Vec::new()));
    assert!(matches!(source.open(), Err(Error::EmptySource)));
}

#[test]
fn test_csv_non_text_export_fails() {
    let source = CsvSource::new(StaticExporter(vec![0xff, 0xfe, 0x00]));
    assert!(matches!(source.open(), Err(Error::SourceExportType(_))));
}

#[test]
fn test_csv_unterminated_quote_fails() {
    let source = CsvSource::new(StaticExporter(b"###,en\n,\"oops".to_vec()));
    assert!(matches!(source.open(), Err(Error::SourceParse(_))));
}

/// Range reader over an in-memory grid, logging every requested window.
struct FakeReader {
    rows: Vec<Row>,
    column_count: usize,
    calls: RefCell<Vec<(usize, usize)>>,
    fail_from_row: Option<usize>,
}

impl FakeReader {
    fn new(rows: Vec<Row>, column_count: usize) -> Self {
        FakeReader {
            rows,
            column_count,
            calls: RefCell::new(Vec::new()),
            fail_from_row: None,
        }
    }
}

impl RangeReader for &FakeReader {
    fn dimensions(&self) -> Result<(usize, usize)> {
        Ok((self.rows.len(), self.column_count))
    }

    fn read_range(
        &self,
        start_row: usize,
        end_row: usize,
        _column_count: usize,
    ) -> Result<Vec<Row>> {
        self.calls.borrow_mut().push((start_row, end_row));
        if self.fail_from_row.is_some_and(|row| start_row >= row) {
            return Err(Error::Source("range read failed".to_string()));
        }
        Ok(self.rows[start_row..end_row].to_vec())
    }
}

fn numbered_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| vec![CellValue::Int(i as i64)])
        .collect()
}

#[test]
fn test_paged_source_batches_range_reads() {
    let reader = FakeReader::new(numbered_rows(5), 1);
    let source = PagedSource::with_config(&reader, PagedConfig::new().with_batch_size(2));

    let rows: Vec<Row> = source.open().unwrap().collect::<Result<_>>().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4], vec![CellValue::Int(4)]);
    assert_eq!(*reader.calls.borrow(), vec![(0, 2), (2, 4), (4, 5)]);
}

#[test]
fn test_paged_source_fetches_pages_lazily() {
    let reader = FakeReader::new(numbered_rows(10), 1);
    let source = PagedSource::with_config(&reader, PagedConfig::new().with_batch_size(3));

    let mut rows = source.open().unwrap();
    // Pull only the first page's worth of rows
    for _ in 0..3 {
        rows.next().unwrap().unwrap();
    }
    assert_eq!(*reader.calls.borrow(), vec![(0, 3)]);
}

#[test]
fn test_paged_source_restarts_per_open() {
    let reader = FakeReader::new(numbered_rows(2), 1);
    let source = PagedSource::new(&reader);

    let first: Vec<Row> = source.open().unwrap().collect::<Result<_>>().unwrap();
    let second: Vec<Row> = source.open().unwrap().collect::<Result<_>>().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_paged_source_normalizes_blank_text_cells() {
    let reader = FakeReader::new(vec![vec![CellValue::Text("   ".to_string()), text("x")]], 2);
    let source = PagedSource::new(&reader);

    let rows: Vec<Row> = source.open().unwrap().collect::<Result<_>>().unwrap();
    assert_eq!(rows[0], vec![CellValue::Empty, text("x")]);
}

#[test]
fn test_paged_source_propagates_read_failure_and_stops() {
    let mut reader = FakeReader::new(numbered_rows(6), 1);
    reader.fail_from_row = Some(2);
    let source = PagedSource::with_config(&reader, PagedConfig::new().with_batch_size(2));

    let mut rows = source.open().unwrap();
    assert!(rows.next().unwrap().is_ok());
    assert!(rows.next().unwrap().is_ok());
    assert!(rows.next().unwrap().is_err());
    // The stream is failed; no further reads are attempted
    assert!(rows.next().is_none());
    assert_eq!(*reader.calls.borrow(), vec![(0, 2), (2, 4)]);
}
