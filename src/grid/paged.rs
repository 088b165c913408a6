//! Windowed/paged grid source for rate-limited spreadsheet APIs.
//!
//! Spreadsheet APIs bound the payload of a single read, so rows are fetched
//! in fixed-size batches: each page issues one bounded range read covering
//! that page's rows across all columns, then yields rows one at a time.
//! Pages are fetched lazily — a consumer that stops pulling rows stops the
//! paging, which lets the decoder's end-of-data heuristic avoid reading
//! pages past the last populated row.

use super::cell::{CellValue, Row};
use super::source::GridSource;
use crate::error::Result;

/// Default number of rows fetched per range read.
pub const ROWS_BATCH_SIZE: usize = 50;

/// Collaborator contract for bounded range reads against a remote grid.
///
/// Authorization and transport are the implementor's business; the codec
/// never sees credentials.
pub trait RangeReader {
    /// Total grid dimensions as `(row_count, column_count)`.
    fn dimensions(&self) -> Result<(usize, usize)>;

    /// Read rows `start_row..end_row` (0-based, exclusive end) across
    /// columns `0..column_count`. Returned rows may be ragged; missing
    /// trailing cells are treated as empty.
    fn read_range(
        &self,
        start_row: usize,
        end_row: usize,
        column_count: usize,
    ) -> Result<Vec<Row>>;
}

/// Configuration for a paged grid source.
#[derive(Debug, Clone)]
pub struct PagedConfig {
    /// Rows fetched per range read
    pub batch_size: usize,
}

impl Default for PagedConfig {
    fn default() -> Self {
        Self {
            batch_size: ROWS_BATCH_SIZE,
        }
    }
}

impl PagedConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows fetched per range read
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

/// Grid source that paginates through a [`RangeReader`].
#[derive(Debug)]
pub struct PagedSource<R: RangeReader> {
    reader: R,
    config: PagedConfig,
}

impl<R: RangeReader> PagedSource<R> {
    /// Create a paged source with the default batch size.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, PagedConfig::default())
    }

    /// Create a paged source with a custom configuration.
    pub fn with_config(reader: R, config: PagedConfig) -> Self {
        PagedSource { reader, config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &PagedConfig {
        &self.config
    }
}

impl<R: RangeReader> GridSource for PagedSource<R> {
    type Rows<'a>
        = PagedRows<'a, R>
    where
        Self: 'a;

    fn open(&self) -> Result<Self::Rows<'_>> {
        let (row_count, column_count) = self.reader.dimensions()?;
        Ok(PagedRows {
            reader: &self.reader,
            batch_size: self.config.batch_size.max(1),
            row_count,
            column_count,
            next_row: 0,
            buffer: Vec::new().into_iter(),
            failed: false,
        })
    }
}

/// Row iterator over a [`PagedSource`].
pub struct PagedRows<'a, R: RangeReader> {
    reader: &'a R,
    batch_size: usize,
    row_count: usize,
    column_count: usize,
    next_row: usize,
    buffer: std::vec::IntoIter<Row>,
    failed: bool,
}

impl<R: RangeReader> Iterator for PagedRows<'_, R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(row) = self.buffer.next() {
                let row = row.into_iter().map(CellValue::normalized).collect();
                return Some(Ok(row));
            }

            if self.next_row >= self.row_count {
                return None;
            }

            let end_row = (self.next_row + self.batch_size).min(self.row_count);
            match self.reader.read_range(self.next_row, end_row, self.column_count) {
                Ok(rows) => {
                    self.next_row = end_row;
                    self.buffer = rows.into_iter();
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
