//! Grid model and row sources.
//!
//! A translation catalog lives in a two-dimensional grid — a spreadsheet
//! or its CSV export. This module provides the cell/row model and two
//! interchangeable source strategies behind one contract
//! ([`GridSource`]): a lazy, forward-only, finite sequence of rows.
//!
//! - [`PagedSource`]: windowed range reads against a spreadsheet API, in
//!   fixed-size row batches to respect API payload limits
//! - [`CsvSource`]: one whole-grid CSV export, parsed with standard
//!   quoting rules
//! - [`VecSource`]: in-memory rows, for tests and re-decoding encoded
//!   sheets
//!
//! Both remote strategies normalize blank/whitespace-only cells to
//! [`CellValue::Empty`] before the decoder sees them, so "blank" has one
//! canonical representation regardless of source.

pub mod cell;
pub mod csv;
pub mod paged;
pub mod source;

pub use cell::{CellValue, Row};
pub use csv::{CsvExporter, CsvSource};
pub use paged::{PagedConfig, PagedSource, RangeReader, ROWS_BATCH_SIZE};
pub use source::{GridSource, VecSource};

#[cfg(test)]
mod tests;
