//! Grid source abstraction.

use super::cell::Row;
use crate::error::Result;

/// A finite, forward-only supply of grid rows.
///
/// Each call to [`GridSource::open`] starts a fresh pass over the
/// underlying medium. The returned iterator is lazy: a consumer that stops
/// pulling (for example once the decoder's end-of-data heuristic fires)
/// causes no further reads against the medium.
///
/// A transient read failure surfaces as an `Err` item; the stream is
/// considered failed from that point and is not retried internally.
pub trait GridSource {
    /// Row iterator produced by one pass over the medium.
    type Rows<'a>: Iterator<Item = Result<Row>> + 'a
    where
        Self: 'a;

    /// Start a new pass over the grid.
    fn open(&self) -> Result<Self::Rows<'_>>;
}

/// In-memory grid source backed by a vector of rows.
///
/// Useful for tests and for feeding already-materialized grids (such as the
/// rows of an encoded sheet) back through the decoder.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    rows: Vec<Row>,
}

impl VecSource {
    /// Create a source over the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        VecSource { rows }
    }
}

impl GridSource for VecSource {
    type Rows<'a> = VecRows<'a>;

    fn open(&self) -> Result<Self::Rows<'_>> {
        Ok(VecRows {
            rows: self.rows.iter(),
        })
    }
}

/// Row iterator over a [`VecSource`].
pub struct VecRows<'a> {
    rows: std::slice::Iter<'a, Row>,
}

impl Iterator for VecRows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| Ok(row.clone()))
    }
}
