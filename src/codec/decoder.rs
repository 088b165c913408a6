//! Path-merge decoder.
//!
//! Reconstructs full hierarchical key paths from rows where only the
//! changed suffix of the path is populated — the spreadsheet convention
//! where a sub-key's parent segments are left blank on rows that repeat
//! the same parent — and emits one normalized entry per (path, language)
//! pair.

use serde::{Deserialize, Serialize};

use super::header::Header;
use crate::error::Result;
use crate::grid::{CellValue, GridSource, Row};

/// Number of consecutive fully-blank rows that marks end of data.
///
/// Spreadsheets have no natural EOF; trailing whitespace rows (or stray
/// garbage far below the data) would otherwise keep the decoder paging
/// forever. Design constant, not user-configurable.
pub const END_AFTER_EMPTY_ROWS_COUNT: usize = 10;

/// One translation, addressed by its hierarchical key path and language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Hierarchical key path, e.g. `["login", "buttons", "signup"]`
    pub path: Vec<String>,
    /// Language code of the column this value came from
    pub language: String,
    /// Translation text; empty string when the cell was blank
    pub value: String,
    /// Free-text label from the row's first column; does not inherit
    /// across rows
    pub tag: String,
}

/// Decode a grid source into a stream of translation entries.
///
/// Opens a fresh pass over the source, locates and interprets the header
/// row, and returns a lazy iterator over the data rows. Each call starts
/// over from the beginning of the medium.
pub fn decode<S: GridSource>(source: &S) -> Result<EntryIter<S::Rows<'_>>> {
    let mut rows = source.open()?;
    let header = Header::read_from(&mut rows)?;
    Ok(EntryIter::new(rows, header))
}

/// Decode a grid source, collecting all entries eagerly.
pub fn decode_all<S: GridSource>(source: &S) -> Result<Vec<TranslationEntry>> {
    decode(source)?.collect()
}

/// Lazy iterator over decoded translation entries.
///
/// Pulls rows from the underlying source one at a time; once the
/// consecutive-empty-row threshold is reached, no further rows are
/// requested, so a paged source stops fetching pages.
pub struct EntryIter<I> {
    rows: I,
    header: Header,
    previous_path: Vec<String>,
    empty_run: usize,
    pending: std::vec::IntoIter<TranslationEntry>,
    done: bool,
}

impl<I> EntryIter<I>
where
    I: Iterator<Item = Result<Row>>,
{
    fn new(rows: I, header: Header) -> Self {
        EntryIter {
            rows,
            header,
            previous_path: Vec::new(),
            empty_run: 0,
            pending: Vec::new().into_iter(),
            done: false,
        }
    }

    /// The interpreted header row of this decode pass.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Fold one data row into the decoder state, producing the row's
    /// entries (empty for separator and blank rows).
    fn process_row(&mut self, row: Row) -> Vec<TranslationEntry> {
        let cells: Vec<String> = row.iter().map(CellValue::to_text).collect();

        if cells.iter().all(|cell| cell.is_empty()) {
            self.empty_run += 1;
            if self.empty_run >= END_AFTER_EMPTY_ROWS_COUNT {
                self.done = true;
            }
            return Vec::new();
        }
        self.empty_run = 0;

        let path_end = (1 + self.header.path_max_length).min(cells.len());
        let path_cells = cells.get(1..path_end).unwrap_or(&[]);
        self.previous_path = merge_paths(&self.previous_path, path_cells);

        let language_cells = cells.get(path_end..).unwrap_or(&[]);
        if !language_cells.iter().any(|value| !value.is_empty()) {
            // Pure path-declaration (separator) row: updates path state
            // but emits nothing
            return Vec::new();
        }

        let tag = cells.first().cloned().unwrap_or_default();
        self.header
            .languages
            .iter()
            .enumerate()
            .map(|(index, language)| TranslationEntry {
                path: self.previous_path.clone(),
                language: language.clone(),
                value: language_cells.get(index).cloned().unwrap_or_default(),
                tag: tag.clone(),
            })
            .collect()
    }
}

impl<I> Iterator for EntryIter<I>
where
    I: Iterator<Item = Result<Row>>,
{
    type Item = Result<TranslationEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.pending.next() {
                return Some(Ok(entry));
            }

            if self.done {
                return None;
            }

            match self.rows.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                Some(Ok(row)) => {
                    self.pending = self.process_row(row).into_iter();
                }
            }
        }
    }
}

/// Merge a row's sparse path cells into the previous full path.
///
/// The shallowest populated cell marks where the path changed; everything
/// above it is inherited from the previous row, everything from it on is
/// taken from this row. A row with no populated path cells repeats the
/// previous path entirely.
fn merge_paths(previous_path: &[String], path_cells: &[String]) -> Vec<String> {
    let Some(first_changed) = path_cells.iter().position(|cell| !cell.is_empty()) else {
        return previous_path.to_vec();
    };

    let inherited = &previous_path[..first_changed.min(previous_path.len())];
    let mut merged = Vec::with_capacity(inherited.len() + path_cells.len() - first_changed);
    merged.extend_from_slice(inherited);
    merged.extend_from_slice(&path_cells[first_changed..]);
    merged.retain(|segment| !segment.is_empty());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_paths_inherits_prefix() {
        let previous = path(&["login", "buttons", "signup"]);
        let merged = merge_paths(&previous, &path(&["", "", "signin"]));
        assert_eq!(merged, path(&["login", "buttons", "signin"]));
    }

    #[test]
    fn test_merge_paths_replaces_suffix() {
        let previous = path(&["login", "buttons", "signup"]);
        let merged = merge_paths(&previous, &path(&["", "form", ""]));
        assert_eq!(merged, path(&["login", "form"]));
    }

    #[test]
    fn test_merge_paths_unchanged_when_all_blank() {
        let previous = path(&["common", "ok"]);
        let merged = merge_paths(&previous, &path(&["", ""]));
        assert_eq!(merged, previous);
    }

    #[test]
    fn test_merge_paths_deeper_than_previous() {
        // Ragged history: the changed segment sits below the previous
        // path's depth
        let merged = merge_paths(&path(&["a"]), &path(&["", "", "c"]));
        assert_eq!(merged, path(&["a", "c"]));
    }
}
