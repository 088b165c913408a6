//! Header row interpretation.
//!
//! The header row is recognized by a sentinel in its first cell. It fixes
//! the maximum translation key depth (one path-placeholder sentinel per
//! level) and the ordered set of language columns that follow.

use crate::error::{Error, Result};
use crate::grid::Row;

/// Sentinel value in the first cell of the header row.
pub const HEADER_SENTINEL: &str = "###";

/// Sentinel value of each path-placeholder cell in the header row.
pub const PATH_SENTINEL: &str = ">>>";

/// Interpreted structure of the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Maximum translation key depth (number of path columns)
    pub path_max_length: usize,
    /// Ordered language codes, positionally aligned to the columns after
    /// the path columns
    pub languages: Vec<String>,
}

impl Header {
    /// Consume rows until the sentinel header row appears and interpret it.
    ///
    /// Rows preceding the header (user manuals, decorative blocks) are
    /// discarded. Fails with [`Error::MissingHeader`] if the source is
    /// exhausted without producing a header row.
    pub fn read_from<I>(rows: &mut I) -> Result<Header>
    where
        I: Iterator<Item = Result<Row>>,
    {
        for row in rows {
            let row = row?;
            if row.first().is_some_and(|cell| cell.to_text() == HEADER_SENTINEL) {
                return Ok(Self::interpret(&row));
            }
        }

        Err(Error::MissingHeader)
    }

    /// Interpret an already-located header row.
    pub fn interpret(row: &Row) -> Header {
        let path_max_length = row
            .iter()
            .skip(1)
            .take_while(|cell| cell.to_text() == PATH_SENTINEL)
            .count();

        let languages = row
            .iter()
            .skip(1 + path_max_length)
            .map(|cell| cell.to_text())
            .filter(|code| !code.is_empty())
            .collect();

        Header {
            path_max_length,
            languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellValue;

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|c| CellValue::from_field(c)).collect()
    }

    #[test]
    fn test_interpret_header() {
        let header = Header::interpret(&text_row(&["###", ">>>", ">>>", ">>>", "en", "pl"]));
        assert_eq!(header.path_max_length, 3);
        assert_eq!(header.languages, vec!["en", "pl"]);
    }

    #[test]
    fn test_interpret_ignores_blank_trailing_columns() {
        let header = Header::interpret(&text_row(&["###", ">>>", "en", "", "  "]));
        assert_eq!(header.path_max_length, 1);
        assert_eq!(header.languages, vec!["en"]);
    }

    #[test]
    fn test_read_from_skips_preamble() {
        let rows = vec![
            text_row(&["Please edit translations here", ""]),
            text_row(&["", ""]),
            text_row(&["###", ">>>", "en"]),
        ];
        let mut iter = rows.into_iter().map(Ok);
        let header = Header::read_from(&mut iter).unwrap();
        assert_eq!(header.path_max_length, 1);
        assert_eq!(header.languages, vec!["en"]);
    }

    #[test]
    fn test_read_from_missing_header() {
        let rows = vec![text_row(&["Foo"]), text_row(&["Bar"])];
        let mut iter = rows.into_iter().map(Ok);
        assert!(matches!(
            Header::read_from(&mut iter),
            Err(Error::MissingHeader)
        ));
    }
}
