//! Cell value model shared by all grid sources.

use serde::{Deserialize, Serialize};

/// Types of data a grid cell can hold.
///
/// Spreadsheet APIs hand back typed values (numbers, booleans, error
/// markers); CSV exports hand back raw text. Both funnel into this enum so
/// the codec only ever deals with one representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Empty cell (also the canonical form of a blank/whitespace-only cell)
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    Text(String),
    /// Error marker reported by the grid medium (e.g. `#REF!`)
    Error(String),
}

/// A single grid row. Rows may be ragged: a row sourced from a spreadsheet
/// or CSV export can carry fewer cells than the header declares.
pub type Row = Vec<CellValue>;

impl CellValue {
    /// Build a cell from a raw text field.
    ///
    /// Blank and whitespace-only fields normalize to [`CellValue::Empty`]
    /// so that "no value" has one canonical representation regardless of
    /// which source produced the row.
    pub fn from_field(field: &str) -> CellValue {
        if field.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(field.to_string())
        }
    }

    /// Collapse blank/whitespace-only text cells to [`CellValue::Empty`].
    pub fn normalized(self) -> CellValue {
        match self {
            CellValue::Text(s) if s.trim().is_empty() => CellValue::Empty,
            other => other,
        }
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Normalize the cell to plain text.
    ///
    /// `Empty` and `Error` become the empty string; numbers and booleans
    /// render the way the grid medium displays them.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty | CellValue::Error(_) => String::new(),
            CellValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            CellValue::Int(i) => itoa::Buffer::new().format(*i).to_string(),
            CellValue::Float(f) => ryu::Buffer::new().format(*f).to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}
