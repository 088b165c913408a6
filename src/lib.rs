//! Langsheet - translation catalogs as spreadsheet grids
//!
//! This library round-trips a hierarchical translation catalog to and from
//! a two-dimensional grid (a spreadsheet or its CSV export), using the
//! sparse path convention translation sheets are edited with: a key
//! segment is only written on the row where it changes, parent segments
//! are left blank on rows that repeat them.
//!
//! # Features
//!
//! - **Path-merge decoding**: Reconstruct full hierarchical key paths from
//!   sparse, possibly ragged rows
//! - **Grid encoding**: Lay seed catalogs out as compressed rows with a
//!   formatted header and an optional user-manual block
//! - **Interchangeable sources**: Windowed/paged API reads or a single
//!   CSV export, behind one lazy row-sequence contract
//! - **End-of-data heuristic**: Stop after a run of fully-blank rows in
//!   media that have no natural EOF
//! - **Catalog aggregation**: Reduce the entry stream into nested JSON
//!   files per language
//!
//! # Example - Encoding a sheet
//!
//! ```rust
//! use langsheet::codec::{build_sheet, SheetConfig};
//!
//! let config = SheetConfig::new("App Translations")
//!     .with_max_key_depth(3)
//!     .with_languages(vec!["en", "pl"]);
//! let sheet = build_sheet(&config);
//!
//! assert_eq!(sheet.frozen_row_count, 5);
//! // Hand `sheet` to a sheet-creation collaborator, or inspect its rows:
//! for row in &sheet.rows {
//!     for cell in row {
//!         print!("{}\t", cell.text);
//!     }
//!     println!();
//! }
//! ```
//!
//! # Example - Decoding a grid
//!
//! ```rust
//! use langsheet::codec::{build_sheet, decode_all, SheetConfig};
//! use langsheet::grid::VecSource;
//!
//! # fn main() -> langsheet::Result<()> {
//! let sheet = build_sheet(&SheetConfig::new("Translations").with_max_key_depth(3));
//! let source = VecSource::new(sheet.to_rows());
//!
//! for entry in decode_all(&source)? {
//!     println!("{} [{}] = {}", entry.path.join("."), entry.language, entry.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing per-language JSON catalogs
//!
//! ```rust,no_run
//! use langsheet::catalog::Catalog;
//! use langsheet::codec::decode_all;
//! use langsheet::grid::VecSource;
//!
//! # fn main() -> langsheet::Result<()> {
//! # let source = VecSource::new(Vec::new());
//! let entries = decode_all(&source)?;
//! for language in ["en", "pl"] {
//!     let catalog = Catalog::from_entries(&entries, language);
//!     let summary = catalog.write_json_file(format!("i18n/{language}.json"))?;
//!     println!("{}: {} entries", summary.file_path.display(), summary.entry_count);
//! }
//! # Ok(())
//! # }
//! ```

/// Hierarchical-path grid codec: header interpretation, path-merge
/// decoding and grid encoding.
pub mod codec;

/// Unified error types.
pub mod error;

/// Grid model and row sources (paged API reads, CSV export, in-memory).
pub mod grid;

/// Nested catalog aggregation and JSON file output.
pub mod catalog;

// Re-export commonly used types for convenience
pub use codec::{
    build_sheet, decode, decode_all, Header, Seed, SheetConfig, SheetSpec, TranslationEntry,
};
pub use error::{Error, Result};
pub use grid::{CellValue, CsvSource, GridSource, PagedSource, Row, VecSource};
