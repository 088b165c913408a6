//! Hierarchical-path grid codec.
//!
//! Translation sheets lay a nested catalog out with the path compressed:
//! a key segment is only written on the row where it changes from the
//! previous row, parent segments are left blank. The header row, marked by
//! a sentinel in its first cell, fixes the maximum key depth and the
//! ordered language columns.
//!
//! - [`Header`]: interprets the sentinel header row
//! - [`decode`] / [`EntryIter`]: reconstructs full key paths from the
//!   sparse rows and emits one [`TranslationEntry`] per (path, language)
//! - [`build_sheet`]: the inverse — lays seed translations out as
//!   compressed rows with a formatted header and optional manual block

pub mod decoder;
pub mod encoder;
pub mod header;

pub use decoder::{
    decode, decode_all, EntryIter, TranslationEntry, END_AFTER_EMPTY_ROWS_COUNT,
};
pub use encoder::{
    build_sheet, CellSpec, RowSpec, Seed, SheetConfig, SheetSpec, TRANSLATION_PLACEHOLDER,
};
pub use header::{Header, HEADER_SENTINEL, PATH_SENTINEL};
