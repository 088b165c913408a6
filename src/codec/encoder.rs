//! Grid encoder.
//!
//! The inverse of the path-merge decoder: lays a seed catalog out as grid
//! rows with repeated path prefixes compressed — a key segment is only
//! written on the row where it changes from the previously emitted path,
//! which is exactly the convention the decoder reconstructs.

use serde::{Deserialize, Serialize};

use super::header::{HEADER_SENTINEL, PATH_SENTINEL};
use crate::grid::{CellValue, Row};

/// Literal requesting a manual translation, written for every language
/// column a seed does not provide text for.
pub const TRANSLATION_PLACEHOLDER: &str = "PROVIDE TRANSLATION";

/// One cell of an encoded sheet, with presentation hints for the
/// sheet-creation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpec {
    /// Cell contents
    pub text: String,
    /// Render bold (header cells)
    pub bold: bool,
    /// Render with a background highlight (manual block cells)
    pub highlighted: bool,
}

impl CellSpec {
    /// Plain text cell.
    pub fn text(content: impl Into<String>) -> Self {
        CellSpec {
            text: content.into(),
            bold: false,
            highlighted: false,
        }
    }

    /// Bold cell.
    pub fn bold(content: impl Into<String>) -> Self {
        CellSpec {
            text: content.into(),
            bold: true,
            highlighted: false,
        }
    }

    /// Highlighted cell, optionally empty.
    pub fn highlighted(content: impl Into<String>) -> Self {
        CellSpec {
            text: content.into(),
            bold: false,
            highlighted: true,
        }
    }
}

/// One encoded sheet row.
pub type RowSpec = Vec<CellSpec>;

/// The sheet-creation contract: ordered rows with presentation hints plus
/// sheet metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSpec {
    /// Sheet title
    pub title: String,
    /// Rows pinned at the top of the sheet (manual block + header)
    pub frozen_row_count: usize,
    /// Ordered sheet rows
    pub rows: Vec<RowSpec>,
}

impl SheetSpec {
    /// Convert the encoded rows into plain grid rows, dropping the
    /// presentation hints. Blank cells become [`CellValue::Empty`], so the
    /// result can be fed straight back through a grid source.
    pub fn to_rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| CellValue::from_field(&cell.text)).collect())
            .collect()
    }
}

/// One seed translation: a dotted key plus either a single text (treated
/// as the en/us translation, every other language gets the placeholder) or
/// one explicit text per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// Dotted translation key, e.g. `"login.buttons.signup"`
    pub key: String,
    /// One value (en/us text) or one value per language
    pub values: Vec<String>,
}

impl Seed {
    /// Seed with a single en/us text.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Seed {
            key: key.into(),
            values: vec![value.into()],
        }
    }

    /// Seed with one explicit text per language.
    pub fn with_values(key: impl Into<String>, values: Vec<String>) -> Self {
        Seed {
            key: key.into(),
            values,
        }
    }
}

/// Configuration for encoding a translation sheet.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Sheet title
    pub title: String,
    /// Maximum translation key depth (number of path columns, ≥ 1)
    pub max_key_depth: usize,
    /// Ordered language codes
    pub languages: Vec<String>,
    /// Emit the highlighted user-manual block above the header
    pub include_manual: bool,
    /// Emit example seed rows below the header
    pub include_example: bool,
    /// Seeds for the example rows; `None` uses the built-in examples
    pub example_rows: Option<Vec<Seed>>,
}

impl SheetConfig {
    /// Create a configuration with the reference defaults: depth 5,
    /// languages `en`/`pl`, manual and example rows included.
    pub fn new(title: impl Into<String>) -> Self {
        SheetConfig {
            title: title.into(),
            max_key_depth: 5,
            languages: vec!["en".to_string(), "pl".to_string()],
            include_manual: true,
            include_example: true,
            example_rows: None,
        }
    }

    /// Set the maximum translation key depth
    pub fn with_max_key_depth(mut self, depth: usize) -> Self {
        self.max_key_depth = depth.max(1);
        self
    }

    /// Set the ordered language code list
    pub fn with_languages<S: Into<String>>(mut self, languages: Vec<S>) -> Self {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Enable/disable the user-manual block
    pub fn with_manual(mut self, include: bool) -> Self {
        self.include_manual = include;
        self
    }

    /// Enable/disable the example rows
    pub fn with_example(mut self, include: bool) -> Self {
        self.include_example = include;
        self
    }

    /// Supply explicit seeds for the example rows
    pub fn with_example_rows(mut self, seeds: Vec<Seed>) -> Self {
        self.example_rows = Some(seeds);
        self
    }
}

/// Encode a translation sheet from the given configuration.
pub fn build_sheet(config: &SheetConfig) -> SheetSpec {
    let mut rows = Vec::new();

    if config.include_manual {
        rows.extend(manual_rows(config.max_key_depth));
    }

    rows.push(header_row(config.max_key_depth, &config.languages));

    if config.include_example {
        let seeds = match &config.example_rows {
            Some(seeds) => seeds.clone(),
            None => default_seeds(),
        };
        rows.extend(seed_rows(config.max_key_depth, &config.languages, &seeds));
    }

    SheetSpec {
        title: config.title.clone(),
        frozen_row_count: if config.include_manual { 5 } else { 1 },
        rows,
    }
}

/// The main header row: sentinel, one path placeholder per depth level,
/// then the language codes. All bold.
fn header_row(max_key_depth: usize, languages: &[String]) -> RowSpec {
    let mut row = Vec::with_capacity(1 + max_key_depth + languages.len());
    row.push(CellSpec::bold(HEADER_SENTINEL));
    row.extend(fill_cells(max_key_depth, CellSpec::bold(PATH_SENTINEL)));
    row.extend(languages.iter().map(|code| CellSpec::bold(code)));
    row
}

/// The highlighted user-manual block shown above the header, explaining
/// the editing convention to non-technical sheet users.
fn manual_rows(max_key_depth: usize) -> Vec<RowSpec> {
    let pad = max_key_depth.saturating_sub(1);
    vec![
        fill_cells(max_key_depth + 1, CellSpec::highlighted("")),
        [
            vec![
                CellSpec::highlighted(""),
                CellSpec::highlighted("These columns are the list of translation keys and"),
            ],
            fill_cells(pad, CellSpec::highlighted("")),
            vec![CellSpec::text("Please edit translation here.")],
        ]
        .concat(),
        [
            vec![
                CellSpec::highlighted(""),
                CellSpec::highlighted("can only be edited by the dev team."),
            ],
            fill_cells(pad, CellSpec::highlighted("")),
        ]
        .concat(),
        fill_cells(max_key_depth + 1, CellSpec::highlighted("")),
    ]
}

/// Lay the seeds out as compressed path rows.
///
/// Each seed's key is split on `.` into at most `max_key_depth` segments.
/// Starting at the shallowest segment that differs from the previously
/// emitted path, one row is emitted per segment down to the leaf; the leaf
/// row also carries the per-language value cells.
fn seed_rows(max_key_depth: usize, languages: &[String], seeds: &[Seed]) -> Vec<RowSpec> {
    let mut last_path: Vec<&str> = Vec::new();
    let mut rows = Vec::new();

    for seed in seeds {
        let key_path: Vec<&str> = seed.key.split('.').take(max_key_depth).collect();
        if key_path.is_empty() {
            continue;
        }
        let leaf = key_path.len() - 1;

        let first_changed = key_path
            .iter()
            .enumerate()
            .position(|(index, segment)| last_path.get(index) != Some(segment));

        if let Some(first_changed) = first_changed {
            for (index, segment) in key_path.iter().enumerate().skip(first_changed) {
                let mut row = Vec::with_capacity(2 + max_key_depth + languages.len());
                // tag column
                row.push(CellSpec::text(""));
                // padding down to this segment's level
                row.extend(fill_cells(index, CellSpec::text("")));
                row.push(CellSpec::text(*segment));
                // padding between the key column and the language columns
                row.extend(fill_cells(max_key_depth - index - 1, CellSpec::text("")));
                if index == leaf {
                    row.extend(value_cells(languages, seed));
                }
                rows.push(row);
            }
        }

        last_path = key_path;
    }

    rows
}

/// Per-language value cells for a seed's leaf row.
fn value_cells(languages: &[String], seed: &Seed) -> Vec<CellSpec> {
    if seed.values.len() == 1 {
        let text = &seed.values[0];
        languages
            .iter()
            .map(|code| {
                if code == "en" || code == "us" {
                    CellSpec::text(text)
                } else {
                    CellSpec::text(TRANSLATION_PLACEHOLDER)
                }
            })
            .collect()
    } else {
        seed.values.iter().map(|value| CellSpec::text(value)).collect()
    }
}

fn fill_cells(count: usize, cell: CellSpec) -> Vec<CellSpec> {
    vec![cell; count]
}

/// Built-in example seeds demonstrating the key convention.
fn default_seeds() -> Vec<Seed> {
    vec![
        Seed::new("common.ok", "Ok"),
        Seed::new("common.cancel", "Cancel"),
        Seed::new("common.error.unknown", "Unknown error. Please try again later"),
        Seed::new("login.email", "E-mail"),
        Seed::new("login.password", "Password"),
        Seed::new("login.signin", "Sign in"),
        Seed::new("login.signup", "Sign up"),
    ]
}
