//! Nested catalog aggregation and JSON output.
//!
//! Reduces a decoded entry stream into one nested key→value object per
//! language and writes it out as a pretty-printed JSON file. This is a
//! plain reduction over [`TranslationEntry`] values — no codec logic
//! lives here.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::codec::TranslationEntry;
use crate::error::Result;

/// Nested translation catalog for a single language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    root: Map<String, Value>,
    entry_count: usize,
}

/// Summary of one written catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Path of the written file
    pub file_path: PathBuf,
    /// Number of entries folded into the file
    pub entry_count: usize,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the entries of one language into a catalog.
    pub fn from_entries<'a, I>(entries: I, language: &str) -> Catalog
    where
        I: IntoIterator<Item = &'a TranslationEntry>,
    {
        let mut catalog = Catalog::new();
        for entry in entries {
            if entry.language == language {
                catalog.insert(&entry.path, &entry.value);
            }
        }
        catalog
    }

    /// Set `value` at `path`, creating intermediate objects as needed.
    ///
    /// A later insert at the same path overwrites the earlier value; an
    /// intermediate non-object value is replaced by an object.
    pub fn insert(&mut self, path: &[String], value: &str) {
        let Some((leaf, parents)) = path.split_last() else {
            return;
        };

        let mut node = &mut self.root;
        for segment in parents {
            let child = node
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            match child {
                Value::Object(map) => node = map,
                _ => unreachable!(),
            }
        }

        node.insert(leaf.clone(), Value::String(value.to_string()));
        self.entry_count += 1;
    }

    /// Number of entries folded in so far.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// The nested catalog as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Write the catalog as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn write_json_file<P: AsRef<Path>>(&self, file_path: P) -> Result<FileSummary> {
        let file_path = file_path.as_ref();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.to_value())?;
        fs::write(file_path, json)?;

        Ok(FileSummary {
            file_path: file_path.to_path_buf(),
            entry_count: self.entry_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &[&str], language: &str, value: &str) -> TranslationEntry {
        TranslationEntry {
            path: path.iter().map(|s| s.to_string()).collect(),
            language: language.to_string(),
            value: value.to_string(),
            tag: String::new(),
        }
    }

    #[test]
    fn test_nested_insert() {
        let entries = vec![
            entry(&["login", "buttons", "signup"], "en", "Sign up"),
            entry(&["login", "buttons", "signin"], "en", "Sign in"),
            entry(&["common", "ok"], "en", "Ok"),
            entry(&["login", "buttons", "signup"], "pl", "Zarejestruj się"),
        ];
        let catalog = Catalog::from_entries(&entries, "en");

        assert_eq!(catalog.entry_count(), 3);
        assert_eq!(
            catalog.to_value(),
            serde_json::json!({
                "login": {
                    "buttons": {
                        "signup": "Sign up",
                        "signin": "Sign in",
                    }
                },
                "common": { "ok": "Ok" },
            })
        );
    }

    #[test]
    fn test_insert_overwrites_at_same_path() {
        let mut catalog = Catalog::new();
        catalog.insert(&["a".to_string(), "b".to_string()], "first");
        catalog.insert(&["a".to_string(), "b".to_string()], "second");

        assert_eq!(
            catalog.to_value(),
            serde_json::json!({ "a": { "b": "second" } })
        );
    }

    #[test]
    fn test_write_json_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("i18n").join("en.json");

        let mut catalog = Catalog::new();
        catalog.insert(&["common".to_string(), "ok".to_string()], "Ok");

        let summary = catalog.write_json_file(&file_path).unwrap();
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.file_path, file_path);

        let written = std::fs::read_to_string(&file_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value, serde_json::json!({ "common": { "ok": "Ok" } }));
    }
}
