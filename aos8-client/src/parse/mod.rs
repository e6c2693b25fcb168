//! Normalizers for AOS CLI text output.
//!
//! Every function in this module is pure: raw CLI text in, structured
//! records out. None of them fail; lines that do not fit the expected shape
//! are skipped.

pub mod interface_status;
pub mod ip_interface;
pub mod sections;
pub mod table;

pub use interface_status::parse_interface_status;
pub use ip_interface::parse_ip_interfaces;
pub use sections::parse_sections;
pub use table::parse_table;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A flat field name to value mapping, in the order the device printed it.
pub type Record = IndexMap<String, String>;

/// A sectioned key/value document such as `show system` output.
pub type Sections = IndexMap<String, Entry>;

/// One entry of a [`Sections`] document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A plain `Key: Value` field.
    Value(String),

    /// A named subsection, including the `Rx` and `Tx` counter blocks.
    Section(Record),
}

impl Entry {
    /// Get the value if this is a plain field.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Section(_) => None,
        }
    }

    /// Get the subsection if this is a section.
    pub fn as_section(&self) -> Option<&Record> {
        match self {
            Entry::Section(s) => Some(s),
            Entry::Value(_) => None,
        }
    }
}

/// Runs of two or more whitespace characters separate columns.
static COLUMN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Split a line into columns on runs of two or more whitespace characters.
pub(crate) fn split_columns(line: &str) -> Vec<&str> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    COLUMN_SEPARATOR.split(line).collect()
}

/// Zip fixed column names with the cells of a row.
///
/// Returns `None` when the row has fewer cells than `required`.
pub(crate) fn positional_record(
    names: &[&str],
    cells: &[&str],
    required: usize,
) -> Option<Record> {
    if cells.len() < required {
        return None;
    }
    Some(
        names
            .iter()
            .zip(cells)
            .map(|(name, cell)| ((*name).to_string(), (*cell).to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_columns() {
        assert_eq!(
            split_columns("  1/1/1    default   forwarding "),
            vec!["1/1/1", "default", "forwarding"]
        );
        // Single spaces stay inside a cell
        assert_eq!(split_columns("Date & Time  now"), vec!["Date & Time", "now"]);
        assert!(split_columns("   ").is_empty());
    }

    #[test]
    fn test_positional_record_short_row() {
        let names = ["a", "b", "c"];
        assert!(positional_record(&names, &["1", "2"], 3).is_none());

        let record = positional_record(&names, &["1", "2"], 2).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record["b"], "2");
    }

    #[test]
    fn test_entry_serializes_untagged() {
        let mut sections = Sections::new();
        sections.insert("Name".into(), Entry::Value("x".into()));
        let mut flash = Record::new();
        flash.insert("Used".into(), "10MB".into());
        sections.insert("Flash Space".into(), Entry::Section(flash));

        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Name": "x", "Flash Space": {"Used": "10MB"}})
        );
    }
}
