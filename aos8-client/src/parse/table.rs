//! Generic two-space table parser.
//!
//! Handles the common AOS layout of a header line, a dashed separator line,
//! then data rows:
//!
//! ```text
//!      port     type        status
//! ----------+-----------+---------------
//!   1/1/1     default     forwarding
//! ```

use super::{Record, split_columns};

/// Parse a header/separator/rows table into one record per data row.
///
/// Column names come from the first line. The second line is always
/// treated as the separator and skipped. Cells are zipped with the header,
/// so surplus cells are ignored and missing cells are simply absent.
pub fn parse_table(output: &str) -> Vec<Record> {
    let mut lines = output.trim().lines();

    let headers = match lines.next() {
        Some(header) => split_columns(header),
        None => return Vec::new(),
    };

    lines
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            headers
                .iter()
                .zip(split_columns(line))
                .map(|(name, cell)| ((*name).to_string(), cell.to_string()))
                .collect()
        })
        .collect()
}
