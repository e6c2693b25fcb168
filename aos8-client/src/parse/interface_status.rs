//! Parser for `show interfaces status`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Record, positional_record, split_columns};

const COLUMNS: [&str; 13] = [
    "port",
    "admin_status",
    "auto_nego",
    "det_speed",
    "det_duplex",
    "det_pause",
    "det_fec",
    "cfg_speed",
    "cfg_duplex",
    "cfg_pause",
    "cfg_fec",
    "link_trap",
    "eee",
];

/// Rows start with a `chassis/slot/port` identifier.
static PORT_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+/\d+/\d+").unwrap());

/// Parse the interface status table into one record per port.
///
/// Header lines are skipped until the first row that starts with a port
/// identifier. From there, every row needs all 13 columns; shorter rows are
/// dropped.
pub fn parse_interface_status(output: &str) -> Vec<Record> {
    output
        .lines()
        .skip_while(|line| !PORT_ROW.is_match(line))
        .filter_map(|line| {
            let cells = split_columns(line);
            positional_record(&COLUMNS, &cells, COLUMNS.len())
        })
        .collect()
}
