//! Parser for `show ip interface`.
//!
//! ```text
//! Total 3 interfaces
//!  Flags (D=Directly-bound)
//!
//!             Name                 IP Address      Subnet Mask     Status Forward  Device
//! --------------------------------+---------------+---------------+------+-------+---------
//! EMP-CHAS1                        192.168.70.1    255.255.255.0       UP      NO  EMP
//! vlan-10                          10.0.10.1       255.255.255.0     DOWN     YES  vlan 10
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Record, positional_record, split_columns};

/// Column names, by position. The last one is optional.
const COLUMNS: [&str; 6] = [
    "name",
    "ip_address",
    "subnet_mask",
    "status",
    "forward",
    "device",
];

const REQUIRED_COLUMNS: usize = 5;

static DASH_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-{10,}").unwrap());

/// Parse the interface list that follows the dashed rule line.
///
/// Everything up to and including the first line starting with ten or more
/// dashes is banner text. Rows with fewer than five columns are dropped.
/// Output without a dashed rule yields no rows.
pub fn parse_ip_interfaces(output: &str) -> Vec<Record> {
    output
        .lines()
        .skip_while(|line| !DASH_RULE.is_match(line))
        .skip(1)
        .filter_map(|line| {
            let cells = split_columns(line);
            positional_record(&COLUMNS, &cells, REQUIRED_COLUMNS)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "\
Total 3 interfaces
 Flags (D=Directly-bound)

            Name                 IP Address      Subnet Mask     Status Forward  Device
--------------------------------+---------------+---------------+------+-------+---------
EMP-CHAS1                        192.168.70.1    255.255.255.0       UP      NO  EMP
Loopback                         127.0.0.1       255.255.255.255     UP      NO  Loopback
vlan-10                          10.0.10.1       255.255.255.0     DOWN     YES

";

    #[test]
    fn test_parse_ip_interfaces() {
        let rows = parse_ip_interfaces(OUTPUT);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0]["name"], "EMP-CHAS1");
        assert_eq!(rows[0]["ip_address"], "192.168.70.1");
        assert_eq!(rows[0]["subnet_mask"], "255.255.255.0");
        assert_eq!(rows[0]["status"], "UP");
        assert_eq!(rows[0]["forward"], "NO");
        assert_eq!(rows[0]["device"], "EMP");

        // Device column is optional
        assert_eq!(rows[2]["forward"], "YES");
        assert!(!rows[2].contains_key("device"));
    }

    #[test]
    fn test_banner_is_ignored() {
        let rows = parse_ip_interfaces(OUTPUT);
        assert!(rows.iter().all(|r| r["name"] != "Total 3 interfaces"));
    }

    #[test]
    fn test_short_rows_dropped() {
        let output = "----------\na  b  c  d\na  b  c  d  e\n";
        let rows = parse_ip_interfaces(output);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["forward"], "e");
    }

    #[test]
    fn test_no_rule_line() {
        assert!(parse_ip_interfaces("a  b  c  d  e\n").is_empty());
    }
}
