//! Parser for sectioned `Key: Value` output.
//!
//! Used for `show system` and `show interfaces port <port>`. The device
//! prints fields with variable indentation, optional section headers and,
//! for interface detail, `Rx`/`Tx` counter blocks with several counters per
//! line:
//!
//! ```text
//! System:
//!   Description:  Alcatel-Lucent Enterprise OS6860E-24 8.9.221.R03 GA, December 07, 2023.,
//!   Name:         core-sw1,
//! Flash Space:
//!     Primary CMM:
//!       Available (bytes):  1111744512,
//!
//!  Rx              :
//!   Bytes Received  :            123456, Unicast Frames  :       123,
//! ```

use super::{Entry, Record, Sections};

/// Which counter accumulator is collecting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Counter {
    Rx,
    Tx,
}

impl Counter {
    fn from_banner(line: &str) -> Option<Self> {
        match line.trim_end_matches(':').trim() {
            "Rx" => Some(Counter::Rx),
            "Tx" => Some(Counter::Tx),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Counter::Rx => "Rx",
            Counter::Tx => "Tx",
        }
    }
}

/// Currently open block and the indentation of the line that opened it.
struct Open<T> {
    target: T,
    indent: usize,
}

/// Parse sectioned key/value output.
///
/// - A line ending in `:` with no other `:` opens a named section at its
///   indentation. A header indented under another open header is named
///   `"<outer> / <inner>"`, and an outer header left without fields of its
///   own is dropped.
/// - A `Key: Value` line indented deeper than the open section belongs to
///   it. Any other `Key: Value` line closes the sections it is not indented
///   under, and with none left open it is a top-level field.
/// - `Rx` and `Tx` banner lines collect the deeper-indented lines below
///   them into `"Rx"`/`"Tx"` sections, leaving the open section untouched.
/// - A leading key whose value is itself comma-joined `sub-key: value`
///   fragments yields `"<outer> / <sub>"` entries. Without a leading key,
///   several `key: value` fragments on one line are each stored as is.
/// - Trailing commas are stripped, blank lines skipped.
pub fn parse_sections(output: &str) -> Sections {
    let mut sections = Sections::new();
    let mut open: Vec<Open<String>> = Vec::new();
    let mut counter: Option<Open<Counter>> = None;

    for raw in output.lines() {
        if raw.trim().is_empty() {
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        let line = raw.trim().trim_end_matches(',').trim_end();

        if counter.as_ref().is_some_and(|c| indent <= c.indent) {
            counter = None;
        }

        if let Some(which) = Counter::from_banner(line) {
            section_mut(&mut sections, which.name());
            counter = Some(Open {
                target: which,
                indent,
            });
            continue;
        }

        if let Some(name) = section_header(line) {
            close_to(&mut open, indent);
            let name = match open.last() {
                Some(parent) => {
                    if sections
                        .get(&parent.target)
                        .is_some_and(|e| e.as_section().is_some_and(Record::is_empty))
                    {
                        sections.shift_remove(&parent.target);
                    }
                    format!("{} / {}", parent.target, name)
                }
                None => name.to_string(),
            };
            section_mut(&mut sections, &name);
            open.push(Open {
                target: name,
                indent,
            });
            continue;
        }

        let fragments = split_fragments(line);
        if fragments.is_empty() {
            continue;
        }

        if let Some(c) = &counter {
            section_mut(&mut sections, c.target.name()).extend(fragments);
            continue;
        }

        close_to(&mut open, indent);
        match open.last() {
            Some(o) => section_mut(&mut sections, &o.target).extend(fragments),
            None => {
                for (key, value) in fragments {
                    sections.insert(key, Entry::Value(value));
                }
            }
        }
    }

    sections
}

/// Close every open section the line at `indent` is not indented under.
fn close_to(open: &mut Vec<Open<String>>, indent: usize) {
    while open.last().is_some_and(|o| indent <= o.indent) {
        open.pop();
    }
}

/// Get the named section, creating it (or replacing a plain value) if needed.
fn section_mut<'a>(sections: &'a mut Sections, name: &str) -> &'a mut Record {
    let entry = sections
        .entry(name.to_string())
        .or_insert_with(|| Entry::Section(Record::new()));
    if let Entry::Value(_) = entry {
        *entry = Entry::Section(Record::new());
    }
    match entry {
        Entry::Section(record) => record,
        Entry::Value(_) => unreachable!("entry was just made a section"),
    }
}

/// A header is a line ending in `:` with no other `:` on it.
fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_suffix(':')?;
    if name.contains(':') {
        return None;
    }
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

/// Byte offset of the first `:` that separates a key from its value.
///
/// The separator must be followed by whitespace or end the text, which
/// keeps URLs, MAC addresses and clock times inside values intact.
fn separator(text: &str) -> Option<usize> {
    text.char_indices()
        .filter(|&(_, c)| c == ':')
        .map(|(i, _)| i)
        .find(|&i| {
            text[i + 1..]
                .chars()
                .next()
                .is_none_or(|c| c.is_whitespace())
        })
}

/// Split a line into `(key, value)` pairs.
///
/// `Outer: Sub: 1, Other: 2` gives `Outer / Sub` and `Outer / Other`.
/// Anything else is split on commas as is.
fn split_fragments(line: &str) -> Vec<(String, String)> {
    if let Some(nested) = nested_fragments(line) {
        return nested;
    }
    comma_fragments(line)
}

/// Fragments under a leading key, prefixed with that key.
///
/// Applies only when the text after the leading key starts with a
/// `sub-key: value` fragment that has both a key and a value.
fn nested_fragments(line: &str) -> Option<Vec<(String, String)>> {
    let sep = separator(line)?;
    let outer = line[..sep].trim();
    let rest = &line[sep + 1..];
    if outer.is_empty() {
        return None;
    }

    let first = rest.split(',').next()?;
    let inner = separator(first)?;
    if first[..inner].trim().is_empty() || first[inner + 1..].trim().is_empty() {
        return None;
    }

    Some(
        comma_fragments(rest)
            .into_iter()
            .map(|(sub, value)| (format!("{} / {}", outer, sub), value))
            .collect(),
    )
}

/// Split text into `(key, value)` pairs on commas.
///
/// A comma piece without its own separator continues the previous value,
/// so values that contain commas survive.
fn comma_fragments(text: &str) -> Vec<(String, String)> {
    let mut fragments: Vec<(String, String)> = Vec::new();

    for piece in text.split(',') {
        let sep = separator(piece).filter(|&i| !piece[..i].trim().is_empty());
        match (sep, fragments.last_mut()) {
            (Some(i), _) => {
                fragments.push((piece[..i].trim().to_string(), piece[i + 1..].to_string()));
            }
            (None, Some((_, value))) => {
                value.push(',');
                value.push_str(piece);
            }
            (None, None) => {}
        }
    }

    fragments
        .into_iter()
        .map(|(key, value)| (key, value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_then_top_level() {
        let parsed = parse_sections("Flash Space:\n    Used: 10MB\nName: x\n");

        let flash = parsed["Flash Space"].as_section().unwrap();
        assert_eq!(flash["Used"], "10MB");
        assert_eq!(parsed["Name"].as_value(), Some("x"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_top_level_line_closes_section() {
        let parsed = parse_sections("Flash Space:\n  Used: 10MB\nName: x\n  Free: 1MB\n");

        let flash = parsed["Flash Space"].as_section().unwrap();
        assert_eq!(flash.len(), 1);
        // The section was closed by "Name", so "Free" is top-level too
        assert_eq!(parsed["Free"].as_value(), Some("1MB"));
    }

    #[test]
    fn test_show_system() {
        let output = "\
System:
  Description:  Alcatel-Lucent Enterprise OS6860E-24 8.9.221.R03 GA, December 07, 2023.,
  Object ID:    1.3.6.1.4.1.6486.801.1.1.2.1.11.1.7,
  Up Time:      1 days 2 hours 3 minutes and 4 seconds,
  Contact:      Alcatel-Lucent Enterprise, https://www.al-enterprise.com,
  Name:         core-sw1,
  Location:     Unknown,
  Services:     78,
  Date & Time:  MON JUL 01 2024 10:00:00 (UTC)
Flash Space:
    Primary CMM:
      Available (bytes):  1111744512,
      Comments         :  None
";
        let parsed = parse_sections(output);
        let system = parsed["System"].as_section().unwrap();

        assert_eq!(
            system["Description"],
            "Alcatel-Lucent Enterprise OS6860E-24 8.9.221.R03 GA, December 07, 2023."
        );
        assert_eq!(
            system["Contact"],
            "Alcatel-Lucent Enterprise, https://www.al-enterprise.com"
        );
        assert_eq!(system["Name"], "core-sw1");
        assert_eq!(system["Date & Time"], "MON JUL 01 2024 10:00:00 (UTC)");

        let cmm = parsed["Flash Space / Primary CMM"].as_section().unwrap();
        assert_eq!(cmm["Available (bytes)"], "1111744512");
        assert_eq!(cmm["Comments"], "None");
        assert!(!parsed.contains_key("Flash Space"));
        assert!(!parsed.contains_key("Primary CMM"));
    }

    #[test]
    fn test_interface_detail_with_counters() {
        let output = "\
Chassis/Slot/Port 1/1/1  :
 Operational Status     : up,
 MAC address            : 2c:fa:a2:1c:fe:41,
 BandWidth (Megabits)   :     1000,             Duplex           : Full,
 Rx              :
  Bytes Received  :            123456, Unicast Frames  :                    123,
  Broadcast Frames:                 0, M-cast Frames   :                    456,
 Tx              :
  Bytes Xmitted   :            654321, Unicast Frames  :                    321,
 Long Frame Size(Bytes) : 9216,
";
        let parsed = parse_sections(output);

        let port = parsed["Chassis/Slot/Port 1/1/1"].as_section().unwrap();
        assert_eq!(port["Operational Status"], "up");
        assert_eq!(port["MAC address"], "2c:fa:a2:1c:fe:41");
        assert_eq!(port["BandWidth (Megabits)"], "1000");
        assert_eq!(port["Duplex"], "Full");
        assert_eq!(port["Long Frame Size(Bytes)"], "9216");

        let rx = parsed["Rx"].as_section().unwrap();
        assert_eq!(rx["Bytes Received"], "123456");
        assert_eq!(rx["Unicast Frames"], "123");
        assert_eq!(rx["M-cast Frames"], "456");
        assert_eq!(rx.len(), 4);

        let tx = parsed["Tx"].as_section().unwrap();
        assert_eq!(tx["Bytes Xmitted"], "654321");
        assert_eq!(tx["Unicast Frames"], "321");
        assert!(!tx.contains_key("Long Frame Size(Bytes)"));
    }

    #[test]
    fn test_split_fragments() {
        let fragments = split_fragments("A : 1, B : 2");
        assert_eq!(
            fragments,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );

        // No separator at all
        assert!(split_fragments("just text").is_empty());
    }

    #[test]
    fn test_fragments_under_leading_key() {
        let parsed = parse_sections("Flash Space: Used: 10MB, Free: 2MB\n");

        assert_eq!(parsed["Flash Space / Used"].as_value(), Some("10MB"));
        assert_eq!(parsed["Flash Space / Free"].as_value(), Some("2MB"));
        assert!(!parsed.contains_key("Flash Space"));
        assert!(!parsed.contains_key("Free"));
    }

    #[test]
    fn test_fragments_under_leading_key_in_section() {
        let output = "\
System:
  Name: core-sw1,
  Memory: Total: 2048MB, Free: 512MB,
";
        let parsed = parse_sections(output);
        let system = parsed["System"].as_section().unwrap();

        assert_eq!(system["Name"], "core-sw1");
        assert_eq!(system["Memory / Total"], "2048MB");
        assert_eq!(system["Memory / Free"], "512MB");
        assert_eq!(system.len(), 3);
    }

    #[test]
    fn test_leading_key_with_plain_value_is_not_nested() {
        // Times and URLs have no separator, and an empty sub-value does not count
        assert_eq!(
            split_fragments("Date & Time:  10:00:00, Site: https://x"),
            vec![
                ("Date & Time".to_string(), "10:00:00".to_string()),
                ("Site".to_string(), "https://x".to_string())
            ]
        );
        assert_eq!(
            split_fragments("Chassis/Slot/Port: 1/1/2  :"),
            vec![("Chassis/Slot/Port".to_string(), "1/1/2  :".to_string())]
        );
    }

    #[test]
    fn test_nested_headers() {
        let output = "\
Flash Space:
    Primary CMM:
      Available (bytes):  100,
    Secondary CMM:
      Available (bytes):  200,
  Total: 300
Name: x
";
        let parsed = parse_sections(output);

        assert_eq!(
            parsed["Flash Space / Primary CMM"].as_section().unwrap()["Available (bytes)"],
            "100"
        );
        assert_eq!(
            parsed["Flash Space / Secondary CMM"].as_section().unwrap()["Available (bytes)"],
            "200"
        );
        // Back under the outer header once the inner ones close
        assert_eq!(parsed["Flash Space"].as_section().unwrap()["Total"], "300");
        assert_eq!(parsed["Name"].as_value(), Some("x"));
    }

    #[test]
    fn test_section_header_detection() {
        assert_eq!(section_header("Flash Space:"), Some("Flash Space"));
        assert_eq!(section_header("Name: x"), None);
        assert_eq!(section_header("Time 10:00:"), None);
        assert_eq!(section_header(":"), None);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("\n  \n").is_empty());
    }
}
