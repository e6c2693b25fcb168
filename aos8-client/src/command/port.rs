//! Port identifiers and port ranges.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Most ports a single range may cover. No AOS8 slot comes close.
pub const MAX_RANGE_PORTS: u32 = 256;

/// A single port (`"1/1/1"`) or a range sharing a prefix (`"1/1/1-3"`).
///
/// Parsing validates the value once; the original text is kept for command
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRange {
    text: String,
    ports: Vec<String>,
}

impl PortRange {
    /// Parse and validate a port or port range.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let ports = expand_port_range(input)?;
        Ok(Self {
            text: input.trim().to_string(),
            ports,
        })
    }

    /// The port or range as the CLI expects it.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Every individual port covered, in order.
    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    /// Check if this covers more than one port.
    pub fn is_range(&self) -> bool {
        self.ports.len() > 1
    }
}

impl FromStr for PortRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Expand a port or hyphenated port range into individual ports.
///
/// The prefix up to the last `/` is held fixed and the integer span after
/// it is enumerated inclusively:
///
/// ```rust
/// use aos8_client::command::expand_port_range;
///
/// assert_eq!(
///     expand_port_range("1/1/1-3").unwrap(),
///     vec!["1/1/1", "1/1/2", "1/1/3"]
/// );
/// assert_eq!(expand_port_range("1/1/5").unwrap(), vec!["1/1/5"]);
/// assert!(expand_port_range("1/1/5-3").is_err());
/// ```
pub fn expand_port_range(input: &str) -> Result<Vec<String>, ValidationError> {
    let input = input.trim();
    let invalid = |reason: &str| ValidationError::InvalidPortRange {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if input.is_empty() {
        return Err(invalid("empty port"));
    }
    if input.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }

    if !input.contains('-') {
        return Ok(vec![input.to_string()]);
    }

    let (prefix, span) = input
        .rsplit_once('/')
        .ok_or_else(|| invalid("range needs a slot prefix such as '1/1/'"))?;
    let (start, end) = span
        .split_once('-')
        .ok_or_else(|| invalid("range bounds must follow the last '/'"))?;

    let start: u32 = start
        .parse()
        .map_err(|_| invalid("range start is not a number"))?;
    let end: u32 = end
        .parse()
        .map_err(|_| invalid("range end is not a number"))?;

    if start > end {
        return Err(invalid("range start is greater than range end"));
    }
    if end - start >= MAX_RANGE_PORTS {
        return Err(invalid(&format!(
            "range covers more than {} ports",
            MAX_RANGE_PORTS
        )));
    }

    Ok((start..=end).map(|i| format!("{}/{}", prefix, i)).collect())
}
