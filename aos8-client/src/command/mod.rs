//! Typed command construction.
//!
//! CLI commands are assembled from tokens and sent as a single `cmd` query
//! parameter to `/cli/aos`. Form URL encoding turns the separating spaces
//! into `+`, so `show vlan 10 members` goes out as
//! `cmd=show+vlan+10+members`.

mod choice;
pub mod mib;
mod port;

pub use choice::{Encapsulation, InterfaceParameter, IpDeviceType, TagMode, Toggle, VlanId};
pub use mib::{MibQuery, MibWrite};
pub use port::{MAX_RANGE_PORTS, PortRange, expand_port_range};

use std::fmt;

use crate::error::ValidationError;
use crate::transport::{DeviceRequest, RequestOptions};

/// Path of the CLI surface.
pub const CLI_PATH: &str = "/cli/aos";

/// A CLI command built from tokens.
///
/// # Example
///
/// ```rust
/// use aos8_client::command::CliCommand;
///
/// let cmd = CliCommand::new("system")
///     .arg("name")
///     .quoted("name", "core sw1")
///     .unwrap();
/// assert_eq!(cmd.to_string(), r#"system name "core sw1""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliCommand {
    tokens: Vec<String>,
}

impl CliCommand {
    /// Start a command with its first keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            tokens: vec![keyword.into()],
        }
    }

    /// Take a complete command line as typed on the switch.
    pub fn raw(line: &str) -> Result<Self, ValidationError> {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(ValidationError::Empty { field: "command" });
        }
        Ok(Self { tokens })
    }

    /// Append a token.
    pub fn arg(mut self, token: impl fmt::Display) -> Self {
        self.tokens.push(token.to_string());
        self
    }

    /// Append a double-quoted free-text argument.
    ///
    /// The CLI has no escape for `"` inside a quoted argument, so values
    /// containing one are rejected.
    pub fn quoted(mut self, field: &'static str, value: &str) -> Result<Self, ValidationError> {
        if value.contains('"') {
            return Err(ValidationError::InvalidCharacter {
                field,
                character: '"',
            });
        }
        self.tokens.push(format!("\"{}\"", value));
        Ok(self)
    }

    /// The tokens making up this command.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Turn the command into a CLI-surface request.
    pub fn into_request(self) -> DeviceRequest {
        DeviceRequest::get(CLI_PATH).with_options(RequestOptions::new().query("cmd", self.to_string()))
    }
}

impl fmt::Display for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<CliCommand> for DeviceRequest {
    fn from(cmd: CliCommand) -> Self {
        cmd.into_request()
    }
}

/// An `interfaces port <scope> <parameter> <value>` command.
///
/// Every part is validated when it is constructed, so building the command
/// line cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCommand {
    pub scope: PortRange,
    pub parameter: InterfaceParameter,
    pub value: Toggle,
}

impl InterfaceCommand {
    pub fn new(scope: PortRange, parameter: InterfaceParameter, value: Toggle) -> Self {
        Self {
            scope,
            parameter,
            value,
        }
    }

    /// Validate string inputs into a command.
    pub fn parse(scope: &str, parameter: &str, value: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(scope.parse()?, parameter.parse()?, value.parse()?))
    }

    /// The CLI command.
    pub fn to_cli(&self) -> CliCommand {
        CliCommand::new("interfaces")
            .arg("port")
            .arg(&self.scope)
            .arg(self.parameter)
            .arg(self.value)
    }
}
