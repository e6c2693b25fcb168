//! Raw CLI commands.

use crate::client::response::ApiResult;
use crate::command::CliCommand;
use crate::error::Result;
use crate::transport::Transport;

/// Sends CLI commands and returns their text output untouched.
pub struct CliEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> CliEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// Send a command line as typed on the switch.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example(client: &mut aos8_client::AosClient) -> Result<(), aos8_client::Error> {
    /// let result = client.cli().send_command("show configuration snapshot").await?;
    /// if let Some(text) = result.text() {
    ///     println!("{}", text);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_command(&mut self, command: &str) -> Result<ApiResult> {
        let command = CliCommand::raw(command)?;
        self.send(command).await
    }

    /// Send a prebuilt command.
    pub async fn send(&mut self, command: CliCommand) -> Result<ApiResult> {
        self.transport.request(command.into_request()).await
    }
}
