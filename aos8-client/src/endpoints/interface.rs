//! Physical interfaces.

use crate::client::response::{ApiResult, Output, interface_status, sections};
use crate::command::{CliCommand, InterfaceCommand, InterfaceParameter, PortRange, Toggle};
use crate::error::{Result, ValidationError};
use crate::transport::{Refresh, Transport};

/// Interface status, detail and port settings.
pub struct InterfaceEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> InterfaceEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// List the status of every port (`show interfaces status`).
    pub async fn list(&mut self) -> Result<ApiResult> {
        let request = CliCommand::new("show")
            .arg("interfaces")
            .arg("status")
            .into_request();
        self.transport
            .fetch(Refresh::normalized(request, interface_status))
            .await
    }

    /// Get the detail of a single port as a sectioned document.
    pub async fn get(&mut self, port: &str) -> Result<ApiResult> {
        let port = PortRange::parse(port)?;
        if port.is_range() {
            return Err(ValidationError::InvalidPortRange {
                input: port.to_string(),
                reason: "expected a single port".to_string(),
            }
            .into());
        }
        self.transport.fetch(detail(port.as_str())).await
    }

    /// Change a setting on a port or port range.
    ///
    /// When the switch accepts the change, the detail of every affected port
    /// is fetched and the result's output becomes [`Output::Details`], one
    /// document per port in range order. Ports whose detail read fails are
    /// left out.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use aos8_client::command::{InterfaceParameter, Toggle};
    ///
    /// # async fn example(client: &mut aos8_client::AosClient) -> Result<(), aos8_client::Error> {
    /// let result = client
    ///     .interface()
    ///     .set("1/1/1-3", InterfaceParameter::AdminState, Toggle::Disable)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set(
        &mut self,
        port: &str,
        parameter: InterfaceParameter,
        value: Toggle,
    ) -> Result<ApiResult> {
        let scope = PortRange::parse(port)?;
        self.apply(InterfaceCommand::new(scope, parameter, value))
            .await
    }

    /// Run a validated interface command.
    pub async fn apply(&mut self, command: InterfaceCommand) -> Result<ApiResult> {
        let result = self
            .transport
            .request(command.to_cli().into_request())
            .await?;
        if !result.success {
            return Ok(result);
        }

        let mut details = Vec::with_capacity(command.scope.ports().len());
        for port in command.scope.ports() {
            let shown = self.transport.fetch(detail(port)).await?;
            if let (true, Some(Output::Sections(doc))) = (shown.success, shown.output) {
                details.push(doc);
            }
        }
        Ok(result.with_output(Output::Details(details)))
    }

    /// Administratively enable a port or range.
    pub async fn enable(&mut self, port: &str) -> Result<ApiResult> {
        self.set(port, InterfaceParameter::AdminState, Toggle::Enable)
            .await
    }

    /// Administratively disable a port or range.
    pub async fn disable(&mut self, port: &str) -> Result<ApiResult> {
        self.set(port, InterfaceParameter::AdminState, Toggle::Disable)
            .await
    }

    pub async fn autoneg_enable(&mut self, port: &str) -> Result<ApiResult> {
        self.set(port, InterfaceParameter::Autoneg, Toggle::Enable)
            .await
    }

    pub async fn autoneg_disable(&mut self, port: &str) -> Result<ApiResult> {
        self.set(port, InterfaceParameter::Autoneg, Toggle::Disable)
            .await
    }

    pub async fn epp_enable(&mut self, port: &str) -> Result<ApiResult> {
        self.set(port, InterfaceParameter::Epp, Toggle::Enable).await
    }

    pub async fn epp_disable(&mut self, port: &str) -> Result<ApiResult> {
        self.set(port, InterfaceParameter::Epp, Toggle::Disable).await
    }
}

fn detail(port: &str) -> Refresh {
    let request = CliCommand::new("show")
        .arg("interfaces")
        .arg("port")
        .arg(port)
        .into_request();
    Refresh::normalized(request, sections)
}
