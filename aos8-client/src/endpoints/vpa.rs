//! VLAN port association (VPA).

use crate::client::response::{ApiResult, table};
use crate::command::{CliCommand, PortRange, TagMode, VlanId};
use crate::error::Result;
use crate::transport::{Refresh, Transport};

/// Port membership of VLANs, through the CLI surface.
///
/// Writes return the refreshed member list of the VLAN when they succeed.
pub struct VlanPortEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> VlanPortEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// List the member ports of a VLAN.
    pub async fn list(&mut self, vlan_id: u16) -> Result<ApiResult> {
        let vlan_id = VlanId::new(vlan_id)?;
        self.transport.fetch(members(vlan_id)).await
    }

    /// Add a port to a VLAN.
    pub async fn create(&mut self, port: &str, vlan_id: u16, mode: TagMode) -> Result<ApiResult> {
        self.assign(port, vlan_id, mode).await
    }

    /// Change the tagging mode of a member port.
    pub async fn edit(&mut self, port: &str, vlan_id: u16, mode: TagMode) -> Result<ApiResult> {
        self.assign(port, vlan_id, mode).await
    }

    /// Remove a port from a VLAN.
    pub async fn delete(&mut self, port: &str, vlan_id: u16) -> Result<ApiResult> {
        let port = PortRange::parse(port)?;
        let vlan_id = VlanId::new(vlan_id)?;
        let write = CliCommand::new("no")
            .arg("vlan")
            .arg(vlan_id)
            .arg("members")
            .arg("port")
            .arg(port)
            .into_request();
        self.transport
            .run_then_refresh(write, members(vlan_id))
            .await
    }

    async fn assign(&mut self, port: &str, vlan_id: u16, mode: TagMode) -> Result<ApiResult> {
        let port = PortRange::parse(port)?;
        let vlan_id = VlanId::new(vlan_id)?;
        let write = CliCommand::new("vlan")
            .arg(vlan_id)
            .arg("members")
            .arg("port")
            .arg(port)
            .arg(mode)
            .into_request();
        self.transport
            .run_then_refresh(write, members(vlan_id))
            .await
    }
}

fn members(vlan_id: VlanId) -> Refresh {
    let request = CliCommand::new("show")
        .arg("vlan")
        .arg(vlan_id)
        .arg("members")
        .into_request();
    Refresh::normalized(request, table)
}
