//! VLANs through the MIB surface.

use crate::client::response::ApiResult;
use crate::command::{MibQuery, MibWrite, VlanId};
use crate::error::Result;
use crate::transport::Transport;

const VLAN_TABLE: &str = "vlanTable";

/// VLAN listing and creation.
pub struct VlanEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> VlanEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// List all VLANs. Rows come back in `data`.
    pub async fn list(&mut self) -> Result<ApiResult> {
        let request = MibQuery::new(VLAN_TABLE).into_request()?;
        self.transport.request(request).await
    }

    /// Create a VLAN with a description.
    pub async fn create(&mut self, vlan_id: u16, description: &str) -> Result<ApiResult> {
        let vlan_id = VlanId::new(vlan_id)?;
        let request = MibWrite::new(VLAN_TABLE)
            .set("vlanNumber", vlan_id)
            .set("vlanDescription", description)
            .into_request();
        self.transport.request(request).await
    }
}
