//! MVRP configuration.

use crate::client::response::ApiResult;
use crate::command::MibQuery;
use crate::error::Result;
use crate::transport::Transport;

/// Global and per-port MVRP settings.
pub struct MvrpEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> MvrpEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// Global MVRP status and VLAN limit.
    pub async fn global(&mut self) -> Result<ApiResult> {
        let request = MibQuery::new("alcatelIND1MVRPMIBObjects")
            .objects(["alaMvrpGlobalStatus", "alaMvrpMaxVlanLimit"])
            .into_request()?;
        self.transport.request(request).await
    }

    /// Per-port MVRP configuration and timers.
    pub async fn port_config(&mut self, limit: u32) -> Result<ApiResult> {
        let request = MibQuery::new("alaMvrpPortConfigTable")
            .objects([
                "alaMvrpPortConfigIfIndex",
                "alaMvrpPortStatus",
                "alaMvrpPortConfigRegistrarMode",
                "alaMvrpPortConfigApplicantMode",
                "alaMvrpPortConfigJoinTimer",
                "alaMvrpPortConfigLeaveTimer",
                "alaMvrpPortConfigLeaveAllTimer",
                "alaMvrpPortConfigPeriodicTimer",
                "alaMvrpPortConfigPeriodicTransmissionStatus",
            ])
            .function("slotPort_ifindex")
            .object("alaMvrpPortConfigIfIndex")
            .limit(limit)
            .ignore_error(true)
            .into_request()?;
        self.transport.request(request).await
    }
}
