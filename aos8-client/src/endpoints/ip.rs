//! IP interfaces.
//!
//! Reads go through the MIB surface (`alaIpInterfaceTable`) or the CLI
//! (`show ip interface`). Creating an interface takes two writes: a named
//! row in `alaIpItfConfigTable`, then the addressing row in
//! `alaIpInterfaceTable` keyed by the ifIndex the switch assigned.

use std::net::Ipv4Addr;

use serde_json::Value;

use crate::client::response::{ApiResult, ip_interfaces};
use crate::command::mib::DEFAULT_LIMIT;
use crate::command::{CliCommand, Encapsulation, IpDeviceType, MibQuery, MibWrite, Toggle, VlanId};
use crate::error::{Result, ValidationError};
use crate::transport::{DeviceRequest, Refresh, Transport};

const INTERFACE_TABLE: &str = "alaIpInterfaceTable";
const CONFIG_TABLE: &str = "alaIpItfConfigTable";

/// `alaIpItfConfigRowStatus` values.
const ROW_CREATE_AND_GO: u8 = 4;
const ROW_DESTROY: u8 = 6;

const INTERFACE_OBJECTS: [&str; 33] = [
    "ifIndex",
    "alaIpInterfaceName",
    "alaIpInterfaceAddress",
    "alaIpInterfaceMask",
    "alaIpInterfaceBcastAddr",
    "alaIpInterfaceDeviceType",
    "alaIpInterfaceTag",
    "alaIpInterfacePortIfindex",
    "alaIpInterfaceEncap",
    "alaIpInterfaceVlanID",
    "alaIpInterfaceIpForward",
    "alaIpInterfaceAdminState",
    "alaIpInterfaceOperState",
    "alaIpInterfaceOperReason",
    "alaIpInterfaceRouterMac",
    "alaIpInterfaceDhcpStatus",
    "alaIpInterfaceLocalProxyArp",
    "alaIpInterfaceDhcpOption60String",
    "alaIpInterfaceMtu",
    "alaIpInterfaceArpNiSlot",
    "alaIpInterfaceArpNiChassis",
    "alaIpInterfaceArpCount",
    "alaIpInterfacePrimCfg",
    "alaIpInterfacePrimAct",
    "alaIpInterfaceVipAddress",
    "alaIpInterfaceTunnelSrcAddressType",
    "alaIpInterfaceTunnelSrc",
    "alaIpInterfaceTunnelDstAddressType",
    "alaIpInterfaceTunnelDst",
    "alaIpInterfaceDhcpVsiAcceptFilterString",
    "alaIpInterfaceDhcpIpRelease",
    "alaIpInterfaceDhcpIpRenew",
    "alaIpInterfaceDhcpServerPreference",
];

/// Settings for a new IP interface.
///
/// # Example
///
/// ```rust
/// use std::net::Ipv4Addr;
/// use aos8_client::endpoints::IpInterfaceSpec;
///
/// let spec = IpInterfaceSpec::new("int-999")
///     .address(Ipv4Addr::new(10, 9, 9, 1))
///     .mask(Ipv4Addr::new(255, 255, 255, 0))
///     .vlan(999);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpInterfaceSpec {
    pub name: String,
    pub address: Option<Ipv4Addr>,
    pub mask: Option<Ipv4Addr>,
    pub device: IpDeviceType,
    pub vlan: Option<u16>,
    pub local_proxy_arp: bool,
    pub encapsulation: Encapsulation,
    pub primary: bool,
}

impl IpInterfaceSpec {
    /// A VLAN interface with e2 encapsulation and no address.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            mask: None,
            device: IpDeviceType::Vlan,
            vlan: None,
            local_proxy_arp: false,
            encapsulation: Encapsulation::E2,
            primary: false,
        }
    }

    pub fn address(mut self, address: Ipv4Addr) -> Self {
        self.address = Some(address);
        self
    }

    pub fn mask(mut self, mask: Ipv4Addr) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn device(mut self, device: IpDeviceType) -> Self {
        self.device = device;
        self
    }

    pub fn vlan(mut self, vlan: u16) -> Self {
        self.vlan = Some(vlan);
        self
    }

    pub fn local_proxy_arp(mut self, enabled: bool) -> Self {
        self.local_proxy_arp = enabled;
        self
    }

    pub fn encapsulation(mut self, encapsulation: Encapsulation) -> Self {
        self.encapsulation = encapsulation;
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
}

/// Changes to an existing IP interface. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpInterfaceEdit {
    pub address: Option<Ipv4Addr>,
    pub vip_address: Option<Ipv4Addr>,
    pub mask: Option<Ipv4Addr>,
    pub admin_state: Option<Toggle>,
    pub vlan: Option<u16>,
    pub forward: Option<bool>,
    pub local_proxy_arp: Option<bool>,
    pub encapsulation: Option<Encapsulation>,
    pub primary: Option<bool>,
}

impl IpInterfaceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: Ipv4Addr) -> Self {
        self.address = Some(address);
        self
    }

    pub fn vip_address(mut self, address: Ipv4Addr) -> Self {
        self.vip_address = Some(address);
        self
    }

    pub fn mask(mut self, mask: Ipv4Addr) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn admin_state(mut self, state: Toggle) -> Self {
        self.admin_state = Some(state);
        self
    }

    pub fn vlan(mut self, vlan: u16) -> Self {
        self.vlan = Some(vlan);
        self
    }

    pub fn forward(mut self, enabled: bool) -> Self {
        self.forward = Some(enabled);
        self
    }

    pub fn local_proxy_arp(mut self, enabled: bool) -> Self {
        self.local_proxy_arp = Some(enabled);
        self
    }

    pub fn encapsulation(mut self, encapsulation: Encapsulation) -> Self {
        self.encapsulation = Some(encapsulation);
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = Some(primary);
        self
    }

    /// Check if no change is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Append the set fields to a write.
    fn apply(&self, write: MibWrite, vlan: Option<VlanId>) -> MibWrite {
        write
            .set_opt("alaIpInterfaceAddress", self.address)
            .set_opt("alaIpInterfaceVipAddress", self.vip_address)
            .set_opt("alaIpInterfaceMask", self.mask)
            .set_opt(
                "alaIpInterfaceAdminState",
                self.admin_state.map(|s| s.mib_value()),
            )
            .set_opt("alaIpInterfaceVlanID", vlan)
            .set_opt(
                "alaIpInterfaceIpForward",
                self.forward.map(|f| Toggle::from(f).mib_value()),
            )
            .set_opt(
                "alaIpInterfaceLocalProxyArp",
                self.local_proxy_arp.map(|p| Toggle::from(p).mib_value()),
            )
            .set_opt(
                "alaIpInterfaceEncap",
                self.encapsulation.map(|e| e.mib_value()),
            )
            .set_opt("alaIpInterfacePrimCfg", self.primary.map(u8::from))
    }
}

/// IP interface listing and configuration.
pub struct IpInterfaceEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> IpInterfaceEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    /// List IP interfaces from the MIB. Rows come back in `data.rows`.
    pub async fn list(&mut self, limit: u32) -> Result<ApiResult> {
        let request = list_query(limit)?;
        self.transport.request(request).await
    }

    /// List IP interfaces from `show ip interface`.
    pub async fn show(&mut self) -> Result<ApiResult> {
        let request = CliCommand::new("show").arg("ip").arg("interface").into_request();
        self.transport
            .fetch(Refresh::normalized(request, ip_interfaces))
            .await
    }

    /// Create the named row for a new interface.
    ///
    /// On success the result is the refreshed interface list.
    pub async fn create_name_interface(&mut self, name: &str) -> Result<ApiResult> {
        let write = config_row(name, ROW_CREATE_AND_GO)?;
        self.transport
            .run_then_refresh(write, list_query(DEFAULT_LIMIT)?.into())
            .await
    }

    /// Create and address a new interface.
    ///
    /// Fails without a second write if the switch rejects the name, or if
    /// the new name does not show up in the refreshed list.
    pub async fn create(&mut self, spec: IpInterfaceSpec) -> Result<ApiResult> {
        let vlan = spec.vlan.map(VlanId::new).transpose()?;

        let named = self.create_name_interface(&spec.name).await?;
        if !named.success {
            return Ok(named);
        }
        let Some(if_index) = find_if_index(&named, &spec.name) else {
            return Ok(not_found(&spec.name));
        };

        let write = MibWrite::new(INTERFACE_TABLE)
            .set("ifIndex", if_index)
            .set_opt("alaIpInterfaceAddress", spec.address)
            .set_opt("alaIpInterfaceMask", spec.mask)
            .set("alaIpInterfaceDeviceType", spec.device.mib_value())
            .set("alaIpInterfacePortIfindex", 0)
            .set("alaIpInterfaceEncap", spec.encapsulation.mib_value())
            .set("alaIpInterfaceIpForward", Toggle::Enable.mib_value())
            .set("alaIpInterfacePrimCfg", u8::from(spec.primary))
            .set(
                "alaIpInterfaceLocalProxyArp",
                Toggle::from(spec.local_proxy_arp).mib_value(),
            )
            .set_opt("alaIpInterfaceVlanID", vlan)
            .into_request();

        self.transport
            .run_then_refresh(write, list_query(DEFAULT_LIMIT)?.into())
            .await
    }

    /// Change settings of an existing interface.
    pub async fn edit(&mut self, name: &str, edit: IpInterfaceEdit) -> Result<ApiResult> {
        validate_name(name)?;
        if edit.is_empty() {
            return Err(ValidationError::Empty { field: "edit" }.into());
        }
        let vlan = edit.vlan.map(VlanId::new).transpose()?;

        let listed = self.list(DEFAULT_LIMIT).await?;
        if !listed.success {
            return Ok(listed);
        }
        let Some(if_index) = find_if_index(&listed, name) else {
            return Ok(not_found(name));
        };

        // ifIndex has to lead the form
        let write = edit
            .apply(MibWrite::new(INTERFACE_TABLE).set("ifIndex", if_index), vlan)
            .into_request();

        self.transport
            .run_then_refresh(write, list_query(DEFAULT_LIMIT)?.into())
            .await
    }

    /// Delete an interface by name.
    pub async fn delete(&mut self, name: &str) -> Result<ApiResult> {
        let write = config_row(name, ROW_DESTROY)?;
        self.transport
            .run_then_refresh(write, list_query(DEFAULT_LIMIT)?.into())
            .await
    }
}

fn list_query(limit: u32) -> Result<DeviceRequest> {
    Ok(MibQuery::new(INTERFACE_TABLE)
        .objects(INTERFACE_OBJECTS)
        .function("slotPort_ifindex|ifindex_slotPort|chassisSlot_vcIfIndex")
        .object(
            "alaIpInterfacePortIfindex|alaIpInterfaceArpNiSlot,0,alaIpInterfaceArpNiChassis|ifindex_slotPort_1",
        )
        .limit(limit)
        .ignore_error(true)
        .into_request()?)
}

fn config_row(name: &str, row_status: u8) -> Result<DeviceRequest> {
    validate_name(name)?;
    Ok(MibWrite::new(CONFIG_TABLE)
        .tag("T1")
        .set("alaIpItfConfigName", name)
        .set("alaIpItfConfigRowStatus", row_status)
        .into_request())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty { field: "name" }.into());
    }
    Ok(())
}

/// Look up the ifIndex of a named interface in a list result.
fn find_if_index(listed: &ApiResult, name: &str) -> Option<String> {
    let rows = listed.data.as_ref()?.get("rows")?.as_object()?;
    let row = rows
        .values()
        .find(|row| row.get("alaIpInterfaceName").and_then(Value::as_str) == Some(name))?;
    match row.get("ifIndex")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn not_found(name: &str) -> ApiResult {
    ApiResult::failed(0, format!("IP interface '{}' not found", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::client::response::Output;
    use crate::endpoints::testing::FakeTransport;
    use serde_json::json;

    fn listing() -> ApiResult {
        ApiResult::new(200).with_data(json!({
            "rows": {
                "13600001": {"ifIndex": "13600001", "alaIpInterfaceName": "Loopback"},
                "13600002": {"ifIndex": 13600002, "alaIpInterfaceName": "int-999"},
            }
        }))
    }

    #[tokio::test]
    async fn test_list_query() {
        let mut transport = FakeTransport::new();
        IpInterfaceEndpoint::new(&mut transport)
            .list(50)
            .await
            .unwrap();

        let request = &transport.requests[0];
        assert_eq!(request.options.query_value("urn"), Some(INTERFACE_TABLE));
        assert_eq!(request.options.query_value("mibObject0"), Some("ifIndex"));
        assert_eq!(
            request.options.query_value("mibObject32"),
            Some("alaIpInterfaceDhcpServerPreference")
        );
        assert_eq!(request.options.query_value("limit"), Some("50"));
        assert_eq!(request.options.query_value("ignoreError"), Some("true"));
    }

    #[tokio::test]
    async fn test_show() {
        let text = "\
Total 1 interfaces
 Flags (D=Directly-bound)

            Name                 IP Address      Subnet Mask     Status Forward  Device
--------------------------------+---------------+---------------+------+-------+---------
Loopback                         127.0.0.1       255.255.255.255     UP      NO    Loopback
";
        let mut transport = FakeTransport::new()
            .respond(ApiResult::new(200).with_output(Output::Text(text.to_string())));

        let result = IpInterfaceEndpoint::new(&mut transport)
            .show()
            .await
            .unwrap();

        assert_eq!(transport.cmd(0), Some("show ip interface"));
        let Some(Output::Table(rows)) = result.output else {
            panic!("expected table output");
        };
        assert_eq!(rows[0]["name"], "Loopback");
        assert_eq!(rows[0]["ip_address"], "127.0.0.1");
    }

    #[tokio::test]
    async fn test_create() {
        let mut transport = FakeTransport::new()
            .respond(ApiResult::new(200))
            .respond(listing());

        let spec = IpInterfaceSpec::new("int-999")
            .address(Ipv4Addr::new(10, 9, 9, 1))
            .mask(Ipv4Addr::new(255, 255, 255, 0))
            .vlan(999);
        IpInterfaceEndpoint::new(&mut transport)
            .create(spec)
            .await
            .unwrap();

        assert_eq!(transport.requests.len(), 4);

        let name_row = &transport.requests[0];
        assert_eq!(name_row.options.query_value("urn"), Some(CONFIG_TABLE));
        assert_eq!(
            name_row.options.form_value("mibObject0-T1"),
            Some("alaIpItfConfigName:int-999")
        );
        assert_eq!(
            name_row.options.form_value("mibObject1-T1"),
            Some("alaIpItfConfigRowStatus:4")
        );

        let write = &transport.requests[2];
        assert_eq!(write.method, reqwest::Method::POST);
        assert_eq!(write.options.query_value("urn"), Some(INTERFACE_TABLE));
        assert_eq!(write.options.form_value("mibObject0"), Some("ifIndex:13600002"));
        assert_eq!(
            write.options.form_value("mibObject1"),
            Some("alaIpInterfaceAddress:10.9.9.1")
        );
        assert!(
            write
                .options
                .form
                .iter()
                .any(|(_, v)| v == "alaIpInterfaceVlanID:999")
        );
        assert_eq!(transport.requests[3].options.query_value("urn"), Some(INTERFACE_TABLE));
    }

    #[tokio::test]
    async fn test_create_missing_after_refresh() {
        let mut transport = FakeTransport::new()
            .respond(ApiResult::new(200))
            .respond(ApiResult::new(200).with_data(json!({"rows": {}})));

        let result = IpInterfaceEndpoint::new(&mut transport)
            .create(IpInterfaceSpec::new("int-999"))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(transport.requests.len(), 2);
    }

    #[tokio::test]
    async fn test_create_name_rejected() {
        let mut transport =
            FakeTransport::new().respond(ApiResult::failed(400, "ERROR: name in use"));

        let result = IpInterfaceEndpoint::new(&mut transport)
            .create(IpInterfaceSpec::new("int-999"))
            .await
            .unwrap();

        assert_eq!(result.diag, 400);
        assert_eq!(transport.requests.len(), 1);
    }

    #[tokio::test]
    async fn test_edit() {
        let mut transport = FakeTransport::new().respond(listing());

        let edit = IpInterfaceEdit::new()
            .admin_state(Toggle::Disable)
            .forward(false);
        IpInterfaceEndpoint::new(&mut transport)
            .edit("int-999", edit)
            .await
            .unwrap();

        assert_eq!(transport.requests.len(), 3);
        let write = &transport.requests[1];
        assert_eq!(write.options.form_value("mibObject0"), Some("ifIndex:13600002"));
        assert_eq!(
            write.options.form_value("mibObject1"),
            Some("alaIpInterfaceAdminState:2")
        );
        assert_eq!(
            write.options.form_value("mibObject2"),
            Some("alaIpInterfaceIpForward:2")
        );
    }

    #[tokio::test]
    async fn test_edit_validation() {
        let mut transport = FakeTransport::new();
        let mut ip = IpInterfaceEndpoint::new(&mut transport);

        assert!(matches!(
            ip.edit("int-999", IpInterfaceEdit::new()).await,
            Err(Error::Validation(ValidationError::Empty { field: "edit" }))
        ));
        assert!(matches!(
            ip.edit("int-999", IpInterfaceEdit::new().vlan(0)).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            ip.delete(" ").await,
            Err(Error::Validation(ValidationError::Empty { field: "name" }))
        ));
        drop(ip);
        assert!(transport.requests.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let mut transport = FakeTransport::new();
        IpInterfaceEndpoint::new(&mut transport)
            .delete("int-999")
            .await
            .unwrap();

        assert_eq!(
            transport.requests[0].options.form_value("mibObject1-T1"),
            Some("alaIpItfConfigRowStatus:6")
        );
        assert_eq!(transport.requests.len(), 2);
    }
}
