//! High-level client for an AOS8 switch.
//!
//! [`AosClient`] owns one transport (one session) and hands out endpoint
//! handles that borrow it. The borrow is mutable, so a client runs at most
//! one device call at a time.

mod builder;
pub mod response;

pub use builder::ClientBuilder;
pub use response::{ApiResult, ErrorDetail, Normalizer, Output};

use crate::endpoints::{
    ChassisEndpoint, CliEndpoint, InterfaceEndpoint, IpInterfaceEndpoint, MvrpEndpoint,
    SystemEndpoint, VlanEndpoint, VlanPortEndpoint,
};
use crate::error::Result;
use crate::transport::{DeviceRequest, HttpConfig, HttpTransport, Transport};

/// Client for one switch.
///
/// # Example
///
/// ```rust,no_run
/// use aos8_client::ClientBuilder;
///
/// # async fn example() -> Result<(), aos8_client::Error> {
/// let mut client = ClientBuilder::new("https://192.168.70.1")
///     .username("admin")
///     .password("switch")
///     .build()
///     .await?;
///
/// let result = client.interface().list().await?;
/// if result.success {
///     println!("{:?}", result.output);
/// } else {
///     println!("failed (diag={}): {:?}", result.diag, result.error);
/// }
///
/// client.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AosClient<T: Transport = HttpTransport> {
    transport: T,
}

impl AosClient<HttpTransport> {
    /// Connect and log in.
    pub async fn connect(config: HttpConfig) -> Result<Self> {
        Ok(Self::from_transport(HttpTransport::connect(config).await?))
    }
}

impl<T: Transport> AosClient<T> {
    /// Wrap an already authenticated transport.
    pub fn from_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Get a reference to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Execute an arbitrary device request.
    pub async fn request(&mut self, request: DeviceRequest) -> Result<ApiResult> {
        self.transport.request(request).await
    }

    /// Release the connection.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    /// Raw CLI commands.
    pub fn cli(&mut self) -> CliEndpoint<'_, T> {
        CliEndpoint::new(&mut self.transport)
    }

    /// VLANs (MIB surface).
    pub fn vlan(&mut self) -> VlanEndpoint<'_, T> {
        VlanEndpoint::new(&mut self.transport)
    }

    /// VLAN port membership.
    pub fn vpa(&mut self) -> VlanPortEndpoint<'_, T> {
        VlanPortEndpoint::new(&mut self.transport)
    }

    /// Physical interfaces.
    pub fn interface(&mut self) -> InterfaceEndpoint<'_, T> {
        InterfaceEndpoint::new(&mut self.transport)
    }

    /// IP interfaces.
    pub fn ip(&mut self) -> IpInterfaceEndpoint<'_, T> {
        IpInterfaceEndpoint::new(&mut self.transport)
    }

    /// System information and settings.
    pub fn system(&mut self) -> SystemEndpoint<'_, T> {
        SystemEndpoint::new(&mut self.transport)
    }

    /// Chassis inventory and environment.
    pub fn chassis(&mut self) -> ChassisEndpoint<'_, T> {
        ChassisEndpoint::new(&mut self.transport)
    }

    /// MVRP configuration.
    pub fn mvrp(&mut self) -> MvrpEndpoint<'_, T> {
        MvrpEndpoint::new(&mut self.transport)
    }
}
