//! # aos8-client
//!
//! Async client for the REST management API of Alcatel-Lucent Enterprise
//! OmniSwitch devices running AOS8.
//!
//! The switch exposes two surfaces behind one session cookie: a CLI
//! surface that runs a command and answers with its text output, and a MIB
//! surface that reads and writes MIB table rows. Both answer with the same
//! JSON envelope, which this crate decodes into an [`ApiResult`].
//!
//! ## Features
//!
//! - Session login with transparent, single re-authentication on expiry
//! - Uniform decoding of every answer, including non-JSON ones
//! - Normalizers turning CLI text tables and key/value listings into records
//! - Validated command builders (port ranges, VLAN ids, closed choices)
//! - Endpoints for VLANs, VLAN ports, interfaces, IP interfaces, system,
//!   chassis and MVRP
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aos8_client::ClientBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aos8_client::Error> {
//!     let mut client = ClientBuilder::new("https://192.168.70.1")
//!         .username("admin")
//!         .password("switch")
//!         .build()
//!         .await?;
//!
//!     let result = client.system().info().await?;
//!     println!("{}", serde_json::to_string_pretty(&result).unwrap());
//!
//!     client.close().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod command;
pub mod endpoints;
pub mod error;
pub mod parse;
pub mod transport;

// Re-export main types for convenience
pub use client::{AosClient, ApiResult, ClientBuilder, ErrorDetail, Output};
pub use error::{Error, Result};
pub use transport::{DeviceRequest, HttpConfig, HttpTransport, Transport};
