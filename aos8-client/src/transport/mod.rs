//! HTTP transport layer wrapping reqwest.
//!
//! This module owns the authenticated session with the switch: login,
//! request execution, transparent re-authentication when the session
//! expires, and decoding of the device envelope into an
//! [`ApiResult`](crate::ApiResult).

pub mod config;
pub mod envelope;
mod http;
mod request;

pub use config::HttpConfig;
pub use envelope::decode_envelope;
pub use http::HttpTransport;
pub use request::{DeviceRequest, Refresh, RequestOptions};

use std::future::Future;

use crate::client::response::ApiResult;
use crate::error::Result;

/// Trait for device transports.
///
/// Endpoints are generic over this trait; [`HttpTransport`] is the real
/// implementation.
pub trait Transport: Send {
    /// Log in and establish a session.
    fn authenticate(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Execute one device call.
    ///
    /// Device-reported failures come back as `Ok` with `success == false`;
    /// only failures that leave no envelope to decode are `Err`.
    fn request(
        &mut self,
        request: DeviceRequest,
    ) -> impl Future<Output = Result<ApiResult>> + Send;

    /// Release the connection. Calling it again does nothing.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Check if `close()` has been called.
    fn is_closed(&self) -> bool;

    fn get(
        &mut self,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<ApiResult>> + Send {
        self.request(DeviceRequest::get(path).with_options(options))
    }

    fn post(
        &mut self,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<ApiResult>> + Send {
        self.request(DeviceRequest::post(path).with_options(options))
    }

    fn put(
        &mut self,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<ApiResult>> + Send {
        self.request(DeviceRequest::put(path).with_options(options))
    }

    fn delete(
        &mut self,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<ApiResult>> + Send {
        self.request(DeviceRequest::delete(path).with_options(options))
    }

    /// Execute a read and normalize its text output if it succeeded.
    fn fetch(&mut self, refresh: Refresh) -> impl Future<Output = Result<ApiResult>> + Send {
        async move {
            let Refresh {
                request,
                normalizer,
            } = refresh;
            let mut result = self.request(request).await?;
            if let Some(normalizer) = normalizer {
                if result.success {
                    result.normalize(normalizer);
                }
            }
            Ok(result)
        }
    }

    /// Execute a write, then the refresh read only if the write succeeded.
    ///
    /// A failed write is returned unchanged and the refresh is never sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use aos8_client::command::CliCommand;
    /// use aos8_client::transport::{Refresh, Transport};
    /// use aos8_client::client::response::table;
    ///
    /// # async fn example(transport: &mut impl Transport) -> Result<(), aos8_client::Error> {
    /// let write = CliCommand::raw("vlan 10 members port 1/1/1 untagged")?.into_request();
    /// let read = CliCommand::raw("show vlan 10 members")?.into_request();
    /// let result = transport
    ///     .run_then_refresh(write, Refresh::normalized(read, table))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    fn run_then_refresh(
        &mut self,
        write: DeviceRequest,
        refresh: Refresh,
    ) -> impl Future<Output = Result<ApiResult>> + Send {
        async move {
            let result = self.request(write).await?;
            if !result.success {
                return Ok(result);
            }
            self.fetch(refresh).await
        }
    }
}
