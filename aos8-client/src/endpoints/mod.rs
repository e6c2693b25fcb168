//! Per-resource endpoint handles.
//!
//! Each handle borrows the client's transport for as long as it lives,
//! formats requests for one resource and, where the device answers with CLI
//! text, applies the matching normalizer. Input is validated before any
//! request is sent.

mod chassis;
mod cli;
mod interface;
mod ip;
mod mvrp;
mod system;
mod vlan;
mod vpa;

pub use chassis::ChassisEndpoint;
pub use cli::CliEndpoint;
pub use interface::InterfaceEndpoint;
pub use ip::{IpInterfaceEdit, IpInterfaceEndpoint, IpInterfaceSpec};
pub use mvrp::MvrpEndpoint;
pub use system::SystemEndpoint;
pub use vlan::VlanEndpoint;
pub use vpa::VlanPortEndpoint;

#[cfg(test)]
pub(crate) mod testing {
    //! Recording transport for endpoint unit tests.

    use std::collections::VecDeque;

    use crate::client::response::{ApiResult, DIAG_OK};
    use crate::error::{Result, TransportError};
    use crate::transport::{DeviceRequest, Transport};

    /// Records every request and answers from a queue of canned results.
    ///
    /// Once the queue is empty every request succeeds with an empty result.
    #[derive(Debug, Default)]
    pub(crate) struct FakeTransport {
        pub requests: Vec<DeviceRequest>,
        responses: VecDeque<ApiResult>,
        closed: bool,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the result for the next unanswered request.
        pub fn respond(mut self, result: ApiResult) -> Self {
            self.responses.push_back(result);
            self
        }

        /// The `cmd` parameter of the nth request.
        pub fn cmd(&self, index: usize) -> Option<&str> {
            self.requests
                .get(index)
                .and_then(|r| r.options.query_value("cmd"))
        }
    }

    impl Transport for FakeTransport {
        async fn authenticate(&mut self) -> Result<()> {
            Ok(())
        }

        async fn request(&mut self, request: DeviceRequest) -> Result<ApiResult> {
            if self.closed {
                return Err(TransportError::Closed.into());
            }
            self.requests.push(request);
            Ok(self
                .responses
                .pop_front()
                .unwrap_or_else(|| ApiResult::new(DIAG_OK)))
        }

        async fn close(&mut self) -> Result<()> {
            self.closed = true;
            Ok(())
        }

        fn is_closed(&self) -> bool {
            self.closed
        }
    }
}
