//! The transport boundary: executing request descriptions.

mod http;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::GraphError;
use crate::requests::RequestInformation;
use crate::types::GraphBaseUrl;

pub use http::{HttpAdapter, HttpAdapterBuilder};

/// Executes [RequestInformation] against a Graph deployment.
///
/// The adapter is the only shared object in this crate: it owns the
/// connection pool and default headers, and outlives every request builder
/// holding a reference to it. Builders are free to be used from many tasks
/// concurrently; any coordination lives behind this trait.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    /// Base URL every URL template is anchored to via `{+baseurl}`.
    fn base_url(&self) -> &GraphBaseUrl;

    /// Execute a request expecting an optional JSON body. A successful
    /// response without content (e.g. `204 No Content`) yields `None`.
    async fn send(&self, request: RequestInformation) -> Result<Option<Bytes>, GraphError>;

    /// Execute a request expecting no response content.
    async fn send_no_content(&self, request: RequestInformation) -> Result<(), GraphError>;

    /// Execute a request expecting a primitive `text/plain` response,
    /// e.g. the integer body of a `$count` endpoint.
    async fn send_primitive(&self, request: RequestInformation) -> Result<String, GraphError>;
}
