//! Shared test helpers.

use async_trait::async_trait;
use bytes::Bytes;
use graph_solutions::errors::GraphError;
use graph_solutions::requests::RequestInformation;
use graph_solutions::types::GraphBaseUrl;
use graph_solutions::RequestAdapter;

pub const TESTING_URL: &str = "https://graph.microsoft.com/v1.0";

/// Adapter for request-construction tests. Never sends anything.
pub struct StubAdapter {
    base_url: GraphBaseUrl,
}

impl StubAdapter {
    pub fn new() -> Self {
        Self {
            base_url: TESTING_URL.parse().unwrap(),
        }
    }
}

#[async_trait]
impl RequestAdapter for StubAdapter {
    fn base_url(&self) -> &GraphBaseUrl {
        &self.base_url
    }

    async fn send(&self, _request: RequestInformation) -> Result<Option<Bytes>, GraphError> {
        unimplemented!("request-construction tests never send")
    }

    async fn send_no_content(&self, _request: RequestInformation) -> Result<(), GraphError> {
        unimplemented!("request-construction tests never send")
    }

    async fn send_primitive(&self, _request: RequestInformation) -> Result<String, GraphError> {
        unimplemented!("request-construction tests never send")
    }
}
