use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;

use crate::errors::{check, GraphError};
use crate::requests::RequestInformation;
use crate::types::GraphBaseUrl;

use super::RequestAdapter;

/// Production [RequestAdapter] over a middleware-capable reqwest client.
#[derive(Debug)]
pub struct HttpAdapter {
    client: reqwest_middleware::ClientWithMiddleware,
    base_url: GraphBaseUrl,
}

pub struct HttpAdapterBuilder {
    base_url: GraphBaseUrl,
    builder: reqwest_middleware::ClientBuilder,
}

impl HttpAdapterBuilder {
    fn new(base_url: GraphBaseUrl, headers: HeaderMap) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self { base_url, builder })
    }

    /// Add middleware to the HTTP client. Retry, throttling handling, and
    /// token refresh all belong here.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            base_url: self.base_url,
            builder: self.builder.with(middleware),
        }
    }

    pub fn build(self) -> HttpAdapter {
        HttpAdapter {
            client: self.builder.build(),
            base_url: self.base_url,
        }
    }
}

impl HttpAdapter {
    /// Start building an adapter authenticating with a static bearer token.
    pub fn with_token(
        base_url: GraphBaseUrl,
        token: &str,
    ) -> Result<HttpAdapterBuilder, reqwest::Error> {
        HttpAdapterBuilder::new(base_url, token2header(token))
    }

    /// Start building an adapter without default credentials. Authentication
    /// is expected to come from middleware added via
    /// [HttpAdapterBuilder::with].
    pub fn anonymous(base_url: GraphBaseUrl) -> Result<HttpAdapterBuilder, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        HttpAdapterBuilder::new(base_url, headers)
    }

    /// Wrap an already-configured middleware client.
    pub fn from_client(
        base_url: GraphBaseUrl,
        client: reqwest_middleware::ClientWithMiddleware,
    ) -> Self {
        Self { client, base_url }
    }

    async fn execute(&self, request: RequestInformation) -> Result<reqwest::Response, GraphError> {
        let url = request.uri()?;
        debug!("{} {}", request.method, url);
        let mut req = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers.clone());
        if let Some(body) = request.content() {
            req = req.body(body.clone());
        }
        let res = req.send().await?;
        check(res).await
    }
}

fn token2header(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let auth_data = format!("Bearer {}", token);
    let mut value: HeaderValue = auth_data.parse().unwrap();
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    headers.insert(ACCEPT, "application/json".parse().unwrap());
    headers
}

#[async_trait]
impl RequestAdapter for HttpAdapter {
    fn base_url(&self) -> &GraphBaseUrl {
        &self.base_url
    }

    async fn send(&self, request: RequestInformation) -> Result<Option<Bytes>, GraphError> {
        let res = self.execute(request).await?;
        if res.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = res.bytes().await.map_err(GraphError::Raw)?;
        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }

    async fn send_no_content(&self, request: RequestInformation) -> Result<(), GraphError> {
        self.execute(request).await?;
        Ok(())
    }

    async fn send_primitive(&self, request: RequestInformation) -> Result<String, GraphError> {
        let res = self.execute(request).await?;
        Ok(res.text().await.map_err(GraphError::Raw)?)
    }
}
