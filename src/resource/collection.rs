use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_stream::try_stream;
use futures::Stream;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::RequestAdapter;
use crate::errors::GraphError;
use crate::models::CollectionResponse;
use crate::requests::{RequestConfiguration, RequestInformation};

use super::{CountRequest, ItemRequest, Route};

/// Addresses a collection resource.
///
/// Cheap and immutable after construction: every navigation step builds a
/// fresh request sharing the same adapter, so independently constructed
/// builders (or one builder from many tasks) are safe to use concurrently.
pub struct CollectionRequest<T> {
    adapter: Arc<dyn RequestAdapter>,
    route: Route,
    path_parameters: HashMap<String, String>,
    raw_url: Option<String>,
    phantom: PhantomData<T>,
}

impl<T: DeserializeOwned> CollectionRequest<T> {
    pub(crate) fn new(
        adapter: Arc<dyn RequestAdapter>,
        route: Route,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            adapter,
            route,
            path_parameters,
            raw_url: None,
            phantom: PhantomData,
        }
    }

    /// Rebuild this request against a caller-supplied URL. All computed path
    /// and query state is discarded; only the adapter is kept.
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        Self {
            adapter: self.adapter.clone(),
            route: self.route,
            path_parameters: HashMap::new(),
            raw_url: Some(raw_url.into()),
            phantom: PhantomData,
        }
    }

    fn base_request(&self, method: Method) -> RequestInformation {
        match &self.raw_url {
            Some(url) => RequestInformation::with_raw_url(method, url.clone()),
            None => {
                RequestInformation::new(method, self.route.collection, self.path_parameters.clone())
            }
        }
    }

    /// Build the GET request description without sending it.
    pub fn to_get_request(&self, config: Option<&RequestConfiguration>) -> RequestInformation {
        let mut request = self.base_request(Method::GET);
        request.apply(config);
        request.accept("application/json");
        request
    }

    /// Fetch one page of the collection.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<CollectionResponse<T>, GraphError> {
        let request = self.to_get_request(config);
        match self.adapter.send(request).await? {
            Some(body) => Ok(serde_json::from_slice(&body)?),
            None => Ok(CollectionResponse::default()),
        }
    }

    /// Address one item of this collection by identifier.
    ///
    /// An empty identifier leaves the path parameters untouched; resolving
    /// the resulting request then fails instead of producing a malformed URL.
    pub fn by_id(&self, id: impl AsRef<str>) -> ItemRequest<T> {
        let mut path_parameters = self.path_parameters.clone();
        let id = id.as_ref();
        if !id.is_empty() {
            path_parameters.insert(self.route.id_key.to_string(), id.to_string());
        }
        ItemRequest::new(self.adapter.clone(), self.route, path_parameters)
    }

    /// The `$count` endpoint of this collection.
    pub fn count(&self) -> CountRequest {
        CountRequest::new(
            self.adapter.clone(),
            self.route,
            self.path_parameters.clone(),
        )
    }

    /// Produce items across pages. `@odata.nextLink` continuations are
    /// followed transparently, one GET per page as the stream is polled.
    pub fn stream<'a>(
        &'a self,
        config: Option<&'a RequestConfiguration>,
    ) -> impl Stream<Item = Result<T, GraphError>> + 'a {
        try_stream! {
            // The first page goes through the route template; pages after it
            // are fetched from the continuation URL verbatim.
            let page = self.get(config).await?;
            let mut next = page.next_link;
            for item in page.value {
                yield item;
            }
            while let Some(url) = next {
                let mut request = RequestInformation::with_raw_url(Method::GET, url.take());
                request.accept("application/json");
                let page: CollectionResponse<T> = match self.adapter.send(request).await? {
                    Some(body) => serde_json::from_slice(&body)?,
                    None => break,
                };
                next = page.next_link;
                for item in page.value {
                    yield item;
                }
            }
        }
    }

    /// POST to the collection; exposed publicly only on facades whose
    /// modeled API allows creation.
    pub(crate) async fn create<B: Serialize>(
        &self,
        body: &B,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<T>, GraphError> {
        let mut request = self.base_request(Method::POST);
        request.set_json_content(body)?;
        request.apply(config);
        request.accept("application/json");
        match self.adapter.send(request).await? {
            Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
            None => Ok(None),
        }
    }
}
