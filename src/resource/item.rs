use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::RequestAdapter;
use crate::errors::GraphError;
use crate::requests::{RequestConfiguration, RequestInformation};

use super::{CollectionRequest, Route};

/// Addresses one item of a collection.
pub struct ItemRequest<T> {
    adapter: Arc<dyn RequestAdapter>,
    route: Route,
    path_parameters: HashMap<String, String>,
    raw_url: Option<String>,
    phantom: PhantomData<T>,
}

impl<T: DeserializeOwned> ItemRequest<T> {
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

    /// The path parameters this item is addressed by.
    pub fn path_parameters(&self) -> &HashMap<String, String> {
        &self.path_parameters
    }

    fn base_request(&self, method: Method) -> RequestInformation {
        match &self.raw_url {
            Some(url) => RequestInformation::with_raw_url(method, url.clone()),
            None => RequestInformation::new(method, self.route.item, self.path_parameters.clone()),
        }
    }

    /// Build the GET request description without sending it.
    pub fn to_get_request(&self, config: Option<&RequestConfiguration>) -> RequestInformation {
        let mut request = self.base_request(Method::GET);
        request.apply(config);
        request.accept("application/json");
        request
    }

    /// Fetch the item. An empty-bodied success yields `None`.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<T>, GraphError> {
        let request = self.to_get_request(config);
        match self.adapter.send(request).await? {
            Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
            None => Ok(None),
        }
    }

    /// PATCH the item; exposed publicly only on facades whose modeled API
    /// allows updates.
    pub(crate) async fn update<B: Serialize>(
        &self,
        body: &B,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<T>, GraphError> {
        let mut request = self.base_request(Method::PATCH);
        request.set_json_content(body)?;
        request.apply(config);
        request.accept("application/json");
        match self.adapter.send(request).await? {
            Some(body) => Ok(Some(serde_json::from_slice(&body)?)),
            None => Ok(None),
        }
    }

    /// DELETE the item; exposed publicly only on facades whose modeled API
    /// allows deletion.
    pub(crate) async fn remove(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<(), GraphError> {
        let mut request = self.base_request(Method::DELETE);
        request.apply(config);
        request.accept("application/json");
        self.adapter.send_no_content(request).await
    }

    /// Descend into a child collection of this item, propagating the
    /// adapter and every bound path parameter.
    pub(crate) fn collection<C: DeserializeOwned>(&self, route: Route) -> CollectionRequest<C> {
        CollectionRequest::new(self.adapter.clone(), route, self.path_parameters.clone())
    }
}
