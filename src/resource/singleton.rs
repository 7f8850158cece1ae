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

/// Addresses a single-valued navigation property, e.g.
/// `solutions/backupRestore`.
pub struct SingletonRequest<T> {
    adapter: Arc<dyn RequestAdapter>,
    template: &'static str,
    path_parameters: HashMap<String, String>,
    raw_url: Option<String>,
    phantom: PhantomData<T>,
}

impl<T: DeserializeOwned> SingletonRequest<T> {
    pub(crate) fn new(
        adapter: Arc<dyn RequestAdapter>,
        template: &'static str,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            adapter,
            template,
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
            template: self.template,
            path_parameters: HashMap::new(),
            raw_url: Some(raw_url.into()),
            phantom: PhantomData,
        }
    }

    fn base_request(&self, method: Method) -> RequestInformation {
        match &self.raw_url {
            Some(url) => RequestInformation::with_raw_url(method, url.clone()),
            None => RequestInformation::new(method, self.template, self.path_parameters.clone()),
        }
    }

    /// Build the GET request description without sending it.
    pub fn to_get_request(&self, config: Option<&RequestConfiguration>) -> RequestInformation {
        let mut request = self.base_request(Method::GET);
        request.apply(config);
        request.accept("application/json");
        request
    }

    /// Fetch the entity. An empty-bodied success yields `None`.
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

    /// PATCH the entity; exposed publicly only on facades whose modeled API
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

    /// Descend into a child collection, propagating the adapter and every
    /// bound path parameter.
    pub(crate) fn collection<C: DeserializeOwned>(&self, route: Route) -> CollectionRequest<C> {
        CollectionRequest::new(self.adapter.clone(), route, self.path_parameters.clone())
    }
}
