use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::errors::GraphError;
use crate::requests::{RequestConfiguration, RequestInformation};

use super::Route;

/// The `$count` endpoint of a collection: returns the item total as
/// `text/plain`. Supports `$filter` and `$search` only.
pub struct CountRequest {
    adapter: Arc<dyn RequestAdapter>,
    route: Route,
    path_parameters: HashMap<String, String>,
}

impl CountRequest {
    pub(crate) fn new(
        adapter: Arc<dyn RequestAdapter>,
        route: Route,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            adapter,
            route,
            path_parameters,
        }
    }

    /// Build the GET request description without sending it.
    pub fn to_get_request(&self, config: Option<&RequestConfiguration>) -> RequestInformation {
        let mut request =
            RequestInformation::new(Method::GET, self.route.count, self.path_parameters.clone());
        request.apply(config);
        request.accept("text/plain");
        request
    }

    /// Fetch the count of items in the collection.
    pub async fn get(&self, config: Option<&RequestConfiguration>) -> Result<i64, GraphError> {
        let request = self.to_get_request(config);
        let text = self.adapter.send_primitive(request).await?;
        text.trim()
            .parse()
            .map_err(|_| GraphError::Primitive(text))
    }
}
