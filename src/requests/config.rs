use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::ODataQuery;

/// Per-call request options: extra headers and OData query options.
///
/// Constructed per call and discarded after use. Passing no configuration to
/// a verb method is equivalent to passing a default-constructed one.
#[derive(Clone, Debug, Default)]
pub struct RequestConfiguration {
    pub headers: HeaderMap,
    pub query: ODataQuery,
}

impl RequestConfiguration {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn query(mut self, query: ODataQuery) -> Self {
        self.query = query;
        self
    }

    /// Add a header sent with this call, replacing any default of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}
