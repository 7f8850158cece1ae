use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;

use crate::errors::GraphError;

use super::template::expand;
use super::{ODataQuery, RequestConfiguration};

/// A description of one HTTP request: everything the adapter needs to execute
/// it. Built fresh per call, never reused.
#[derive(Debug)]
pub struct RequestInformation {
    pub method: Method,
    pub headers: HeaderMap,
    url_template: Cow<'static, str>,
    path_parameters: HashMap<String, String>,
    query_parameters: Vec<(String, String)>,
    raw_url: Option<String>,
    content: Option<Bytes>,
}

impl RequestInformation {
    pub fn new(
        method: Method,
        url_template: impl Into<Cow<'static, str>>,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            url_template: url_template.into(),
            path_parameters,
            query_parameters: Vec::new(),
            raw_url: None,
            content: None,
        }
    }

    /// Anchor this request at a caller-supplied URL; template expansion and
    /// query parameters are bypassed entirely.
    pub fn with_raw_url(method: Method, url: impl Into<String>) -> Self {
        let mut request = Self::new(method, "", HashMap::new());
        request.raw_url = Some(url.into());
        request
    }

    /// Add a header only if no header of that name is present yet.
    pub fn try_add_header(&mut self, name: HeaderName, value: HeaderValue) {
        if !self.headers.contains_key(&name) {
            self.headers.insert(name, value);
        }
    }

    /// Add all given headers, replacing existing values of the same name.
    pub fn add_all_headers(&mut self, headers: &HeaderMap) {
        for (name, value) in headers {
            self.headers.insert(name, value.clone());
        }
    }

    /// Set or replace one query parameter under its wire name.
    pub fn add_query_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if let Some(pair) = self.query_parameters.iter_mut().find(|(n, _)| *n == name) {
            pair.1 = value.into();
        } else {
            self.query_parameters.push((name, value.into()));
        }
    }

    /// Merge every present option of an [ODataQuery].
    pub fn add_query_parameters(&mut self, query: &ODataQuery) {
        for (name, value) in query.pairs() {
            self.add_query_parameter(name, value);
        }
    }

    /// Apply a per-call configuration: query options, then headers (so a
    /// caller-supplied `Accept` beats the verb method's default).
    pub(crate) fn apply(&mut self, config: Option<&RequestConfiguration>) {
        if let Some(config) = config {
            self.add_query_parameters(&config.query);
            self.add_all_headers(&config.headers);
        }
    }

    /// Serialize `body` as the JSON request content.
    pub fn set_json_content<T: Serialize>(&mut self, body: &T) -> Result<(), GraphError> {
        let bytes = serde_json::to_vec(body)?;
        self.content = Some(Bytes::from(bytes));
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(())
    }

    pub fn content(&self) -> Option<&Bytes> {
        self.content.as_ref()
    }

    pub(crate) fn accept(&mut self, value: &'static str) {
        self.try_add_header(ACCEPT, HeaderValue::from_static(value));
    }

    /// Resolve the final request URL. A raw URL set by [Self::with_raw_url]
    /// is returned verbatim; otherwise the template is expanded with the
    /// bound path parameters and the present query parameters.
    pub fn uri(&self) -> Result<String, GraphError> {
        if let Some(raw) = &self.raw_url {
            return Ok(raw.clone());
        }
        expand(
            &self.url_template,
            &self.path_parameters,
            &self.query_parameters,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn baseurl() -> HashMap<String, String> {
        HashMap::from([("baseurl".to_string(), "https://g/v1.0".to_string())])
    }

    #[rstest]
    fn test_raw_url_wins_over_everything() {
        let mut request = RequestInformation::with_raw_url(Method::GET, "https://g/v1.0/custom?x=1");
        request.add_query_parameter("$top", "10");
        assert_eq!(request.uri().unwrap(), "https://g/v1.0/custom?x=1");
    }

    #[rstest]
    fn test_try_add_does_not_replace() {
        let mut request = RequestInformation::new(Method::GET, "{+baseurl}/x", baseurl());
        request.try_add_header(ACCEPT, HeaderValue::from_static("text/plain"));
        request.try_add_header(ACCEPT, HeaderValue::from_static("application/json"));
        assert_eq!(request.headers.get(ACCEPT).unwrap(), "text/plain");
    }

    #[rstest]
    fn test_add_query_parameter_replaces_in_place() {
        let mut request = RequestInformation::new(Method::GET, "{+baseurl}/x", baseurl());
        request.add_query_parameter("$top", "10");
        request.add_query_parameter("$top", "20");
        assert_eq!(request.uri().unwrap(), "https://g/v1.0/x?%24top=20");
    }

    #[rstest]
    fn test_json_content_sets_content_type() {
        let mut request = RequestInformation::new(Method::POST, "{+baseurl}/x", baseurl());
        request.set_json_content(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(request.content().unwrap().as_ref(), br#"{"a":1}"#);
    }
}
