//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use reqwest::StatusCode;
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum InvalidGraphUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),

    #[error("Given URL ends with \"/\": {0}")]
    TrailingSlash(String),
}

aliri_braid::from_infallible!(InvalidGraphUrl);

/// Errors representing failed interactions with the Graph API.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Error response with a structured OData explanation from Graph.
    #[error("({status}) {error}")]
    Api {
        status: StatusCode,
        error: ODataError,
    },

    /// Error response whose body was not an OData error envelope.
    #[error("({status:?} {reason:?}): {text}")]
    Unparsed {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Transport-level error without a response.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from a reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),

    /// A URL template referenced a path parameter that was never bound.
    #[error("URL template parameter {{{0}}} is unbound")]
    Template(String),

    /// The request query string could not be encoded.
    #[error(transparent)]
    Query(#[from] serde_urlencoded::ser::Error),

    /// A request or response body failed to (de)serialize.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// A `$count` endpoint returned something other than an integer.
    #[error("expected an integer response, got {0:?}")]
    Primitive(String),
}

/// Structured error payload returned by Graph for any 4XX/5XX response.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    /// Diagnostic passthrough: `request-id`, `client-request-id`, `date`, ...
    #[serde(rename = "innerError", default)]
    pub inner_error: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub details: Vec<ODataErrorDetail>,
}

impl std::fmt::Display for ODataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ODataErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
    pub target: Option<String>,
}

/// Wire envelope wrapping [ODataError].
#[derive(Deserialize)]
struct ODataErrorBody {
    error: ODataError,
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, GraphError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(GraphError::Raw)?;
            match serde_json::from_str::<ODataErrorBody>(&text) {
                Ok(body) => Err(GraphError::Api {
                    status,
                    error: body.error,
                }),
                Err(_) => Err(GraphError::Unparsed {
                    status,
                    reason,
                    text,
                    source,
                }),
            }
        }
    }
}

impl From<reqwest_middleware::Error> for GraphError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => GraphError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => GraphError::Raw(e),
        }
    }
}
