//! NewTypes for the URLs a client is anchored to or handed back by the API.

use crate::errors::InvalidGraphUrl;
use aliri_braid::braid;

/// A [GraphBaseUrl] is the base URL of a Graph deployment, e.g.
/// `https://graph.microsoft.com/v1.0`. No trailing slash: URL templates
/// start with `{+baseurl}/`.
#[braid(validator, serde)]
pub struct GraphBaseUrl(String);

impl aliri_braid::Validator for GraphBaseUrl {
    type Error = InvalidGraphUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidGraphUrl::Protocol(s.to_string()))
        } else if s.ends_with('/') {
            Err(InvalidGraphUrl::TrailingSlash(s.to_string()))
        } else {
            Ok(())
        }
    }
}

/// An opaque continuation URL returned as `@odata.nextLink` by a collection
/// endpoint. Requested verbatim when paging.
#[braid(serde)]
pub struct NextLink;
