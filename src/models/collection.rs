use serde::Deserialize;

use crate::types::NextLink;

/// Generic response from a Graph collection endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CollectionResponse<T> {
    /// Total count across all pages; present when `$count=true` was requested.
    #[serde(rename = "@odata.count")]
    pub count: Option<i64>,
    /// Continuation URL of the next page, if any.
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<NextLink>,
    #[serde(default)]
    pub value: Vec<T>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            count: None,
            next_link: None,
            value: Vec::new(),
        }
    }
}

impl<T> IntoIterator for CollectionResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}
