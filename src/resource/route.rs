/// One row of the route table: the URL templates behind a collection
/// resource, its items, and its `$count` endpoint.
///
/// Templates anchor at `{+baseurl}` and list their understood query
/// parameters under the literal percent-encoded wire names.
#[derive(Clone, Copy, Debug)]
pub struct Route {
    /// Template of the collection itself.
    pub collection: &'static str,
    /// Template of one item of the collection.
    pub item: &'static str,
    /// Template of the collection's `$count` endpoint.
    pub count: &'static str,
    /// Path-parameter key the item template binds the identifier under.
    pub id_key: &'static str,
}
