/// OData system query options understood by Graph endpoints.
///
/// All fields are optional; absent fields are omitted from the encoded query
/// string entirely. Setters are chainable:
///
/// ```
/// use graph_solutions::ODataQuery;
///
/// let query = ODataQuery::new()
///     .top(10)
///     .filter("startsWith(displayName,'A')");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ODataQuery {
    /// `$count`: include the total item count in the response.
    pub count: Option<bool>,
    /// `$expand`: related entities to inline.
    pub expand: Option<Vec<String>>,
    /// `$filter`: filter expression.
    pub filter: Option<String>,
    /// `$orderby`: sort order.
    pub orderby: Option<Vec<String>>,
    /// `$search`: full-text search expression.
    pub search: Option<String>,
    /// `$select`: properties to return.
    pub select: Option<Vec<String>>,
    /// `$skip`: number of items to skip.
    pub skip: Option<i32>,
    /// `$top`: maximum number of items to return.
    pub top: Option<i32>,
}

impl ODataQuery {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = Some(expand.into_iter().map(Into::into).collect());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn orderby<I, S>(mut self, orderby: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = Some(orderby.into_iter().map(Into::into).collect());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(select.into_iter().map(Into::into).collect());
        self
    }

    pub fn skip(mut self, skip: i32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    /// Wire-name/value pairs for every present option. List-valued options
    /// join with `,` per OData conventions.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(count) = self.count {
            pairs.push(("$count", count.to_string()));
        }
        if let Some(expand) = &self.expand {
            pairs.push(("$expand", expand.join(",")));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        if let Some(orderby) = &self.orderby {
            pairs.push(("$orderby", orderby.join(",")));
        }
        if let Some(search) = &self.search {
            pairs.push(("$search", search.clone()));
        }
        if let Some(select) = &self.select {
            pairs.push(("$select", select.join(",")));
        }
        if let Some(skip) = self.skip {
            pairs.push(("$skip", skip.to_string()));
        }
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        pairs
    }
}
