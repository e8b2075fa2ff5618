use std::collections::HashMap;

use crate::filters::{SearchFilters, SortBy};

/// A parsed address-bar query string.
#[derive(PartialEq, Debug)]
pub struct QueryString {
    items: HashMap<String, String>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);
        let items: HashMap<String, String> = vs.into_iter().collect();

        QueryString { items }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|v| v.as_str())
    }
}

/// Serializes the filters for the address bar. Only non-default fields are
/// emitted, so a default state produces an empty string and a clean URL.
pub fn to_query_string(filters: &SearchFilters) -> String {
    let mut pairs: Vec<(&str, &str)> = vec![];

    if !filters.query.is_empty() {
        pairs.push(("q", &filters.query));
    }
    if !filters.date_from.is_empty() {
        pairs.push(("from", &filters.date_from));
    }
    if !filters.date_to.is_empty() {
        pairs.push(("to", &filters.date_to));
    }
    if filters.sort_by != SortBy::Newest {
        pairs.push(("sort", filters.sort_by.as_str()));
    }
    if let Some(slug) = filters.category_constraint() {
        pairs.push(("category", slug));
    }

    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

/// The inverse of [`to_query_string`]: absent keys become the defaults.
pub fn filters_from_query(buf: &str) -> SearchFilters {
    let qs = QueryString::from(buf);

    SearchFilters {
        query: qs.get("q").unwrap_or("").to_string(),
        date_from: qs.get("from").unwrap_or("").to_string(),
        date_to: qs.get("to").unwrap_or("").to_string(),
        sort_by: qs.get("sort").map(SortBy::parse).unwrap_or_default(),
        category: qs.get("category").map(str::to_string),
    }
}
