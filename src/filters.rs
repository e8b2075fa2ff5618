use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Result ordering for the post list.
#[derive(Serialize, Deserialize, ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first, by creation time
    #[default]
    Newest,
    /// Oldest first, by creation time
    Oldest,
    /// Title ascending, collated for the active language
    Title,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
            SortBy::Title => "title",
        }
    }

    /// Query-string value to ordering. Anything unrecognized falls back to
    /// the default, same as an absent key.
    pub fn parse(value: &str) -> SortBy {
        match value {
            "oldest" => SortBy::Oldest,
            "title" => SortBy::Title,
            _ => SortBy::Newest,
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The current search constraints. Empty string and absent mean the same
/// thing on every axis: no constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchFilters {
    /// Free text, matched case-insensitively against title and description
    pub query: String,
    /// Inclusive lower bound, calendar date as `YYYY-MM-DD`
    pub date_from: String,
    /// Inclusive upper bound, calendar date as `YYYY-MM-DD`
    pub date_to: String,
    pub sort_by: SortBy,
    /// Category slug. `None` and the sentinel `"all"` mean no constraint.
    pub category: Option<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            query: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort_by: SortBy::Newest,
            category: None,
        }
    }
}

impl SearchFilters {
    /// The effective category constraint, with the `"all"` sentinel and the
    /// empty string both collapsed to "unconstrained".
    pub fn category_constraint(&self) -> Option<&str> {
        match self.category.as_deref() {
            None | Some("") | Some("all") => None,
            Some(slug) => Some(slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_parse() {
        assert_eq!(SortBy::parse("oldest"), SortBy::Oldest);
        assert_eq!(SortBy::parse("title"), SortBy::Title);
        assert_eq!(SortBy::parse("newest"), SortBy::Newest);
        assert_eq!(SortBy::parse("bogus"), SortBy::Newest);
    }

    #[test]
    fn test_category_constraint_sentinels() {
        let mut filters = SearchFilters::default();
        assert_eq!(filters.category_constraint(), None);
        filters.category = Some("all".to_string());
        assert_eq!(filters.category_constraint(), None);
        filters.category = Some("".to_string());
        assert_eq!(filters.category_constraint(), None);
        filters.category = Some("reports".to_string());
        assert_eq!(filters.category_constraint(), Some("reports"));
    }
}
