pub mod config;
pub mod debounce;
pub mod filters;
pub mod language;
pub mod logger;
pub mod page_context;
pub mod paginator;
pub mod post;
pub mod post_filter;
pub mod post_search;
pub mod query_string;
pub mod text_utils;
#[cfg(test)]
mod test_data;
