use std::time::{Duration, Instant};

use crate::debounce::SearchDebounce;
use crate::filters::{SearchFilters, SortBy};
use crate::language::Language;
use crate::page_context::PageContext;
use crate::post::Post;
use crate::post_filter::{filter_and_sort, search_stats, SearchStats};
use crate::query_string::{filters_from_query, to_query_string};

/// One page's search session: the filter state, the spinner debounce and the
/// URL mirror, over an injected page context.
///
/// Every mutation goes through a setter and re-writes the address bar
/// synchronously. The other direction is on demand only —
/// [`PostSearch::load_filters_from_url`] at page load. Back/forward
/// navigation does not re-derive filters; that matches the site as shipped.
pub struct PostSearch<C: PageContext> {
    ctx: C,
    path: String,
    language: Language,
    filters: SearchFilters,
    debounce: SearchDebounce,
}

impl<C: PageContext> PostSearch<C> {
    pub fn new(ctx: C) -> Self {
        Self::with_debounce_delay(ctx, crate::debounce::DEFAULT_DELAY)
    }

    pub fn with_debounce_delay(ctx: C, delay: Duration) -> Self {
        let location = ctx.location();
        let path = match location.split_once('?') {
            Some((path, _)) => path.to_string(),
            None => location,
        };
        let language = Language::load(&ctx);

        PostSearch {
            ctx,
            path,
            language,
            filters: SearchFilters::default(),
            debounce: SearchDebounce::with_delay(delay),
        }
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        language.store(&mut self.ctx);
    }

    pub fn set_query(&mut self, query: &str, now: Instant) {
        self.filters.query = query.to_string();
        self.debounce.note_query(query, now);
        self.sync_url();
    }

    pub fn set_date_from(&mut self, date: &str) {
        self.filters.date_from = date.to_string();
        self.sync_url();
    }

    pub fn set_date_to(&mut self, date: &str) {
        self.filters.date_to = date.to_string();
        self.sync_url();
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.filters.sort_by = sort_by;
        self.sync_url();
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.filters.category = category.map(str::to_string);
        self.sync_url();
    }

    /// Back to the all-defaults state. The spinner drops immediately, as it
    /// does for any emptied query.
    pub fn reset_filters(&mut self, now: Instant) {
        self.filters = SearchFilters::default();
        self.debounce.note_query("", now);
        self.sync_url();
    }

    /// The explicit inbound parse, called once at page load. A query
    /// arriving this way nudges the spinner just like a typed one.
    pub fn load_filters_from_url(&mut self, now: Instant) {
        let location = self.ctx.location();
        let query_string = match location.split_once('?') {
            Some((_, qs)) => qs.to_string(),
            None => String::new(),
        };
        self.filters = filters_from_query(&query_string);
        self.debounce.note_query(&self.filters.query, now);
        self.sync_url();
    }

    pub fn is_searching(&mut self, now: Instant) -> bool {
        self.debounce.is_searching(now)
    }

    /// Runs the engine over the supplied collection. Always the full
    /// filtered sequence; windowing belongs to the rendering layer.
    pub fn results<'a>(&self, posts: &'a [Post]) -> (Vec<&'a Post>, SearchStats) {
        let filtered = filter_and_sort(posts, &self.filters, self.language);
        let stats = search_stats(&filtered, &self.filters);
        (filtered, stats)
    }

    /// The current address, suitable for sharing or bookmarking.
    pub fn share_url(&self) -> String {
        self.ctx.location()
    }

    fn sync_url(&mut self) {
        let qs = to_query_string(&self.filters);
        let url = if qs.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, qs)
        };
        self.ctx.replace(&url);
    }
}

#[cfg(test)]
mod tests {
    use crate::page_context::MemoryContext;
    use crate::post::posts_from_json;
    use crate::test_data::POSTS_JSON;

    use super::*;

    fn search_at(location: &str) -> PostSearch<MemoryContext> {
        PostSearch::new(MemoryContext::new(location))
    }

    #[test]
    fn test_every_edit_rewrites_the_url() {
        let mut search = search_at("/posts");
        let now = Instant::now();

        search.set_query("water", now);
        assert_eq!(search.ctx.location(), "/posts?q=water");

        search.set_sort(SortBy::Oldest);
        assert_eq!(search.ctx.location(), "/posts?q=water&sort=oldest");

        search.set_category(Some("reports"));
        assert_eq!(
            search.ctx.location(),
            "/posts?q=water&sort=oldest&category=reports"
        );
    }

    #[test]
    fn test_reset_restores_defaults_and_clean_url() {
        let mut search = search_at("/posts");
        let now = Instant::now();

        search.set_query("water", now);
        search.set_date_from("2024-01-01");
        search.reset_filters(now);

        assert_eq!(search.filters(), &SearchFilters::default());
        assert_eq!(search.ctx.location(), "/posts");
        assert!(!search.is_searching(now));
    }

    #[test]
    fn test_load_filters_from_url() {
        let mut search = search_at("/posts?q=canaux&from=2024-01-01&sort=oldest&category=maintenance");
        let now = Instant::now();

        search.load_filters_from_url(now);

        let filters = search.filters();
        assert_eq!(filters.query, "canaux");
        assert_eq!(filters.date_from, "2024-01-01");
        assert_eq!(filters.date_to, "");
        assert_eq!(filters.sort_by, SortBy::Oldest);
        assert_eq!(filters.category.as_deref(), Some("maintenance"));
    }

    #[test]
    fn test_results_and_stats() {
        let posts = posts_from_json(POSTS_JSON).unwrap();
        let mut search = search_at("/posts");
        let now = Instant::now();

        search.set_query("water", now);
        let (filtered, stats) = search.results(&posts);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Water Report");
        assert!(stats.has_active_filters);
        assert!(search.is_searching(now));
    }

    #[test]
    fn test_language_switch_persists() {
        let mut search = search_at("/posts");
        search.set_language(Language::Fr);
        assert_eq!(search.ctx.read("language"), Some("fr".to_string()));

        // A fresh session on the same context picks it back up
        let search2 = PostSearch::new(search.ctx);
        assert_eq!(search2.language(), Language::Fr);
    }
}
