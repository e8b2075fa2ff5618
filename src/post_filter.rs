use crate::filters::{SearchFilters, SortBy};
use crate::language::Language;
use crate::post::Post;
use crate::text_utils::{compare_titles, parse_calendar_date};

/// Counters the rendering layer shows next to the list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub total: usize,
    pub has_active_filters: bool,
}

/// Applies the current filters to the full post collection and orders the
/// result. Pure and synchronous: the input is never touched, a fresh
/// sequence comes back on every call, and every stage is a linear scan.
///
/// Stage order is fixed (text, category, date-from, date-to, sort) although
/// membership does not depend on it. An inverted date range simply narrows
/// to nothing.
pub fn filter_and_sort<'a>(
    posts: &'a [Post],
    filters: &SearchFilters,
    language: Language,
) -> Vec<&'a Post> {
    let mut filtered: Vec<&Post> = posts.iter().collect();

    // Text search over title and description. A whitespace-only query is
    // no constraint. An absent description matches nothing by itself.
    let query = filters.query.trim();
    if !query.is_empty() {
        let term = query.to_lowercase();
        filtered.retain(|post| {
            post.title.to_lowercase().contains(&term)
                || post.description.to_lowercase().contains(&term)
        });
    }

    if let Some(slug) = filters.category_constraint() {
        filtered.retain(|post| post.category_id.as_deref() == Some(slug));
    }

    // Calendar-date bounds, inclusive on both ends. A date string that does
    // not parse compares like an invalid date in the reference UI: nothing
    // satisfies the bound.
    if !filters.date_from.trim().is_empty() {
        match parse_calendar_date(&filters.date_from) {
            Ok(from) => filtered.retain(|post| post.created_at.date_naive() >= from),
            Err(_) => filtered.clear(),
        }
    }

    if !filters.date_to.trim().is_empty() {
        match parse_calendar_date(&filters.date_to) {
            Ok(to) => {
                let bound = to.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc();
                filtered.retain(|post| post.created_at <= bound);
            }
            Err(_) => filtered.clear(),
        }
    }

    // Always sorted, even when the input already is. Vec::sort_by is
    // stable, which is what keeps equal keys in input order.
    match filters.sort_by {
        SortBy::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Title => filtered.sort_by(|a, b| compare_titles(&a.title, &b.title, language)),
    }

    filtered
}

/// Derived statistics for a filtered result. "Active" means any axis is
/// constrained or the ordering differs from the default.
pub fn search_stats(filtered: &[&Post], filters: &SearchFilters) -> SearchStats {
    let has_active_filters = !filters.query.is_empty()
        || !filters.date_from.is_empty()
        || !filters.date_to.is_empty()
        || filters.sort_by != SortBy::Newest
        || filters.category_constraint().is_some();

    SearchStats {
        total: filtered.len(),
        has_active_filters,
    }
}
