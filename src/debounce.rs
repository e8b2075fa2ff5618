use std::time::{Duration, Instant};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Drives the transient "searching" spinner around rapid query edits.
///
/// A non-empty edit raises the flag and (re)arms a single reset deadline;
/// only the deadline from the latest edit survives, so a burst of edits
/// collapses into one trailing reset. Clearing the query drops the flag
/// immediately and discards any pending deadline.
///
/// The flag is cosmetic: filtering itself always runs synchronously and is
/// never gated by it. Time comes in as `Instant` values from the caller,
/// so the whole thing stays deterministic under test.
pub struct SearchDebounce {
    delay: Duration,
    searching: bool,
    reset_at: Option<Instant>,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        SearchDebounce {
            delay,
            searching: false,
            reset_at: None,
        }
    }

    /// Called on every query edit, with the edit time.
    pub fn note_query(&mut self, query: &str, now: Instant) {
        if query.is_empty() {
            self.searching = false;
            self.reset_at = None;
        } else {
            self.searching = true;
            // At most one pending deadline: this replaces any earlier one
            self.reset_at = Some(now + self.delay);
        }
    }

    /// Settles a due deadline, then reports the flag.
    pub fn is_searching(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.reset_at {
            if now >= deadline {
                self.searching = false;
                self.reset_at = None;
            }
        }
        self.searching
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_single_edit_resets_after_delay() {
        let mut debounce = SearchDebounce::new();
        let t0 = Instant::now();

        debounce.note_query("water", t0);
        assert!(debounce.is_searching(t0));
        assert!(debounce.is_searching(t0 + 299 * MS));
        assert!(!debounce.is_searching(t0 + 300 * MS));
    }

    #[test]
    fn test_burst_collapses_to_one_trailing_reset() {
        let mut debounce = SearchDebounce::new();
        let t0 = Instant::now();

        debounce.note_query("w", t0);
        debounce.note_query("wa", t0 + 100 * MS);
        debounce.note_query("wat", t0 + 200 * MS);

        // The first two deadlines were cancelled by the later edits
        assert!(debounce.is_searching(t0 + 300 * MS));
        assert!(debounce.is_searching(t0 + 499 * MS));
        // Exactly one reset, timed from the last edit
        assert!(!debounce.is_searching(t0 + 500 * MS));
        assert!(!debounce.is_searching(t0 + 501 * MS));
    }

    #[test]
    fn test_empty_query_resets_immediately() {
        let mut debounce = SearchDebounce::new();
        let t0 = Instant::now();

        debounce.note_query("water", t0);
        assert!(debounce.is_searching(t0 + 10 * MS));

        debounce.note_query("", t0 + 20 * MS);
        assert!(!debounce.is_searching(t0 + 20 * MS));
        // And no stale deadline flips it back
        assert!(!debounce.is_searching(t0 + 400 * MS));
    }

    #[test]
    fn test_custom_delay() {
        let mut debounce = SearchDebounce::with_delay(Duration::from_millis(50));
        let t0 = Instant::now();

        debounce.note_query("x", t0);
        assert!(debounce.is_searching(t0 + 49 * MS));
        assert!(!debounce.is_searching(t0 + 50 * MS));
    }
}
