/// "Load more" windowing over an already-filtered list.
///
/// The search pipeline always returns the full filtered sequence; the
/// rendering layer shows a growing prefix of it, one step per click of the
/// load-more button. This is windowing, not pagination: earlier items never
/// scroll out.
pub struct LoadMore<'a, T> {
    items: &'a [T],
    step: usize,
}

impl<'a, T> LoadMore<'a, T> {
    pub fn from(items: &'a [T], step: usize) -> Self {
        LoadMore { items, step }
    }

    /// The visible prefix after `loads` clicks (zero clicks shows one step).
    pub fn visible(&self, loads: usize) -> &'a [T] {
        if self.step == 0 {
            return self.items;
        }
        let count = self.step.saturating_mul(loads + 1).min(self.items.len());
        &self.items[..count]
    }

    /// Whether the button should still be offered after `loads` clicks.
    pub fn has_more(&self, loads: usize) -> bool {
        self.visible(loads).len() < self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_case() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let window = LoadMore::from(&items, 3);

        assert_eq!(window.visible(0), &[1, 2, 3]);
        assert_eq!(window.visible(1), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(window.visible(2), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(window.visible(9), &[1, 2, 3, 4, 5, 6, 7, 8]);

        assert!(window.has_more(0));
        assert!(window.has_more(1));
        assert!(!window.has_more(2));
    }

    #[test]
    fn test_empty() {
        let items: Vec<u32> = vec![];
        let window = LoadMore::from(&items, 3);
        assert!(window.visible(0).is_empty());
        assert!(!window.has_more(0));
    }

    #[test]
    fn test_zero_step_shows_everything() {
        let items = vec![1, 2];
        let window = LoadMore::from(&items, 0);
        assert_eq!(window.visible(0), &[1, 2]);
        assert!(!window.has_more(5));
    }
}
