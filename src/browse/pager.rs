//! Incremental reveal over a filtered result list

/// Courses shown before any "load more"
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Courses added by each "load more"
pub const DEFAULT_LOAD_MORE_STEP: usize = 4;

/// Reveal cursor: how many of the filtered results are currently visible.
///
/// The cursor does not own the results; callers pass the current result
/// length to every operation that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    step: usize,
    visible: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_LOAD_MORE_STEP)
    }
}

impl Pager {
    /// Create a pager. Zero sizes are raised to one.
    pub fn new(page_size: usize, step: usize) -> Self {
        let page_size = page_size.max(1);
        Self { page_size, step: step.max(1), visible: page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Raw cursor value; may exceed the result length right after a reset
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Number of results actually shown out of `total`
    pub fn shown(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// Reveal one more step, capped at `total`
    pub fn load_more(&mut self, total: usize) {
        self.visible = (self.visible + self.step).min(total);
    }

    /// Reveal everything
    pub fn reveal_all(&mut self, total: usize) {
        self.visible = total;
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }

    /// The visible prefix of `items`
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.shown(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_page_size() {
        let pager = Pager::default();
        assert_eq!(pager.visible_count(), 8);
        assert_eq!(pager.step(), 4);
    }

    #[test]
    fn load_more_is_capped_at_total() {
        let mut pager = Pager::new(8, 4);
        assert!(pager.has_more(10));
        assert_eq!(pager.remaining(10), 2);

        pager.load_more(10);
        assert_eq!(pager.visible_count(), 10);
        assert!(!pager.has_more(10));
        assert_eq!(pager.remaining(10), 0);
    }

    #[test]
    fn load_more_steps_by_increment() {
        let mut pager = Pager::new(8, 4);
        pager.load_more(20);
        assert_eq!(pager.visible_count(), 12);
        pager.load_more(20);
        assert_eq!(pager.visible_count(), 16);
    }

    #[test]
    fn reveal_all_shows_everything() {
        let mut pager = Pager::new(8, 4);
        pager.reveal_all(23);
        assert_eq!(pager.visible_count(), 23);
        assert!(!pager.has_more(23));
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut pager = Pager::new(8, 4);
        pager.reveal_all(30);
        pager.reset();
        assert_eq!(pager.visible_count(), 8);
    }

    #[test]
    fn short_lists_show_everything_without_more() {
        let pager = Pager::new(8, 4);
        assert!(!pager.has_more(5));
        assert_eq!(pager.shown(5), 5);
        assert_eq!(pager.remaining(5), 0);
    }

    #[test]
    fn page_slices_prefix() {
        let items: Vec<u32> = (0..10).collect();
        let pager = Pager::new(8, 4);
        assert_eq!(pager.page(&items), &items[..8]);
        assert_eq!(pager.page(&items[..3]), &items[..3]);
    }

    #[test]
    fn zero_sizes_are_raised_to_one() {
        let pager = Pager::new(0, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.step(), 1);
    }
}
