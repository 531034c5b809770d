//! Paged carousel engine.
//!
//! Splits an ordered list into fixed-size pages and navigates between them
//! with wraparound. Every successful navigation takes a transition lock that
//! stays held until the host releases it (normally from a one-shot timer set
//! to the visual transition length). Input arriving while locked is dropped,
//! not queued.
//!
//! Each lock is tagged with an epoch. A release only unlocks the transition
//! it was scheduled for, so a late timer can never cut a newer one short.

use std::num::NonZeroUsize;

// ============================================================================
// PageSize
// ============================================================================

/// Number of items shown per carousel page.
///
/// Always at least one; zero is raised to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Creates a page size, clamping zero up to one.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Result of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The page changed and the transition lock is now held.
    Moved { page: usize, epoch: u64 },
    /// Dropped because a transition is still running.
    Locked,
    /// Nothing to do: single page, already there, or index out of range.
    Unchanged,
}

impl Navigation {
    /// Epoch to release once the transition finishes, if one started.
    pub fn epoch(self) -> Option<u64> {
        match self {
            Self::Moved { epoch, .. } => Some(epoch),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning { epoch: u64 },
}

// ============================================================================
// Carousel
// ============================================================================

/// Paged view over an ordered list.
///
/// Invariant: `current_page < max(page_count, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    page_size: PageSize,
    current_page: usize,
    phase: Phase,
    next_epoch: u64,
}

impl<T> Carousel<T> {
    /// Creates a carousel at page 0, idle.
    pub fn new(items: Vec<T>, page_size: PageSize) -> Self {
        Self {
            items,
            page_size,
            current_page: 0,
            phase: Phase::Idle,
            next_epoch: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Items on the current page. The last page may be short.
    pub fn current_items(&self) -> &[T] {
        let size = self.page_size.get();
        let start = (self.current_page * size).min(self.items.len());
        let end = (start + size).min(self.items.len());
        &self.items[start..end]
    }

    /// Advances one page, wrapping from the last page to the first.
    pub fn next(&mut self) -> Navigation {
        self.navigate(|page, count| Some((page + 1) % count))
    }

    /// Goes back one page, wrapping from the first page to the last.
    pub fn prev(&mut self) -> Navigation {
        self.navigate(|page, count| Some((page + count - 1) % count))
    }

    /// Jumps straight to `index`.
    ///
    /// Selecting the active page is a no-op rather than a re-trigger, and
    /// stale out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> Navigation {
        self.navigate(|_, count| (index < count).then_some(index))
    }

    /// Ends the transition tagged `epoch`.
    ///
    /// Returns `false` when that transition is no longer the active one.
    pub fn release(&mut self, epoch: u64) -> bool {
        match self.phase {
            Phase::Transitioning { epoch: active } if active == epoch => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Replaces the item list, pulling the current page back into range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp();
    }

    /// Changes the page size, pulling the current page back into range.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.clamp();
    }

    fn navigate(&mut self, target: impl FnOnce(usize, usize) -> Option<usize>) -> Navigation {
        if let Phase::Transitioning { epoch } = self.phase {
            tracing::debug!(epoch, "carousel input dropped during transition");
            return Navigation::Locked;
        }

        let count = self.page_count();
        if count <= 1 {
            return Navigation::Unchanged;
        }

        match target(self.current_page, count) {
            Some(page) if page != self.current_page => {
                let epoch = self.next_epoch;
                self.next_epoch = self.next_epoch.wrapping_add(1);
                self.current_page = page;
                self.phase = Phase::Transitioning { epoch };
                Navigation::Moved { page, epoch }
            }
            _ => Navigation::Unchanged,
        }
    }

    fn clamp(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.current_page > last {
            tracing::debug!(
                from = self.current_page,
                to = last,
                "carousel page clamped after resize"
            );
            self.current_page = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize, size: usize) -> Carousel<usize> {
        Carousel::new((0..len).collect(), PageSize::new(size))
    }

    /// Navigates and immediately releases the lock.
    fn settle(c: &mut Carousel<usize>, nav: Navigation) {
        if let Some(epoch) = nav.epoch() {
            assert!(c.release(epoch));
        }
    }

    #[test]
    fn test_page_size_clamps_zero() {
        assert_eq!(PageSize::new(0).get(), 1);
        assert_eq!(PageSize::new(4).get(), 4);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(carousel(0, 3).page_count(), 0);
        assert_eq!(carousel(3, 3).page_count(), 1);
        assert_eq!(carousel(7, 3).page_count(), 3);
        assert_eq!(carousel(10, 3).page_count(), 4);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut c = carousel(9, 3);
        let mut pages = Vec::new();
        for _ in 0..3 {
            let nav = c.next();
            settle(&mut c, nav);
            pages.push(c.current_page());
        }
        assert_eq!(pages, vec![1, 2, 0]);
    }

    #[test]
    fn test_prev_wraps_to_last_page() {
        let mut c = carousel(7, 3);
        assert!(matches!(c.prev(), Navigation::Moved { page: 2, .. }));
        assert_eq!(c.current_items(), &[6]);
    }

    #[test]
    fn test_lock_drops_input_until_release() {
        let mut c = carousel(9, 3);

        let first = c.next();
        assert_eq!(c.current_page(), 1);
        assert!(c.is_transitioning());

        assert_eq!(c.next(), Navigation::Locked);
        assert_eq!(c.prev(), Navigation::Locked);
        assert_eq!(c.jump_to(0), Navigation::Locked);
        assert_eq!(c.current_page(), 1);

        settle(&mut c, first);
        assert!(!c.is_transitioning());
        assert!(matches!(c.next(), Navigation::Moved { page: 2, .. }));
    }

    #[test]
    fn test_stale_release_is_ignored() {
        let mut c = carousel(9, 3);
        let first = c.next().epoch().unwrap();
        assert!(c.release(first));

        let second = c.next().epoch().unwrap();
        assert_ne!(first, second);
        assert!(!c.release(first));
        assert!(c.is_transitioning());
        assert!(c.release(second));
    }

    #[test]
    fn test_jump_to_active_page_is_noop() {
        let mut c = carousel(9, 3);
        assert_eq!(c.jump_to(0), Navigation::Unchanged);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_jump_to_out_of_range_is_ignored() {
        let mut c = carousel(9, 3);
        assert_eq!(c.jump_to(3), Navigation::Unchanged);
        assert_eq!(c.current_page(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_jump_to_last_short_page() {
        let mut c = carousel(7, 3);
        assert_eq!(c.page_count(), 3);
        assert!(matches!(c.jump_to(2), Navigation::Moved { page: 2, .. }));
        assert_eq!(c.current_items(), &[6]);
    }

    #[test]
    fn test_single_page_never_moves() {
        let mut c = carousel(2, 3);
        assert_eq!(c.next(), Navigation::Unchanged);
        assert_eq!(c.prev(), Navigation::Unchanged);
        assert_eq!(c.jump_to(0), Navigation::Unchanged);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.current_items(), &[0, 1]);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = carousel(0, 3);
        assert_eq!(c.next(), Navigation::Unchanged);
        assert_eq!(c.jump_to(0), Navigation::Unchanged);
        assert!(c.current_items().is_empty());
    }

    #[test]
    fn test_shrinking_items_clamps_page() {
        let mut c = carousel(10, 3);
        let nav = c.jump_to(3);
        settle(&mut c, nav);
        assert_eq!(c.current_page(), 3);

        c.set_items(vec![100, 101]);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.current_items(), &[100, 101]);

        c.set_items(Vec::new());
        assert_eq!(c.current_page(), 0);
        assert!(c.current_items().is_empty());
    }

    #[test]
    fn test_growing_page_size_clamps_page() {
        let mut c = carousel(10, 3);
        let nav = c.jump_to(2);
        settle(&mut c, nav);

        c.set_page_size(PageSize::new(4));
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.current_items(), &[8, 9]);

        c.set_page_size(PageSize::new(5));
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.current_items(), &[5, 6, 7, 8, 9]);
    }
}
