//! Pagination state and metadata

use serde::Serialize;

/// Pagination metadata for the current view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages (0 when there are no items)
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_pages(total, per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

fn total_pages(total: usize, per_page: usize) -> usize {
    if total == 0 { 0 } else { total.div_ceil(per_page) }
}

/// Pagination state machine for a single list view.
///
/// The pager only holds the current page and the fixed page size; everything
/// else is derived from the filtered total handed in by the caller. The
/// current page is clamped into `[1, max(1, total_pages)]` on every
/// recomputation, so out-of-range requests and shrinking populations settle
/// back in range instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    per_page: usize,
}

impl Pager {
    /// Create a pager starting at page 1.
    ///
    /// A `per_page` of 0 is bumped to 1 to avoid division by zero.
    pub fn new(per_page: usize) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
        }
    }

    /// Current page (1-indexed)
    pub fn current(&self) -> usize {
        self.current
    }

    /// Fixed page size for this view
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Go back to page 1.
    ///
    /// Required whenever the filtered population changes in a way that could
    /// invalidate the current page: a new search term settles, the
    /// status/category selector changes.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Clamp the current page against a (possibly changed) total
    pub fn clamp(&mut self, total: usize) {
        let max_page = total_pages(total, self.per_page).max(1);
        self.current = self.current.clamp(1, max_page);
    }

    /// Navigate to `page`, clamping out-of-range requests instead of failing
    pub fn go_to(&mut self, page: usize, total: usize) {
        let max_page = total_pages(total, self.per_page).max(1);
        self.current = page.clamp(1, max_page);
    }

    /// Advance one page; a no-op on the last page
    pub fn next(&mut self, total: usize) {
        self.go_to(self.current + 1, total);
    }

    /// Go back one page; a no-op on the first page
    pub fn prev(&mut self, total: usize) {
        self.go_to(self.current.saturating_sub(1), total);
    }

    /// Metadata for the current page against `total` items
    pub fn meta(&self, total: usize) -> PageMeta {
        PageMeta::new(self.current, self.per_page, total)
    }

    /// Half-open index window `[start, end)` of the visible page
    pub fn window(&self, total: usize) -> (usize, usize) {
        let start = (self.current - 1) * self.per_page;
        let end = (self.current * self.per_page).min(total);
        (start.min(end), end)
    }
}
