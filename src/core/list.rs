//! List controller composing collection, filter, debounce and pagination

use crate::core::collection::Collection;
use crate::core::debounce::Debounced;
use crate::core::entity::Record;
use crate::core::filter::ListFilter;
use crate::core::query::{PageMeta, Pager};
use std::time::Duration;
use tokio::sync::watch;

/// The visible page of a list view: the record window plus its metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub meta: PageMeta,
}

/// Per-view list pipeline.
///
/// Owns the filter and pagination state for one mounted list view and a
/// handle to the shared [`Collection`]. Raw keystrokes flow into the
/// debounced query; once the query settles it becomes the committed search
/// string and pagination resets to page 1. Changing the facet selector
/// resets pagination the same way — reset-on-any-filter-change is the
/// contract, applied uniformly at both call sites.
///
/// [`page`](ListController::page) recomputes the pipeline from the current
/// snapshot on every call and clamps the current page against the filtered
/// total, so a deletion that empties the last page settles back in range by
/// itself.
pub struct ListController<T: Record> {
    collection: Collection<T>,
    filter: ListFilter,
    pager: Pager,
    query: Debounced<String>,
    settled_rx: watch::Receiver<String>,
}

impl<T: Record> ListController<T> {
    /// Mount a fresh view over `collection`: empty filter, page 1
    pub fn new(collection: Collection<T>, per_page: usize, quiet_period: Duration) -> Self {
        let query = Debounced::new(String::new(), quiet_period);
        let settled_rx = query.subscribe();
        Self {
            collection,
            filter: ListFilter::default(),
            pager: Pager::new(per_page),
            query,
            settled_rx,
        }
    }

    /// Feed a raw search keystroke.
    ///
    /// The committed search string only changes once the input has been
    /// quiet for the debounce window; until then the page stays put.
    pub fn search_input(&mut self, raw: impl Into<String>) {
        self.query.set(raw.into());
    }

    /// Adopt the settled query value.
    ///
    /// Resets pagination to page 1 when the committed search actually
    /// changed; adopting an unchanged value leaves the current page alone.
    pub fn commit_search(&mut self) {
        let settled = self.query.committed();
        if settled != self.filter.search {
            self.filter.search = settled;
            self.pager.reset();
        }
    }

    /// Wait for the next query settle and adopt it.
    ///
    /// Returns `false` if the query channel is gone (the view is being torn
    /// down) and no commit will ever arrive.
    pub async fn settled(&mut self) -> bool {
        if self.settled_rx.changed().await.is_err() {
            return false;
        }
        self.settled_rx.borrow_and_update();
        self.commit_search();
        true
    }

    /// Change the status/category selector; always resets to page 1
    pub fn set_facet(&mut self, facet: Option<String>) {
        self.filter.facet = facet;
        self.pager.reset();
    }

    /// The current committed filter state
    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    /// The shared collection behind this view
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    /// Number of records passing the current filter
    pub fn filtered_len(&self) -> usize {
        self.filter.count(&self.collection.snapshot())
    }

    /// Compute the currently visible page.
    ///
    /// Snapshot → filter → clamp → slice. An empty filtered population
    /// yields an empty record list with `total_pages == 0`.
    pub fn page(&mut self) -> Page<T> {
        let filtered = self.filter.apply(&self.collection.snapshot());
        let total = filtered.len();
        self.pager.clamp(total);
        let (start, end) = self.pager.window(total);
        Page {
            records: filtered[start..end].to_vec(),
            meta: self.pager.meta(total),
        }
    }

    /// Navigate to `page`, clamped into the valid range
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.filtered_len();
        self.pager.go_to(page, total);
    }

    /// Advance one page; a no-op on the last page
    pub fn next_page(&mut self) {
        let total = self.filtered_len();
        self.pager.next(total);
    }

    /// Go back one page; a no-op on the first page
    pub fn prev_page(&mut self) {
        let total = self.filtered_len();
        self.pager.prev(total);
    }

    /// Tear the view down, cancelling any pending query commit
    pub fn teardown(&mut self) {
        self.query.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::tests::Note;
    use tokio::time::sleep;

    const WINDOW: Duration = Duration::from_millis(300);

    fn notes(n: usize) -> Collection<Note> {
        Collection::from_records((0..n).map(|i| Note::new(&format!("note {i}"), "work")))
    }

    #[tokio::test]
    async fn test_page_windows() {
        let mut view = ListController::new(notes(23), 8, WINDOW);

        let page = view.page();
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.records.len(), 8);

        view.go_to_page(3);
        let page = view.page();
        assert_eq!(page.records.len(), 7);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_search_resets_page() {
        let collection = Collection::from_records(
            (0..20)
                .map(|i| Note::new(&format!("meeting {i}"), "work"))
                .chain([Note::new("budget", "home")]),
        );
        let mut view = ListController::new(collection, 8, WINDOW);
        view.go_to_page(3);
        assert_eq!(view.page().meta.page, 3);

        view.search_input("bud");
        // raw input alone neither filters nor resets
        assert_eq!(view.page().meta.page, 3);
        sleep(WINDOW).await;

        assert!(view.settled().await);
        let page = view.page();
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].title, "budget");
    }

    #[tokio::test]
    async fn test_facet_change_resets_page() {
        let mut view = ListController::new(notes(23), 8, WINDOW);
        view.go_to_page(2);

        view.set_facet(Some("home".to_string()));
        let page = view.page();
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.total_pages, 0);
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn test_delete_on_last_page_clamps() {
        let collection = notes(9);
        let mut view = ListController::new(collection.clone(), 8, WINDOW);
        view.go_to_page(2);
        let page = view.page();
        assert_eq!(page.records.len(), 1);

        collection.remove(&page.records[0].id);
        let page = view.page();
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total, 8);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_of_unchanged_search_keeps_page() {
        let mut view = ListController::new(notes(23), 8, WINDOW);
        view.go_to_page(2);

        // commit with nothing pending adopts the same empty string
        view.commit_search();
        assert_eq!(view.page().meta.page, 2);
    }
}
