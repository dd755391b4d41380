//! Paginator and server-mode load state machine

use crate::source::PageMeta;
use crate::source::PageQuery;

/// How the grid pages its rows.
///
/// The two modes are mutually exclusive per grid instance: a client grid
/// slices its own view, a server grid only tracks what the backend reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// The grid slices the filtered/sorted view locally.
    Client,
    /// The backend serves one page at a time; the grid never slices.
    Server,
}

/// A snapshot of the pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Zero-based page number.
    pub index: usize,
    /// Page length.
    pub size: usize,
    /// Known row count across all pages, if any.
    pub total: Option<usize>,
}

/// Server-mode loading state.
///
/// Transitions are driven only by explicit navigation and by the owner
/// reporting fetch outcomes; the grid performs no retries of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch in flight.
    Idle,
    /// A fetch for the given page is in flight.
    Loading {
        /// The requested zero-based page.
        page: usize,
    },
    /// The most recent fetch failed; re-navigation retries it.
    Failed {
        /// The page whose fetch failed.
        page: usize,
    },
}

/// Whether a reported fetch outcome was applied or discarded as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The outcome matched the most recent request and took effect.
    Applied,
    /// The outcome belonged to a superseded request and was dropped.
    Stale,
}

/// Slices rows into pages, or tracks the backend's paging.
///
/// In client mode the paginator derives `total` and the page count from the
/// view it slices. In server mode it only records what each fetch reports,
/// and owns the last-write-wins guard that keeps a slow response for an
/// abandoned page from overwriting the current view.
#[derive(Debug, Clone)]
pub struct Paginator {
    mode: PageMode,
    index: usize,
    size: usize,
    total: Option<usize>,
    pages: usize,
    load: LoadState,
}

impl Paginator {
    /// Creates a client-mode paginator with the given page size.
    pub fn client(size: usize) -> Self {
        Self::new(PageMode::Client, size)
    }

    /// Creates a server-mode paginator with the given page size.
    pub fn server(size: usize) -> Self {
        Self::new(PageMode::Server, size)
    }

    fn new(mode: PageMode, size: usize) -> Self {
        Self {
            mode,
            index: 0,
            size,
            total: None,
            pages: 1,
            load: LoadState::Idle,
        }
    }

    /// Returns the operating mode.
    pub fn mode(&self) -> PageMode {
        self.mode
    }

    /// Returns the current pagination snapshot.
    pub fn state(&self) -> PageState {
        PageState {
            index: self.index,
            size: self.size,
            total: self.total,
        }
    }

    /// Returns the zero-based current page.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the page size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of pages (always at least 1).
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Returns `true` if the given page exists.
    pub fn in_range(&self, index: usize) -> bool {
        index < self.pages
    }

    /// Returns `true` if a page after the current one exists.
    pub fn has_next(&self) -> bool {
        self.in_range(self.index + 1)
    }

    /// Returns `true` if a page before the current one exists.
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    // =========================================================================
    // Client mode
    // =========================================================================

    /// Slices the current page out of a view (client mode).
    pub fn slice<'a>(&self, view: &'a [usize]) -> &'a [usize] {
        let start = (self.index * self.size).min(view.len());
        let end = (start + self.size).min(view.len());
        &view[start..end]
    }

    /// Moves to a page, returning `false` for an out-of-range no-op.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.in_range(index) {
            return false;
        }
        self.index = index;
        true
    }

    /// Moves to the next page, returning `false` at the last page.
    pub fn next(&mut self) -> bool {
        self.go_to(self.index + 1)
    }

    /// Moves to the previous page, returning `false` at the first page.
    pub fn previous(&mut self) -> bool {
        self.index > 0 && self.go_to(self.index - 1)
    }

    /// Updates the derived totals after the client view changed.
    ///
    /// Clamps the current page so a shrinking view never leaves the paginator
    /// past the end.
    pub(crate) fn set_client_total(&mut self, total: usize) {
        self.total = Some(total);
        self.pages = total.div_ceil(self.size).max(1);
        if self.index >= self.pages {
            self.index = self.pages - 1;
        }
    }

    // =========================================================================
    // Server mode
    // =========================================================================

    /// Returns the server-mode loading state.
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Records a navigation request and returns the query to issue.
    ///
    /// Calling again before the previous fetch resolves supersedes it:
    /// only the outcome for the latest requested page will be applied.
    pub fn begin_load(&mut self, page: usize) -> PageQuery {
        self.load = LoadState::Loading { page };
        PageQuery {
            index: page,
            size: self.size,
        }
    }

    /// Reports a successful fetch for a page.
    ///
    /// Returns [`LoadOutcome::Stale`] without touching any state when the
    /// page is not the most recently requested one.
    pub fn complete_load(&mut self, page: usize, meta: Option<&PageMeta>) -> LoadOutcome {
        match self.load {
            LoadState::Loading { page: requested } if requested == page => {
                if let Some(meta) = meta {
                    self.apply_meta(meta);
                } else {
                    self.index = page;
                }
                self.load = LoadState::Idle;
                LoadOutcome::Applied
            }
            _ => LoadOutcome::Stale,
        }
    }

    /// Reports a failed fetch for a page.
    ///
    /// A failure for a superseded page is dropped silently, like any other
    /// stale outcome.
    pub fn fail_load(&mut self, page: usize) -> LoadOutcome {
        match self.load {
            LoadState::Loading { page: requested } if requested == page => {
                self.load = LoadState::Failed { page };
                LoadOutcome::Applied
            }
            _ => LoadOutcome::Stale,
        }
    }

    fn apply_meta(&mut self, meta: &PageMeta) {
        self.index = meta.page_index();
        self.size = meta.per_page;
        self.total = Some(meta.total);
        self.pages = meta.last_page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_slicing_25_rows_by_10() {
        let view: Vec<usize> = (0..25).collect();
        let mut pager = Paginator::client(10);
        pager.set_client_total(view.len());

        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.slice(&view).len(), 10);
        assert!(pager.next());
        assert_eq!(pager.slice(&view).len(), 10);
        assert!(pager.next());
        assert_eq!(pager.slice(&view).len(), 5);
        assert!(!pager.next());
    }

    #[test]
    fn test_empty_view_has_one_empty_page() {
        let view: Vec<usize> = Vec::new();
        let mut pager = Paginator::client(10);
        pager.set_client_total(0);
        assert_eq!(pager.page_count(), 1);
        assert!(pager.slice(&view).is_empty());
    }

    #[test]
    fn test_shrinking_view_clamps_index() {
        let mut pager = Paginator::client(10);
        pager.set_client_total(25);
        assert!(pager.go_to(2));
        pager.set_client_total(7);
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut pager = Paginator::server(10);
        pager.begin_load(1);
        // Superseded by a newer navigation before the fetch resolved.
        pager.begin_load(2);

        assert_eq!(pager.complete_load(1, None), LoadOutcome::Stale);
        assert_eq!(pager.load_state(), LoadState::Loading { page: 2 });
        assert_eq!(pager.complete_load(2, None), LoadOutcome::Applied);
        assert_eq!(pager.index(), 2);
        assert_eq!(pager.load_state(), LoadState::Idle);
    }

    #[test]
    fn test_failed_load_then_retry() {
        let mut pager = Paginator::server(10);
        pager.begin_load(1);
        assert_eq!(pager.fail_load(1), LoadOutcome::Applied);
        assert_eq!(pager.load_state(), LoadState::Failed { page: 1 });

        // Re-navigation retries the fetch.
        pager.begin_load(1);
        assert_eq!(pager.load_state(), LoadState::Loading { page: 1 });
    }

    #[test]
    fn test_server_meta_updates_bounds() {
        let mut pager = Paginator::server(10);
        pager.begin_load(0);
        let meta = PageMeta {
            current_page: 1,
            last_page: 3,
            per_page: 10,
            total: 25,
        };
        pager.complete_load(0, Some(&meta));
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.state().total, Some(25));
        assert!(pager.in_range(2));
        assert!(!pager.in_range(3));
    }
}
