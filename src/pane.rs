use crate::action::PaneId;
use crate::pagination::{Direction, PageCursor};
use crate::types::Page;

/// State for one paginated list: the stored search string, an exclusively
/// owned cursor, the current page's items and a fetch sequence token.
///
/// Every fetch bumps `seq`; the matching loaded action carries the token
/// back, and `apply_page` drops anything that has been superseded in the
/// meantime. That closes the window where a slow response for an older page
/// could overwrite a newer one.
#[derive(Debug)]
pub struct ListPane<T> {
    id: PaneId,
    cursor: PageCursor,
    query: String,
    items: Vec<T>,
    selected: usize,
    seq: u64,
    loading: bool,
}

impl<T> ListPane<T> {
    pub fn new(id: PaneId, per_page: u64) -> Self {
        Self {
            id,
            cursor: PageCursor::new(per_page),
            query: String::new(),
            items: Vec::new(),
            selected: 0,
            seq: 0,
            loading: false,
        }
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a search has ever been submitted on this pane.
    pub fn has_searched(&self) -> bool {
        self.seq > 0
    }

    /// Start a fresh search: reset the cursor, remember the query, and
    /// return the token the eventual response must carry.
    pub fn begin_search(&mut self, query: &str) -> u64 {
        self.query = query.to_string();
        self.cursor.reset();
        self.loading = true;
        self.bump_seq()
    }

    /// Start a prev/next fetch with the stored query. Returns `None` when
    /// the step is illegal (at offset zero, or the total is unknown or
    /// exhausted); the caller treats that as a no-op.
    pub fn begin_paginate(&mut self, dir: Direction) -> Option<u64> {
        if !self.cursor.can_go(dir) {
            return None;
        }
        self.cursor.advance(dir);
        self.loading = true;
        Some(self.bump_seq())
    }

    /// Refetch the current offset, e.g. the first page of a user's repos.
    pub fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.bump_seq()
    }

    /// Apply a fetched page. Returns `false` without touching items or the
    /// stored total when the token is stale or the page is incomplete; the
    /// previously rendered content stays up rather than flashing partial
    /// data.
    pub fn apply_page(&mut self, page: Page<T>, seq: u64) -> bool {
        if seq != self.seq {
            tracing::debug!(pane = ?self.id, seq, latest = self.seq, "dropping superseded page");
            return false;
        }
        self.loading = false;
        if page.incomplete {
            tracing::debug!(pane = ?self.id, "dropping incomplete page");
            return false;
        }
        if let Some(total) = page.total_count {
            self.cursor.set_total(total);
        }
        self.items = page.items;
        self.selected = 0;
        true
    }

    /// Clear the loading flag after a failed fetch; content is untouched.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// External total for panes whose listing endpoint reports none (a
    /// user's repos total comes from the profile's `public_repos`).
    pub fn set_total(&mut self, total: u64) {
        self.cursor.set_total(total);
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    /// Last-page heuristic: a short page means there is nothing further, so
    /// the prev/next controls are not shown at all.
    pub fn has_pagination_controls(&self) -> bool {
        self.items.len() as u64 >= self.cursor.per_page()
    }

    fn bump_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}
