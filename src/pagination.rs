/// Direction of a pagination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Offset/limit cursor for one list.
///
/// `page` is an absolute item offset, not a page index: prev/next move it by
/// `per_page` so the cursor maps directly onto the backend's offset/limit
/// fetch contract. The next-guard compares the offset against the raw total
/// count, matching the upstream behavior this client was built against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    page: u64,
    per_page: u64,
    total_count: Option<u64>,
}

impl PageCursor {
    pub fn new(per_page: u64) -> Self {
        debug_assert!(per_page > 0);
        Self {
            page: 0,
            per_page,
            total_count: None,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn can_go(&self, dir: Direction) -> bool {
        match dir {
            Direction::Prev => self.page > 0,
            Direction::Next => self.total_count.is_some_and(|total| self.page < total),
        }
    }

    /// Move the cursor one page. Callers must check `can_go` first; stepping
    /// past a boundary is a caller bug.
    pub fn advance(&mut self, dir: Direction) {
        debug_assert!(self.can_go(dir));
        match dir {
            Direction::Prev => self.page = self.page.saturating_sub(self.per_page),
            Direction::Next => self.page += self.per_page,
        }
    }

    /// Overwrite the known total. Called once per successful fetch; the
    /// total is the filter's current match count, never a running sum.
    pub fn set_total(&mut self, total: u64) {
        self.total_count = Some(total);
    }

    /// Back to page 0 with an unknown total, for a fresh search.
    pub fn reset(&mut self) {
        self.page = 0;
        self.total_count = None;
    }
}
