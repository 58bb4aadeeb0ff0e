use crate::models::{PageView, RankedRecord, Record};
use crate::pagination;
use crate::ranking;

/// Search text and current page, owned by whoever drives the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub query: String,
    pub page: i64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl BoardState {
    pub fn new(query: impl Into<String>, page: i64) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }

    /// A new search always starts from the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn go_to(&mut self, page: i64, total_pages: usize) {
        self.page = pagination::clamp_page(page, total_pages) as i64;
    }

    /// Steps are taken from the page actually shown, so an out-of-range
    /// page is clamped before moving.
    pub fn next_page(&mut self, total_pages: usize) {
        let current = pagination::clamp_page(self.page, total_pages) as i64;
        self.go_to(current + 1, total_pages);
    }

    pub fn prev_page(&mut self, total_pages: usize) {
        let current = pagination::clamp_page(self.page, total_pages) as i64;
        self.go_to(current - 1, total_pages);
    }
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    roster: Vec<Record>,
    page_size: usize,
}

impl Leaderboard {
    pub fn new(roster: Vec<Record>, page_size: usize) -> Self {
        Self {
            roster,
            page_size: page_size.max(1),
        }
    }

    pub fn roster(&self) -> &[Record] {
        &self.roster
    }

    pub fn ranked(&self) -> Vec<RankedRecord<'_>> {
        ranking::rank(&self.roster)
    }

    pub fn matching(&self, query: &str) -> Vec<RankedRecord<'_>> {
        ranking::query(&self.ranked(), query)
    }

    pub fn total_pages(&self, query: &str) -> usize {
        pagination::total_pages(self.matching(query).len(), self.page_size)
    }

    /// Ranks, filters and slices in one pass so the page, its ranks and the
    /// page count always agree.
    pub fn view(&self, state: &BoardState) -> PageView<'_> {
        let filtered = self.matching(&state.query);
        let (slice, total_pages) = pagination::paginate(&filtered, state.page, self.page_size);
        let page = pagination::clamp_page(state.page, total_pages);

        log::debug!(
            "query {:?} matched {} of {} records, page {}/{}",
            state.query,
            filtered.len(),
            self.roster.len(),
            page,
            total_pages
        );

        PageView {
            query: state.query.clone(),
            page,
            total_pages,
            total_matches: filtered.len(),
            entries: slice.to_vec(),
        }
    }
}
