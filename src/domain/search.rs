//! Paginated medicine search state machine.
//!
//! The state lives in the cookie session and is mutated only through the
//! operations below: a query change or manual search resets to page one,
//! next/previous move within `[1, total_pages]`, and fetched results replace
//! the previous page wholesale. Every issued fetch carries a sequence number;
//! results that arrive for a superseded fetch are discarded instead of
//! overwriting newer state.

use serde::{Deserialize, Serialize};

/// Number of results per page, fixed by the gateway search endpoint.
pub const PAGE_SIZE: usize = 10;

/// A fetch the caller must perform against the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFetch {
    pub query: String,
    pub page: usize,
    pub seq: u64,
}

/// Session-held state of the paginated search component.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// 1-based page index. Stays within `[1, total_pages]` while results
    /// exist; `1` when nothing has been fetched yet.
    pub current_page: usize,
    /// Total number of matches reported by the latest applied fetch.
    pub total_count: usize,
    /// Medicine names on the currently fetched page.
    pub results: Vec<String>,
    seq: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_count: 0,
            results: Vec::new(),
            seq: 0,
        }
    }
}

impl SearchState {
    /// Total number of pages implied by the latest total count.
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(PAGE_SIZE)
    }

    /// Whether a "next page" activation is allowed.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether a "previous page" activation is allowed.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Sequence number of the most recently issued fetch.
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    /// Starts a search for `query`, resetting to page one.
    ///
    /// Always re-issues the fetch, even when the query is unchanged. An empty
    /// (or whitespace-only) query performs no fetch and clears the current
    /// results so the page shows a "no results" state.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchFetch> {
        let query = query.trim();
        self.query = query.to_string();
        self.current_page = 1;

        if query.is_empty() {
            self.results.clear();
            self.total_count = 0;
            return None;
        }

        Some(self.issue())
    }

    /// Moves to the next page and re-fetches; no-op at the last page.
    pub fn next_page(&mut self) -> Option<SearchFetch> {
        if !self.has_next() {
            return None;
        }
        self.current_page += 1;
        Some(self.issue())
    }

    /// Moves to the previous page and re-fetches; no-op at page one.
    pub fn prev_page(&mut self) -> Option<SearchFetch> {
        if !self.has_prev() {
            return None;
        }
        self.current_page -= 1;
        Some(self.issue())
    }

    /// Applies a fetched result set, replacing the previous page.
    ///
    /// Returns `false` when `seq` does not belong to the most recently issued
    /// fetch; stale responses leave the state untouched. When the new total
    /// leaves `current_page` past the last page, the page is clamped down.
    pub fn apply(&mut self, seq: u64, total_count: usize, results: Vec<String>) -> bool {
        if seq != self.seq {
            return false;
        }

        self.total_count = total_count;
        self.results = results;

        let last_page = self.total_pages().max(1);
        if self.current_page > last_page {
            self.current_page = last_page;
        }

        true
    }

    fn issue(&mut self) -> SearchFetch {
        self.seq += 1;
        SearchFetch {
            query: self.query.clone(),
            page: self.current_page,
            seq: self.seq,
        }
    }
}
