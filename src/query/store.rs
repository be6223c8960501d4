//! The query state store: filter/sort/page state and the request lifecycle.
//!
//! All transitions are synchronous methods; mutators that change the result
//! set return a [`FetchSpec`] describing the fetch the shell must issue.
//! Each spec carries a monotonically increasing sequence number, and
//! [`QueryStore::apply_list_outcome`] accepts a response only when its
//! sequence number matches the most recently issued request — "last request
//! wins", never "last response wins". Responses to superseded requests are
//! dropped without touching any state.
//!
//! # State machine
//!
//! Per state change:
//!
//! 1. A mutator updates query state synchronously, resetting `page` to 1
//!    whenever the change invalidates the prior page's meaning (any change
//!    to committed search, filters, or sort).
//! 2. The mutator derives request parameters and returns a `FetchSpec`
//!    tagged with the next sequence number; `loading` becomes true and any
//!    previous error is cleared.
//! 3. The shell performs the fetch and eventually feeds the tagged outcome
//!    back through `apply_list_outcome`. Stale outcomes are discarded;
//!    current ones replace the list wholesale (success) or set the error
//!    banner string (failure), clearing `loading` either way.
//!
//! Raw search edits are the one exception: they update `raw_search`
//! immediately and arm the debouncer, but derive nothing until the quiet
//! window elapses and the committed value actually changes.
//!
//! Failures are terminal for their generation — no automatic retry. The
//! last successfully applied list survives underneath the error until a
//! newer success replaces it.

use crate::api::{ListPage, ListParams};
use crate::model::{ApiError, Incident, Severity, Status};
use crate::query::debounce::Debouncer;
use crate::query::sort::{next_sort, SortColumn, SortSpec};
use std::time::{Duration, Instant};
use tracing::debug;

/// A fetch the shell must issue: derived parameters tagged with the
/// request sequence number to compare at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    /// Sequence number of this request generation.
    pub seq: u64,
    /// Derived request parameters.
    pub params: ListParams,
}

/// Read-only view of the store for the rendering surface.
#[derive(Debug, Clone, Copy)]
pub struct ListSnapshot<'a> {
    /// Incidents from the last successfully applied fetch.
    pub items: &'a [Incident],
    /// Total matching records server-side.
    pub total: u64,
    /// Page the server served (echoed, not recomputed).
    pub page: u32,
    /// Total pages server-side.
    pub total_pages: u32,
    /// Whether a request is currently in flight.
    pub loading: bool,
    /// Flattened error message for the current generation, if it failed.
    pub error: Option<&'a str>,
    /// Literal search box contents.
    pub raw_search: &'a str,
    /// Severity filter in effect.
    pub severity: Option<Severity>,
    /// Status filter in effect.
    pub status: Option<Status>,
    /// Sort specification in effect.
    pub sort: SortSpec,
}

/// Owns all list-view query state and enforces the request ordering rule.
#[derive(Debug)]
pub struct QueryStore {
    // Query state
    page: u32,
    raw_search: String,
    committed_search: String,
    severity_filter: Option<Severity>,
    status_filter: Option<Status>,
    sort: SortSpec,
    per_page: u32,

    // Request lifecycle
    debouncer: Debouncer<String>,
    seq: u64,
    loading: bool,
    error: Option<String>,
    list: ListPage,
}

impl QueryStore {
    /// Create a store with default query state (page 1, no filters,
    /// newest-first sort) and an empty result set.
    pub fn new(per_page: u32, debounce_delay: Duration) -> Self {
        Self {
            page: 1,
            raw_search: String::new(),
            committed_search: String::new(),
            severity_filter: None,
            status_filter: None,
            sort: SortSpec::default(),
            per_page,
            debouncer: Debouncer::new(debounce_delay),
            seq: 0,
            loading: false,
            error: None,
            list: ListPage::default(),
        }
    }

    /// Seed initial search/filters before the first fetch (CLI flags).
    ///
    /// Sets both raw and committed search directly — there is nothing to
    /// debounce at startup. Does not derive a fetch; callers follow up
    /// with [`reload`](Self::reload).
    pub fn seed(
        &mut self,
        search: Option<String>,
        severity: Option<Severity>,
        status: Option<Status>,
    ) {
        if let Some(search) = search {
            self.raw_search = search.clone();
            self.committed_search = search;
        }
        self.severity_filter = severity;
        self.status_filter = status;
    }

    // ===== Mutators =====

    /// Record a search box edit at time `now`.
    ///
    /// Updates the raw text synchronously and (re)arms the debouncer; the
    /// page is *not* reset and no fetch is derived until the edit commits.
    pub fn set_raw_search(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.raw_search = text.clone();
        self.debouncer.trigger(text, now);
    }

    /// Poll the search debouncer; commit and derive a fetch if it fired.
    ///
    /// Call once per event-loop iteration. Committing a value equal to the
    /// current committed search is a no-op (no fetch), so typing and then
    /// undoing an edit within one quiet window costs nothing.
    pub fn poll_search(&mut self, now: Instant) -> Option<FetchSpec> {
        let pending = self.debouncer.poll(now)?;
        self.commit_search(pending)
    }

    /// Commit any pending search immediately (Enter in the search box).
    pub fn flush_search(&mut self) -> Option<FetchSpec> {
        let pending = self.debouncer.flush()?;
        self.commit_search(pending)
    }

    /// Set or clear the severity filter. No-op when unchanged.
    pub fn set_severity_filter(&mut self, severity: Option<Severity>) -> Option<FetchSpec> {
        if self.severity_filter == severity {
            return None;
        }
        self.severity_filter = severity;
        self.page = 1;
        Some(self.derive_fetch())
    }

    /// Set or clear the status filter. No-op when unchanged.
    pub fn set_status_filter(&mut self, status: Option<Status>) -> Option<FetchSpec> {
        if self.status_filter == status {
            return None;
        }
        self.status_filter = status;
        self.page = 1;
        Some(self.derive_fetch())
    }

    /// Toggle sort on `column` per the header-click rule.
    ///
    /// Always a state change (same column flips direction), so always
    /// derives a fetch and resets the page.
    pub fn toggle_sort(&mut self, column: SortColumn) -> FetchSpec {
        self.sort = next_sort(self.sort, column);
        self.page = 1;
        self.derive_fetch()
    }

    /// Go to a specific page (1-based; clamped to at least 1).
    ///
    /// No-op when already on that page.
    pub fn set_page(&mut self, page: u32) -> Option<FetchSpec> {
        let page = page.max(1);
        if self.page == page {
            return None;
        }
        self.page = page;
        Some(self.derive_fetch())
    }

    /// Restore all defaults in one compound transition.
    ///
    /// Clears raw and committed search (cancelling any pending debounce),
    /// both filters, and the sort, and resets the page — deriving exactly
    /// one fetch. From an already-default state, derives nothing.
    pub fn reset_filters(&mut self) -> Option<FetchSpec> {
        self.debouncer.cancel();
        if self.is_default() {
            self.raw_search.clear();
            return None;
        }
        self.raw_search.clear();
        self.committed_search.clear();
        self.severity_filter = None;
        self.status_filter = None;
        self.sort = SortSpec::default();
        self.page = 1;
        Some(self.derive_fetch())
    }

    /// Re-issue a fetch for the current state (initial load, manual
    /// refresh, retry after failure).
    pub fn reload(&mut self) -> FetchSpec {
        self.derive_fetch()
    }

    // ===== Response application =====

    /// Apply a fetch outcome if it belongs to the current generation.
    ///
    /// Returns `true` when the outcome was applied; stale outcomes —
    /// successes and failures alike — are discarded and return `false`.
    pub fn apply_list_outcome(
        &mut self,
        seq: u64,
        outcome: Result<ListPage, ApiError>,
    ) -> bool {
        if seq != self.seq {
            debug!(seq, current = self.seq, "discarding stale list response");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.list = page;
                self.error = None;
            }
            Err(err) => {
                debug!(seq, error = %err, "list fetch failed");
                // Prior list retained underneath the banner.
                self.error = Some(err.display_message());
            }
        }
        true
    }

    // ===== Accessors =====

    /// Read-only view for the rendering surface.
    pub fn snapshot(&self) -> ListSnapshot<'_> {
        ListSnapshot {
            items: &self.list.items,
            total: self.list.total,
            page: self.list.page,
            total_pages: self.list.total_pages,
            loading: self.loading,
            error: self.error.as_deref(),
            raw_search: &self.raw_search,
            severity: self.severity_filter,
            status: self.status_filter,
            sort: self.sort,
        }
    }

    /// The page the query state currently requests (not the server echo).
    pub fn requested_page(&self) -> u32 {
        self.page
    }

    /// Committed (debounced) search text.
    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    /// Whether an uncommitted search edit is waiting on the debouncer.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_armed()
    }

    /// Sequence number of the most recently issued request.
    pub fn current_seq(&self) -> u64 {
        self.seq
    }

    // ===== Internal =====

    fn commit_search(&mut self, pending: String) -> Option<FetchSpec> {
        if pending == self.committed_search {
            return None;
        }
        self.committed_search = pending;
        self.page = 1;
        Some(self.derive_fetch())
    }

    fn derive_fetch(&mut self) -> FetchSpec {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        let search = self.committed_search.trim();
        FetchSpec {
            seq: self.seq,
            params: ListParams {
                page: self.page,
                per_page: self.per_page,
                search: (!search.is_empty()).then(|| self.committed_search.clone()),
                severity: self.severity_filter,
                status: self.status_filter,
                sort_by: self.sort.column,
                order: self.sort.order,
            },
        }
    }

    fn is_default(&self) -> bool {
        self.page == 1
            && self.committed_search.is_empty()
            && self.severity_filter.is_none()
            && self.status_filter.is_none()
            && self.sort == SortSpec::default()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
