//! Application state and transitions.
//!
//! `AppState` is the root state type: the query store plus the UI state
//! around it (focus, row selection, detail view, help overlay). All
//! transitions are synchronous; fetches are described by return values and
//! performed by the shell, exactly as with the query store itself.

use crate::api::ListPage;
use crate::model::{ApiError, Incident, KeyAction, Severity, Status};
use crate::query::{FetchSpec, QueryStore, SortColumn};
use std::time::{Duration, Instant};

/// Which surface currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The incident table: bound keys dispatch to actions.
    Table,
    /// The search box: printable keys edit the raw search text.
    Search,
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The incident list.
    List,
    /// The read-only detail screen for one incident.
    Detail,
}

/// State of the detail screen.
#[derive(Debug, Clone)]
pub struct DetailState {
    /// Id of the incident being shown.
    pub id: String,
    /// The fetched incident, once its fetch applied.
    pub incident: Option<Incident>,
    /// Whether the detail fetch is in flight.
    pub loading: bool,
    /// Flattened error message if the fetch failed.
    pub error: Option<String>,
}

/// A detail fetch the shell must issue, tagged with the detail-view
/// generation so a superseded fetch can never populate the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFetch {
    /// Incident id to fetch.
    pub id: String,
    /// Detail-view generation of this request.
    pub seq: u64,
}

/// Root application state.
#[derive(Debug)]
pub struct AppState {
    /// The list-view query controller.
    pub query: QueryStore,
    /// Current input focus.
    pub focus: Focus,
    /// Current screen.
    pub route: Route,
    /// Selected row index within the current page (0-based).
    pub selected_row: usize,
    /// Detail screen state; `Some` only while `route == Detail`.
    pub detail: Option<DetailState>,
    /// Whether the help overlay is showing.
    pub help_visible: bool,
    /// Set when the user asks to quit; the event loop exits on seeing it.
    pub should_quit: bool,

    detail_seq: u64,
}

impl AppState {
    /// Create the initial state with default query parameters.
    pub fn new(per_page: u32, debounce_delay: Duration) -> Self {
        Self {
            query: QueryStore::new(per_page, debounce_delay),
            focus: Focus::Table,
            route: Route::List,
            selected_row: 0,
            detail: None,
            help_visible: false,
            should_quit: false,
            detail_seq: 0,
        }
    }

    // ===== List outcomes =====

    /// Apply a list fetch outcome, clamping the row selection to the new
    /// page. Stale outcomes are discarded by the query store.
    pub fn apply_list_outcome(&mut self, seq: u64, outcome: Result<ListPage, ApiError>) -> bool {
        let applied = self.query.apply_list_outcome(seq, outcome);
        if applied {
            let rows = self.query.snapshot().items.len();
            self.selected_row = self.selected_row.min(rows.saturating_sub(1));
        }
        applied
    }

    // ===== Row selection =====

    /// Move selection up one row, saturating at the top.
    pub fn row_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down one row, clamped to the last row.
    pub fn row_down(&mut self) {
        let rows = self.query.snapshot().items.len();
        if rows > 0 {
            self.selected_row = (self.selected_row + 1).min(rows - 1);
        }
    }

    /// The currently selected incident, if the page has any rows.
    pub fn selected_incident(&self) -> Option<&Incident> {
        self.query.snapshot().items.get(self.selected_row)
    }

    // ===== Pagination =====

    /// Go to the next page, if there is one.
    pub fn next_page(&mut self) -> Option<FetchSpec> {
        let snap = self.query.snapshot();
        if snap.page < snap.total_pages {
            self.query.set_page(snap.page + 1)
        } else {
            None
        }
    }

    /// Go to the previous page, if there is one.
    pub fn prev_page(&mut self) -> Option<FetchSpec> {
        let snap = self.query.snapshot();
        if snap.page > 1 {
            self.query.set_page(snap.page - 1)
        } else {
            None
        }
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) -> Option<FetchSpec> {
        self.query.set_page(1)
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) -> Option<FetchSpec> {
        let total_pages = self.query.snapshot().total_pages;
        if total_pages > 1 {
            self.query.set_page(total_pages)
        } else {
            None
        }
    }

    // ===== Filters =====

    /// Advance the severity filter one step through its cycle.
    pub fn cycle_severity(&mut self) -> Option<FetchSpec> {
        let next = Severity::cycle(self.query.snapshot().severity);
        self.query.set_severity_filter(next)
    }

    /// Advance the status filter one step through its cycle.
    pub fn cycle_status(&mut self) -> Option<FetchSpec> {
        let next = Status::cycle(self.query.snapshot().status);
        self.query.set_status_filter(next)
    }

    /// Toggle sort on the column at `index` in display order.
    pub fn toggle_sort_by_index(&mut self, index: usize) -> Option<FetchSpec> {
        let column = *SortColumn::ALL.get(index)?;
        Some(self.query.toggle_sort(column))
    }

    // ===== Detail screen =====

    /// Open the detail screen for the selected row.
    ///
    /// Returns the fetch the shell must issue, or `None` when the page has
    /// no rows. Bumps the detail generation so outcomes of any earlier
    /// detail fetch are ignored from here on.
    pub fn open_detail(&mut self) -> Option<DetailFetch> {
        let id = self.selected_incident()?.id.clone();
        self.detail_seq += 1;
        self.route = Route::Detail;
        self.detail = Some(DetailState {
            id: id.clone(),
            incident: None,
            loading: true,
            error: None,
        });
        Some(DetailFetch {
            id,
            seq: self.detail_seq,
        })
    }

    /// Leave the detail screen; the list state is untouched.
    pub fn close_detail(&mut self) {
        self.route = Route::List;
        self.detail = None;
        // Anything still in flight for the old screen is now stale.
        self.detail_seq += 1;
    }

    /// Apply a detail fetch outcome if it belongs to the current detail
    /// generation; superseded outcomes are discarded.
    pub fn apply_detail_outcome(
        &mut self,
        seq: u64,
        outcome: Result<Incident, ApiError>,
    ) -> bool {
        if seq != self.detail_seq {
            return false;
        }
        let Some(detail) = self.detail.as_mut() else {
            return false;
        };
        detail.loading = false;
        match outcome {
            Ok(incident) => detail.incident = Some(incident),
            Err(err) => detail.error = Some(err.display_message()),
        }
        true
    }

    // ===== Key dispatch =====

    /// Apply a bound key action.
    ///
    /// Returns the list fetch to issue, if the action derived one. Detail
    /// opening is handled separately by the event loop because it issues a
    /// different kind of fetch.
    pub fn apply_action(&mut self, action: KeyAction) -> Option<FetchSpec> {
        match action {
            KeyAction::RowUp => {
                self.row_up();
                None
            }
            KeyAction::RowDown => {
                self.row_down();
                None
            }
            KeyAction::NextPage => self.next_page(),
            KeyAction::PrevPage => self.prev_page(),
            KeyAction::FirstPage => self.first_page(),
            KeyAction::LastPage => self.last_page(),
            KeyAction::StartSearch => {
                self.focus = Focus::Search;
                None
            }
            KeyAction::CycleSeverity => self.cycle_severity(),
            KeyAction::CycleStatus => self.cycle_status(),
            KeyAction::ResetFilters => self.query.reset_filters(),
            KeyAction::SortColumn(index) => self.toggle_sort_by_index(index),
            KeyAction::Reload => Some(self.query.reload()),
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                None
            }
            KeyAction::Quit => {
                match self.route {
                    Route::Detail => self.close_detail(),
                    Route::List => self.should_quit = true,
                }
                None
            }
            // Issues a detail fetch, not a list fetch; see the event loop.
            KeyAction::OpenDetail => None,
        }
    }

    /// Record a search box keystroke.
    pub fn search_input(&mut self, ch: char, now: Instant) {
        let mut text = self.query.snapshot().raw_search.to_string();
        text.push(ch);
        self.query.set_raw_search(text, now);
    }

    /// Delete the last character of the search text.
    pub fn search_backspace(&mut self, now: Instant) {
        let mut text = self.query.snapshot().raw_search.to_string();
        if text.pop().is_some() {
            self.query.set_raw_search(text, now);
        }
    }

    /// Leave search input mode, letting any pending edit commit on its
    /// debounce deadline.
    pub fn leave_search(&mut self) {
        self.focus = Focus::Table;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
