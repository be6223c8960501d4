//! Collection API collaborator.
//!
//! The query core is agnostic to transport: it only needs something that
//! satisfies [`IncidentApi`]. The real implementation is the blocking HTTP
//! client in [`http`]; tests substitute their own.
//!
//! Fetches run on plain threads. Each issued request carries the sequence
//! number the query store tagged it with; the thread sends the tagged
//! outcome back over an mpsc channel and the event loop hands it to the
//! store, which discards anything stale.

pub mod http;

pub use http::HttpApi;

use crate::model::{ApiError, Incident, Severity, Status};
use crate::query::{FetchSpec, SortColumn, SortOrder};
use serde::Deserialize;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tracing::debug;

/// Request parameters for a list fetch, derived from query state.
///
/// Optional fields are included in the request only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Committed free-text search, if non-empty after trimming.
    pub search: Option<String>,
    /// Severity filter, if any.
    pub severity: Option<Severity>,
    /// Status filter, if any.
    pub status: Option<Status>,
    /// Column to sort on.
    pub sort_by: SortColumn,
    /// Sort direction.
    pub order: SortOrder,
}

impl ListParams {
    /// Render as query-string pairs in a stable order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(severity) = self.severity {
            pairs.push(("severity", severity.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs.push(("sort_by", self.sort_by.as_param().to_string()));
        pairs.push(("order", self.order.as_param().to_string()));
        pairs
    }
}

/// One page of list results, echoing the server's pagination view.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Incidents on this page, in server sort order.
    #[serde(default)]
    pub items: Vec<Incident>,
    /// Total matching records across all pages.
    #[serde(default)]
    pub total: u64,
    /// The page the server actually served (may differ from the request
    /// when the requested page is out of range).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size the server applied.
    #[serde(default)]
    pub per_page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

/// Fields accepted when creating or updating an incident.
///
/// All fields optional so the same shape serves `create` (server validates
/// required fields) and `update` (partial patch). `None` fields are
/// omitted from the request body.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct IncidentPayload {
    /// Incident title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Affected service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Severity classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Owning person; `Some(None)` explicitly clears the owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<String>>,
    /// Free-text summary; `Some(None)` explicitly clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Option<String>>,
}

/// The collection API capability the client consumes.
///
/// Methods block; callers run them on fetch threads, never on the UI
/// thread. `list_incidents` is the only method the query core drives; the
/// rest serve the detail surface.
pub trait IncidentApi: Send + Sync {
    /// Fetch one page of incidents.
    fn list_incidents(&self, params: &ListParams) -> Result<ListPage, ApiError>;

    /// Fetch a single incident by id.
    fn get_incident(&self, id: &str) -> Result<Incident, ApiError>;

    /// Create a new incident.
    fn create_incident(&self, payload: &IncidentPayload) -> Result<Incident, ApiError>;

    /// Patch fields of an existing incident.
    fn update_incident(&self, id: &str, payload: &IncidentPayload)
        -> Result<Incident, ApiError>;
}

/// A tagged fetch outcome delivered to the event loop.
#[derive(Debug)]
pub enum ApiEvent {
    /// Outcome of a list fetch issued by the query store.
    List {
        /// Sequence number the store tagged the request with.
        seq: u64,
        /// Server page or structured failure.
        outcome: Result<ListPage, ApiError>,
    },
    /// Outcome of a detail fetch.
    Detail {
        /// Detail-view generation the request belongs to.
        seq: u64,
        /// The incident or a structured failure.
        outcome: Result<Incident, ApiError>,
    },
}

/// Issue a list fetch on its own thread.
///
/// The outcome is tagged with the spec's sequence number and sent back over
/// `tx`. A send failure means the receiver (the event loop) is gone, which
/// only happens during shutdown; the outcome is dropped.
pub fn spawn_list_fetch(
    api: Arc<dyn IncidentApi>,
    spec: FetchSpec,
    tx: Sender<ApiEvent>,
) {
    debug!(seq = spec.seq, params = ?spec.params, "issuing list fetch");
    std::thread::spawn(move || {
        let outcome = api.list_incidents(&spec.params);
        let _ = tx.send(ApiEvent::List {
            seq: spec.seq,
            outcome,
        });
    });
}

/// Issue a detail fetch on its own thread, tagged with the detail-view
/// generation `seq`.
pub fn spawn_detail_fetch(
    api: Arc<dyn IncidentApi>,
    id: String,
    seq: u64,
    tx: Sender<ApiEvent>,
) {
    debug!(seq, id = %id, "issuing detail fetch");
    std::thread::spawn(move || {
        let outcome = api.get_incident(&id);
        let _ = tx.send(ApiEvent::Detail { seq, outcome });
    });
}
