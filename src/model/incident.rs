//! Incident record types.
//!
//! The client only ever holds read-only snapshots of incidents; the
//! collection API owns the records and assigns `id`, `created_at`, and
//! `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An incident record as returned by the collection API.
///
/// Timestamps are server-assigned and immutable from the client side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Opaque stable identifier assigned by the server.
    pub id: String,
    /// Short human-readable title (3–255 characters server-side).
    pub title: String,
    /// Affected service name (≤120 characters server-side).
    pub service: String,
    /// Severity classification.
    pub severity: Severity,
    /// Lifecycle status.
    pub status: Status,
    /// Person currently owning the incident, if anyone.
    pub owner: Option<String>,
    /// Free-text description.
    pub summary: Option<String>,
    /// When the record was created (server clock).
    pub created_at: DateTime<Utc>,
    /// When the record was last modified (server clock).
    pub updated_at: DateTime<Utc>,
}

/// Incident severity. SEV1 is the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Severity {
    /// Full outage or data loss.
    #[serde(rename = "SEV1")]
    Sev1,
    /// Major degradation.
    #[serde(rename = "SEV2")]
    Sev2,
    /// Partial degradation.
    #[serde(rename = "SEV3")]
    Sev3,
    /// Minor issue.
    #[serde(rename = "SEV4")]
    Sev4,
}

impl Severity {
    /// All severities in rank order.
    pub const ALL: [Severity; 4] = [
        Severity::Sev1,
        Severity::Sev2,
        Severity::Sev3,
        Severity::Sev4,
    ];

    /// Wire representation (`"SEV1"` .. `"SEV4"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Sev1 => "SEV1",
            Severity::Sev2 => "SEV2",
            Severity::Sev3 => "SEV3",
            Severity::Sev4 => "SEV4",
        }
    }

    /// Parse the wire representation, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "SEV1" => Some(Severity::Sev1),
            "SEV2" => Some(Severity::Sev2),
            "SEV3" => Some(Severity::Sev3),
            "SEV4" => Some(Severity::Sev4),
            _ => None,
        }
    }

    /// Next value in the filter cycle: SEV1 → SEV2 → SEV3 → SEV4 → None.
    ///
    /// Called with the current filter value; `None` means "no filter", so
    /// `cycle(None)` starts the cycle at SEV1.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Severity::Sev1),
            Some(Severity::Sev1) => Some(Severity::Sev2),
            Some(Severity::Sev2) => Some(Severity::Sev3),
            Some(Severity::Sev3) => Some(Severity::Sev4),
            Some(Severity::Sev4) => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incident lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Status {
    /// Being actively worked.
    #[default]
    #[serde(rename = "OPEN")]
    Open,
    /// Impact contained, root cause outstanding.
    #[serde(rename = "MITIGATED")]
    Mitigated,
    /// Fully closed out.
    #[serde(rename = "RESOLVED")]
    Resolved,
}

impl Status {
    /// All statuses in lifecycle order.
    pub const ALL: [Status; 3] = [Status::Open, Status::Mitigated, Status::Resolved];

    /// Wire representation (`"OPEN"`, `"MITIGATED"`, `"RESOLVED"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Mitigated => "MITIGATED",
            Status::Resolved => "RESOLVED",
        }
    }

    /// Parse the wire representation, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "OPEN" => Some(Status::Open),
            "MITIGATED" => Some(Status::Mitigated),
            "RESOLVED" => Some(Status::Resolved),
            _ => None,
        }
    }

    /// Next value in the filter cycle: OPEN → MITIGATED → RESOLVED → None.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Status::Open),
            Some(Status::Open) => Some(Status::Mitigated),
            Some(Status::Mitigated) => Some(Status::Resolved),
            Some(Status::Resolved) => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
