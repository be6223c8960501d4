//! Error types for the incv application.
//!
//! A small hierarchical taxonomy built with `thiserror`. The important
//! split is on the API side:
//!
//! - [`ApiError::Validation`] — the server rejected a request with a
//!   field-keyed message mapping; surfaced by flattening all messages into
//!   one comma-joined display string.
//! - [`ApiError::Request`] — the server answered with a single
//!   human-readable message (not found, server error, ...).
//! - [`ApiError::Transport`] — the request never produced a usable server
//!   answer (connection refused, timeout, undecodable body).
//!
//! A stale response — one belonging to a superseded request generation —
//! is deliberately *not* an error: the query store drops it silently and
//! nothing here represents it.
//!
//! All fetch failures are caught at the query store boundary and converted
//! into a display string; they never propagate past the store into
//! rendering code.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Top-level application error for fatal, non-request failures.
///
/// Request failures stay inside [`ApiError`] and are absorbed by the query
/// store; this type covers the startup path (config, logging, terminal).
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The HTTP client could not be constructed.
    #[error("API client error: {0}")]
    Api(#[from] ApiError),

    /// Terminal I/O failure.
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structured error from the collection API collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request body with per-field messages.
    ///
    /// `details` maps field name to the messages for that field; iteration
    /// order of the map is the order used when flattening for display.
    #[error("{}", flatten_validation(.details))]
    Validation {
        /// Field name → validation messages for that field.
        details: BTreeMap<String, Vec<String>>,
    },

    /// The server answered with a single human-readable message.
    #[error("{message}")]
    Request {
        /// Message from the server's `error` field.
        message: String,
    },

    /// The request failed before a structured server answer was obtained.
    #[error("Request failed: {reason}")]
    Transport {
        /// Human-readable description of the transport failure.
        reason: String,
    },
}

impl ApiError {
    /// The string shown in the UI error banner for this failure.
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

/// Error body shape shared by all collection API failure responses.
///
/// `{"error": "..."}`, optionally with `{"details": {field: [messages]}}`
/// on validation failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Single human-readable message.
    pub error: String,
    /// Field-keyed validation messages, present on 400 validation failures.
    #[serde(default)]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    /// Convert the wire body into the structured error taxonomy.
    pub fn into_api_error(self) -> ApiError {
        match self.details {
            Some(details) if !details.is_empty() => ApiError::Validation { details },
            _ => ApiError::Request {
                message: self.error,
            },
        }
    }
}

/// Flatten a validation mapping into one display string.
///
/// All messages across all fields, comma-joined, in map iteration order.
fn flatten_validation(details: &BTreeMap<String, Vec<String>>) -> String {
    details
        .values()
        .flat_map(|messages| messages.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(field, msgs)| {
                (
                    field.to_string(),
                    msgs.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn validation_error_flattens_all_messages_comma_joined() {
        let err = ApiError::Validation {
            details: details(&[
                ("service", &["Length must be between 1 and 120."]),
                ("title", &["Missing data for required field."]),
            ]),
        };
        assert_eq!(
            err.display_message(),
            "Length must be between 1 and 120., Missing data for required field."
        );
    }

    #[test]
    fn validation_error_flattens_multiple_messages_per_field() {
        let err = ApiError::Validation {
            details: details(&[("title", &["too short", "not unique"])]),
        };
        assert_eq!(err.display_message(), "too short, not unique");
    }

    #[test]
    fn request_error_displays_server_message() {
        let err = ApiError::Request {
            message: "Incident not found".to_string(),
        };
        assert_eq!(err.display_message(), "Incident not found");
    }

    #[test]
    fn error_body_with_details_becomes_validation() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error": "Validation failed", "details": {"title": ["too short"]}}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_api_error(),
            ApiError::Validation {
                details: details(&[("title", &["too short"])]),
            }
        );
    }

    #[test]
    fn error_body_without_details_becomes_request() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Incident not found"}"#).unwrap();
        assert_eq!(
            body.into_api_error(),
            ApiError::Request {
                message: "Incident not found".to_string(),
            }
        );
    }

    #[test]
    fn error_body_with_empty_details_becomes_request() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Validation failed", "details": {}}"#).unwrap();
        assert!(matches!(body.into_api_error(), ApiError::Request { .. }));
    }
}
