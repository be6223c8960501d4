//! incv — incident browser TUI.
//!
//! Terminal client for browsing, filtering, sorting, and paging incident
//! records served by a remote collection API.
//!
//! The crate follows a Pure Core / Impure Shell architecture: the query
//! controller in [`query`] is synchronous owned state whose side effects are
//! described by return values, and the shell in [`view`] performs terminal
//! I/O, HTTP fetch threads, and timing.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod state;
pub mod view;
