//! The list-view query controller (pure core).
//!
//! Owns search/filter/sort/page state, collapses keystroke bursts through a
//! debouncer, derives fetch parameters, and discards responses from
//! superseded requests. Nothing in this module performs I/O: side effects
//! are described by [`FetchSpec`] values and time enters only as `Instant`
//! arguments, so every behavior here is testable without a terminal, a
//! network, or a clock.

pub mod debounce;
pub mod page_window;
pub mod sort;
pub mod store;

// Re-export for convenience
pub use debounce::Debouncer;
pub use page_window::{page_window, PageWindow, DEFAULT_MAX_VISIBLE};
pub use sort::{next_sort, SortColumn, SortOrder, SortSpec};
pub use store::{FetchSpec, ListSnapshot, QueryStore};
