//! Domain model types (pure).
//!
//! Incident records as served by the collection API, plus the error
//! taxonomy for everything that can go wrong talking to it.

pub mod error;
pub mod incident;
pub mod key_action;

// Re-export for convenience
pub use error::{ApiError, AppError, ErrorBody};
pub use incident::{Incident, Severity, Status};
pub use key_action::KeyAction;
