//! Domain types and DTOs
//!
//! Canonical entities of the PRONAS/PCD workflow and the request/response
//! shapes the API exchanges for them. One shape per name; the pre-v1
//! surface lives in [`crate::legacy`].

pub mod auth;
pub mod documents;
pub mod institutions;
pub mod monitoring;
pub mod priority_areas;
pub mod projects;
pub mod users;

// Re-export commonly used types
pub use institutions::*;
pub use priority_areas::*;
pub use projects::*;
pub use users::*;

// Auth, document and monitoring types are accessed via their modules to
// avoid namespace pollution.
