//! Shared data-shape contract for the PRONAS/PCD grant management platform.
//!
//! This crate defines the canonical domain entities (institutions, projects
//! and their nested collections, priority areas, users), the DTOs exchanged
//! with the HTTP API, the generic response/error envelopes, and the legacy
//! shapes kept for the pre-v1 surface. It contains no handlers, no storage
//! and no business-rule enforcement; consumers bring their own.

pub mod api;
pub mod domain;
pub mod error;
pub mod legacy;

pub use error::{ApiError, ApiResult};
