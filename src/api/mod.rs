//! API envelope types and pagination utilities
//!
//! These are the generic wrappers every endpoint response uses.

pub mod pagination;
pub mod response;

pub use pagination::{Paginated, PaginationParams};
pub use response::{ApiResponse, Created, NoContent};
