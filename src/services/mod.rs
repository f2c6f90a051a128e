//! Cross-collection services.
//!
//! Services compose repositories and are resolved from the context with
//! the `FromContext` derive macro.

mod dashboard;
mod search;

pub use dashboard::{DashboardService, DashboardStats};
pub use search::{SearchResults, SearchService, DEFAULT_SEARCH_LIMIT};
