//! Domain layer for the permview component.
//!
//! This module contains the core domain types and the derived-view pipeline,
//! independent of how users are fetched or how the views are rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record and aggregate count models
//! - [`fields`]: Sortable columns and sort direction
//! - [`pipeline`]: Pure filter, aggregate, sort and paginate functions
//!
//! # Examples
//!
//! ```
//! use permview::domain::{filter_records, UserRecord};
//!
//! let users = vec![UserRecord::new(
//!     None,
//!     Some("Ann".to_string()),
//!     Some("Admin".to_string()),
//!     Some("Sales".to_string()),
//!     vec![],
//! )];
//! assert_eq!(filter_records(&users, "sal").len(), 1);
//! ```

pub mod error;
pub mod fields;
pub mod pipeline;
pub mod user;

pub use error::{PermviewError, Result};
pub use fields::{SortDirection, SortField, PERMISSION_SETS_FIELD};
pub use pipeline::{
    aggregate_counts, collate, filter_records, matches_search, page_slice, sort_records,
    total_pages,
};
pub use user::{format_permission_sets, AggregateCount, UserRecord, NO_PERMISSION_SETS};
