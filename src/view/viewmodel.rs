//! View model types representing the presented state.
//!
//! View models are computed from application state via
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! handed to the rendering collaborator. They contain no business logic, only
//! display-ready data, and serialize with the field names the rendering side
//! expects.

use super::columns::ColumnDef;
use crate::domain::{AggregateCount, SortDirection, SortField, UserRecord};
use serde::Serialize;

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryViewModel {
    pub columns: &'static [ColumnDef],
    pub profile_columns: &'static [ColumnDef],
    pub role_columns: &'static [ColumnDef],

    /// Users on the current page.
    pub rows: Vec<UserRow>,

    pub profile_counts: Vec<CountRow>,
    pub role_counts: Vec<CountRow>,

    pub pagination: PaginationInfo,
    pub search_bar: SearchBarInfo,
    pub sort: SortInfo,

    /// True until the load settles.
    pub loading: bool,

    /// Load failure message, if the load failed.
    pub error: Option<String>,

    /// Shown instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One row of the main user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Option<String>,
    pub name: String,
    pub profile_name: String,
    pub role_name: String,
    pub formatted_permission_sets: String,
}

impl From<&UserRecord> for UserRow {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name().to_string(),
            profile_name: user.profile_name().to_string(),
            role_name: user.role_name().to_string(),
            formatted_permission_sets: user.formatted_permission_sets.clone(),
        }
    }
}

/// One row of a count table. `id` repeats `name` and serves as the row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub id: String,
    pub name: String,
    pub count: usize,
}

impl From<&AggregateCount> for CountRow {
    fn from(aggregate: &AggregateCount) -> Self {
        Self {
            id: aggregate.key.clone(),
            name: aggregate.key.clone(),
            count: aggregate.count,
        }
    }
}

/// Pagination control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Current 1-indexed page.
    pub page: usize,
    pub total_pages: usize,
    /// Number of users matching the search.
    pub total_count: usize,
    /// Whether "Previous" is enabled.
    pub has_previous: bool,
    /// Whether "Next" is enabled.
    pub has_next: bool,
}

/// Search box state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarInfo {
    /// Current (lower-cased) search key.
    pub query: String,
}

/// Current sort indicator for the user table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortInfo {
    pub sorted_by: SortField,
    pub sorted_direction: SortDirection,
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
