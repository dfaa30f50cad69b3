//! Presentation contract for the rendering collaborator.
//!
//! Nothing here draws anything. The module describes what the three tables, the
//! pagination controls and the search box should show, in a form any renderer
//! can consume directly or after serializing to JSON.
//!
//! # Modules
//!
//! - [`columns`]: Column definitions for the user, profile and role tables
//! - [`viewmodel`]: Row types and the complete view model

pub mod columns;
pub mod viewmodel;

pub use columns::{ColumnDef, ColumnType, PROFILE_COLUMNS, ROLE_COLUMNS, USER_COLUMNS};
pub use viewmodel::{
    CountRow, DirectoryViewModel, EmptyState, PaginationInfo, SearchBarInfo, SortInfo, UserRow,
};
