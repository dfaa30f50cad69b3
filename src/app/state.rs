//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of every piece of component
//! state, along with the methods that move it between consistent snapshots. It
//! serves as the single source of truth for the presented views.
//!
//! # Architecture
//!
//! `AppState` separates core data (all loaded users) from derived state
//! (filtered users, aggregate tallies, the visible page). Derived state is never
//! patched incrementally: each operation recomputes exactly the parts it
//! invalidates, using the pure functions in [`crate::domain::pipeline`].
//!
//! | operation | filtered | aggregates | page | visible page |
//! |-----------|----------|------------|------|--------------|
//! | load      | = all    | recomputed | 1    | recomputed   |
//! | search    | refilter | recomputed | 1    | recomputed   |
//! | sort      | resorted | unchanged  | kept | recomputed   |
//! | next/prev | -        | -          | ±1   | recomputed   |
//!
//! # Example
//!
//! ```rust
//! use permview::app::AppState;
//!
//! let mut state = AppState::new(8);
//! state.begin_load();
//! state.apply_loaded(vec![], chrono::Utc::now());
//! state.apply_search("ann");
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.pagination.total_pages, 0);
//! ```

use super::modes::LoadPhase;
use crate::domain::{
    aggregate_counts, filter_records, page_slice, sort_records, total_pages, AggregateCount,
    SortDirection, SortField, UserRecord,
};
use crate::view::{
    CountRow, DirectoryViewModel, EmptyState, PaginationInfo, SearchBarInfo, SortInfo, UserRow,
    PROFILE_COLUMNS, ROLE_COLUMNS, USER_COLUMNS,
};
use chrono::{DateTime, Utc};

/// Default number of users per page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Central component state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every user returned by the load, in upstream order.
    ///
    /// Set once when the load succeeds and never modified afterwards.
    pub all_users: Vec<UserRecord>,

    /// Users matching the current search key.
    ///
    /// Rebuilt from `all_users` on each search and reordered in place by sort.
    pub filtered_users: Vec<UserRecord>,

    /// Users on the current page of `filtered_users`.
    pub visible_users: Vec<UserRecord>,

    /// Lower-cased search key.
    pub search_key: String,

    pub sorted_by: SortField,
    pub sorted_direction: SortDirection,

    /// Current 1-indexed page.
    pub page: usize,

    /// Users per page. Fixed for the component's lifetime.
    pub page_size: usize,

    /// Number of users in `filtered_users`.
    pub total_count: usize,

    /// Pages needed for `filtered_users`; zero when it is empty.
    pub total_pages: usize,

    pub profile_counts: Vec<AggregateCount>,
    pub role_counts: Vec<AggregateCount>,

    pub phase: LoadPhase,

    /// Message extracted from the load failure.
    pub error: Option<String>,

    /// When the load succeeded.
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    /// Creates an empty state waiting for its load.
    ///
    /// A zero `page_size` is raised to 1 so paging arithmetic stays defined;
    /// [`Config`](crate::Config) validation rejects zero before it gets here.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            all_users: vec![],
            filtered_users: vec![],
            visible_users: vec![],
            search_key: String::new(),
            sorted_by: SortField::default(),
            sorted_direction: SortDirection::default(),
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 0,
            profile_counts: vec![],
            role_counts: vec![],
            phase: LoadPhase::Pending,
            error: None,
            loaded_at: None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Marks the load as requested.
    ///
    /// Returns `false` if a load was already requested, in which case nothing
    /// changes. The component loads at most once.
    pub fn begin_load(&mut self) -> bool {
        if self.phase != LoadPhase::Pending {
            tracing::debug!(phase = ?self.phase, "load already requested");
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Installs loaded users and runs the full pipeline.
    ///
    /// Search key, sort and page are reset to their defaults.
    pub fn apply_loaded(&mut self, users: Vec<UserRecord>, now: DateTime<Utc>) {
        let _span = tracing::debug_span!("apply_loaded", users = users.len()).entered();

        self.all_users = users;
        self.filtered_users = self.all_users.clone();
        self.search_key = String::new();
        self.sorted_by = SortField::default();
        self.sorted_direction = SortDirection::default();
        self.page = 1;
        self.error = None;
        self.loaded_at = Some(now);
        self.phase = LoadPhase::Loaded;

        self.refresh_totals();
        self.recompute_aggregates();
        self.display_page();
    }

    /// Records a load failure and leaves the views empty.
    pub fn apply_load_failure(&mut self, message: String) {
        tracing::debug!(error = %message, "load failed");

        self.all_users.clear();
        self.filtered_users.clear();
        self.visible_users.clear();
        self.profile_counts.clear();
        self.role_counts.clear();
        self.total_count = 0;
        self.total_pages = 0;
        self.page = 1;
        self.error = Some(message);
        self.phase = LoadPhase::Failed;
    }

    /// Filters all users by `raw_key` and resets to page 1.
    ///
    /// The key is lower-cased and stored. Aggregates and the visible page are
    /// recomputed over the new filtered set.
    pub fn apply_search(&mut self, raw_key: &str) {
        let _span = tracing::debug_span!("apply_search",
            total_users = self.all_users.len(),
            query_len = raw_key.len()
        ).entered();

        self.search_key = raw_key.to_lowercase();
        self.filtered_users = filter_records(&self.all_users, &self.search_key);
        self.page = 1;

        self.refresh_totals();
        self.recompute_aggregates();
        self.display_page();

        tracing::debug!(
            filtered_count = self.total_count,
            total_pages = self.total_pages,
            "search filter applied"
        );
    }

    /// Sorts the filtered users and redisplays the current page.
    ///
    /// The page number is kept. The sort becomes the current sort state.
    pub fn apply_sort(&mut self, field: SortField, direction: SortDirection) {
        self.sorted_by = field;
        self.sorted_direction = direction;

        sort_records(&mut self.filtered_users, field, direction);
        self.display_page();
    }

    /// Moves to the next page. Returns `false` at the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages {
            self.page += 1;
            self.display_page();
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns `false` at the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            self.display_page();
            true
        } else {
            false
        }
    }

    fn refresh_totals(&mut self) {
        self.total_count = self.filtered_users.len();
        self.total_pages = total_pages(self.total_count, self.page_size);
    }

    fn recompute_aggregates(&mut self) {
        let (profiles, roles) = aggregate_counts(&self.filtered_users);
        self.profile_counts = profiles;
        self.role_counts = roles;
    }

    /// Recomputes `visible_users` for the current page.
    fn display_page(&mut self) {
        self.visible_users = page_slice(&self.filtered_users, self.page, self.page_size).to_vec();
        tracing::trace!(page = self.page, visible = self.visible_users.len(), "page displayed");
    }

    /// Computes the view model handed to the rendering collaborator.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DirectoryViewModel {
        DirectoryViewModel {
            columns: &USER_COLUMNS,
            profile_columns: &PROFILE_COLUMNS,
            role_columns: &ROLE_COLUMNS,
            rows: self.visible_users.iter().map(UserRow::from).collect(),
            profile_counts: self.profile_counts.iter().map(CountRow::from).collect(),
            role_counts: self.role_counts.iter().map(CountRow::from).collect(),
            pagination: self.compute_pagination(),
            search_bar: SearchBarInfo {
                query: self.search_key.clone(),
            },
            sort: SortInfo {
                sorted_by: self.sorted_by,
                sorted_direction: self.sorted_direction,
            },
            loading: self.is_loading(),
            error: self.error.clone(),
            empty_state: self.compute_empty_state(),
        }
    }

    const fn compute_pagination(&self) -> PaginationInfo {
        PaginationInfo {
            page: self.page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            has_previous: self.page > 1,
            has_next: self.page < self.total_pages,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.phase != LoadPhase::Loaded || !self.filtered_users.is_empty() {
            return None;
        }

        if self.search_key.is_empty() {
            Some(EmptyState {
                message: "No active users".to_string(),
                subtitle: "The directory returned no users".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No matching users".to_string(),
                subtitle: format!("Nothing matches \"{}\"", self.search_key),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, profile: &str, role: &str) -> UserRecord {
        UserRecord::new(
            None,
            Some(name.to_string()),
            Some(profile.to_string()),
            Some(role.to_string()),
            vec![],
        )
    }

    fn loaded(users: Vec<UserRecord>, page_size: usize) -> AppState {
        let mut state = AppState::new(page_size);
        assert!(state.begin_load());
        state.apply_loaded(users, Utc::now());
        state
    }

    fn ten_users() -> Vec<UserRecord> {
        (0..10).map(|i| user(&format!("user{i}"), "Std", "Eng")).collect()
    }

    #[test]
    fn new_state_is_loading_and_empty() {
        let state = AppState::new(8);
        assert!(state.is_loading());
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 0);
        assert!(state.visible_users.is_empty());
    }

    #[test]
    fn zero_page_size_is_raised() {
        assert_eq!(AppState::new(0).page_size, 1);
    }

    #[test]
    fn begin_load_only_once() {
        let mut state = AppState::new(8);
        assert!(state.begin_load());
        assert!(!state.begin_load());
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn load_runs_full_pipeline() {
        let state = loaded(ten_users(), 8);
        assert!(!state.is_loading());
        assert_eq!(state.total_count, 10);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.visible_users.len(), 8);
        assert_eq!(state.profile_counts, vec![AggregateCount { key: "Std".into(), count: 10 }]);
        assert!(state.loaded_at.is_some());
    }

    #[test]
    fn empty_load_has_zero_pages() {
        let state = loaded(vec![], 8);
        assert_eq!(state.total_pages, 0);
        assert!(state.visible_users.is_empty());
        assert!(state.compute_viewmodel().empty_state.is_some());
    }

    #[test]
    fn failure_leaves_empty_views() {
        let mut state = AppState::new(8);
        state.begin_load();
        state.apply_load_failure("boom".to_string());
        assert_eq!(state.phase, LoadPhase::Failed);
        assert!(!state.is_loading());
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(state.filtered_users.is_empty());
        let vm = state.compute_viewmodel();
        assert_eq!(vm.pagination.total_pages, 0);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn search_resets_page() {
        let mut state = loaded(ten_users(), 8);
        assert!(state.next_page());
        assert_eq!(state.page, 2);

        state.apply_search("USER");
        assert_eq!(state.page, 1);
        assert_eq!(state.search_key, "user");
        assert_eq!(state.total_count, 10);
    }

    #[test]
    fn search_with_no_matches_zeroes_pages() {
        let mut state = loaded(ten_users(), 8);
        state.apply_search("zzz");
        assert_eq!(state.total_count, 0);
        assert_eq!(state.total_pages, 0);
        assert!(state.visible_users.is_empty());
        assert!(state.profile_counts.is_empty());
        assert!(!state.next_page());
    }

    #[test]
    fn repeating_a_search_gives_the_same_users() {
        let mut state = loaded(ten_users(), 8);
        state.apply_search("a");
        let first = state.filtered_users.clone();

        state.apply_search("a");
        assert_eq!(state.filtered_users, first);
        assert_eq!(state.total_count, first.len());
    }

    #[test]
    fn search_rebuilds_from_all_users() {
        let mut state = loaded(ten_users(), 8);
        state.apply_search("user1");
        assert_eq!(state.total_count, 1);
        state.apply_search("user");
        assert_eq!(state.total_count, 10);
    }

    #[test]
    fn sort_keeps_current_page() {
        let mut state = loaded(ten_users(), 8);
        state.next_page();
        state.apply_sort(SortField::Name, SortDirection::Desc);
        assert_eq!(state.page, 2);
        assert_eq!(state.visible_users.len(), 2);
        assert_eq!(state.visible_users[0].name(), "user1");
        assert_eq!(state.visible_users[1].name(), "user0");
        assert_eq!(state.sorted_direction, SortDirection::Desc);
    }

    #[test]
    fn search_after_sort_restores_upstream_order() {
        let mut state = loaded(ten_users(), 8);
        state.apply_sort(SortField::Name, SortDirection::Desc);
        state.apply_search("");
        assert_eq!(state.filtered_users, state.all_users);
        assert_eq!(state.sorted_by, SortField::Name);
        assert_eq!(state.sorted_direction, SortDirection::Desc);
    }

    #[test]
    fn paging_stops_at_boundaries() {
        let mut state = loaded(ten_users(), 8);
        assert!(!state.previous_page());
        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(state.page, 2);
        assert!(state.previous_page());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn viewmodel_reflects_state() {
        let mut state = loaded(ten_users(), 4);
        state.next_page();
        let vm = state.compute_viewmodel();

        assert_eq!(vm.rows.len(), 4);
        assert_eq!(vm.rows[0].name, "user4");
        assert_eq!(vm.pagination.page, 2);
        assert_eq!(vm.pagination.total_pages, 3);
        assert!(vm.pagination.has_previous);
        assert!(vm.pagination.has_next);
        assert_eq!(vm.columns.len(), 4);
        assert_eq!(vm.profile_counts[0].id, "Std");
        assert_eq!(vm.profile_counts[0].count, 10);
        assert!(!vm.loading);
        assert!(vm.error.is_none());
    }

    #[test]
    fn viewmodel_empty_state_mentions_query() {
        let mut state = loaded(ten_users(), 8);
        state.apply_search("nobody");
        let empty = state.compute_viewmodel().empty_state.unwrap();
        assert!(empty.subtitle.contains("nobody"));
    }
}
