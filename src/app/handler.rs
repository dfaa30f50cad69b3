//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes host input and loader
//! responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the host (mount, search box, column header, page buttons)
//!    or from the loader
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Interaction events are ignored unless the load has succeeded; loader responses
//! are ignored unless a load is in flight.
//!
//! # Example
//!
//! ```rust
//! use permview::app::{AppState, Action, Event, handle_event};
//!
//! let mut state = AppState::new(8);
//! let (_, actions) = handle_event(&mut state, &Event::Mounted)?;
//! assert!(matches!(actions[0], Action::PostToLoader(_)));
//! # Ok::<(), permview::PermviewError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{SortDirection, SortField};
use crate::loader::{LoaderMessage, LoaderResponse};

/// Events triggered by the host or the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The component was attached; requests the one-time load.
    Mounted,

    /// The search box changed. Carries the raw input value.
    SearchChanged(String),

    /// A column header was clicked.
    ///
    /// Field and direction are the strings reported by the table widget, e.g.
    /// `"profileName"` and `"desc"`.
    SortColumn {
        field_name: String,
        sort_direction: String,
    },

    NextPage,
    PreviousPage,

    /// The loader finished.
    LoaderResponse(LoaderResponse),
}

impl Event {
    /// Variant name recorded on the handling span.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mounted => "Mounted",
            Self::SearchChanged(_) => "SearchChanged",
            Self::SortColumn { .. } => "SortColumn",
            Self::NextPage => "NextPage",
            Self::PreviousPage => "PreviousPage",
            Self::LoaderResponse(LoaderResponse::UsersLoaded { .. }) => "UsersLoaded",
            Self::LoaderResponse(LoaderResponse::LoadFailed { .. }) => "LoadFailed",
        }
    }
}

/// Processes an event, mutates state, and returns `(rerender, actions)`.
///
/// `rerender` is `false` when the event changed nothing visible, e.g. a page
/// button pressed at the boundary.
///
/// # Errors
///
/// Returns an error if a `SortColumn` event names an unknown or unsortable field
/// or an invalid direction. State is left untouched in that case.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Mounted => {
            if state.begin_load() {
                tracing::debug!("requesting user load");
                Ok((true, vec![Action::PostToLoader(LoaderMessage::load_users())]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::LoaderResponse(response) => {
            if state.phase != super::LoadPhase::Loading {
                tracing::debug!(phase = ?state.phase, "ignoring unexpected loader response");
                return Ok((false, vec![]));
            }

            match response {
                LoaderResponse::UsersLoaded { users } => {
                    state.apply_loaded(users.clone(), chrono::Utc::now());
                    tracing::debug!(
                        total_count = state.total_count,
                        total_pages = state.total_pages,
                        "users installed"
                    );
                }
                LoaderResponse::LoadFailed { message } => {
                    state.apply_load_failure(message.clone());
                }
            }
            Ok((true, vec![]))
        }
        _ if !state.phase.accepts_interaction() => {
            tracing::debug!(phase = ?state.phase, "interaction ignored before load completes");
            Ok((false, vec![]))
        }
        Event::SearchChanged(value) => {
            state.apply_search(value);
            Ok((true, vec![]))
        }
        Event::SortColumn {
            field_name,
            sort_direction,
        } => {
            let field: SortField = field_name.parse()?;
            let direction: SortDirection = sort_direction.parse()?;

            tracing::debug!(field = %field, direction = %direction, "sorting users");
            state.apply_sort(field, direction);
            Ok((true, vec![]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PreviousPage => Ok((state.previous_page(), vec![])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadPhase;
    use crate::domain::{PermviewError, UserRecord};

    fn user(name: &str) -> UserRecord {
        UserRecord::new(None, Some(name.into()), Some("P".into()), Some("R".into()), vec![])
    }

    fn loaded_state(names: &[&str]) -> AppState {
        let mut state = AppState::new(8);
        handle_event(&mut state, &Event::Mounted).unwrap();
        let users = names.iter().map(|n| user(n)).collect();
        handle_event(
            &mut state,
            &Event::LoaderResponse(LoaderResponse::UsersLoaded { users }),
        )
        .unwrap();
        state
    }

    fn sort(field: &str, direction: &str) -> Event {
        Event::SortColumn {
            field_name: field.to_string(),
            sort_direction: direction.to_string(),
        }
    }

    #[test]
    fn event_name_omits_payload() {
        let users = vec![user("a"), user("b")];
        let event = Event::LoaderResponse(LoaderResponse::UsersLoaded { users });
        assert_eq!(event.name(), "UsersLoaded");
        assert_eq!(Event::SearchChanged("secret".into()).name(), "SearchChanged");
    }

    #[test]
    fn mounted_requests_load_once() {
        let mut state = AppState::new(8);
        let (render, actions) = handle_event(&mut state, &Event::Mounted).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::PostToLoader(LoaderMessage::LoadUsers { trace_context: None })]
        );

        let (render, actions) = handle_event(&mut state, &Event::Mounted).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn response_before_mount_is_ignored() {
        let mut state = AppState::new(8);
        let event = Event::LoaderResponse(LoaderResponse::UsersLoaded { users: vec![user("a")] });
        assert_eq!(handle_event(&mut state, &event).unwrap(), (false, vec![]));
        assert_eq!(state.phase, LoadPhase::Pending);
    }

    #[test]
    fn second_response_does_not_reload() {
        let mut state = loaded_state(&["a", "b"]);
        let event = Event::LoaderResponse(LoaderResponse::UsersLoaded { users: vec![] });
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(!render);
        assert_eq!(state.all_users.len(), 2);
    }

    #[test]
    fn failed_is_terminal() {
        let mut state = AppState::new(8);
        handle_event(&mut state, &Event::Mounted).unwrap();
        handle_event(
            &mut state,
            &Event::LoaderResponse(LoaderResponse::LoadFailed { message: "denied".into() }),
        )
        .unwrap();

        assert_eq!(state.phase, LoadPhase::Failed);
        let (render, actions) = handle_event(&mut state, &Event::SearchChanged("x".into())).unwrap();
        assert!(!render && actions.is_empty());
        let (render, actions) = handle_event(&mut state, &Event::Mounted).unwrap();
        assert!(!render && actions.is_empty());
        assert_eq!(state.error.as_deref(), Some("denied"));
    }

    #[test]
    fn interactions_ignored_while_loading() {
        let mut state = AppState::new(8);
        handle_event(&mut state, &Event::Mounted).unwrap();
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &sort("nope", "asc")).unwrap(), (false, vec![]));
        assert_eq!(state.search_key, "");
    }

    #[test]
    fn sort_event_parses_widget_strings() {
        let mut state = loaded_state(&["Ann", "Bob", "Cara"]);
        let (render, _) = handle_event(&mut state, &sort("name", "desc")).unwrap();
        assert!(render);
        let names: Vec<&str> = state.filtered_users.iter().map(UserRecord::name).collect();
        assert_eq!(names, vec!["Cara", "Bob", "Ann"]);
    }

    #[test]
    fn unsortable_column_is_rejected_without_change() {
        let mut state = loaded_state(&["Bob", "Ann"]);
        let err = handle_event(&mut state, &sort("formattedPermissionSets", "asc")).unwrap_err();
        assert!(matches!(err, PermviewError::UnsortableField(_)));
        assert_eq!(state.filtered_users[0].name(), "Bob");
    }

    #[test]
    fn bad_direction_is_rejected() {
        let mut state = loaded_state(&["Bob"]);
        let err = handle_event(&mut state, &sort("name", "up")).unwrap_err();
        assert!(matches!(err, PermviewError::InvalidSortDirection(_)));
        assert_eq!(state.sorted_direction, SortDirection::Asc);
    }

    #[test]
    fn boundary_paging_reports_no_rerender() {
        let mut state = loaded_state(&["a"]);
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::PreviousPage).unwrap(), (false, vec![]));
    }

    #[test]
    fn search_event_filters() {
        let mut state = loaded_state(&["Ann", "Bob"]);
        let (render, _) = handle_event(&mut state, &Event::SearchChanged("BO".into())).unwrap();
        assert!(render);
        assert_eq!(state.total_count, 1);
        assert_eq!(state.search_key, "bo");
    }
}
