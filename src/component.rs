//! Synchronous host for the component.
//!
//! [`UserDirectoryView`] wires an [`AppState`] to a [`UserLoader`] and executes the
//! actions the event handler emits, feeding loader responses straight back in.
//! Hosts that want to run the load elsewhere can skip this type and drive
//! [`handle_event`] themselves.
//!
//! # Example
//!
//! ```rust
//! use permview::{Config, UserDirectoryView};
//! use permview::source::{MemorySource, RawUserRecord};
//!
//! let source = MemorySource::with_users(vec![
//!     RawUserRecord::new("Bob", "Admin", "Eng", Vec::<String>::new()),
//!     RawUserRecord::new("Ann", "Admin", "Sales", ["PS1", "PS2"]),
//! ]);
//! let mut view = UserDirectoryView::new(&Config::default(), Box::new(source));
//! view.mount()?;
//!
//! view.search("ann")?;
//! let vm = view.viewmodel();
//! assert_eq!(vm.rows.len(), 1);
//! assert_eq!(vm.rows[0].formatted_permission_sets, "PS1, PS2");
//! # Ok::<(), permview::PermviewError>(())
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::{PermviewError, Result};
use crate::loader::UserLoader;
use crate::source::{JsonFileSource, UserSource};
use crate::view::DirectoryViewModel;
use crate::Config;
use std::collections::VecDeque;

/// A user directory component with its loader attached.
#[derive(Debug)]
pub struct UserDirectoryView {
    state: AppState,
    loader: UserLoader,
}

impl UserDirectoryView {
    /// Creates an unmounted view that will load from `source`.
    #[must_use]
    pub fn new(config: &Config, source: Box<dyn UserSource>) -> Self {
        Self {
            state: crate::initialize(config),
            loader: UserLoader::new(source),
        }
    }

    /// Creates an unmounted view reading the snapshot named by `config.source_file`.
    ///
    /// Also installs span export when `config.trace_file` is set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no source file is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = config
            .source_file
            .as_ref()
            .ok_or_else(|| PermviewError::Config("source_file is not set".to_string()))?;
        crate::observability::init_tracing(config);
        Ok(Self::new(config, Box::new(JsonFileSource::new(path))))
    }

    /// Mounts the view, performing the one-time load.
    ///
    /// Returns whether anything changed. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler. A failed load is not an error;
    /// it is reported through the state.
    pub fn mount(&mut self) -> Result<bool> {
        self.dispatch(Event::Mounted)
    }

    /// Handles an event and executes every resulting action.
    ///
    /// Returns whether the view should be re-rendered.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the event handler. Events queued behind
    /// the failing one are dropped.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut pending = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(event) = pending.pop_front() {
            let (render, actions) = handle_event(&mut self.state, &event)?;
            should_render |= render;

            tracing::debug!(action_count = actions.len(), should_render = render, "event handled");

            for action in actions {
                match action {
                    Action::PostToLoader(message) => {
                        let response = self.loader.handle(&message);
                        pending.push_back(Event::LoaderResponse(response));
                    }
                }
            }
        }

        Ok(should_render)
    }

    /// Applies a search box value.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn search(&mut self, value: &str) -> Result<bool> {
        self.dispatch(Event::SearchChanged(value.to_string()))
    }

    /// Applies a column header sort click.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or unsortable fields and invalid directions.
    pub fn sort_column(&mut self, field_name: &str, sort_direction: &str) -> Result<bool> {
        self.dispatch(Event::SortColumn {
            field_name: field_name.to_string(),
            sort_direction: sort_direction.to_string(),
        })
    }

    /// Moves to the next page. `Ok(false)` on the last page.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn next_page(&mut self) -> Result<bool> {
        self.dispatch(Event::NextPage)
    }

    /// Moves to the previous page. `Ok(false)` on the first page.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn previous_page(&mut self) -> Result<bool> {
        self.dispatch(Event::PreviousPage)
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn viewmodel(&self) -> DirectoryViewModel {
        self.state.compute_viewmodel()
    }
}
