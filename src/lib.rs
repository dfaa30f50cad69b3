//! permview: a client-side user directory view.
//!
//! permview fetches the list of active users once, annotates each with a
//! readable summary of its permission sets, and keeps four presented views in
//! step while the user interacts with it:
//! - the main user table (current page only)
//! - user counts per profile
//! - user counts per role
//! - the pagination window
//!
//! Search, column sort and page navigation all run in memory over the loaded
//! users. Rendering and event wiring belong to the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / UserDirectoryView (component.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ View Layer    │   │ Loader Layer  │   │ Source Layer  │
//! │ (view/)       │   │ (loader/)     │   │ (source/)     │
//! │ - Columns     │   │ - Messages    │   │ - UserSource  │
//! │ - Rows        │   │ - Normalizing │   │ - Memory      │
//! │ - Pagination  │   │ - Error text  │   │ - JSON file   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - UserRecord, AggregateCount                       │
//! │  - filter → aggregate → sort → paginate             │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based span export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! page_size = 8
//! trace_level = "debug"
//! trace_file = "/tmp/permview-otlp.json"
//! source_file = "active-users.json"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use permview::{handle_event, initialize, Action, Config, Event};
//! use permview::loader::UserLoader;
//! use permview::source::{MemorySource, RawUserRecord};
//!
//! let mut state = initialize(&Config::default());
//! let mut loader = UserLoader::new(Box::new(MemorySource::with_users(vec![
//!     RawUserRecord::new("Bob", "Admin", "Eng", Vec::<String>::new()),
//! ])));
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mounted)?;
//! for action in actions {
//!     let Action::PostToLoader(message) = action;
//!     let response = loader.handle(&message);
//!     handle_event(&mut state, &Event::LoaderResponse(response))?;
//! }
//!
//! assert_eq!(state.total_count, 1);
//! assert_eq!(state.profile_counts[0].key, "Admin");
//! # Ok::<(), permview::PermviewError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod component;
pub mod domain;
pub mod loader;
pub mod source;
pub mod view;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, LoadPhase};
pub use component::UserDirectoryView;
pub use domain::{PermviewError, Result, SortDirection, SortField, UserRecord};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Component configuration.
///
/// Built from a TOML file, from a host-provided key/value map, or left at its
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Users per page. Must be positive. Default: 8
    pub page_size: usize,

    /// Tracing filter directive, e.g. `info` or `permview=debug`.
    ///
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving exported spans. Tracing export is off when unset.
    pub trace_file: Option<PathBuf>,

    /// JSON snapshot used by [`UserDirectoryView::from_config`].
    pub source_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: app::DEFAULT_PAGE_SIZE,
            trace_level: None,
            trace_file: None,
            source_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided key/value map.
    ///
    /// Parsing is lenient: a missing, malformed or zero `page_size` falls back to
    /// the default, and blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use permview::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "20".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 20);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        let page_size = value("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(app::DEFAULT_PAGE_SIZE);

        Self {
            page_size,
            trace_level: value("trace_level").map(String::from),
            trace_file: value("trace_file").map(PathBuf::from),
            source_file: value("source_file").map(PathBuf::from),
        }
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a parse error for invalid TOML or unknown keys, and a configuration
    /// error for a zero page size.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| PermviewError::Parse(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading config file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks invariants that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `page_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PermviewError::Config("page_size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Creates component state from configuration.
///
/// The state starts out loading; nothing is fetched until the host delivers
/// [`Event::Mounted`] and executes the resulting action.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_size = config.page_size, "initializing user directory view");
    AppState::new(config.page_size)
}
