//! Load lifecycle state for the component.
//!
//! ```text
//! Pending ──Mounted──▶ Loading ──UsersLoaded──▶ Loaded
//!                          │
//!                          └────LoadFailed────▶ Failed
//! ```
//!
//! `Loaded` accepts search, sort and page events. `Failed` is terminal: the
//! component never retries.

/// Where the component is in its one-time load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Created, load not yet requested.
    #[default]
    Pending,

    /// Load requested, waiting for the loader's response.
    Loading,

    /// Users loaded; interactions are live.
    Loaded,

    /// The load failed; the error message is on the state.
    Failed,
}

impl LoadPhase {
    /// Whether the presentation should show a loading indicator.
    ///
    /// True until the load settles either way.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Pending | Self::Loading)
    }

    /// Whether search, sort and page events are meaningful.
    #[must_use]
    pub const fn accepts_interaction(self) -> bool {
        matches!(self, Self::Loaded)
    }
}
