//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (whatever wires up the search box, table
//! widget and page buttons) and the domain/loader layers.
//!
//! # Architecture
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Loader
//!                           ↑                                          ↓
//!                           └──────────── Loader Response ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Load lifecycle state
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::LoadPhase;
pub use state::{AppState, DEFAULT_PAGE_SIZE};
