//! Loader for the one-time user fetch.
//!
//! The component never calls its source directly. It emits a
//! [`LoaderMessage`] as an action; whoever hosts the component hands it to a
//! [`UserLoader`] and feeds the [`LoaderResponse`] back as an event. This keeps the
//! state machine free of I/O and lets the load run wherever the host prefers.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Loader implementation and failure message extraction

pub mod handler;
pub mod messages;

pub use handler::{failure_message, UserLoader, DEFAULT_LOAD_ERROR};
pub use messages::{LoaderMessage, LoaderResponse, TraceContext};
