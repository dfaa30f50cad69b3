//! Error types for the permview component.
//!
//! This module defines the centralized error type [`PermviewError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only the user fetch can fail at runtime. Filtering, sorting and paging are pure
//! transforms and never produce an error; the sort-related variants exist to reject
//! malformed requests from the host before they reach the state.

use thiserror::Error;

/// The main error type for permview operations.
#[derive(Debug, Error)]
pub enum PermviewError {
    /// The user source reported a failure.
    ///
    /// The payload is the raw failure object surfaced by the collaborator. A
    /// human-readable message is extracted from it by
    /// [`failure_message`](crate::loader::failure_message).
    #[error("Fetch failed: {payload}")]
    Fetch {
        /// Raw failure object as reported by the source.
        payload: serde_json::Value,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON snapshot or TOML config file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid.
    ///
    /// Occurs when configuration values are malformed, e.g. a zero page size.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host asked to sort by a field name that does not exist.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The host asked to sort by a column that is not sortable.
    #[error("Field is not sortable: {0}")]
    UnsortableField(String),

    /// Sort direction was neither `asc` nor `desc`.
    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),

    /// The loader was asked to do something it cannot.
    #[error("Loader error: {0}")]
    Loader(String),
}

/// A specialized `Result` type for permview operations.
pub type Result<T> = std::result::Result<T, PermviewError>;
