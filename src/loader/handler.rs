//! Loader implementation.
//!
//! The loader owns the [`UserSource`] and answers [`LoaderMessage`]s with
//! [`LoaderResponse`]s. It is the only place where the component touches the
//! outside world, and it is where raw records become domain records.

use crate::domain::error::{PermviewError, Result};
use crate::domain::UserRecord;
use crate::loader::{LoaderMessage, LoaderResponse};
use crate::source::{RawUserRecord, UserSource};
use serde_json::Value;

/// Message shown when a failure payload carries no usable message.
pub const DEFAULT_LOAD_ERROR: &str = "Failed to load active users";

/// Extracts a human-readable message from a source failure payload.
///
/// Looks for `body.message`, then a top-level `message`. Falls back to
/// [`DEFAULT_LOAD_ERROR`] when neither is a string.
///
/// # Examples
///
/// ```
/// use permview::loader::failure_message;
///
/// let payload = serde_json::json!({ "body": { "message": "Insufficient privileges" } });
/// assert_eq!(failure_message(&payload), "Insufficient privileges");
/// assert_eq!(failure_message(&serde_json::json!({})), "Failed to load active users");
/// ```
#[must_use]
pub fn failure_message(payload: &Value) -> String {
    payload
        .pointer("/body/message")
        .and_then(Value::as_str)
        .or_else(|| payload.get("message").and_then(Value::as_str))
        .map_or_else(|| DEFAULT_LOAD_ERROR.to_string(), String::from)
}

/// Runs user loads against a source.
///
/// The source is attached at construction or later via [`UserLoader::attach`],
/// which lets a host create the loader before it knows where users come from.
#[derive(Default)]
pub struct UserLoader {
    source: Option<Box<dyn UserSource>>,
}

impl std::fmt::Debug for UserLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoader")
            .field("attached", &self.source.is_some())
            .finish()
    }
}

impl UserLoader {
    /// Creates a loader bound to `source`.
    #[must_use]
    pub fn new(source: Box<dyn UserSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Replaces the source used by subsequent loads.
    pub fn attach(&mut self, source: Box<dyn UserSource>) {
        self.source = Some(source);
    }

    /// Returns the attached source, failing if none is attached.
    ///
    /// # Errors
    ///
    /// Returns an error if no source has been attached yet.
    fn get_source(&mut self) -> Result<&mut Box<dyn UserSource>> {
        self.source
            .as_mut()
            .ok_or_else(|| PermviewError::Loader("no user source attached".to_string()))
    }

    /// Converts a raw upstream record into a domain record.
    fn raw_to_user(raw: RawUserRecord) -> UserRecord {
        UserRecord::new(
            raw.id,
            raw.name,
            raw.profile_name,
            raw.role_name,
            raw.permission_set_names,
        )
    }

    /// Maps a load error to the message presented to the user.
    fn error_to_message(error: &PermviewError) -> String {
        match error {
            PermviewError::Fetch { payload } => failure_message(payload),
            other => other.to_string(),
        }
    }

    /// Handles the `LoadUsers` message.
    fn handle_load_users(&mut self) -> LoaderResponse {
        tracing::info!("loading active users");

        match self.get_source().and_then(|source| source.fetch_active_users()) {
            Ok(raw) => {
                let users: Vec<UserRecord> = raw.into_iter().map(Self::raw_to_user).collect();
                tracing::info!(count = users.len(), "active users retrieved");
                LoaderResponse::UsersLoaded { users }
            }
            Err(e) => {
                let message = Self::error_to_message(&e);
                tracing::error!(error = %message, "error retrieving active users");
                LoaderResponse::LoadFailed { message }
            }
        }
    }

    /// Processes one message and returns its response.
    pub fn handle(&mut self, message: &LoaderMessage) -> LoaderResponse {
        match message {
            LoaderMessage::LoadUsers { trace_context } => {
                let _span = tracing::debug_span!("loader_load_users",
                    trace_id = trace_context.as_ref().map(|c| c.trace_id.as_str()),
                    parent_span_id = trace_context.as_ref().map(|c| c.parent_span_id.as_str())
                ).entered();
                self.handle_load_users()
            }
        }
    }
}
