//! In-memory user source.

use crate::domain::error::{PermviewError, Result};
use crate::source::backend::UserSource;
use crate::source::models::RawUserRecord;

/// A source that returns a fixed outcome.
///
/// Useful for hosts that already hold the response and for tests. The outcome is
/// returned on every call; the component itself fetches only once.
#[derive(Debug, Clone)]
pub struct MemorySource {
    outcome: std::result::Result<Vec<RawUserRecord>, serde_json::Value>,
}

impl MemorySource {
    /// A source that succeeds with `users`.
    #[must_use]
    pub const fn with_users(users: Vec<RawUserRecord>) -> Self {
        Self { outcome: Ok(users) }
    }

    /// A source that fails with the given failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use permview::source::{MemorySource, UserSource};
    ///
    /// let mut source = MemorySource::failing(serde_json::json!({
    ///     "body": { "message": "Insufficient privileges" }
    /// }));
    /// assert!(source.fetch_active_users().is_err());
    /// ```
    #[must_use]
    pub const fn failing(payload: serde_json::Value) -> Self {
        Self { outcome: Err(payload) }
    }
}

impl UserSource for MemorySource {
    fn fetch_active_users(&mut self) -> Result<Vec<RawUserRecord>> {
        match &self.outcome {
            Ok(users) => {
                tracing::debug!(count = users.len(), "returning in-memory users");
                Ok(users.clone())
            }
            Err(payload) => Err(PermviewError::Fetch {
                payload: payload.clone(),
            }),
        }
    }
}
