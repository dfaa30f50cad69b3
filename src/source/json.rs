//! JSON snapshot user source.
//!
//! Reads a previously captured response from disk. The file holds either the
//! success body, a JSON array of user records, or a failure body, any JSON
//! object. The failure object is reported as-is so its message can be extracted
//! the same way as a live failure.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": "0051x000001",
//!     "name": "Ann",
//!     "profileName": "System Administrator",
//!     "roleName": "Sales",
//!     "permissionSetNames": ["PS1", "PS2"]
//!   }
//! ]
//! ```
//!
//! or, for a failed fetch:
//!
//! ```json
//! { "body": { "message": "Insufficient privileges" } }
//! ```

use crate::domain::error::{PermviewError, Result};
use crate::source::backend::UserSource;
use crate::source::models::RawUserRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// JSON file user source.
///
/// The file is read on every fetch, so the snapshot reflects the file's contents
/// at the time the component loads, not at construction.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// Path to the snapshot file on disk.
    file_path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the snapshot at `file_path`.
    ///
    /// The file is not touched until [`UserSource::fetch_active_users`] is called.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Interprets a parsed snapshot document.
    fn decode(document: Value) -> Result<Vec<RawUserRecord>> {
        match document {
            Value::Array(_) => serde_json::from_value(document)
                .map_err(|e| PermviewError::Parse(format!("invalid user record: {e}"))),
            Value::Object(_) => Err(PermviewError::Fetch { payload: document }),
            other => Err(PermviewError::Parse(format!(
                "expected an array of users or a failure object, found {other}"
            ))),
        }
    }
}

impl UserSource for JsonFileSource {
    fn fetch_active_users(&mut self) -> Result<Vec<RawUserRecord>> {
        let _span = tracing::debug_span!("json_fetch_active_users",
            path = ?self.file_path
        ).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let document: Value = serde_json::from_str(&contents)
            .map_err(|e| PermviewError::Parse(format!("failed to parse JSON: {e}")))?;

        let users = Self::decode(document)?;
        tracing::debug!(count = users.len(), "snapshot users read");
        Ok(users)
    }
}
