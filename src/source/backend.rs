//! User source abstraction.
//!
//! This module defines the [`UserSource`] trait that abstracts over the external
//! collaborator returning active users. The component never knows how users are
//! fetched; it only sees the records or the failure payload.

use crate::domain::error::Result;
use crate::source::models::RawUserRecord;

/// The external collaborator that returns the list of active users.
///
/// Implementations report a collaborator-side failure as
/// [`PermviewError::Fetch`](crate::domain::PermviewError::Fetch) carrying the raw
/// failure object, so the loader can extract its message. Transport or decoding
/// problems may use any other variant.
///
/// # Implementations
///
/// - [`MemorySource`](crate::source::MemorySource): fixed in-memory outcome
/// - [`JsonFileSource`](crate::source::JsonFileSource): JSON snapshot on disk
///
/// # Examples
///
/// ```
/// use permview::source::{MemorySource, UserSource, RawUserRecord};
///
/// let mut source = MemorySource::with_users(vec![
///     RawUserRecord::new("Bob", "Admin", "Eng", Vec::<String>::new()),
/// ]);
/// let users = source.fetch_active_users()?;
/// assert_eq!(users.len(), 1);
/// # Ok::<(), permview::PermviewError>(())
/// ```
pub trait UserSource: Send {
    /// Fetches every active user.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator reports a failure or the response
    /// cannot be read.
    fn fetch_active_users(&mut self) -> Result<Vec<RawUserRecord>>;
}
