//! Inbound record model.
//!
//! This module defines the raw user record as delivered by the fetch collaborator.
//! It is deliberately lenient: every field may be missing, and the loader turns it
//! into a domain [`UserRecord`](crate::domain::UserRecord).

use serde::{Deserialize, Serialize};

/// A user record exactly as returned by the upstream source.
///
/// Field names follow the upstream camelCase convention. Missing fields
/// deserialize to `None` or an empty list instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub profile_name: Option<String>,

    #[serde(default)]
    pub role_name: Option<String>,

    /// Names of the permission sets assigned to the user, in upstream order.
    #[serde(default)]
    pub permission_set_names: Vec<String>,
}

impl RawUserRecord {
    /// Creates a raw record with all identity fields present.
    ///
    /// # Examples
    ///
    /// ```
    /// use permview::source::RawUserRecord;
    ///
    /// let raw = RawUserRecord::new("Bob", "Admin", "Eng", Vec::<String>::new());
    /// assert_eq!(raw.name.as_deref(), Some("Bob"));
    /// assert!(raw.id.is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        profile_name: impl Into<String>,
        role_name: impl Into<String>,
        permission_set_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            profile_name: Some(profile_name.into()),
            role_name: Some(role_name.into()),
            permission_set_names: permission_set_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the upstream identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
