//! User record domain model.
//!
//! This module defines [`UserRecord`], the normalized representation of an active
//! user as shown in the directory table, and [`AggregateCount`], one row of the
//! per-profile or per-role tally. Records are built once when the load completes
//! and are never mutated afterwards.

use super::fields::SortField;
use serde::{Deserialize, Serialize};

/// Text shown in the permission-set column when a user has no permission sets.
pub const NO_PERMISSION_SETS: &str = "None";

/// Separator used when joining permission set names for display.
pub const PERMISSION_SET_SEPARATOR: &str = ", ";

/// An active user with a precomputed permission-set summary.
///
/// Identity fields are optional because the upstream source is not trusted to
/// always provide them. Accessors such as [`UserRecord::name`] read an absent
/// value as the empty string, which is how filtering, sorting and counting
/// treat it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub profile_name: Option<String>,
    pub role_name: Option<String>,
    pub permission_set_names: Vec<String>,
    /// Derived from `permission_set_names` at construction time.
    pub formatted_permission_sets: String,
}

impl UserRecord {
    /// Creates a record and computes its permission-set summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use permview::domain::UserRecord;
    ///
    /// let user = UserRecord::new(
    ///     None,
    ///     Some("Ann".to_string()),
    ///     Some("Admin".to_string()),
    ///     Some("Sales".to_string()),
    ///     vec!["PS1".to_string(), "PS2".to_string()],
    /// );
    /// assert_eq!(user.formatted_permission_sets, "PS1, PS2");
    /// ```
    #[must_use]
    pub fn new(
        id: Option<String>,
        name: Option<String>,
        profile_name: Option<String>,
        role_name: Option<String>,
        permission_set_names: Vec<String>,
    ) -> Self {
        let formatted_permission_sets = format_permission_sets(&permission_set_names);
        Self {
            id,
            name,
            profile_name,
            role_name,
            permission_set_names,
            formatted_permission_sets,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn profile_name(&self) -> &str {
        self.profile_name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role_name.as_deref().unwrap_or_default()
    }

    /// Returns the value of a sortable field, empty when absent.
    #[must_use]
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Name => self.name(),
            SortField::ProfileName => self.profile_name(),
            SortField::RoleName => self.role_name(),
        }
    }
}

/// Joins permission set names for display.
///
/// Returns [`NO_PERMISSION_SETS`] when the list is empty.
///
/// # Examples
///
/// ```
/// use permview::domain::format_permission_sets;
///
/// assert_eq!(format_permission_sets(&[]), "None");
/// assert_eq!(format_permission_sets(&["A".to_string()]), "A");
/// ```
#[must_use]
pub fn format_permission_sets(names: &[String]) -> String {
    if names.is_empty() {
        NO_PERMISSION_SETS.to_string()
    } else {
        names.join(PERMISSION_SET_SEPARATOR)
    }
}

/// Number of filtered users sharing one profile or role name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCount {
    pub key: String,
    /// Always at least 1.
    pub count: usize,
}
