//! Sortable columns and sort direction.
//!
//! The rendering collaborator reports sort clicks using the column's field name
//! (`"name"`, `"profileName"`, `"roleName"`) and a direction string (`"asc"` or
//! `"desc"`). Both parse into the enums here so the rest of the crate never deals
//! with raw strings.

use super::error::PermviewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field name of the permission-set column, which cannot be sorted.
pub const PERMISSION_SETS_FIELD: &str = "formattedPermissionSets";

/// A column the user table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    ProfileName,
    RoleName,
}

impl SortField {
    /// Field name as used by the presentation layer.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ProfileName => "profileName",
            Self::RoleName => "roleName",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for SortField {
    type Err = PermviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "profileName" => Ok(Self::ProfileName),
            "roleName" => Ok(Self::RoleName),
            PERMISSION_SETS_FIELD => Err(PermviewError::UnsortableField(s.to_string())),
            other => Err(PermviewError::UnknownField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = PermviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(PermviewError::InvalidSortDirection(other.to_string())),
        }
    }
}
