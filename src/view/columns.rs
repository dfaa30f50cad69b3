//! Column definitions for the three presented tables.
//!
//! The rendering collaborator draws the tables; this module only tells it which
//! columns exist, how to label them, what kind of value they hold and whether a
//! header click may sort by them.

use crate::domain::{SortField, PERMISSION_SETS_FIELD};
use serde::{Deserialize, Serialize};

/// Kind of value a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
}

/// One table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Header text.
    pub label: &'static str,

    /// Row field the column reads.
    pub field_name: &'static str,

    #[serde(rename = "type")]
    pub column_type: ColumnType,

    pub sortable: bool,
}

impl ColumnDef {
    const fn new(
        label: &'static str,
        field_name: &'static str,
        column_type: ColumnType,
        sortable: bool,
    ) -> Self {
        Self {
            label,
            field_name,
            column_type,
            sortable,
        }
    }
}

/// Columns of the main user table.
pub const USER_COLUMNS: [ColumnDef; 4] = [
    ColumnDef::new("Name", SortField::Name.field_name(), ColumnType::Text, true),
    ColumnDef::new("Profile", SortField::ProfileName.field_name(), ColumnType::Text, true),
    ColumnDef::new("Role", SortField::RoleName.field_name(), ColumnType::Text, true),
    ColumnDef::new("Permission Sets", PERMISSION_SETS_FIELD, ColumnType::Text, false),
];

/// Columns of the per-profile count table.
pub const PROFILE_COLUMNS: [ColumnDef; 2] = [
    ColumnDef::new("Profile Name", "name", ColumnType::Text, false),
    ColumnDef::new("Count", "count", ColumnType::Number, false),
];

/// Columns of the per-role count table.
pub const ROLE_COLUMNS: [ColumnDef; 2] = [
    ColumnDef::new("Role Name", "name", ColumnType::Text, false),
    ColumnDef::new("Count", "count", ColumnType::Number, false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortable_user_columns_parse_as_sort_fields() {
        for column in USER_COLUMNS.iter().filter(|c| c.sortable) {
            assert!(column.field_name.parse::<SortField>().is_ok(), "{}", column.field_name);
        }
    }

    #[test]
    fn permission_set_column_is_not_sortable() {
        let column = USER_COLUMNS
            .iter()
            .find(|c| c.field_name == PERMISSION_SETS_FIELD)
            .unwrap();
        assert!(!column.sortable);
    }

    #[test]
    fn count_column_is_numeric() {
        let json = serde_json::to_value(&ROLE_COLUMNS[1]).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["fieldName"], "count");
    }
}
