//! Schema description models
//!
//! Mirrors the JSON document produced by the catalog `describe-all` export.
//! Only `foreign_key_details[*].foreign_table_name` is needed for ordering;
//! `columns` feeds the INSERT template generator. Everything else is carried
//! through for reporting and ignored by the graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full schema description document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDescription {
    /// Catalog command that produced the document (e.g., "describe-all")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Table name -> table structure
    #[serde(default)]
    pub tables: BTreeMap<String, TableDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tables: Option<usize>,
    /// Tables whose metadata could not be loaded during introspection
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_tables: Vec<String>,
}

impl SchemaDescription {
    /// Look up a table's description
    pub fn table(&self, name: &str) -> Option<&TableDescription> {
        self.tables.get(name)
    }
}

/// Structure of a single table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableDescription {
    /// `None` when the export carried no column metadata for the table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDescription>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<IndexDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<ConstraintDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key_details: Option<Vec<ForeignKeyDetail>>,
}

impl TableDescription {
    /// Foreign key records, empty when none were exported
    pub fn foreign_keys(&self) -> &[ForeignKeyDetail] {
        self.foreign_key_details.as_deref().unwrap_or(&[])
    }

    /// Column names in ordinal order, `None` when no column metadata exists
    pub fn column_names(&self) -> Option<Vec<&str>> {
        self.columns
            .as_ref()
            .map(|cols| cols.iter().map(|c| c.column_name.as_str()).collect())
    }
}

/// Column metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescription {
    pub column_name: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub is_nullable: Option<String>,
    #[serde(default)]
    pub column_default: Option<String>,
}

/// Index metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDescription {
    pub index_name: String,
    pub column_name: String,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_primary: bool,
}

/// Integrity constraint metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintDescription {
    pub constraint_name: String,
    pub constraint_type: String,
    #[serde(default)]
    pub column_name: Option<String>,
    /// "schema.table.column" for foreign keys
    #[serde(default)]
    pub foreign_table_column: Option<String>,
    #[serde(default)]
    pub check_clause: Option<String>,
}

/// Foreign key detail record, one per referencing column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKeyDetail {
    #[serde(default)]
    pub constraint_name: Option<String>,
    #[serde(default)]
    pub column_name: Option<String>,
    #[serde(default)]
    pub foreign_table_schema: Option<String>,
    pub foreign_table_name: String,
    #[serde(default)]
    pub foreign_column_name: Option<String>,
    #[serde(default)]
    pub on_update: Option<String>,
    #[serde(default)]
    pub on_delete: Option<String>,
}
