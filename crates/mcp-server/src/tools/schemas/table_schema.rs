use ops_querybook::model::TableColumn;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTableSchemaRequest {
    /// Table name, optionally schema-qualified
    #[schemars(description = "Name of the table (can include schema prefix like 'schema.table')")]
    pub table_name: String,

    #[schemars(description = "Schema name (optional if included in table_name)")]
    pub schema_name: Option<String>,
}

impl GetTableSchemaRequest {
    /// `schema.table` when a schema is given, otherwise `table_name` as-is.
    pub fn full_name(&self) -> String {
        match self.schema_name.as_deref().filter(|s| !s.is_empty()) {
            Some(schema) => format!("{schema}.{}", self.table_name),
            None => self.table_name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnSummary {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub column_type: Option<Value>,
    pub comment: Option<Value>,
}

impl From<TableColumn> for ColumnSummary {
    fn from(column: TableColumn) -> Self {
        Self {
            name: column.name,
            column_type: column.column_type,
            comment: column.comment,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetTableSchemaResult {
    pub name: Option<Value>,
    pub schema: Option<Value>,
    pub columns: Vec<ColumnSummary>,
    pub description: Option<Value>,
}
