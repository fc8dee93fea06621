//! Wire shapes of the Querybook endpoints used by the tools.
//!
//! Fields are optional and loosely typed: Querybook payloads vary between deployments,
//! and missing fields are passed through as `null` rather than rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ExecutionId = i64;

/// `POST query_execution/`
#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuery<'a> {
    pub query: &'a str,
    pub engine_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedExecution {
    pub id: ExecutionId,
}

/// `GET query_execution/{id}/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueryExecution {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub completed_at: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl QueryExecution {
    /// Status as text; a missing status reads as `unknown`.
    pub fn status_label(&self) -> String {
        match &self.status {
            Value::String(s) => s.clone(),
            Value::Null => "unknown".to_string(),
            other => other.to_string(),
        }
    }
}

/// `GET query_execution/{id}/result/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionResult {
    #[serde(default)]
    pub columns: Option<Value>,
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

/// One entry of `GET query_engine/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Engine {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub language: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub environment_id: Option<Value>,
}

/// `GET search/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Option<Vec<SearchHit>>,
    #[serde(default)]
    pub count: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
    #[serde(default)]
    pub owner_uid: Option<Value>,
}

/// `GET datadoc/{id}/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataDoc {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub cells: Option<Vec<DataDocCell>>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataDocCell {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub cell_type: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// `GET table/{name}/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableInfo {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub schema: Option<Value>,
    #[serde(default)]
    pub columns: Option<Vec<TableColumn>>,
    #[serde(default)]
    pub description: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableColumn {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, rename = "type")]
    pub column_type: Option<Value>,
    #[serde(default)]
    pub comment: Option<Value>,
}
