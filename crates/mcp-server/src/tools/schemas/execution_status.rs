use ops_querybook::model::QueryExecution;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExecutionStatusRequest {
    #[schemars(description = "The execution ID to check status for")]
    pub execution_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ExecutionStatusResult {
    pub id: Option<Value>,
    pub status: Value,
    pub duration: Option<Value>,
    pub created_at: Option<Value>,
    pub completed_at: Option<Value>,
    pub error: Option<Value>,
}

impl From<QueryExecution> for ExecutionStatusResult {
    fn from(execution: QueryExecution) -> Self {
        Self {
            id: execution.id,
            status: execution.status,
            duration: execution.duration,
            created_at: execution.created_at,
            completed_at: execution.completed_at,
            error: execution.error.filter(|err| match err {
                Value::String(s) => !s.is_empty(),
                other => !other.is_null(),
            }),
        }
    }
}
