use ops_querybook::model::DataDocCell;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetQueryRequest {
    #[schemars(description = "The ID of the query to retrieve")]
    pub query_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CellSummary {
    pub id: Option<Value>,
    #[serde(rename = "type")]
    pub cell_type: Option<Value>,
    pub content: Option<Value>,
    pub meta: Option<Value>,
}

impl From<DataDocCell> for CellSummary {
    fn from(cell: DataDocCell) -> Self {
        Self {
            id: cell.id,
            cell_type: cell.cell_type,
            content: cell.context,
            meta: cell.meta,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetQueryResult {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub cells: Vec<CellSummary>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
}
