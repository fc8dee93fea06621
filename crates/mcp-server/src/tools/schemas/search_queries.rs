use ops_querybook::model::SearchHit;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchQueriesRequest {
    /// Search term
    #[schemars(description = "Search term to find in query titles and content")]
    pub query: String,

    /// Maximum results (default: 20)
    #[schemars(description = "Maximum number of results to return (default: 20)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SavedQuerySummary {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
    pub owner: Option<Value>,
}

impl From<SearchHit> for SavedQuerySummary {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            title: hit.title,
            created_at: hit.created_at,
            updated_at: hit.updated_at,
            owner: hit.owner_uid,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchQueriesResult {
    pub results: Vec<SavedQuerySummary>,
    /// Server-side hit count (may exceed `results.len()`).
    pub total: Value,
}
