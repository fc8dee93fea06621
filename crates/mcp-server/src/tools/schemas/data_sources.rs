use ops_querybook::model::Engine;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListDataSourcesRequest {
    /// Filter by environment ID (optional)
    #[schemars(description = "Filter by environment ID (optional)")]
    pub environment_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct EngineSummary {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub language: Option<Value>,
    pub description: Option<Value>,
    pub environment_id: Option<Value>,
}

impl From<Engine> for EngineSummary {
    fn from(engine: Engine) -> Self {
        Self {
            id: engine.id,
            name: engine.name,
            language: engine.language,
            description: engine.description,
            environment_id: engine.environment_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListDataSourcesResult {
    pub engines: Vec<EngineSummary>,
    pub total: usize,
}
