use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExecuteQueryRequest {
    /// The SQL query to execute
    #[schemars(description = "The SQL query to execute")]
    pub query: String,

    /// The database engine ID to run the query on
    #[schemars(description = "The database engine ID to run the query on")]
    pub engine_id: i64,

    /// Maximum number of rows to return (default: 1000)
    #[schemars(description = "Maximum number of rows to return (default: 1000)")]
    pub limit: Option<usize>,
}
