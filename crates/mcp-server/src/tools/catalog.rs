//! Static tool catalog: names, descriptions and input schemas.

use super::schemas::data_sources::ListDataSourcesRequest;
use super::schemas::execute_query::ExecuteQueryRequest;
use super::schemas::execution_status::ExecutionStatusRequest;
use super::schemas::get_query::GetQueryRequest;
use super::schemas::search_queries::SearchQueriesRequest;
use super::schemas::table_schema::GetTableSchemaRequest;
use rmcp::model::{JsonObject, Tool};
use rmcp::schemars;
use serde_json::{json, Value};
use std::sync::Arc;

/// Every tool the server exposes. Adding a variant forces a catalog entry (here) and a
/// handler (`dispatch::ToolCall`), both matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    ExecuteQuery,
    ListDataSources,
    SearchQueries,
    GetQuery,
    GetTableSchema,
    GetQueryExecutionStatus,
}

impl ToolKind {
    pub const ALL: [Self; 6] = [
        Self::ExecuteQuery,
        Self::ListDataSources,
        Self::SearchQueries,
        Self::GetQuery,
        Self::GetTableSchema,
        Self::GetQueryExecutionStatus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ExecuteQuery => "execute_query",
            Self::ListDataSources => "list_data_sources",
            Self::SearchQueries => "search_queries",
            Self::GetQuery => "get_query",
            Self::GetTableSchema => "get_table_schema",
            Self::GetQueryExecutionStatus => "get_query_execution_status",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ExecuteQuery => "Execute a SQL query in Querybook and get results",
            Self::ListDataSources => "List all available data sources/engines in Querybook",
            Self::SearchQueries => "Search for saved queries in Querybook",
            Self::GetQuery => "Get details of a specific saved query by ID",
            Self::GetTableSchema => "Get schema information for a specific table",
            Self::GetQueryExecutionStatus => "Check the status of a running query execution",
        }
    }

    pub fn input_schema(self) -> JsonObject {
        match self {
            Self::ExecuteQuery => schema_object::<ExecuteQueryRequest>(),
            Self::ListDataSources => schema_object::<ListDataSourcesRequest>(),
            Self::SearchQueries => schema_object::<SearchQueriesRequest>(),
            Self::GetQuery => schema_object::<GetQueryRequest>(),
            Self::GetTableSchema => schema_object::<GetTableSchemaRequest>(),
            Self::GetQueryExecutionStatus => schema_object::<ExecutionStatusRequest>(),
        }
    }

    pub fn tool(self) -> Tool {
        Tool::new(self.name(), self.description(), Arc::new(self.input_schema()))
    }
}

fn schema_object<T: schemars::JsonSchema>() -> JsonObject {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(&schema) {
        Ok(Value::Object(map)) => map,
        _ => {
            let mut fallback = JsonObject::new();
            fallback.insert("type".to_string(), json!("object"));
            fallback
        }
    }
}

pub fn tools() -> Vec<Tool> {
    ToolKind::ALL.into_iter().map(ToolKind::tool).collect()
}

/// Tool inventory printed by `--print-tools`.
pub fn tool_inventory_json(version: &str) -> String {
    let tools: Vec<Value> = ToolKind::ALL
        .into_iter()
        .map(|kind| {
            json!({
                "name": kind.name(),
                "description": kind.description(),
                "inputSchema": Value::Object(kind.input_schema()),
            })
        })
        .collect();
    ops_protocol::serialize_json(&json!({
        "server": "querybook-mcp",
        "version": version,
        "tools": tools,
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ToolKind::from_name("drop_table"), None);
    }

    #[test]
    fn schemas_declare_required_arguments() {
        let schema = ToolKind::ExecuteQuery.input_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"query"));
        assert!(required.contains(&"engine_id"));
        assert!(!required.contains(&"limit"));
        assert_eq!(schema["type"], "object");

        let schema = ToolKind::ListDataSources.input_schema();
        assert!(schema
            .get("required")
            .and_then(Value::as_array)
            .map_or(true, |required| required.is_empty()));
    }

    #[test]
    fn inventory_lists_all_six_tools() {
        let inventory: Value = serde_json::from_str(&tool_inventory_json("9.9.9")).unwrap();
        let names: Vec<&str> = inventory["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|tool| tool["name"].as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "execute_query",
                "list_data_sources",
                "search_queries",
                "get_query",
                "get_table_schema",
                "get_query_execution_status",
            ]
        );
        assert_eq!(inventory["version"], "9.9.9");
    }
}
