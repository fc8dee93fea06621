use super::catalog::{self, ToolKind};
use super::schemas::data_sources::ListDataSourcesRequest;
use super::schemas::execute_query::ExecuteQueryRequest;
use super::schemas::execution_status::ExecutionStatusRequest;
use super::schemas::get_query::GetQueryRequest;
use super::schemas::search_queries::SearchQueriesRequest;
use super::schemas::table_schema::GetTableSchemaRequest;
use ops_querybook::{PollPolicy, QuerybookApi};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

mod router;

/// Querybook MCP service: a fixed tool catalog over a [`QuerybookApi`].
#[derive(Clone)]
pub struct QuerybookService {
    api: Arc<dyn QuerybookApi>,
    policy: PollPolicy,
}

impl QuerybookService {
    pub fn new(api: Arc<dyn QuerybookApi>, policy: PollPolicy) -> Self {
        Self { api, policy }
    }

    /// Runs one tool call. Every outcome, including unknown tools and API failures, is
    /// returned as a `CallToolResult`.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        dispatch(self.api.as_ref(), self.policy, name, arguments).await
    }
}

impl ServerHandler for QuerybookService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Querybook tools: 'list_data_sources' to find an engine_id, \
                 'execute_query' to run SQL (waits up to 60s), \
                 'get_query_execution_status' for long-running executions, \
                 'search_queries'/'get_query' for saved DataDocs, \
                 'get_table_schema' for columns."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: catalog::tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.call(&request.name, request.arguments).await)
    }
}

/// A parsed tool call: one variant per catalog entry, each with typed arguments.
#[derive(Debug)]
enum ToolCall {
    ExecuteQuery(ExecuteQueryRequest),
    ListDataSources(ListDataSourcesRequest),
    SearchQueries(SearchQueriesRequest),
    GetQuery(GetQueryRequest),
    GetTableSchema(GetTableSchemaRequest),
    GetQueryExecutionStatus(ExecutionStatusRequest),
}

#[derive(Debug)]
enum ParseError {
    UnknownTool(String),
    InvalidArguments { tool: &'static str, message: String },
}

impl ToolCall {
    fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, ParseError> {
        let kind =
            ToolKind::from_name(name).ok_or_else(|| ParseError::UnknownTool(name.to_string()))?;
        let args = serde_json::Value::Object(arguments.unwrap_or_default());

        Ok(match kind {
            ToolKind::ExecuteQuery => Self::ExecuteQuery(parse_args(kind, args)?),
            ToolKind::ListDataSources => Self::ListDataSources(parse_args(kind, args)?),
            ToolKind::SearchQueries => Self::SearchQueries(parse_args(kind, args)?),
            ToolKind::GetQuery => Self::GetQuery(parse_args(kind, args)?),
            ToolKind::GetTableSchema => Self::GetTableSchema(parse_args(kind, args)?),
            ToolKind::GetQueryExecutionStatus => {
                Self::GetQueryExecutionStatus(parse_args(kind, args)?)
            }
        })
    }
}

fn parse_args<T: DeserializeOwned>(
    kind: ToolKind,
    args: serde_json::Value,
) -> Result<T, ParseError> {
    serde_json::from_value(args).map_err(|err| ParseError::InvalidArguments {
        tool: kind.name(),
        message: format!("Invalid arguments for {}: {err}", kind.name()),
    })
}

async fn dispatch(
    api: &dyn QuerybookApi,
    policy: PollPolicy,
    name: &str,
    arguments: Option<JsonObject>,
) -> CallToolResult {
    let call = match ToolCall::parse(name, arguments) {
        Ok(call) => call,
        Err(ParseError::UnknownTool(name)) => {
            log::warn!("Unknown tool requested: {name}");
            return router::error::unknown_tool(&name);
        }
        Err(ParseError::InvalidArguments { tool, message }) => {
            log::warn!("{message}");
            return router::error::invalid_request(tool, message);
        }
    };
    log::info!("Tool call: {name}");

    match call {
        ToolCall::ExecuteQuery(request) => {
            respond(name, router::execute_query::execute_query(api, policy, request).await)
        }
        ToolCall::ListDataSources(request) => respond(
            name,
            router::list_data_sources::list_data_sources(api, request).await,
        ),
        ToolCall::SearchQueries(request) => respond(
            name,
            router::search_queries::search_queries(api, request).await,
        ),
        ToolCall::GetQuery(request) => {
            respond(name, router::get_query::get_query(api, request).await)
        }
        ToolCall::GetTableSchema(request) => respond(
            name,
            router::get_table_schema::get_table_schema(api, request).await,
        ),
        ToolCall::GetQueryExecutionStatus(request) => respond(
            name,
            router::execution_status::get_query_execution_status(api, request).await,
        ),
    }
}

fn respond<T: Serialize>(tool: &str, outcome: ops_querybook::Result<T>) -> CallToolResult {
    match outcome {
        Ok(payload) => match ops_protocol::serialize_json(&payload) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(err) => router::error::internal_error(format!("serialize {tool} result: {err}")),
        },
        Err(err) => {
            log::warn!("{tool} failed: {err}");
            router::error::querybook_error(&err)
        }
    }
}

#[cfg(test)]
mod tests;
