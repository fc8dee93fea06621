use super::*;
use async_trait::async_trait;
use ops_querybook::model::{
    DataDoc, DataDocCell, Engine, ExecutionId, ExecutionResult, QueryExecution, SearchHit,
    SearchResults, SubmittedExecution, TableColumn, TableInfo,
};
use ops_querybook::QuerybookError;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct FakeQuerybook {
    statuses: Mutex<VecDeque<&'static str>>,
    rows: usize,
    fail_with: Option<(u16, &'static str)>,
    calls: Mutex<Vec<String>>,
}

impl FakeQuerybook {
    fn with_statuses(statuses: Vec<&'static str>, rows: usize) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            rows,
            ..Self::default()
        }
    }

    fn failing(status: u16, body: &'static str) -> Self {
        Self {
            fail_with: Some((status, body)),
            ..Self::default()
        }
    }

    fn record(&self, call: String) -> ops_querybook::Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with {
            Some((status, body)) => Err(QuerybookError::Api {
                status,
                body: body.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuerybookApi for FakeQuerybook {
    async fn submit_query(
        &self,
        query: &str,
        engine_id: i64,
    ) -> ops_querybook::Result<SubmittedExecution> {
        self.record(format!("submit:{engine_id}:{query}"))?;
        Ok(SubmittedExecution { id: 11 })
    }

    async fn execution(&self, id: ExecutionId) -> ops_querybook::Result<QueryExecution> {
        self.record(format!("status:{id}"))?;
        let status = self.statuses.lock().unwrap().pop_front().unwrap_or("done");
        Ok(QueryExecution {
            id: Some(json!(id)),
            status: json!(status),
            duration: Some(json!(2)),
            error: Some(json!("")),
            ..QueryExecution::default()
        })
    }

    async fn execution_result(&self, id: ExecutionId) -> ops_querybook::Result<ExecutionResult> {
        self.record(format!("result:{id}"))?;
        Ok(ExecutionResult {
            columns: Some(json!(["day", "orders"])),
            data: Some((0..self.rows).map(|n| json!([n, n * 10])).collect()),
        })
    }

    async fn query_engines(
        &self,
        environment_id: Option<i64>,
    ) -> ops_querybook::Result<Vec<Engine>> {
        self.record(format!("engines:{environment_id:?}"))?;
        Ok(vec![Engine {
            id: Some(json!(3)),
            name: Some(json!("trino")),
            language: Some(json!("presto")),
            description: None,
            environment_id: Some(json!(1)),
        }])
    }

    async fn search_datadocs(
        &self,
        keywords: &str,
        limit: u32,
    ) -> ops_querybook::Result<SearchResults> {
        self.record(format!("search:{keywords}:{limit}"))?;
        Ok(SearchResults {
            results: Some(vec![SearchHit {
                id: Some(json!(9)),
                title: Some(json!("Daily revenue")),
                owner_uid: Some(json!(4)),
                ..SearchHit::default()
            }]),
            count: None,
        })
    }

    async fn datadoc(&self, id: i64) -> ops_querybook::Result<DataDoc> {
        self.record(format!("datadoc:{id}"))?;
        Ok(DataDoc {
            id: Some(json!(id)),
            title: Some(json!("Revenue")),
            cells: Some(vec![DataDocCell {
                id: Some(json!(1)),
                cell_type: Some(json!("query")),
                context: Some(json!("select 1")),
                meta: Some(json!({ "engine": 3 })),
            }]),
            ..DataDoc::default()
        })
    }

    async fn table(&self, full_name: &str) -> ops_querybook::Result<TableInfo> {
        self.record(format!("table:{full_name}"))?;
        Ok(TableInfo {
            name: Some(json!("orders")),
            schema: Some(json!("sales")),
            columns: Some(vec![TableColumn {
                name: Some(json!("id")),
                column_type: Some(json!("bigint")),
                comment: None,
            }]),
            description: None,
        })
    }
}

const FAST: PollPolicy = PollPolicy {
    max_attempts: 60,
    interval: Duration::ZERO,
};

fn args(value: Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

fn text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .expect("tool result has text content")
}

fn payload(result: &CallToolResult) -> Value {
    assert_ne!(result.is_error, Some(true), "unexpected error: {}", text(result));
    serde_json::from_str(text(result)).expect("tool result is JSON")
}

fn error_code(result: &CallToolResult) -> String {
    assert_eq!(result.is_error, Some(true));
    result
        .structured_content
        .as_ref()
        .and_then(|v| v["error"]["code"].as_str())
        .expect("error envelope carries a code")
        .to_string()
}

#[tokio::test]
async fn unknown_tool_returns_tagged_envelope_with_name() {
    let api = FakeQuerybook::default();
    let result = dispatch(&api, FAST, "drop_table", None).await;

    assert_eq!(text(&result), "Unknown tool: drop_table");
    assert_eq!(error_code(&result), "unknown_tool");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn missing_required_argument_is_an_invalid_request() {
    let api = FakeQuerybook::default();
    let result = dispatch(&api, FAST, "execute_query", args(json!({ "query": "select 1" }))).await;

    assert_eq!(error_code(&result), "invalid_request");
    assert!(text(&result).contains("engine_id"), "{}", text(&result));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn execute_query_polls_then_truncates_rows() {
    let api = FakeQuerybook::with_statuses(vec!["running", "running", "done"], 5);
    let result = dispatch(
        &api,
        FAST,
        "execute_query",
        args(json!({ "query": "select * from orders", "engine_id": 3, "limit": 2 })),
    )
    .await;

    let body = payload(&result);
    assert_eq!(body["execution_id"], 11);
    assert_eq!(body["status"], "done");
    assert_eq!(body["columns"], json!(["day", "orders"]));
    assert_eq!(body["rows"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_rows"], 5);
    assert_eq!(body["execution_time"], 2);
    assert_eq!(
        api.calls(),
        vec![
            "submit:3:select * from orders",
            "status:11",
            "status:11",
            "status:11",
            "result:11",
        ]
    );
}

#[tokio::test]
async fn execute_query_timeout_stays_inside_the_envelope() {
    let api = FakeQuerybook::with_statuses(vec!["running"; 5], 0);
    let policy = PollPolicy {
        max_attempts: 2,
        interval: Duration::ZERO,
    };
    let result = dispatch(
        &api,
        policy,
        "execute_query",
        args(json!({ "query": "select 1", "engine_id": 3 })),
    )
    .await;

    assert_eq!(error_code(&result), "execution_timeout");
    assert!(text(&result).starts_with("Error: Query execution status: running"));
    assert_eq!(
        api.calls().iter().filter(|c| c.starts_with("status:")).count(),
        2
    );
}

#[tokio::test]
async fn api_failure_becomes_error_envelope() {
    let api = FakeQuerybook::failing(404, "no such doc");
    let result = dispatch(&api, FAST, "get_query", args(json!({ "query_id": 77 }))).await;

    assert_eq!(text(&result), "Error: Querybook API error (404): no such doc");
    assert_eq!(error_code(&result), "api_error");
    assert_eq!(
        result.structured_content.as_ref().unwrap()["error"]["details"]["status"],
        404
    );
}

#[tokio::test]
async fn list_data_sources_maps_engines() {
    let api = FakeQuerybook::default();
    let result = dispatch(
        &api,
        FAST,
        "list_data_sources",
        args(json!({ "environment_id": 1 })),
    )
    .await;

    let body = payload(&result);
    assert_eq!(body["total"], 1);
    assert_eq!(body["engines"][0]["name"], "trino");
    assert_eq!(body["engines"][0]["description"], Value::Null);
    assert_eq!(api.calls(), vec!["engines:Some(1)"]);
}

#[tokio::test]
async fn list_data_sources_without_arguments() {
    let api = FakeQuerybook::default();
    let result = dispatch(&api, FAST, "list_data_sources", None).await;
    payload(&result);
    assert_eq!(api.calls(), vec!["engines:None"]);
}

#[tokio::test]
async fn search_queries_defaults_limit_and_total() {
    let api = FakeQuerybook::default();
    let result = dispatch(&api, FAST, "search_queries", args(json!({ "query": "revenue" }))).await;

    let body = payload(&result);
    assert_eq!(body["results"][0]["title"], "Daily revenue");
    assert_eq!(body["results"][0]["owner"], 4);
    assert_eq!(body["total"], 0);
    assert_eq!(api.calls(), vec!["search:revenue:20"]);
}

#[tokio::test]
async fn get_query_reshapes_cells() {
    let api = FakeQuerybook::default();
    let result = dispatch(&api, FAST, "get_query", args(json!({ "query_id": 5 }))).await;

    let body = payload(&result);
    assert_eq!(body["id"], 5);
    assert_eq!(body["cells"][0]["type"], "query");
    assert_eq!(body["cells"][0]["content"], "select 1");
}

#[tokio::test]
async fn get_table_schema_joins_schema_and_table() {
    let api = FakeQuerybook::default();
    let result = dispatch(
        &api,
        FAST,
        "get_table_schema",
        args(json!({ "table_name": "orders", "schema_name": "sales" })),
    )
    .await;

    let body = payload(&result);
    assert_eq!(body["columns"][0]["type"], "bigint");
    assert_eq!(api.calls(), vec!["table:sales.orders"]);
}

#[tokio::test]
async fn execution_status_reports_empty_error_as_null() {
    let api = FakeQuerybook::with_statuses(vec!["running"], 0);
    let result = dispatch(
        &api,
        FAST,
        "get_query_execution_status",
        args(json!({ "execution_id": 11 })),
    )
    .await;

    let body = payload(&result);
    assert_eq!(body["status"], "running");
    assert_eq!(body["error"], Value::Null);
    assert_eq!(api.calls(), vec!["status:11"]);
}

#[tokio::test]
async fn service_call_uses_the_same_boundary() {
    let service = QuerybookService::new(Arc::new(FakeQuerybook::failing(500, "boom")), FAST);
    let result = service
        .call("list_data_sources", args(json!({})))
        .await;
    assert_eq!(error_code(&result), "api_error");
}
