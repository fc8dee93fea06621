use crate::config::QuerybookConfig;
use crate::error::{QuerybookError, Result};
use crate::model::{
    DataDoc, Engine, ExecutionId, ExecutionResult, QueryExecution, SearchResults, SubmitQuery,
    SubmittedExecution, TableInfo,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Remote Querybook surface. [`QuerybookClient`] talks HTTP; tests script it.
#[async_trait]
pub trait QuerybookApi: Send + Sync {
    async fn submit_query(&self, query: &str, engine_id: i64) -> Result<SubmittedExecution>;

    async fn execution(&self, id: ExecutionId) -> Result<QueryExecution>;

    async fn execution_result(&self, id: ExecutionId) -> Result<ExecutionResult>;

    async fn query_engines(&self, environment_id: Option<i64>) -> Result<Vec<Engine>>;

    /// DataDoc search by keywords.
    async fn search_datadocs(&self, keywords: &str, limit: u32) -> Result<SearchResults>;

    async fn datadoc(&self, id: i64) -> Result<DataDoc>;

    /// `full_name` is `table` or `schema.table`.
    async fn table(&self, full_name: &str) -> Result<TableInfo>;
}

pub struct QuerybookClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl QuerybookClient {
    pub fn new(config: &QuerybookConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|err| QuerybookError::InvalidUrl(format!("{}: {err}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(QuerybookError::InvalidUrl(config.base_url.clone()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            token: config.token.clone(),
        })
    }

    /// `<base>/<segments...>/`; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuerybookError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl QuerybookApi for QuerybookClient {
    async fn submit_query(&self, query: &str, engine_id: i64) -> Result<SubmittedExecution> {
        let url = self.endpoint(&["query_execution"]);
        self.send(self.http.post(url).json(&SubmitQuery { query, engine_id }))
            .await
    }

    async fn execution(&self, id: ExecutionId) -> Result<QueryExecution> {
        let id = id.to_string();
        let url = self.endpoint(&["query_execution", id.as_str()]);
        self.send(self.http.get(url)).await
    }

    async fn execution_result(&self, id: ExecutionId) -> Result<ExecutionResult> {
        let id = id.to_string();
        let url = self.endpoint(&["query_execution", id.as_str(), "result"]);
        self.send(self.http.get(url)).await
    }

    async fn query_engines(&self, environment_id: Option<i64>) -> Result<Vec<Engine>> {
        let mut url = self.endpoint(&["query_engine"]);
        if let Some(environment_id) = environment_id {
            url.query_pairs_mut()
                .append_pair("environment_id", &environment_id.to_string());
        }
        self.send(self.http.get(url)).await
    }

    async fn search_datadocs(&self, keywords: &str, limit: u32) -> Result<SearchResults> {
        let mut url = self.endpoint(&["search"]);
        url.query_pairs_mut()
            .append_pair("keywords", keywords)
            .append_pair("limit", &limit.to_string())
            .append_pair("searchType", "DataDoc");
        self.send(self.http.get(url)).await
    }

    async fn datadoc(&self, id: i64) -> Result<DataDoc> {
        let id = id.to_string();
        let url = self.endpoint(&["datadoc", id.as_str()]);
        self.send(self.http.get(url)).await
    }

    async fn table(&self, full_name: &str) -> Result<TableInfo> {
        let url = self.endpoint(&["table", full_name]);
        self.send(self.http.get(url)).await
    }
}
