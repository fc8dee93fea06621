use crate::config::DevRevConfig;
use crate::error::{DevRevError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const PARTS_LIST_PATH: &str = "/parts.list";

/// One page of `parts.list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartsPage {
    #[serde(default)]
    pub parts: Vec<Value>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Remote list endpoint. Implemented by [`DevRevClient`]; tests script it.
#[async_trait]
pub trait PartsApi: Send + Sync {
    /// `query` is already flattened: list values appear as repeated keys.
    async fn list_parts(&self, query: &[(String, String)]) -> Result<PartsPage>;
}

pub struct DevRevClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl DevRevClient {
    pub fn new(config: &DevRevConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base)
            .map_err(|err| DevRevError::InvalidUrl(format!("{}: {err}", config.api_base)))?;
        let endpoint = base
            .join(PARTS_LIST_PATH)
            .map_err(|err| DevRevError::InvalidUrl(format!("{PARTS_LIST_PATH}: {err}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl PartsApi for DevRevClient {
    async fn list_parts(&self, query: &[(String, String)]) -> Result<PartsPage> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(query)
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DevRevError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Flattens request parameters into query pairs.
///
/// Arrays become one pair per element (`type=a&type=b`), nulls are dropped, and
/// nested objects are sent as compact JSON.
pub fn encode_query(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => pairs.extend(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| (key.clone(), scalar_text(item))),
            ),
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
