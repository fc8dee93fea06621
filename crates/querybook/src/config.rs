use crate::error::{QuerybookError, Result};
use std::env;

pub const DEFAULT_QUERYBOOK_URL: &str = "https://querybook.de.razorpay.com";

#[derive(Debug, Clone)]
pub struct QuerybookConfig {
    pub base_url: String,
    pub token: String,
}

impl QuerybookConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// `QUERYBOOK_TOKEN` is required; `QUERYBOOK_URL` defaults to [`DEFAULT_QUERYBOOK_URL`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = non_empty("QUERYBOOK_TOKEN").ok_or_else(|| {
            QuerybookError::Config("QUERYBOOK_TOKEN environment variable is required".to_string())
        })?;
        let base_url =
            non_empty("QUERYBOOK_URL").unwrap_or_else(|| DEFAULT_QUERYBOOK_URL.to_string());
        Ok(Self::new(base_url, token))
    }
}
