use crate::error::{DevRevError, Result};
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://api.devrev.ai";
pub const DEFAULT_APP_BASE_URL: &str = "https://app.devrev.ai/razorpay";

const TOKEN_VARS: &[&str] = &["DEVREV_PAT", "DEVREV_API_TOKEN"];

/// Connection settings for [`crate::DevRevClient`], resolved once at startup.
#[derive(Debug, Clone)]
pub struct DevRevConfig {
    pub api_base: String,
    /// Web app prefix used to build part links (`<app_base>/parts/<id>`).
    pub app_base: String,
    pub token: String,
}

impl DevRevConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE_URL.to_string(),
            app_base: DEFAULT_APP_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Reads `DEVREV_PAT` (falling back to `DEVREV_API_TOKEN`) plus the optional
    /// `DEVREV_API_BASE_URL` / `DEVREV_APP_BASE_URL` overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = TOKEN_VARS
            .iter()
            .find_map(|key| non_empty(key))
            .ok_or_else(|| {
                DevRevError::Config(
                    "DEVREV_PAT or DEVREV_API_TOKEN environment variable is required".to_string(),
                )
            })?;

        let mut config = Self::new(token);
        if let Some(api_base) = non_empty("DEVREV_API_BASE_URL") {
            config.api_base = api_base;
        }
        if let Some(app_base) = non_empty("DEVREV_APP_BASE_URL") {
            config.app_base = app_base.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = DevRevConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, DevRevError::Config(_)));
        assert!(err.to_string().contains("DEVREV_PAT"));
    }

    #[test]
    fn pat_wins_over_api_token() {
        let config = DevRevConfig::from_lookup(lookup(&[
            ("DEVREV_PAT", "pat-token"),
            ("DEVREV_API_TOKEN", "api-token"),
        ]))
        .unwrap();
        assert_eq!(config.token, "pat-token");
        assert_eq!(config.api_base, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn empty_pat_falls_back_to_api_token() {
        let config = DevRevConfig::from_lookup(lookup(&[
            ("DEVREV_PAT", ""),
            ("DEVREV_API_TOKEN", "api-token"),
        ]))
        .unwrap();
        assert_eq!(config.token, "api-token");
    }

    #[test]
    fn base_url_overrides_are_applied() {
        let config = DevRevConfig::from_lookup(lookup(&[
            ("DEVREV_PAT", "t"),
            ("DEVREV_API_BASE_URL", "http://127.0.0.1:9999"),
            ("DEVREV_APP_BASE_URL", "https://app.example.com/acme/"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.app_base, "https://app.example.com/acme");
    }
}
