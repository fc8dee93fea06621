use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuerybookError>;

#[derive(Error, Debug)]
pub enum QuerybookError {
    #[error("Querybook API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The execution left `running` for a status other than `done`.
    #[error("Query execution status: {status}")]
    ExecutionFailed { status: String },

    #[error("Query execution status: {status} (gave up after {attempts} polls)")]
    ExecutionTimedOut { status: String, attempts: u32 },

    #[error("{0}")]
    Config(String),
}

impl QuerybookError {
    /// Stable class name surfaced in tool error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Api { .. } => "api_error",
            Self::Http(_) => "transport_error",
            Self::Json(_) => "invalid_response",
            Self::InvalidUrl(_) | Self::Config(_) => "config_error",
            Self::ExecutionFailed { .. } => "execution_failed",
            Self::ExecutionTimedOut { .. } => "execution_timeout",
        }
    }
}
