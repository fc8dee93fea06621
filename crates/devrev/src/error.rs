use thiserror::Error;

pub type Result<T> = std::result::Result<T, DevRevError>;

#[derive(Error, Debug)]
pub enum DevRevError {
    #[error("DevRev API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Provider repeated cursor {0:?}")]
    CursorCycle(String),

    #[error("{0}")]
    Config(String),
}
