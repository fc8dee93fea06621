//! Querybook REST client.
//!
//! [`QuerybookApi`] is the remote surface used by the MCP server; [`run_query`] submits a
//! query, polls it under a [`PollPolicy`] and returns a row-capped [`QueryRun`].

mod client;
mod config;
mod error;
mod execution;
pub mod model;

pub use client::{QuerybookApi, QuerybookClient};
pub use config::{QuerybookConfig, DEFAULT_QUERYBOOK_URL};
pub use error::{QuerybookError, Result};
pub use execution::{
    run_query, wait_for_completion, ExecutionState, PollPolicy, QueryRun, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_POLL_INTERVAL, DEFAULT_ROW_LIMIT, STATUS_DONE, STATUS_RUNNING,
};
