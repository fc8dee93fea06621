use crate::client::QuerybookApi;
use crate::error::{QuerybookError, Result};
use crate::model::{ExecutionId, QueryExecution};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const STATUS_RUNNING: &str = "running";
pub const STATUS_DONE: &str = "done";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_ROW_LIMIT: usize = 1000;

/// Bounds of the status poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Lifecycle of one execution as seen by the poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState {
    Submitted,
    Running,
    Done,
    Failed(String),
    TimedOut,
}

impl ExecutionState {
    /// State after poll `attempt` (1-based) reported `status`. Still `running` on the last
    /// allowed attempt becomes `TimedOut`; terminal states never change.
    pub fn after_poll(&self, status: &str, attempt: u32, max_attempts: u32) -> Self {
        if self.is_terminal() {
            return self.clone();
        }
        match status {
            STATUS_DONE => Self::Done,
            STATUS_RUNNING if attempt >= max_attempts => Self::TimedOut,
            STATUS_RUNNING => Self::Running,
            other => Self::Failed(other.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Submitted | Self::Running)
    }
}

/// Output of a completed `execute_query` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRun {
    pub execution_id: ExecutionId,
    pub status: String,
    pub columns: Value,
    pub rows: Vec<Value>,
    /// Row count before truncation.
    pub total_rows: usize,
    pub execution_time: Option<Value>,
}

/// Polls `id` until it reports `done`.
///
/// The first poll happens right away and later polls are spaced by `policy.interval`.
/// A status other than `running`/`done` fails immediately; still `running` after
/// `policy.max_attempts` polls is a timeout.
pub async fn wait_for_completion<A>(
    api: &A,
    id: ExecutionId,
    policy: PollPolicy,
) -> Result<QueryExecution>
where
    A: QuerybookApi + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut state = ExecutionState::Submitted;
    let mut attempt = 0;
    let mut execution = QueryExecution::default();

    while !state.is_terminal() {
        if attempt > 0 {
            tokio::time::sleep(policy.interval).await;
        }
        attempt += 1;

        execution = api.execution(id).await?;
        state = state.after_poll(&execution.status_label(), attempt, max_attempts);
        debug!("query_execution {id} poll {attempt}/{max_attempts}: {state:?}");
    }

    match state {
        ExecutionState::Done => Ok(execution),
        ExecutionState::Failed(status) => Err(QuerybookError::ExecutionFailed { status }),
        ExecutionState::TimedOut | ExecutionState::Submitted | ExecutionState::Running => {
            Err(QuerybookError::ExecutionTimedOut {
                status: execution.status_label(),
                attempts: attempt,
            })
        }
    }
}

/// Submits `query` on `engine_id`, waits for it, and returns at most `limit` rows.
pub async fn run_query<A>(
    api: &A,
    query: &str,
    engine_id: i64,
    limit: usize,
    policy: PollPolicy,
) -> Result<QueryRun>
where
    A: QuerybookApi + ?Sized,
{
    let submitted = api.submit_query(query, engine_id).await?;
    debug!("query_execution {} submitted on engine {engine_id}", submitted.id);

    let execution = wait_for_completion(api, submitted.id, policy).await?;
    let result = api.execution_result(submitted.id).await?;

    let mut rows = result.data.unwrap_or_default();
    let total_rows = rows.len();
    rows.truncate(limit);

    Ok(QueryRun {
        execution_id: submitted.id,
        status: execution.status_label(),
        columns: result.columns.unwrap_or_else(|| Value::Array(Vec::new())),
        rows,
        total_rows,
        execution_time: execution.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn running_stays_running_until_the_last_attempt() {
        let state = ExecutionState::Submitted.after_poll(STATUS_RUNNING, 1, 3);
        assert_eq!(state, ExecutionState::Running);
        assert!(!state.is_terminal());

        let state = state.after_poll(STATUS_RUNNING, 2, 3);
        assert_eq!(state, ExecutionState::Running);

        let state = state.after_poll(STATUS_RUNNING, 3, 3);
        assert_eq!(state, ExecutionState::TimedOut);
        assert!(state.is_terminal());
    }

    #[test]
    fn done_on_the_last_attempt_is_not_a_timeout() {
        let state = ExecutionState::Running.after_poll(STATUS_DONE, 3, 3);
        assert_eq!(state, ExecutionState::Done);
    }

    #[test]
    fn unknown_status_fails_with_that_status() {
        let state = ExecutionState::Submitted.after_poll("cancelled", 1, 60);
        assert_eq!(state, ExecutionState::Failed("cancelled".to_string()));
        assert!(state.is_terminal());
    }

    #[test]
    fn terminal_states_ignore_later_polls() {
        assert_eq!(
            ExecutionState::Done.after_poll(STATUS_RUNNING, 1, 60),
            ExecutionState::Done
        );
        assert_eq!(
            ExecutionState::TimedOut.after_poll(STATUS_DONE, 1, 60),
            ExecutionState::TimedOut
        );
    }
}
