use crate::tools::schemas::execute_query::ExecuteQueryRequest;
use ops_querybook::{run_query, PollPolicy, QueryRun, QuerybookApi, DEFAULT_ROW_LIMIT};

/// Submit, poll until done, then return at most `limit` rows.
pub(in crate::tools::dispatch) async fn execute_query(
    api: &dyn QuerybookApi,
    policy: PollPolicy,
    request: ExecuteQueryRequest,
) -> ops_querybook::Result<QueryRun> {
    let limit = request.limit.unwrap_or(DEFAULT_ROW_LIMIT);
    run_query(api, &request.query, request.engine_id, limit, policy).await
}
