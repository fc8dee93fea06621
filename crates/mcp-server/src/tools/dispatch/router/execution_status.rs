use crate::tools::schemas::execution_status::{ExecutionStatusRequest, ExecutionStatusResult};
use ops_querybook::QuerybookApi;

/// Single status read; no polling.
pub(in crate::tools::dispatch) async fn get_query_execution_status(
    api: &dyn QuerybookApi,
    request: ExecutionStatusRequest,
) -> ops_querybook::Result<ExecutionStatusResult> {
    let execution = api.execution(request.execution_id).await?;
    Ok(ExecutionStatusResult::from(execution))
}
