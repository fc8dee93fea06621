use crate::tools::schemas::data_sources::{
    EngineSummary, ListDataSourcesRequest, ListDataSourcesResult,
};
use ops_querybook::QuerybookApi;

pub(in crate::tools::dispatch) async fn list_data_sources(
    api: &dyn QuerybookApi,
    request: ListDataSourcesRequest,
) -> ops_querybook::Result<ListDataSourcesResult> {
    // environment_id 0 means "no filter"
    let environment_id = request.environment_id.filter(|id| *id != 0);
    let engines: Vec<EngineSummary> = api
        .query_engines(environment_id)
        .await?
        .into_iter()
        .map(EngineSummary::from)
        .collect();

    Ok(ListDataSourcesResult {
        total: engines.len(),
        engines,
    })
}
