use crate::tools::schemas::get_query::{CellSummary, GetQueryRequest, GetQueryResult};
use ops_querybook::QuerybookApi;

pub(in crate::tools::dispatch) async fn get_query(
    api: &dyn QuerybookApi,
    request: GetQueryRequest,
) -> ops_querybook::Result<GetQueryResult> {
    let doc = api.datadoc(request.query_id).await?;
    Ok(GetQueryResult {
        id: doc.id,
        title: doc.title,
        cells: doc
            .cells
            .unwrap_or_default()
            .into_iter()
            .map(CellSummary::from)
            .collect(),
        created_at: doc.created_at,
        updated_at: doc.updated_at,
    })
}
