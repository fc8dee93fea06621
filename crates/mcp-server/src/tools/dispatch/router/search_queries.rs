use crate::tools::schemas::search_queries::{
    SavedQuerySummary, SearchQueriesRequest, SearchQueriesResult,
};
use ops_querybook::QuerybookApi;
use serde_json::json;

const DEFAULT_LIMIT: u32 = 20;

/// Keyword search over saved DataDocs.
pub(in crate::tools::dispatch) async fn search_queries(
    api: &dyn QuerybookApi,
    request: SearchQueriesRequest,
) -> ops_querybook::Result<SearchQueriesResult> {
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let found = api.search_datadocs(&request.query, limit).await?;

    Ok(SearchQueriesResult {
        results: found
            .results
            .unwrap_or_default()
            .into_iter()
            .map(SavedQuerySummary::from)
            .collect(),
        total: found
            .count
            .filter(|count| !count.is_null())
            .unwrap_or_else(|| json!(0)),
    })
}
