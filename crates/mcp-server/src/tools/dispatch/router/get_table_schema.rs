use crate::tools::schemas::table_schema::{
    ColumnSummary, GetTableSchemaRequest, GetTableSchemaResult,
};
use ops_querybook::QuerybookApi;

pub(in crate::tools::dispatch) async fn get_table_schema(
    api: &dyn QuerybookApi,
    request: GetTableSchemaRequest,
) -> ops_querybook::Result<GetTableSchemaResult> {
    let table = api.table(&request.full_name()).await?;
    Ok(GetTableSchemaResult {
        name: table.name,
        schema: table.schema,
        columns: table
            .columns
            .unwrap_or_default()
            .into_iter()
            .map(ColumnSummary::from)
            .collect(),
        description: table.description,
    })
}
