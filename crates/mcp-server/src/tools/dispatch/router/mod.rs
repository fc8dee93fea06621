pub(super) mod error;
pub(super) mod execute_query;
pub(super) mod execution_status;
pub(super) mod get_query;
pub(super) mod get_table_schema;
pub(super) mod list_data_sources;
pub(super) mod search_queries;
