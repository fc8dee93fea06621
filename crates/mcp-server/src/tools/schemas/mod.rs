pub mod data_sources;
pub mod execute_query;
pub mod execution_status;
pub mod get_query;
pub mod search_queries;
pub mod table_schema;
