pub mod report;
pub mod settings;

pub use settings::{Cli, FetchMode};

use anyhow::{Context, Result};
use ops_devrev::{fetch_by_filters, fetch_by_ids, summarize, DevRevConfig, PartsApi};

/// Outcome of one fetch: either the rendered report or "nothing matched".
#[derive(Debug)]
pub enum FetchOutcome {
    Report(String),
    Empty,
}

pub struct FetchCommand<'a> {
    api: &'a dyn PartsApi,
    config: &'a DevRevConfig,
}

impl<'a> FetchCommand<'a> {
    pub fn new(api: &'a dyn PartsApi, config: &'a DevRevConfig) -> Self {
        Self { api, config }
    }

    pub async fn execute(&self, mode: FetchMode, dashboard_name: &str) -> Result<FetchOutcome> {
        let parts = match mode {
            FetchMode::ByIds(ids) => {
                log::info!("Fetching {} specific projects...", ids.len());
                fetch_by_ids(self.api, &ids)
                    .await
                    .context("fetch projects by id")?
            }
            FetchMode::ByFilters(filters) => {
                log::info!("Fetching projects with filters...");
                fetch_by_filters(self.api, &filters)
                    .await
                    .context("fetch projects by filter")?
            }
        };
        log::info!("Found {} projects", parts.len());

        if parts.is_empty() {
            return Ok(FetchOutcome::Empty);
        }

        let rows: Vec<_> = parts
            .into_iter()
            .map(|part| summarize(part, &self.config.app_base))
            .collect();
        Ok(FetchOutcome::Report(report::render(dashboard_name, &rows)?))
    }
}
