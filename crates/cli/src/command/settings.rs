use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DASHBOARD_NAME: &str = "Project Dashboard";

#[derive(Parser, Debug, Default)]
#[command(name = "fetch-projects")]
#[command(about = "Fetch DevRev projects by id or filter and print a status report")]
#[command(version)]
pub struct Cli {
    /// Comma-separated project ids, e.g. "ENH-1,ENH-2"
    #[arg(long, value_name = "IDS")]
    pub ids: Option<String>,

    /// JSON config file with `data_source.project_ids`, `data_source.vista_filters`
    /// and `dashboard_name`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Filter object passed through to parts.list, e.g. '{"stage":"in_progress"}'
    #[arg(long = "vista-filters", value_name = "JSON")]
    pub vista_filters: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    data_source: Option<DataSource>,
    #[serde(default)]
    dashboard_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DataSource {
    #[serde(default)]
    project_ids: Vec<String>,
    #[serde(default)]
    vista_filters: Option<Value>,
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchMode {
    ByIds(Vec<String>),
    ByFilters(Map<String, Value>),
}

/// Command-line flags merged over the optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub project_ids: Vec<String>,
    pub vista_filters: Option<Map<String, Value>>,
    pub dashboard_name: String,
}

impl Settings {
    /// Ids take precedence over filters; `None` means nothing was requested.
    pub fn mode(&self) -> Option<FetchMode> {
        if !self.project_ids.is_empty() {
            Some(FetchMode::ByIds(self.project_ids.clone()))
        } else {
            self.vista_filters.clone().map(FetchMode::ByFilters)
        }
    }
}

/// Resolves flags and the config file. Flags win over file values; a malformed
/// `--vista-filters` value is logged and ignored, a malformed config file is fatal.
pub fn resolve(cli: &Cli) -> Result<Settings> {
    let cli_ids = cli.ids.as_deref().map(split_ids).unwrap_or_default();
    let cli_filters = cli.vista_filters.as_deref().and_then(parse_filters);

    let file = match &cli.config {
        Some(path) => load_file(path)?,
        None => FileConfig::default(),
    };
    let data_source = file.data_source.unwrap_or_default();

    let project_ids = if cli_ids.is_empty() {
        data_source.project_ids
    } else {
        cli_ids
    };
    let vista_filters = cli_filters.or_else(|| {
        data_source
            .vista_filters
            .and_then(|value| filters_object(value, "data_source.vista_filters"))
    });

    Ok(Settings {
        project_ids,
        vista_filters,
        dashboard_name: file
            .dashboard_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DASHBOARD_NAME.to_string()),
    })
}

fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_filters(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => filters_object(value, "--vista-filters"),
        Err(err) => {
            log::error!("Invalid JSON for vista-filters: {err}");
            None
        }
    }
}

fn filters_object(value: Value, source: &str) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        Value::Null => None,
        other => {
            log::error!("Ignoring {source}: expected a JSON object, got {other}");
            None
        }
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse config file {}", path.display()))
}
