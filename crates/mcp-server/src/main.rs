//! Querybook MCP Server
//!
//! Exposes Querybook (SQL notebooks) to AI agents via the MCP protocol over stdio.
//!
//! ## Tools
//!
//! - `execute_query` - Run SQL on an engine, wait for completion (bounded), return rows
//! - `list_data_sources` - Query engines, optionally filtered by environment
//! - `search_queries` - Keyword search over saved DataDocs
//! - `get_query` - One DataDoc with its cells
//! - `get_table_schema` - Table columns and description
//! - `get_query_execution_status` - Single status read for an execution
//!
//! ## Environment
//!
//! - `QUERYBOOK_TOKEN` (required) - API token, sent as a bearer credential
//! - `QUERYBOOK_URL` - Querybook base URL
//! - `RUST_LOG` - log filter (logs go to stderr; stdout carries MCP frames)
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "querybook": {
//!       "command": "querybook-mcp",
//!       "env": { "QUERYBOOK_TOKEN": "..." }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use ops_querybook::{PollPolicy, QuerybookClient, QuerybookConfig, DEFAULT_QUERYBOOK_URL};
use rmcp::ServiceExt;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;

mod tools;

use tools::catalog;
use tools::QuerybookService;

/// One-shot flags handled before the server starts.
#[derive(Debug, PartialEq, Eq)]
enum Flag {
    PrintTools,
    Version,
    Help,
}

impl Flag {
    fn parse(args: &[String]) -> Result<Option<Self>, String> {
        match args {
            [] => Ok(None),
            [arg] => match arg.as_str() {
                "--print-tools" => Ok(Some(Self::PrintTools)),
                "--version" | "-V" => Ok(Some(Self::Version)),
                "--help" | "-h" => Ok(Some(Self::Help)),
                _ => Err(arg.clone()),
            },
            _ => Err(args.join(" ")),
        }
    }
}

fn help_text() -> String {
    let tools: Vec<&str> = catalog::ToolKind::ALL
        .into_iter()
        .map(catalog::ToolKind::name)
        .collect();
    format!(
        "Querybook MCP server {version}

Usage: querybook-mcp [--print-tools|--version|--help]

Flags:
  --print-tools  Print tool inventory as JSON and exit
  --version      Print version and exit
  --help         Print this help and exit

Environment:
  QUERYBOOK_TOKEN  API token (required to serve)
  QUERYBOOK_URL    Querybook base URL (default {url})
  RUST_LOG         Log filter, written to stderr (default warn)

Tools: {tools}",
        version = env!("CARGO_PKG_VERSION"),
        url = DEFAULT_QUERYBOOK_URL,
        tools = tools.join(", "),
    )
}

/// Handles one-shot flags. Returns the exit code when the process should stop.
fn handle_cli_args() -> Option<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();
    match Flag::parse(&args) {
        Ok(None) => None,
        Ok(Some(Flag::PrintTools)) => {
            let inventory = catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
            println!("{inventory}");
            Some(ExitCode::SUCCESS)
        }
        Ok(Some(Flag::Version)) => {
            println!("querybook-mcp {}", env!("CARGO_PKG_VERSION"));
            Some(ExitCode::SUCCESS)
        }
        Ok(Some(Flag::Help)) => {
            println!("{}", help_text());
            Some(ExitCode::SUCCESS)
        }
        Err(unknown) => {
            eprintln!("Unknown arguments: {unknown}");
            eprintln!("{}", help_text());
            Some(ExitCode::from(2))
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    if let Some(exit_code) = handle_cli_args() {
        return Ok(exit_code);
    }

    // Logging goes to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = match QuerybookConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let client = QuerybookClient::new(&config).context("build Querybook client")?;

    log::info!("Starting Querybook MCP server ({})", config.base_url);

    let service = QuerybookService::new(Arc::new(client), PollPolicy::default());
    let server = service
        .serve(rmcp::transport::stdio())
        .await
        .context("start MCP server on stdio")?;

    server.waiting().await?;

    log::info!("Querybook MCP server stopped");
    Ok(ExitCode::SUCCESS)
}
