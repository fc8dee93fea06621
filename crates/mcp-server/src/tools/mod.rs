//! Querybook MCP tool surface.
//!
//! `catalog` declares the tools, `schemas` their argument/result shapes, and `dispatch`
//! routes parsed calls to per-tool handlers.

pub mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::QuerybookService;
