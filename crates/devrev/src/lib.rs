//! DevRev `parts.list` client.
//!
//! - [`DevRevClient`] issues authenticated list requests (behind the [`PartsApi`] seam)
//! - [`fetch_by_ids`] / [`fetch_by_filters`] walk the cursor chain
//! - [`summarize`] flattens a raw part into a dashboard row

mod client;
mod config;
mod error;
pub mod normalize;
mod pagination;

pub use client::{encode_query, DevRevClient, PartsApi, PartsPage, PARTS_LIST_PATH};
pub use config::{DevRevConfig, DEFAULT_API_BASE_URL, DEFAULT_APP_BASE_URL};
pub use error::{DevRevError, Result};
pub use normalize::{summarize, ProjectSummary};
pub use pagination::{fetch_by_filters, fetch_by_ids, PAGE_SIZE, PART_TYPE};
