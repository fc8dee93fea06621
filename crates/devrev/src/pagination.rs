use crate::client::{encode_query, PartsApi};
use crate::error::{DevRevError, Result};
use crate::normalize::display_id;
use log::debug;
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::ops::ControlFlow;

pub const PAGE_SIZE: u32 = 100;
pub const PART_TYPE: &str = "enhancement";

fn base_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("type".to_string(), json!([PART_TYPE]));
    params.insert("limit".to_string(), json!(PAGE_SIZE));
    params
}

/// Fetches the parts whose `display_id` is in `ids`.
///
/// Each display id appears at most once in the result. Stops as soon as every distinct
/// requested id has been seen, or when the cursor chain ends. Ids that do not exist remotely
/// are simply absent from the result.
pub async fn fetch_by_ids<A>(api: &A, ids: &[String]) -> Result<Vec<Value>>
where
    A: PartsApi + ?Sized,
{
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }

    let mut found: HashSet<String> = HashSet::new();
    let mut matches = Vec::new();
    walk_pages(api, base_params(), |parts| {
        for part in parts {
            let Some(id) = display_id(&part).filter(|id| wanted.contains(id)) else {
                continue;
            };
            // Repeated records from the provider are kept once.
            if found.insert(id.to_string()) {
                matches.push(part);
            }
        }
        if found.len() == wanted.len() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .await?;
    Ok(matches)
}

/// Fetches every part matching `filters`.
///
/// Filter keys are sent as extra query parameters and override `type`/`limit` when
/// they name them. The whole cursor chain is always consumed.
pub async fn fetch_by_filters<A>(api: &A, filters: &Map<String, Value>) -> Result<Vec<Value>>
where
    A: PartsApi + ?Sized,
{
    let mut params = base_params();
    for (key, value) in filters {
        params.insert(key.clone(), value.clone());
    }

    let mut parts_out = Vec::new();
    walk_pages(api, params, |parts| {
        parts_out.extend(parts);
        ControlFlow::Continue(())
    })
    .await?;
    Ok(parts_out)
}

async fn walk_pages<A, F>(api: &A, params: Map<String, Value>, mut on_page: F) -> Result<()>
where
    A: PartsApi + ?Sized,
    F: FnMut(Vec<Value>) -> ControlFlow<()>,
{
    let mut cursor: Option<String> = None;
    let mut seen_cursors: HashSet<String> = HashSet::new();
    let mut page_no = 0usize;

    loop {
        let mut request = params.clone();
        if let Some(cursor) = &cursor {
            request.insert("cursor".to_string(), Value::String(cursor.clone()));
        }

        let page = api.list_parts(&encode_query(&request)).await?;
        page_no += 1;
        debug!(
            "parts.list page {page_no}: {} parts, next_cursor={}",
            page.parts.len(),
            page.next_cursor.is_some()
        );

        if on_page(page.parts).is_break() {
            debug!("parts.list stopped early after {page_no} pages");
            return Ok(());
        }

        match page.next_cursor.filter(|next| !next.is_empty()) {
            Some(next) => {
                if !seen_cursors.insert(next.clone()) {
                    return Err(DevRevError::CursorCycle(next));
                }
                cursor = Some(next);
            }
            None => return Ok(()),
        }
    }
}
