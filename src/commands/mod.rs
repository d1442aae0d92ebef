use serde_json::{json, Value};
use tauri::State;

use crate::core::github_search::GithubClient;
use crate::core::query_builder::{build_query, SearchRequest};
use crate::core::search_bridge::{run_search, RepoSearch};

/// Failure payload for a task that died before the search produced an outcome.
fn join_error_payload(err: impl std::fmt::Display) -> Value {
    json!({ "message": format!("search task failed: {}", err) })
}

fn github_search_impl<S: RepoSearch + ?Sized>(
    searcher: &S,
    request: &SearchRequest,
) -> Result<Value, Value> {
    let outcome = run_search(searcher, request);
    if let Err(payload) = &outcome {
        log::warn!("[commands] github_search failed: {}", payload);
    }
    outcome
}

/// Request/response form of the `github-search` event: same query, same payloads.
#[tauri::command]
pub async fn github_search(
    client: State<'_, GithubClient>,
    request: SearchRequest,
) -> Result<Value, Value> {
    let client = client.inner().clone();
    tauri::async_runtime::spawn_blocking(move || github_search_impl(&client, &request))
        .await
        .map_err(join_error_payload)?
}

#[tauri::command]
pub fn build_search_query(request: SearchRequest) -> String {
    build_query(&request)
}

#[cfg(test)]
#[path = "tests/commands.rs"]
mod tests;
