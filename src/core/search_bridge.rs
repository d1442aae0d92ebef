use std::sync::Arc;

use serde_json::{json, Value};
use tauri::{AppHandle, Emitter, EventId, Listener, Runtime};
use uuid::Uuid;

use super::query_builder::{build_query, SearchRequest};

/// Event the frontend emits to start a search.
pub const SEARCH_REQUEST_EVENT: &str = "github-search";
/// Event carrying every outcome back to the frontend, successes and failures alike.
pub const SEARCH_RESPONSE_EVENT: &str = "github-response";

/// The remote repository search.
///
/// `Ok` is the service's success payload, `Err` its failure payload. Both are handed to
/// the UI untouched.
pub trait RepoSearch: Send + Sync + 'static {
    fn search_repos(&self, query: &str) -> Result<Value, Value>;
}

/// Where search outcomes are delivered.
pub trait ResponseSink: Send + Sync + 'static {
    fn publish(&self, payload: Value);
}

/// Publishes outcomes as `github-response` events to every webview.
pub struct EventSink<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> EventSink<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> ResponseSink for EventSink<R> {
    fn publish(&self, payload: Value) {
        if let Err(err) = self.app.emit(SEARCH_RESPONSE_EVENT, payload) {
            log::warn!("[search_bridge] emit {} failed: {}", SEARCH_RESPONSE_EVENT, err);
        }
    }
}

/// Builds the query for `request` and performs the remote call.
pub fn run_search<S: RepoSearch + ?Sized>(
    searcher: &S,
    request: &SearchRequest,
) -> Result<Value, Value> {
    searcher.search_repos(&build_query(request))
}

/// Connects search requests to the remote search and routes every outcome to one sink.
///
/// Requests are independent: each runs on its own blocking task and answers in whatever
/// order the network completes them.
pub struct SearchBridge<S, K> {
    searcher: Arc<S>,
    sink: Arc<K>,
}

impl<S, K> Clone for SearchBridge<S, K> {
    fn clone(&self) -> Self {
        Self {
            searcher: Arc::clone(&self.searcher),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<S: RepoSearch, K: ResponseSink> SearchBridge<S, K> {
    pub fn new(searcher: S, sink: K) -> Self {
        Self {
            searcher: Arc::new(searcher),
            sink: Arc::new(sink),
        }
    }

    /// Starts one round trip and returns without waiting for it.
    pub fn dispatch(&self, request: SearchRequest) {
        let searcher = Arc::clone(&self.searcher);
        let sink = Arc::clone(&self.sink);
        let id = Uuid::new_v4();

        tauri::async_runtime::spawn_blocking(move || {
            let query = build_query(&request);
            log::debug!("[search_bridge] {} start q={}", id, query);
            let payload = match searcher.search_repos(&query) {
                Ok(payload) => {
                    log::info!("[search_bridge] {} ok", id);
                    payload
                }
                Err(payload) => {
                    log::warn!("[search_bridge] {} failed: {}", id, payload);
                    payload
                }
            };
            sink.publish(payload);
        });
    }

    /// Entry point for raw event payloads. A payload that is not a search request still
    /// gets exactly one answer: a failure message on the same sink.
    pub fn dispatch_raw(&self, payload: &str) {
        match serde_json::from_str::<SearchRequest>(payload) {
            Ok(request) => self.dispatch(request),
            Err(err) => {
                log::warn!("[search_bridge] invalid request payload: {}", err);
                self.sink
                    .publish(json!({ "message": format!("invalid search request: {}", err) }));
            }
        }
    }
}

/// Registers `bridge` on the `github-search` event. Call once at startup.
pub fn subscribe<R, S, K>(app: &AppHandle<R>, bridge: SearchBridge<S, K>) -> EventId
where
    R: Runtime,
    S: RepoSearch,
    K: ResponseSink,
{
    log::info!("[search_bridge] listening on {}", SEARCH_REQUEST_EVENT);
    app.listen(SEARCH_REQUEST_EVENT, move |event| {
        bridge.dispatch_raw(event.payload())
    })
}

#[cfg(test)]
#[path = "tests/search_bridge.rs"]
mod tests;
