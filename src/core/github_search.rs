use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use serde_json::{json, Map, Value};

use super::search_bridge::RepoSearch;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "elm-repo-search";
pub const API_BASE_URL_ENV: &str = "ELM_SEARCH_GITHUB_API_URL";

const SORT: &str = "stars";
const ORDER: &str = "desc";

/// Outbound client settings, shared read-only by every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Defaults, with the API base URL overridable through `ELM_SEARCH_GITHUB_API_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(API_BASE_URL_ENV) {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                config.api_base_url = url.to_string();
            }
        }
        config
    }
}

/// Unauthenticated client for GitHub's repository search.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    config: SearchConfig,
    http: Client,
}

impl GithubClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        // Searches are never cut short; a hung request simply never answers.
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(None::<Duration>)
            .build()
            .context("build http client")?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn send_search(&self, query: &str) -> Result<Response> {
        let base_url = self.config.api_base_url.trim_end_matches('/');
        let url = format!(
            "{}/search/repositories?q={}&sort={}&order={}",
            base_url,
            encode_query(query),
            SORT,
            ORDER
        );
        log::debug!("[github_search] GET {}", url);

        self.http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .context("GitHub search request failed")
    }
}

impl RepoSearch for GithubClient {
    fn search_repos(&self, query: &str) -> std::result::Result<Value, Value> {
        let response = self.send_search(query).map_err(|err| message_payload(&err))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[github_search] GitHub returned {} for q={}", status, query);
            let body = response.text().context("read GitHub error body");
            return Err(status_payload(status.as_u16(), body));
        }

        response
            .json::<Value>()
            .context("parse GitHub response")
            .map_err(|err| message_payload(&err))
    }
}

/// Encodes `q` so each `+`-separated clause stays a separate qualifier: clauses are
/// percent-encoded and rejoined with a literal `+`, which the server reads as a space.
fn encode_query(query: &str) -> String {
    query
        .split('+')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("+")
}

/// Failure payload for errors that never produced an HTTP status.
pub fn message_payload(err: &anyhow::Error) -> Value {
    json!({ "message": format!("{:#}", err) })
}

/// GitHub's own error body with the status code added, or the raw text as `message`.
/// When the body could not be read, the read error becomes the message.
fn status_payload(status: u16, body: Result<String>) -> Value {
    let mut payload = match body {
        Ok(body) => match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => map,
            _ => {
                let mut map = Map::new();
                map.insert("message".to_string(), Value::String(body));
                map
            }
        },
        Err(err) => {
            let mut map = Map::new();
            map.insert("message".to_string(), Value::String(format!("{:#}", err)));
            map
        }
    };
    payload.insert("status".to_string(), Value::from(status));
    Value::Object(payload)
}

#[cfg(test)]
#[path = "tests/github_search.rs"]
mod tests;
