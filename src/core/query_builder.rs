use serde::Deserialize;

/// Language every search is restricted to.
pub const LANGUAGE: &str = "elm";

/// Star threshold used when the UI leaves `minStars` out.
pub const DEFAULT_MIN_STARS: i64 = 0;

fn default_min_stars() -> i64 {
    DEFAULT_MIN_STARS
}

/// One search as emitted by the frontend.
///
/// Keys are camelCase; the `query*` aliases are the names the first version of the
/// UI ports used and are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_min_stars", alias = "queryMinStars")]
    pub min_stars: i64,
    #[serde(default, alias = "queryIn")]
    pub scope_field: Option<String>,
    #[serde(default, alias = "queryUser")]
    pub user: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, min_stars: i64) -> Self {
        Self {
            query: query.into(),
            min_stars,
            scope_field: None,
            user: None,
        }
    }

    pub fn scope_field(mut self, scope: impl Into<String>) -> Self {
        self.scope_field = Some(scope.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// A `+key:value` fragment of the GitHub search syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clause<'a> {
    key: &'static str,
    value: ClauseValue<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseValue<'a> {
    AtLeast(i64),
    Text(&'a str),
}

impl<'a> Clause<'a> {
    fn text(key: &'static str, value: &'a str) -> Self {
        Self {
            key,
            value: ClauseValue::Text(value),
        }
    }

    fn apply(self, mut query: String) -> String {
        query.push('+');
        query.push_str(self.key);
        query.push(':');
        match self.value {
            ClauseValue::AtLeast(n) => {
                query.push_str(">=");
                query.push_str(&n.to_string());
            }
            ClauseValue::Text(s) => query.push_str(s),
        }
        query
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Builds the `q` parameter for `/search/repositories`.
///
/// Clauses are applied in a fixed order: stars, scope, user, language. Scope and user
/// are skipped when absent or empty. Nothing is validated; GitHub rejects bad values.
pub fn build_query(request: &SearchRequest) -> String {
    let pipeline = [
        Some(Clause {
            key: "stars",
            value: ClauseValue::AtLeast(request.min_stars),
        }),
        present(request.scope_field.as_deref()).map(|scope| Clause::text("in", scope)),
        present(request.user.as_deref()).map(|user| Clause::text("user", user)),
        Some(Clause::text("language", LANGUAGE)),
    ];

    pipeline
        .into_iter()
        .flatten()
        .fold(request.query.clone(), |query, clause| clause.apply(query))
}

#[cfg(test)]
#[path = "tests/query_builder.rs"]
mod tests;
