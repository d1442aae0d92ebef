pub mod github_search;
pub mod query_builder;
pub mod search_bridge;
