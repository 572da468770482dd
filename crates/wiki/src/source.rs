use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An article as returned by the lookup backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArticle {
    pub canonical_title: String,
    /// Entire article body, markup and infobox included.
    pub full_text: String,
    /// Lead abstract, used when the article has no plot section.
    pub short_summary: String,
}

/// Result of an exact title lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ResolvedArticle),
    NotFound,
    /// The title names several subjects; holds the backend's options in order.
    Disambiguation(Vec<String>),
}

/// Encyclopedia lookup/search backend.
///
/// Lookups are always exact: no fuzzy auto-suggest. Transport and API
/// failures come back as `Err`.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn lookup(&self, title: &str) -> Result<LookupOutcome>;

    /// Candidate titles ranked by the backend, at most `limit` of them.
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<String>>;
}
