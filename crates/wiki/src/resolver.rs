use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::source::{ArticleSource, LookupOutcome, ResolvedArticle};

/// Query words that suggest episodic or competition content.
pub const SERIES_TRIGGER_WORDS: [&str; 2] = ["queen", "game"];
pub const SERIES_QUALIFIER: &str = " (TV series)";
pub const FILM_QUALIFIER: &str = " (film)";

pub const SEARCH_LIMIT: usize = 5;
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No results for \"{query}\". Try a different spelling.")]
    NoResults { query: String },

    #[error("Page not found for \"{query}\". Check spelling or try \"{query} (film)\".")]
    PageNotFound { query: String },

    #[error("{}", ambiguity_message(.suggestions))]
    Ambiguous { suggestions: Vec<String> },

    #[error("Error: {0:#}")]
    Backend(#[from] anyhow::Error),
}

/// User-facing message for a title that names several articles.
pub fn ambiguity_message(suggestions: &[String]) -> String {
    format!("Ambiguous title. Suggestions: {}. Try one of those.", suggestions.join(", "))
}

impl ResolveError {
    fn ambiguous(options: Vec<String>) -> Self {
        let suggestions = options
            .into_iter()
            .map(|option| option.trim().to_string())
            .filter(|option| !option.is_empty())
            .take(MAX_SUGGESTIONS)
            .collect();
        Self::Ambiguous { suggestions }
    }
}

/// Search term used once an exact lookup finds nothing.
///
/// A heuristic: queries containing a trigger word are assumed to be series.
pub fn search_term(query: &str) -> String {
    let lower = query.to_lowercase();
    let qualifier = if SERIES_TRIGGER_WORDS.iter().any(|word| lower.contains(word)) {
        SERIES_QUALIFIER
    } else {
        FILM_QUALIFIER
    };
    format!("{}{}", query, qualifier)
}

/// Resolves a user-supplied title to a single article.
#[derive(Clone)]
pub struct TitleResolver {
    source: Arc<dyn ArticleSource>,
}

impl TitleResolver {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }

    /// `query` must be non-empty; callers reject empty input.
    pub async fn resolve(&self, query: &str) -> Result<ResolvedArticle, ResolveError> {
        // Step 1: exact lookup, the common path
        match self.source.lookup(query).await? {
            LookupOutcome::Found(article) => {
                debug!(query, title = %article.canonical_title, "exact lookup hit");
                return Ok(article);
            }
            LookupOutcome::Disambiguation(options) => {
                return Err(ResolveError::ambiguous(options));
            }
            LookupOutcome::NotFound => {
                debug!(query, "exact lookup missed, searching");
            }
        }

        // Step 2: search with a film/series qualifier
        let term = search_term(query);
        let candidates = self.source.search(&term, SEARCH_LIMIT).await?;
        let Some(candidate) = candidates.into_iter().next() else {
            return Err(ResolveError::NoResults {
                query: query.to_string(),
            });
        };

        // Step 3: exact lookup of the top candidate
        match self.source.lookup(&candidate).await? {
            LookupOutcome::Found(article) => {
                info!(query, search_term = %term, candidate = %candidate, "resolved via search");
                Ok(ResolvedArticle {
                    canonical_title: candidate,
                    ..article
                })
            }
            LookupOutcome::Disambiguation(options) => Err(ResolveError::ambiguous(options)),
            LookupOutcome::NotFound => Err(ResolveError::PageNotFound {
                query: query.to_string(),
            }),
        }
    }
}
