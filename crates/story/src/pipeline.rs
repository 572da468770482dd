use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use extract::FactExtractor;
use summarize::{LanguageResources, Summarizer};
use wiki::{ArticleSource, TitleResolver, WikipediaClient};

use crate::config::AppConfig;
use crate::error::StoryError;
use crate::response::{StoryResponse, SummaryResult};

/// Title in, story summary and facts out.
///
/// Holds no per-request state; one instance serves any number of requests.
#[derive(Clone)]
pub struct StoryPipeline {
    resolver: TitleResolver,
    facts: FactExtractor,
    summarizer: Summarizer,
    max_sentences: usize,
}

impl StoryPipeline {
    pub fn new(source: Arc<dyn ArticleSource>, summarizer: Summarizer, max_sentences: usize) -> Self {
        Self {
            resolver: TitleResolver::new(source),
            facts: FactExtractor::new(),
            summarizer,
            max_sentences,
        }
    }

    /// Pipeline backed by Wikipedia, using already-loaded language resources.
    pub fn from_config(config: &AppConfig, resources: Arc<LanguageResources>) -> Result<Self> {
        let client = WikipediaClient::new(
            config.wiki.api_url.clone(),
            &config.wiki.user_agent,
            config.wiki.request_timeout(),
        )?;

        Ok(Self::with_source(config, Arc::new(client), resources))
    }

    /// Pipeline over a caller-owned backend, with summary limits from `config`.
    pub fn with_source(
        config: &AppConfig,
        source: Arc<dyn ArticleSource>,
        resources: Arc<LanguageResources>,
    ) -> Self {
        let summarizer = Summarizer::with_resources(resources, config.summary.max_chars);
        Self::new(source, summarizer, config.summary.max_sentences)
    }

    pub async fn get_story(&self, title: &str) -> Result<SummaryResult, StoryError> {
        let query = title.trim();
        if query.is_empty() {
            warn!("empty title submitted");
            return Err(StoryError::EmptyQuery);
        }

        // Step 1: find the article
        let article = self.resolver.resolve(query).await?;

        // Step 2: narrative section, markup stripped
        let narrative = markup::narrative_text(&article.full_text, &article.short_summary);

        // Step 3: facts come from the whole article
        let facts = self.facts.extract_facts(&article.full_text);

        // Step 4: extractive summary
        let summary = self
            .summarizer
            .summarize(&narrative, self.max_sentences)
            .map_err(StoryError::backend)?;

        info!(
            query,
            title = %article.canonical_title,
            year = %facts.year,
            genre = %facts.genre,
            "story ready"
        );

        Ok(SummaryResult {
            title: article.canonical_title,
            summary,
            year: facts.year,
            genre: facts.genre,
        })
    }

    /// `get_story` folded into the response shape front ends send out.
    pub async fn respond(&self, title: &str) -> StoryResponse {
        let result = self.get_story(title).await;
        if let Err(err) = &result {
            warn!(title, kind = ?err.kind(), error = %err, "story request failed");
        }
        result.into()
    }
}
