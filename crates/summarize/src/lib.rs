pub mod language;
pub mod ranker;
pub mod tokenizer;

pub use language::{Language, LanguageResources};
pub use ranker::{FrequencyRanker, SentenceRanker};
pub use tokenizer::{Document, Sentence, Tokenizer};

use anyhow::{Context, Result};
use std::sync::Arc;

/// Sentences kept in a story summary.
pub const DEFAULT_MAX_SENTENCES: usize = 3;
/// Narrative text beyond this many characters is ignored.
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Reduces narrative text to a few extractive sentences.
#[derive(Clone)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    ranker: Arc<dyn SentenceRanker>,
    max_chars: usize,
}

impl Summarizer {
    pub fn new(tokenizer: Tokenizer, ranker: Arc<dyn SentenceRanker>, max_chars: usize) -> Self {
        Self {
            tokenizer,
            ranker,
            max_chars,
        }
    }

    /// Tokenizer and frequency ranker sharing one set of language resources.
    pub fn with_resources(resources: Arc<LanguageResources>, max_chars: usize) -> Self {
        Self::new(
            Tokenizer::new(resources.clone()),
            Arc::new(FrequencyRanker::new(resources)),
            max_chars,
        )
    }

    /// Up to `max_sentences` sentences joined by single spaces, in document order.
    ///
    /// Only the first `max_chars` characters are considered. Empty narrative
    /// text yields an empty summary.
    pub fn summarize(&self, narrative_text: &str, max_sentences: usize) -> Result<String> {
        let truncated: String = narrative_text.chars().take(self.max_chars).collect();

        let document = self.tokenizer.tokenize(&truncated);
        if document.is_empty() {
            return Ok(String::new());
        }

        let sentences = self
            .ranker
            .rank(&document, max_sentences)
            .context("Failed to rank sentences")?;
        tracing::debug!(
            sentences = document.len(),
            selected = sentences.len(),
            "ranked narrative sentences"
        );

        Ok(sentences.join(" ").trim().to_string())
    }
}
