use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::source::{ArticleSource, LookupOutcome, ResolvedArticle};

/// A backend call recorded by [`MemorySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Lookup(String),
    Search(String),
}

/// In-memory article backend for tests.
///
/// Titles and search terms match exactly. Unknown titles are `NotFound`,
/// unknown search terms return no candidates.
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: HashMap<String, LookupOutcome>,
    results: HashMap<String, Vec<String>>,
    failure: Option<String>,
    calls: Mutex<Vec<SourceCall>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(self, article: ResolvedArticle) -> Self {
        let title = article.canonical_title.clone();
        self.with_outcome(&title, LookupOutcome::Found(article))
    }

    pub fn with_outcome(mut self, title: &str, outcome: LookupOutcome) -> Self {
        self.pages.insert(title.to_string(), outcome);
        self
    }

    pub fn with_results(mut self, term: &str, titles: &[&str]) -> Self {
        self.results
            .insert(term.to_string(), titles.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Every call fails with `message`, as an unreachable backend would.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: SourceCall) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        match &self.failure {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ArticleSource for MemorySource {
    async fn lookup(&self, title: &str) -> Result<LookupOutcome> {
        self.record(SourceCall::Lookup(title.to_string()))?;
        Ok(self
            .pages
            .get(title)
            .cloned()
            .unwrap_or(LookupOutcome::NotFound))
    }

    async fn search(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        self.record(SourceCall::Search(term.to_string()))?;
        Ok(self
            .results
            .get(term)
            .map(|titles| titles.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
