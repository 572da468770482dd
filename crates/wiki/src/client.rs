use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;

use crate::source::{ArticleSource, LookupOutcome, ResolvedArticle};

pub const ENGLISH_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// First link target on a `*` bullet line.
static BULLET_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*+.*?\[\[([^\]|]+)").unwrap());

/// Namespaces whose links are never disambiguation options.
const SKIPPED_NAMESPACES: [&str; 4] = ["file:", "image:", "category:", "wikt:"];

/// MediaWiki Action API client for English Wikipedia.
#[derive(Clone)]
pub struct WikipediaClient {
    api_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    query: Option<T>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    pageprops: Option<PageProps>,
    extract: Option<String>,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Deserialize)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct Revision {
    slots: Slots,
}

#[derive(Deserialize)]
struct Slots {
    main: Slot,
}

#[derive(Deserialize)]
struct Slot {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

impl<T> ApiResponse<T> {
    fn into_query(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("Wikipedia API error ({}): {}", error.code, error.info);
        }
        self.query.context("Wikipedia response has no query result")
    }
}

/// Options listed on a disambiguation page, in page order.
///
/// Each `*` bullet contributes its first link. Section anchors are dropped and
/// duplicates keep their first position.
fn disambiguation_options(wikitext: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();

    for caps in BULLET_LINK.captures_iter(wikitext) {
        let target = caps[1].split('#').next().unwrap_or_default().trim();
        let lower = target.to_lowercase();
        if target.is_empty()
            || target.starts_with(':')
            || SKIPPED_NAMESPACES.iter().any(|ns| lower.starts_with(ns))
        {
            continue;
        }
        if !options.iter().any(|o| o == target) {
            options.push(target.to_string());
        }
    }

    options
}

fn main_content(revisions: Vec<Revision>) -> Option<String> {
    revisions.into_iter().next().map(|rev| rev.slots.main.content)
}

impl Page {
    fn into_outcome(self) -> Result<LookupOutcome> {
        if self.missing || self.invalid {
            return Ok(LookupOutcome::NotFound);
        }

        let is_disambiguation = self
            .pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some());
        if is_disambiguation {
            let wikitext = main_content(self.revisions).unwrap_or_default();
            return Ok(LookupOutcome::Disambiguation(disambiguation_options(&wikitext)));
        }

        let full_text = main_content(self.revisions)
            .with_context(|| format!("No revision content for page: {}", self.title))?;

        Ok(LookupOutcome::Found(ResolvedArticle {
            canonical_title: self.title,
            full_text,
            short_summary: self.extract.unwrap_or_default(),
        }))
    }
}

impl PageQuery {
    /// Outcome for the first page of a lookup response; no page means not found.
    fn into_outcome(self) -> Result<LookupOutcome> {
        match self.pages.into_iter().next() {
            Some(page) => page.into_outcome(),
            None => Ok(LookupOutcome::NotFound),
        }
    }
}

impl WikipediaClient {
    pub fn new(api_url: String, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { api_url, client })
    }

    pub fn english(user_agent: &str) -> Result<Self> {
        Self::new(ENGLISH_API_URL.to_string(), user_agent, None)
    }

    /// Check that the API answers at all.
    pub async fn ping(&self) -> Result<()> {
        let _: serde_json::Value = self
            .get(&[("action", "query"), ("meta", "siteinfo")])
            .await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .context("Failed to send request to Wikipedia")?;

        if !response.status().is_success() {
            anyhow::bail!("Wikipedia request failed: {}", response.status());
        }

        let body: ApiResponse<T> = response
            .json()
            .await
            .context("Failed to parse Wikipedia response")?;

        body.into_query()
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    async fn lookup(&self, title: &str) -> Result<LookupOutcome> {
        let query: PageQuery = self
            .get(&[
                ("action", "query"),
                ("prop", "revisions|extracts|pageprops"),
                ("rvprop", "content"),
                ("rvslots", "main"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("ppprop", "disambiguation"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await
            .with_context(|| format!("Lookup failed for \"{}\"", title))?;

        query.into_outcome()
    }

    async fn search(&self, term: &str, limit: usize) -> Result<Vec<String>> {
        let limit = limit.to_string();
        let query: SearchQuery = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
            ])
            .await
            .with_context(|| format!("Search failed for \"{}\"", term))?;

        Ok(query.search.into_iter().map(|hit| hit.title).collect())
    }
}
