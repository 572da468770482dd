use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub wiki: WikiConfig,
    pub summary: SummaryConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    pub api_url: String,
    pub user_agent: String,
    /// Unset means requests wait as long as the backend takes.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_sentences: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub json_logs: bool,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: wiki::ENGLISH_API_URL.to_string(),
            user_agent: concat!("story-summarizer/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences: summarize::DEFAULT_MAX_SENTENCES,
            max_chars: summarize::DEFAULT_MAX_CHARS,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            json_logs: false,
        }
    }
}

impl WikiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.summary.max_sentences == 0 {
            anyhow::bail!("summary.max_sentences must be at least 1");
        }
        if self.summary.max_chars == 0 {
            anyhow::bail!("summary.max_chars must be at least 1");
        }
        if self.wiki.api_url.trim().is_empty() {
            anyhow::bail!("wiki.api_url must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.wiki.api_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.wiki.request_timeout(), None);
        assert_eq!(config.summary.max_sentences, 3);
        assert_eq!(config.summary.max_chars, 2000);
        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"wiki": {{"request_timeout_secs": 10}}, "server": {{"json_logs": true}}}}"#).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.wiki.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.wiki.api_url, wiki::ENGLISH_API_URL);
        assert!(config.server.json_logs);
        assert_eq!(config.summary, SummaryConfig::default());
    }

    #[test]
    fn test_rejects_zero_sentences() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"summary": {{"max_sentences": 0}}}}"#).unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("max_sentences"));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/story.json"))).is_err());
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
