use serde::{Deserialize, Serialize};

/// Sentinel for facts that could not be derived.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    /// `Unknown` or a 19xx/20xx year.
    pub year: String,
    /// Comma-joined genre labels, or `Unknown`.
    pub genre: String,
}

impl ExtractedFacts {
    pub fn new(year: Option<String>, genre: Option<String>) -> Self {
        Self {
            year: year.unwrap_or_else(|| UNKNOWN.to_string()),
            genre: genre.unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}
