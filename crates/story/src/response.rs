use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, StoryError};

/// A successful story lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Title actually used, which may be an auto-corrected search candidate.
    pub title: String,
    pub summary: String,
    pub year: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    pub kind: ErrorKind,
}

/// Exactly one of a result or an error, as sent to front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryResponse {
    Summary(SummaryResult),
    Error(ErrorResult),
}

impl From<StoryError> for ErrorResult {
    fn from(err: StoryError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

impl From<Result<SummaryResult, StoryError>> for StoryResponse {
    fn from(result: Result<SummaryResult, StoryError>) -> Self {
        match result {
            Ok(summary) => Self::Summary(summary),
            Err(err) => Self::Error(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_flat() {
        let response = StoryResponse::Summary(SummaryResult {
            title: "Mr. Queen".to_string(),
            summary: "A chef wakes up as a queen.".to_string(),
            year: "2020".to_string(),
            genre: "Historical, Comedy".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["title"], "Mr. Queen");
        assert_eq!(json["year"], "2020");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let response = StoryResponse::from(Err(StoryError::EmptyQuery));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Please enter a title.");
        assert_eq!(json["kind"], "empty_query");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn test_round_trip_picks_right_variant() {
        let json = r#"{"error":"Error: boom","kind":"backend"}"#;
        let response: StoryResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response, StoryResponse::Error(ErrorResult { kind: ErrorKind::Backend, .. })));
    }
}
