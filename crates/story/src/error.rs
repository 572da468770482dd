use serde::{Deserialize, Serialize};
use thiserror::Error;
use wiki::{ambiguity_message, ResolveError};

/// Everything that can end a story request early.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    #[error("Please enter a title.")]
    EmptyQuery,

    #[error("{message}")]
    NotFound { message: String },

    #[error("{}", ambiguity_message(.suggestions))]
    Ambiguous { suggestions: Vec<String> },

    #[error("Error: {message}")]
    Backend { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyQuery,
    NotFound,
    Ambiguous,
    Backend,
}

impl StoryError {
    pub fn backend(err: anyhow::Error) -> Self {
        Self::Backend {
            message: format!("{:#}", err),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyQuery => ErrorKind::EmptyQuery,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Ambiguous { .. } => ErrorKind::Ambiguous,
            Self::Backend { .. } => ErrorKind::Backend,
        }
    }
}

impl ErrorKind {
    /// Warnings are user input problems rather than lookup failures.
    pub fn is_warning(self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}

impl From<ResolveError> for StoryError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NoResults { .. } | ResolveError::PageNotFound { .. } => Self::NotFound {
                message: err.to_string(),
            },
            ResolveError::Ambiguous { suggestions } => Self::Ambiguous { suggestions },
            ResolveError::Backend(err) => Self::backend(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_errors_map_to_kinds() {
        let not_found: StoryError = ResolveError::NoResults {
            query: "Xyz".to_string(),
        }
        .into();
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.to_string(), "No results for \"Xyz\". Try a different spelling.");

        let backend: StoryError =
            ResolveError::Backend(anyhow::anyhow!("timed out").context("Search failed")).into();
        assert_eq!(backend.kind(), ErrorKind::Backend);
        assert_eq!(backend.to_string(), "Error: Search failed: timed out");
    }

    #[test]
    fn test_ambiguous_message_matches_resolver() {
        let suggestions = vec!["Foo (1999 film)".to_string(), "Foo (band)".to_string()];
        let resolve = ResolveError::Ambiguous {
            suggestions: suggestions.clone(),
        };
        let expected = resolve.to_string();

        let story: StoryError = resolve.into();
        assert_eq!(story.kind(), ErrorKind::Ambiguous);
        assert_eq!(story.to_string(), expected);
        assert_eq!(
            expected,
            "Ambiguous title. Suggestions: Foo (1999 film), Foo (band). Try one of those."
        );
        assert_eq!(story, StoryError::Ambiguous { suggestions });
    }

    #[test]
    fn test_only_empty_query_is_warning() {
        assert!(StoryError::EmptyQuery.kind().is_warning());
        assert!(!ErrorKind::NotFound.is_warning());
        assert!(!ErrorKind::Ambiguous.is_warning());
        assert!(!ErrorKind::Backend.is_warning());
    }
}
