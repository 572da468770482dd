use std::collections::HashSet;

/// Languages with bundled tokenizer resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "even",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "much", "must", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "upon", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Words that end in a period without ending a sentence.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "mt", "lt", "col", "gen", "sgt", "capt",
    "vs", "etc", "inc", "ltd", "co", "u.s", "u.k",
];

/// Word lists the tokenizer and ranker need for one language.
///
/// Built once at startup and shared; nothing is fetched lazily.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    language: Language,
    stopwords: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
}

impl LanguageResources {
    pub fn load(language: Language) -> Self {
        let (stopwords, abbreviations) = match language {
            Language::English => (ENGLISH_STOPWORDS, ENGLISH_ABBREVIATIONS),
        };
        tracing::debug!(?language, stopwords = stopwords.len(), "loaded language resources");

        Self {
            language,
            stopwords: stopwords.iter().copied().collect(),
            abbreviations: abbreviations.iter().copied().collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// `word` must already be lowercase.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// True when `token` (e.g. `Dr.`) is a known abbreviation.
    pub fn is_abbreviation(&self, token: &str) -> bool {
        let stripped = token.trim_end_matches('.').to_lowercase();
        self.abbreviations.contains(stripped.as_str())
    }
}
