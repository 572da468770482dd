use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

use crate::language::LanguageResources;
use crate::tokenizer::Document;

/// Picks the most salient sentences of a document.
///
/// Implementations return at most `count` sentence texts in document order
/// and must be deterministic for a given document and count.
pub trait SentenceRanker: Send + Sync {
    fn rank(&self, document: &Document, count: usize) -> Result<Vec<String>>;
}

/// Scores sentences by the average document frequency of their content words.
#[derive(Debug, Clone)]
pub struct FrequencyRanker {
    resources: Arc<LanguageResources>,
}

impl FrequencyRanker {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    fn content_words<'a>(&'a self, words: &'a [String]) -> impl Iterator<Item = &'a String> {
        words
            .iter()
            .filter(|w| !self.resources.is_stopword(w) && w.chars().any(char::is_alphabetic))
    }
}

impl SentenceRanker for FrequencyRanker {
    fn rank(&self, document: &Document, count: usize) -> Result<Vec<String>> {
        if count >= document.len() {
            return Ok(document.sentences.iter().map(|s| s.text.clone()).collect());
        }

        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for sentence in &document.sentences {
            for word in self.content_words(&sentence.words) {
                *frequencies.entry(word.as_str()).or_insert(0) += 1;
            }
        }

        let mut scored: Vec<(usize, f64)> = document
            .sentences
            .iter()
            .map(|sentence| {
                let (total, n) = self
                    .content_words(&sentence.words)
                    .fold((0usize, 0usize), |(total, n), word| {
                        (total + frequencies.get(word.as_str()).copied().unwrap_or(0), n + 1)
                    });
                let score = if n == 0 { 0.0 } else { total as f64 / n as f64 };
                (sentence.index, score)
            })
            .collect();

        // Highest score first, earlier sentence on ties
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut selected: Vec<usize> = scored.into_iter().take(count).map(|(i, _)| i).collect();
        selected.sort_unstable();

        Ok(selected
            .into_iter()
            .map(|i| document.sentences[i].text.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::tokenizer::Tokenizer;

    fn setup() -> (Tokenizer, FrequencyRanker) {
        let resources = Arc::new(LanguageResources::load(Language::English));
        (Tokenizer::new(resources.clone()), FrequencyRanker::new(resources))
    }

    #[test]
    fn test_returns_all_when_count_covers_document() {
        let (tokenizer, ranker) = setup();
        let doc = tokenizer.tokenize("One sentence. Two sentences.");
        assert_eq!(ranker.rank(&doc, 3).unwrap(), vec!["One sentence.", "Two sentences."]);
    }

    #[test]
    fn test_selects_salient_sentences_in_document_order() {
        let (tokenizer, ranker) = setup();
        let text = "The weather was mild. Ellie hides the book from the deadites. \
            Nobody cared about lunch. The deadites hunt Ellie for the book.";
        let doc = tokenizer.tokenize(text);

        let ranked = ranker.rank(&doc, 2).unwrap();
        assert_eq!(
            ranked,
            vec![
                "Ellie hides the book from the deadites.",
                "The deadites hunt Ellie for the book."
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let (tokenizer, ranker) = setup();
        let doc = tokenizer.tokenize("A b c. D e f. G h i. J k l.");
        let first = ranker.rank(&doc, 2).unwrap();
        assert_eq!(first, ranker.rank(&doc, 2).unwrap());
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_empty_document() {
        let (_, ranker) = setup();
        assert!(ranker.rank(&Document::default(), 3).unwrap().is_empty());
    }
}
