use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

use crate::language::LanguageResources;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position in the document, starting at 0.
    pub index: usize,
    pub text: String,
    /// Lowercased words of the sentence.
    pub words: Vec<String>,
}

/// A text split into ordered sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    resources: Arc<LanguageResources>,
}

impl Tokenizer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    /// Split on Unicode sentence boundaries, then re-join pieces that were
    /// cut after an abbreviation such as `Dr.`.
    pub fn tokenize(&self, text: &str) -> Document {
        let mut pieces: Vec<String> = Vec::new();

        for raw in text.unicode_sentences() {
            let piece = raw.trim();
            if piece.is_empty() {
                continue;
            }
            match pieces.last_mut() {
                Some(previous) if self.ends_with_abbreviation(previous.as_str()) => {
                    previous.push(' ');
                    previous.push_str(piece);
                }
                _ => pieces.push(piece.to_string()),
            }
        }

        let sentences = pieces
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let words = text.unicode_words().map(str::to_lowercase).collect();
                Sentence { index, text, words }
            })
            .collect();

        Document { sentences }
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        sentence.ends_with('.')
            && sentence
                .split_whitespace()
                .last()
                .is_some_and(|token| self.resources.is_abbreviation(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Arc::new(LanguageResources::load(Language::English)))
    }

    #[test]
    fn test_splits_sentences_in_order() {
        let doc = tokenizer().tokenize("Beth arrives. The building shakes! Is anyone safe?");
        let texts: Vec<&str> = doc.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Beth arrives.", "The building shakes!", "Is anyone safe?"]);
        assert_eq!(doc.sentences[2].index, 2);
        assert_eq!(doc.sentences[1].words, vec!["the", "building", "shakes"]);
    }

    #[test]
    fn test_rejoins_after_abbreviation() {
        let doc = tokenizer().tokenize("Dr. Strange meets Mr. Wong. They talk.");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences[0].text, "Dr. Strange meets Mr. Wong.");
    }

    #[test]
    fn test_empty_text() {
        let doc = tokenizer().tokenize("   \n ");
        assert!(doc.is_empty());
    }
}
