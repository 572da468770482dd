pub mod genre;
pub mod schema;
pub mod year;

pub use genre::{GenreExtractor, GENRE_KEYWORDS};
pub use schema::{ExtractedFacts, UNKNOWN};
pub use year::find_year;

/// Derives the structured facts (release year, genres) of an article.
///
/// Works on the full article text, independently of the narrative section.
#[derive(Debug, Default, Clone, Copy)]
pub struct FactExtractor {
    genre: GenreExtractor,
}

impl FactExtractor {
    pub fn new() -> Self {
        Self {
            genre: GenreExtractor::new(),
        }
    }

    pub fn extract_facts(&self, full_text: &str) -> ExtractedFacts {
        let facts = ExtractedFacts::new(find_year(full_text), self.genre.extract(full_text));
        tracing::debug!(year = %facts.year, genre = %facts.genre, "extracted facts");
        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_infobox_article() {
        let article = "{{Infobox film\n| name = Evil Dead Rise\n| genre = [[Supernatural horror]]\n| released = {{Film date|2023|3|15}}\n}}\n\
            '''''Evil Dead Rise''''' is a 2023 American film.";
        let facts = FactExtractor::new().extract_facts(article);
        assert_eq!(facts.year, "2023");
        assert_eq!(facts.genre, "Supernatural horror");
    }

    #[test]
    fn test_unknown_sentinels() {
        let facts = FactExtractor::new().extract_facts("An article with nothing useful.");
        assert_eq!(facts, ExtractedFacts::new(None, None));
        assert_eq!(facts.year, UNKNOWN);
        assert_eq!(facts.genre, UNKNOWN);
    }

    #[test]
    fn test_facts_serialize() {
        let facts = ExtractedFacts::new(Some("2020".to_string()), Some("Drama".to_string()));
        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(json["year"], "2020");
        assert_eq!(json["genre"], "Drama");
    }
}
