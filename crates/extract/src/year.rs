use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").unwrap());

/// First standalone 19xx/20xx number anywhere in the text.
///
/// No plausibility check: a citation date that appears before the release
/// year wins.
pub fn find_year(full_text: &str) -> Option<String> {
    YEAR.find(full_text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let text = "Released on April 21, 2023, after a 2022 premiere.";
        assert_eq!(find_year(text), Some("2023".to_string()));
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert_eq!(find_year("ISBN 9781234 and id 20231"), None);
        assert_eq!(find_year("(1981)"), Some("1981".to_string()));
    }

    #[test]
    fn test_ignores_other_centuries() {
        assert_eq!(find_year("Set in 1850 and 2150."), None);
    }

    #[test]
    fn test_picks_unrelated_early_year() {
        let text = "{{cite web|date=1999}} The film was released in 2010.";
        assert_eq!(find_year(text), Some("1999".to_string()));
    }
}
