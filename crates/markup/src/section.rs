use regex::Regex;
use std::sync::LazyLock;

/// Section titles that hold the story of a film or series.
pub const NARRATIVE_HEADINGS: [&str; 3] = ["plot", "synopsis", "story"];

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(={2,6})\s*(.*?)\s*(={2,6})\s*$").unwrap());

/// Parsed `== Title ==` heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Heading<'a> {
    level: usize,
    title: &'a str,
}

fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING.captures(line)?;
    let open = caps.get(1)?.as_str().len();
    let close = caps.get(3)?.as_str().len();
    // Unbalanced markers count as the shorter side.
    Some(Heading {
        level: open.min(close),
        title: caps.get(2)?.as_str(),
    })
}

/// Locates the narrative section inside a full article body.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Body of the first Plot/Synopsis/Story section, or `fallback_summary`
    /// unchanged when the article has none.
    ///
    /// The section runs until the next heading of the same or a higher level.
    /// An empty section is treated as missing.
    pub fn extract_narrative(&self, full_text: &str, fallback_summary: &str) -> String {
        match self.find_section(full_text) {
            Some(body) if !body.is_empty() => body,
            _ => fallback_summary.to_string(),
        }
    }

    fn find_section(&self, full_text: &str) -> Option<String> {
        let mut lines = full_text.lines();

        // Step 1: first matching heading wins
        let level = lines.by_ref().find_map(|line| {
            parse_heading(line)
                .filter(|h| is_narrative_title(h.title))
                .map(|h| h.level)
        })?;

        // Step 2: collect until a sibling or parent heading
        let body: Vec<&str> = lines
            .take_while(|line| parse_heading(line).is_none_or(|h| h.level > level))
            .collect();

        Some(body.join("\n").trim().to_string())
    }
}

fn is_narrative_title(title: &str) -> bool {
    NARRATIVE_HEADINGS
        .iter()
        .any(|name| title.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "'''Evil Dead Rise''' is a 2023 film.\n\
        == Plot ==\n\
        Beth visits her sister Ellie.\n\
        An earthquake reveals a vault.\n\
        === Alternate ending ===\n\
        Extra scene.\n\
        == Cast ==\n\
        Lily Sullivan as Beth\n";

    #[test]
    fn test_extracts_plot_until_next_sibling_heading() {
        let extractor = SectionExtractor::new();
        let body = extractor.extract_narrative(ARTICLE, "fallback");
        assert_eq!(
            body,
            "Beth visits her sister Ellie.\nAn earthquake reveals a vault.\n=== Alternate ending ===\nExtra scene."
        );
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let extractor = SectionExtractor::new();
        let text = "Lead.\n==SYNOPSIS==\nA queen swaps bodies.\n==Production==\nFilmed in Seoul.";
        assert_eq!(extractor.extract_narrative(text, "fallback"), "A queen swaps bodies.");
    }

    #[test]
    fn test_runs_to_end_of_document() {
        let extractor = SectionExtractor::new();
        let text = "== Story ==\nThe last line.";
        assert_eq!(extractor.extract_narrative(text, "fallback"), "The last line.");
    }

    #[test]
    fn test_first_heading_wins() {
        let extractor = SectionExtractor::new();
        let text = "== Plot ==\nFirst.\n== Plot ==\nSecond.";
        assert_eq!(extractor.extract_narrative(text, "fallback"), "First.");
    }

    #[test]
    fn test_falls_back_when_missing() {
        let extractor = SectionExtractor::new();
        let text = "== Production ==\nFilming began in 2021.\n== Plot summary ==\nNot exact.";
        assert_eq!(
            extractor.extract_narrative(text, "  The abstract [[link]]. "),
            "  The abstract [[link]]. "
        );
    }

    #[test]
    fn test_empty_section_falls_back() {
        let extractor = SectionExtractor::new();
        let text = "== Plot ==\n\n== Cast ==\nSomeone";
        assert_eq!(extractor.extract_narrative(text, "abstract"), "abstract");
    }

    #[test]
    fn test_nested_heading_level() {
        let extractor = SectionExtractor::new();
        let text = "== Season 1 ==\n=== Plot ===\nEpisode story.\n=== Cast ===\nA\n";
        assert_eq!(extractor.extract_narrative(text, "x"), "Episode story.");
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!(
            parse_heading("  === Plot ==  "),
            Some(Heading { level: 2, title: "Plot" })
        );
        assert_eq!(parse_heading("= Title ="), None);
        assert_eq!(parse_heading("Plain text == not a heading"), None);
    }
}
