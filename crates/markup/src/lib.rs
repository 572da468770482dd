pub mod cleaner;
pub mod section;

pub use cleaner::MarkupCleaner;
pub use section::{SectionExtractor, NARRATIVE_HEADINGS};

/// Isolate the narrative section of an article and strip its markup.
///
/// Falls back to `fallback_summary` when the article has no Plot/Synopsis/Story
/// section. The fallback is cleaned as well.
pub fn narrative_text(full_text: &str, fallback_summary: &str) -> String {
    let raw = SectionExtractor::new().extract_narrative(full_text, fallback_summary);
    MarkupCleaner::new().clean(&raw)
}
