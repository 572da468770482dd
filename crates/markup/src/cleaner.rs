use regex::Regex;
use std::sync::LazyLock;

// `.` does not cross newlines, so spans never match across lines.
static LINK_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").unwrap());
static TEMPLATE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{.*?\}\}").unwrap());
static TAG_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Strips wiki markup from a span of article text.
///
/// Three passes, in order: `[[...]]` links/references, `{{...}}` templates,
/// `<...>` tags. Each span ends at the nearest closing delimiter, so nested
/// spans leave their outer tail behind (`[[a [[b]] c]]` becomes ` c]]`).
/// Link display text is dropped along with the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupCleaner;

impl MarkupCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, text: &str) -> String {
        let text = LINK_SPAN.replace_all(text, "");
        let text = TEMPLATE_SPAN.replace_all(&text, "");
        let text = TAG_SPAN.replace_all(&text, "");
        text.trim().to_string()
    }
}
