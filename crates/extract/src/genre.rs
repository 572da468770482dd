use regex::Regex;
use std::sync::LazyLock;

use crate::schema::UNKNOWN;

/// Keyword → canonical genre label, checked in order against the lowercased
/// article when the infobox has no usable genre field.
pub const GENRE_KEYWORDS: [(&str, &str); 20] = [
    ("comedy", "Comedy"),
    ("humour", "Comedy"),
    ("humorous", "Comedy"),
    ("drama", "Drama"),
    ("melodrama", "Drama"),
    ("romance", "Romance"),
    ("romantic", "Romance"),
    ("horror", "Horror"),
    ("supernatural", "Horror"),
    ("sci-fi", "Sci-Fi"),
    ("science fiction", "Sci-Fi"),
    ("thriller", "Thriller"),
    ("suspense", "Thriller"),
    ("fantasy", "Fantasy"),
    ("historical", "Historical"),
    ("period drama", "Historical"),
    ("action", "Action"),
    ("adventure", "Action"),
    ("mystery", "Mystery"),
    ("crime", "Crime"),
];

/// Templates whose items are genre labels. Any other template is dropped whole.
const LIST_TEMPLATES: [&str; 5] = ["hlist", "plainlist", "flatlist", "ubl", "unbulleted list"];

static GENRE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\|\s*genres?\s*=").unwrap());

static REFS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ref[^>]*/>|<ref[^>]*>.*?</ref\s*>").unwrap());

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[|\]\]|\{\{|\}\}|\||<[^>]*>|\n\s*\*|\n").unwrap()
});

/// Derives a genre list from an article, infobox first, keywords second.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenreExtractor;

impl GenreExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Comma-joined genre labels, or `None` when neither path finds any.
    pub fn extract(&self, full_text: &str) -> Option<String> {
        if let Some(genre) = self.from_infobox(full_text) {
            return Some(genre);
        }
        tracing::debug!("no usable infobox genre, falling back to keyword scan");
        self.from_keywords(full_text)
    }

    /// Parse the infobox `genre`/`genres` field.
    ///
    /// Only the first field is read. A value equal to `Unknown` counts as missing.
    pub fn from_infobox(&self, full_text: &str) -> Option<String> {
        let field = GENRE_FIELD.find(full_text)?;
        let value = field_value(&full_text[field.end()..]);
        let labels = normalize_labels(value);

        if labels.is_empty() || labels == UNKNOWN {
            None
        } else {
            Some(labels)
        }
    }

    pub fn from_keywords(&self, full_text: &str) -> Option<String> {
        let lower = full_text.to_lowercase();
        let mut genres: Vec<&str> = Vec::new();

        for (keyword, label) in GENRE_KEYWORDS {
            if lower.contains(keyword) && !genres.contains(&label) {
                genres.push(label);
            }
        }

        if genres.is_empty() {
            None
        } else {
            Some(genres.join(", "))
        }
    }
}

/// Slice of `rest` up to the next infobox field or the close of the infobox.
///
/// Pipes and newlines inside `[[...]]` or `{{...}}` belong to the value.
fn field_value(rest: &str) -> &str {
    let bytes = rest.as_bytes();
    let mut links = 0usize;
    let mut templates = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        let top_level = links == 0 && templates == 0;
        match &bytes[i..] {
            [b'[', b'[', ..] => {
                links += 1;
                i += 2;
                continue;
            }
            [b']', b']', ..] => {
                links = links.saturating_sub(1);
                i += 2;
                continue;
            }
            [b'{', b'{', ..] => {
                templates += 1;
                i += 2;
                continue;
            }
            [b'}', b'}', ..] => {
                if templates == 0 {
                    break;
                }
                templates -= 1;
                i += 2;
                continue;
            }
            [b'|', ..] if top_level => break,
            [b'\n', tail @ ..] if top_level => {
                let next = tail
                    .iter()
                    .position(|b| *b != b' ' && *b != b'\t')
                    .map(|p| &tail[p..])
                    .unwrap_or_default();
                if next.starts_with(b"|") || next.starts_with(b"}}") {
                    break;
                }
            }
            _ => {}
        }
        i += 1;
    }

    &rest[..i]
}

/// Span of `text` up to the `}}` closing an already opened template.
///
/// Returns `text.len()` when the template is never closed.
fn template_end(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i < bytes.len() {
        match &bytes[i..] {
            [b'{', b'{', ..] => {
                depth += 1;
                i += 2;
            }
            [b'}', b'}', ..] => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
                i += 2;
            }
            _ => i += 1,
        }
    }

    bytes.len()
}

/// Items of a list template body such as `hlist|A|B`, or `None` for any
/// other template.
fn list_items(body: &str) -> Option<&str> {
    let (name, items) = body.split_once('|')?;
    let name = name.trim();
    LIST_TEMPLATES
        .iter()
        .any(|list| name.eq_ignore_ascii_case(list))
        .then_some(items)
}

/// Remove template spans, keeping only the items of list templates.
fn strip_templates(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let inner = &rest[start + 2..];
        let end = template_end(inner);

        if let Some(items) = list_items(&inner[..end]) {
            out.push(',');
            out.push_str(&strip_templates(items));
            out.push(',');
        }
        rest = inner.get(end + 2..).unwrap_or_default();
    }

    out.push_str(rest);
    out
}

/// Drop citations and non-list templates, then split the rest on markup
/// delimiters into tidy labels.
fn normalize_labels(value: &str) -> String {
    let without_refs = REFS.replace_all(value, "");
    let stripped = strip_templates(&without_refs);
    let separated = SEPARATORS.replace_all(&stripped, ",");

    separated
        .split(',')
        .map(|label| label.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
