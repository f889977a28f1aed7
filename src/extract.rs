//! Article text extraction.
//!
//! The readability pass is tried first. When it finds nothing, or too little
//! to be the real article, every `<p>` on the page is collected instead.

use dom_smoothie::{Config, Readability};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Below this many characters the readability output is treated as a miss.
pub const MIN_PRIMARY_CHARS: usize = 200;

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

/// Best-effort readable text for a page, or `None` if neither pass found any.
pub fn readable_text(html: &str, url: Option<&str>) -> Option<String> {
    select_text(extract_article(html, url), || extract_paragraphs(html))
}

/// Keep `primary` when it is long enough. Otherwise run `fallback` and keep
/// whichever of the two is longer; ties go to `primary`.
fn select_text<F>(primary: Option<String>, fallback: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    let primary_chars = primary.as_deref().map_or(0, |t| t.chars().count());
    if primary_chars >= MIN_PRIMARY_CHARS {
        return primary;
    }

    tracing::debug!(primary_chars, "readability output too short, collecting paragraphs");
    match (primary, fallback()) {
        (Some(p), Some(f)) => {
            if f.chars().count() > primary_chars {
                Some(f)
            } else {
                Some(p)
            }
        }
        (p, f) => f.or(p),
    }
}

/// Readability pass. Parse failures are treated as "nothing found".
pub fn extract_article(html: &str, url: Option<&str>) -> Option<String> {
    let cfg = Config {
        max_elements_to_parse: 9000,
        ..Default::default()
    };

    let mut readability = match Readability::new(html, url, Some(cfg)) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "readability init failed");
            return None;
        }
    };

    let article = match readability.parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::debug!(error = ?e, "readability parse failed");
            return None;
        }
    };

    let text = tidy_lines(&article.text_content);
    if text.is_empty() { None } else { Some(text) }
}

/// Paragraph fallback: the text of every `<p>`, one per line.
pub fn extract_paragraphs(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n"))
    }
}

/// Trim every line and drop the blank ones.
fn tidy_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(trimmed);
        }
    }

    result
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
