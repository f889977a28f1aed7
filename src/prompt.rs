/// Hard cap on article characters sent to the model.
pub const MAX_ARTICLE_CHARS: usize = 12_000;

const INSTRUCTIONS: &str = "Summarize this webpage in 4-6 short sentences suitable to be read aloud. \
Keep it simple and natural, in plain spoken language with no headings, markdown, or links. \
After the summary, add up to 3 key points, each on its own line starting with \"- \".\n\n\
Webpage text:\n";

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_prompt(article: &str) -> String {
    let article = truncate_chars(article, MAX_ARTICLE_CHARS);

    let mut result = String::with_capacity(INSTRUCTIONS.len() + article.len());
    result.push_str(INSTRUCTIONS);
    result.push_str(article);
    result
}
