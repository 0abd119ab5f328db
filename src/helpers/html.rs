//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Tags that separate words when markup is flattened to text
const BREAK_TAGS: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "h1", "h2", "h3", "h4", "h5", "h6",
    "tr", "td", "th", "section", "article",
];

/// Plain text of a rich-text fragment.
///
/// Tags are removed, block-level tags and `<br>` become word breaks, entities
/// are decoded once and whitespace runs collapse to a single space.
pub fn strip_html(s: &str) -> String {
    let mut text = String::with_capacity(s.len());
    let mut tag: Option<String> = None;

    for c in s.chars() {
        if let Some(name) = tag.as_mut() {
            if c == '>' {
                if BREAK_TAGS.contains(&tag_name(name).as_str()) {
                    text.push(' ');
                }
                tag = None;
            } else {
                name.push(c);
            }
        } else if c == '<' {
            tag = Some(String::new());
        } else {
            text.push(c);
        }
    }

    let decoded = ::html_escape::decode_html_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased element name of a tag body such as `/p` or `br class="x" /`
fn tag_name(body: &str) -> String {
    body.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Truncate a string to a specified number of characters
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
