//! Free-text sanitization shared by every entity.

/// Trim surrounding whitespace, then escape markup-significant characters.
pub fn sanitize(input: &str) -> String {
    escape_html(input.trim())
}

/// Escape `& ' < > "` into their HTML entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }
    out
}
