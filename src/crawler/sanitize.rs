//! Text cleanup applied to every string before it reaches an output writer

/// Title used when a page has no `<title>` element
pub const NO_TITLE: &str = "no_title";

/// Removes null bytes and every character the document export cannot store
///
/// Kept: tab, line feed, carriage return and the codepoint ranges
/// `[0x20, 0xD7FF]`, `[0xE000, 0xFFFD]` and `[0x10000, 0x10FFFF]`.
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|&c| is_allowed_char(c)).collect()
}

fn is_allowed_char(c: char) -> bool {
    matches!(
        c as u32,
        0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

/// Replaces characters that are unsafe in file or display labels with `_`
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}
