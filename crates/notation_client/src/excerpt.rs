pub const TRUNCATED_MARKER: &str = "...[truncated]";

/// Cut `text` to at most `max_bytes` on a char boundary, appending
/// [`TRUNCATED_MARKER`] when anything was dropped.
pub fn excerpt(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{TRUNCATED_MARKER}", &text[..end])
}

/// Lossy excerpt of a raw body.
pub(crate) fn body_excerpt(body: &[u8], max_bytes: usize) -> String {
    excerpt(&String::from_utf8_lossy(body), max_bytes)
}
