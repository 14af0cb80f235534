use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Returns at most the first `max` characters of `s`.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Extracts text for a span, truncating to `max` characters with "..." suffix if needed.
///
/// Used for human-readable test and log output.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let s = slice_to_string(rope, sp);
    let head = truncate_chars(&s, max);
    if head.len() < s.len() {
        format!("{head}...")
    } else {
        s
    }
}
