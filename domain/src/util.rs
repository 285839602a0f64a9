//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `s` to at most `max_bytes` bytes for log lines, cutting on a
/// UTF-8 character boundary and appending `...` when anything was dropped.
pub fn log_preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", &s[..end]))
}

/// Render a list of displayable items as `a, b, c`.
pub fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
