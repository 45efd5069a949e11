//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `s` to at most `max_chars` characters for log lines, marking a cut
/// with a trailing `…`.
pub fn preview(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((end, _)) => Cow::Owned(format!("{}…", &s[..end])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_is_borrowed() {
        assert!(matches!(preview("hi", 10), Cow::Borrowed("hi")));
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("large pepperoni", 5), "large…");
        assert_eq!(preview("çàé", 2), "çà…");
    }
}
