//! Text helpers shared by the synthesis step.

/// Marker appended to a shortened excerpt.
pub const ELLIPSIS: &str = "…";

/// Shorten `text` to at most `limit` characters, cutting at the last whole
/// word and appending [`ELLIPSIS`]. Text that already fits is returned as-is.
pub fn excerpt(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }

    // Byte offset of the `limit`-th character.
    let cut = text.char_indices().nth(limit).map_or(text.len(), |(i, _)| i);
    let head = &text[..cut];
    // Back off to the previous word break only when the cut splits a word.
    let mid_word = !text[cut..].starts_with(char::is_whitespace);
    let head = match head.rfind(char::is_whitespace) {
        Some(i) if mid_word && i > 0 => &head[..i],
        _ => head,
    };
    let head = head.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.'));
    format!("{head}{ELLIPSIS}")
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive substring test against a position label.
pub fn label_matches(label: &str, needle: &str) -> bool {
    label.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(excerpt("  Hope returns.  ", 180), "Hope returns.");
    }

    #[test]
    fn long_text_cuts_on_word_boundary() {
        let text = "alpha beta gamma delta epsilon";
        let out = excerpt(text, 14);
        assert_eq!(out, "alpha beta…");
        assert!(out.chars().count() <= 14 + ELLIPSIS.chars().count());
    }

    #[test]
    fn word_ending_at_limit_is_kept() {
        assert_eq!(excerpt("alpha beta gamma", 10), "alpha beta…");
    }

    #[test]
    fn trailing_punctuation_is_dropped_before_ellipsis() {
        assert_eq!(excerpt("one, two, three, four", 10), "one, two…");
    }

    #[test]
    fn unbroken_text_is_hard_cut() {
        assert_eq!(excerpt("abcdefghijklmnop", 5), "abcde…");
    }

    #[test]
    fn multibyte_text_does_not_split_chars() {
        let out = excerpt("ééé ééé ééé", 6);
        assert_eq!(out, "ééé…");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b   c "), "a b c");
    }

    #[test]
    fn label_match_ignores_case() {
        assert!(label_matches("Recent Past", "past"));
        assert!(label_matches("Self/Attitude", "ATTITUDE"));
        assert!(!label_matches("Foundation", "outcome"));
    }
}
