//! Simultaneous insertion at regex matches
//!
//! Every match is located against the original text before anything is
//! written, so an insertion can never create or hide a later match. The output
//! is assembled by interleaving the untouched spans with the inserted text.

use std::borrow::Cow;

use regex::{Match, Regex};

/// Side of a match at which text is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert immediately before the matched token
    Before,
    /// Insert immediately after the matched token
    After,
}

/// Insert `insertion` next to every match of `re` accepted by `accept`.
///
/// `accept` receives the full original text and the match, so it can inspect
/// the surrounding characters. Returns the input unchanged (borrowed) when no
/// match is accepted.
pub fn insert_at_matches<'a, F>(
    text: &'a str,
    re: &Regex,
    insertion: &str,
    placement: Placement,
    mut accept: F,
) -> Cow<'a, str>
where
    F: FnMut(&str, &Match<'_>) -> bool,
{
    let mut result: Option<String> = None;
    let mut last = 0;

    for m in re.find_iter(text) {
        if !accept(text, &m) {
            continue;
        }
        let at = match placement {
            Placement::Before => m.start(),
            Placement::After => m.end(),
        };
        let out = result.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        out.push_str(&text[last..at]);
        out.push_str(insertion);
        last = at;
    }

    match result {
        Some(mut out) => {
            out.push_str(&text[last..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

/// Character immediately before byte offset `pos`, if any
#[must_use]
pub fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

/// Character starting at byte offset `pos`, if any
#[must_use]
pub fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

/// Identifier character: any Unicode letter or number (including
/// subscripts such as `₁`) or `_`
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whitespace, including the ASCII information separators U+001C..=U+001F
#[must_use]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Regex {
        Regex::new("[a-z]+").unwrap()
    }

    #[test]
    fn test_no_accepted_match_borrows() {
        let out = insert_at_matches("abc def", &letters(), "!", Placement::Before, |_, _| false);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "abc def");
    }

    #[test]
    fn test_insert_before_each_match() {
        let out = insert_at_matches("abc def", &letters(), "<", Placement::Before, |_, _| true);
        assert_eq!(out, "<abc <def");
    }

    #[test]
    fn test_insert_after_each_match() {
        let out = insert_at_matches("abc def", &letters(), ">", Placement::After, |_, _| true);
        assert_eq!(out, "abc> def>");
    }

    #[test]
    fn test_decisions_use_original_text() {
        // Inserting a newline before "def" must not affect the decision for "ghi",
        // which looks at the original preceding character.
        let out = insert_at_matches("abc def ghi", &letters(), "\n", Placement::Before, |t, m| {
            char_before(t, m.start()) == Some(' ')
        });
        assert_eq!(out, "abc \ndef \nghi");
    }

    #[test]
    fn test_char_helpers_multibyte() {
        let text = "é(*ü";
        assert_eq!(char_before(text, 2), Some('é'));
        assert_eq!(char_at(text, 4), Some('ü'));
        assert_eq!(char_before(text, 0), None);
        assert_eq!(char_at(text, text.len()), None);
    }

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('_'));
        assert!(is_word_char('₁'));
        assert!(is_word_char('²'));
        assert!(is_word_char('θ'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('.'));
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(' '));
        assert!(is_space('\u{a0}'));
        assert!(is_space('\u{1c}'));
        assert!(is_space('\u{1f}'));
        assert!(!is_space('\u{1b}'));
        assert!(!is_space('x'));
    }

    #[test]
    fn test_empty_text() {
        let out = insert_at_matches("", &letters(), "x", Placement::After, |_, _| true);
        assert_eq!(out, "");
    }
}
