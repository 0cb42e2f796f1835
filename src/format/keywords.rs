//! Keyword line placement
//!
//! Forces declaration and proof keywords (`Lemma`, `Proof`, `Qed`, ...) to
//! begin their own line by inserting a newline in front of them.

use std::borrow::Cow;

use crate::scan::patterns::{KEYWORD_RE, TRIGGER_KEYWORDS};
use crate::scan::{char_at, char_before, insert_at_matches, is_word_char, Placement};

/// Check whether `word` is one of the trigger keywords (case-sensitive)
#[must_use]
pub fn is_trigger_keyword(word: &str) -> bool {
    TRIGGER_KEYWORDS.contains(&word)
}

/// Insert a newline before every trigger keyword that does not start a line
///
/// Only whole words count: a keyword touching a letter, number or `_` on
/// either side is part of a longer identifier (`Lemma₁`, `my_Qed`) and is
/// left alone. A keyword starts a line when it is at the very beginning of
/// the text or directly follows `\n`. Anything else before it on the line,
/// including indentation and trailing spaces, stays where it was. Comments
/// and string literals are not recognised, so keywords inside them move too.
///
/// ```
/// use coqfmt::format::break_before_keywords;
///
/// assert_eq!(break_before_keywords("intro. Qed."), "intro. \nQed.");
/// ```
#[must_use]
pub fn break_before_keywords(text: &str) -> Cow<'_, str> {
    insert_at_matches(text, &KEYWORD_RE, "\n", Placement::Before, |t, m| {
        is_whole_word(t, m.start(), m.end()) && !starts_line(t, m.start())
    })
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    !char_before(text, start).is_some_and(is_word_char)
        && !char_at(text, end).is_some_and(is_word_char)
}

fn starts_line(text: &str, pos: usize) -> bool {
    matches!(char_before(text, pos), None | Some('\n'))
}
