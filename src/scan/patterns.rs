/// Regex patterns for the lexical rewrite passes
///
/// All patterns are compiled once on first use through `LazyLock`.
/// Matching is case-sensitive: Coq keywords are capitalised.
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Token opening a comment region
pub const COMMENT_OPEN: &str = "(*";

/// Token closing a comment region
pub const COMMENT_CLOSE: &str = "*)";

/// Declaration and proof keywords that must start their own line.
///
/// `Admitted` precedes `Admit` so the alternation prefers the longer word.
pub const TRIGGER_KEYWORDS: [&str; 12] = [
    "Lemma",
    "Theorem",
    "Definition",
    "Fixpoint",
    "Proof",
    "Qed",
    "Admitted",
    "Admit",
    "Corollary",
    "Remark",
    "Proposition",
    "Example",
];

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. Every pattern in this module is built
/// from constants and exercised by the tests below, so the panic can only
/// surface at first access of the `LazyLock` static during development.
fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .unicode(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

pub static COMMENT_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&regex::escape(COMMENT_OPEN)));

pub static COMMENT_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&regex::escape(COMMENT_CLOSE)));

/// Occurrence of any trigger keyword
///
/// No `\b` anchors: the regex crate's word boundary ignores "other number"
/// characters such as `₁`, so callers check the neighbouring characters with
/// [`super::splice::is_word_char`] instead.
pub static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = TRIGGER_KEYWORDS
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    build_re(&format!("(?:{alternation})"))
});
