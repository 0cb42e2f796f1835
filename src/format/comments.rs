//! Comment delimiter spacing
//!
//! Ensures a space after every `(*` and before every `*)`.

use std::borrow::Cow;

use crate::scan::patterns::{COMMENT_CLOSE_RE, COMMENT_OPEN_RE};
use crate::scan::{char_at, char_before, insert_at_matches, is_space, Placement};

/// Space out comment markers in `text`
///
/// Open markers are handled first, then close markers on the result. Within
/// each scan every decision is made against that scan's input, so inserted
/// spaces are never re-examined.
///
/// ```
/// use coqfmt::format::space_comment_markers;
///
/// assert_eq!(space_comment_markers("(*comment*)"), "(* comment *)");
/// ```
#[must_use]
pub fn space_comment_markers(text: &str) -> Cow<'_, str> {
    match space_after_open(text) {
        Cow::Borrowed(unchanged) => space_before_close(unchanged),
        Cow::Owned(opened) => Cow::Owned(space_before_close(&opened).into_owned()),
    }
}

/// Insert a space after each `(*` not already followed by whitespace
fn space_after_open(text: &str) -> Cow<'_, str> {
    insert_at_matches(text, &COMMENT_OPEN_RE, " ", Placement::After, |t, m| {
        !char_at(t, m.end()).is_some_and(is_space)
    })
}

/// Insert a space before each `*)` not already preceded by whitespace
fn space_before_close(text: &str) -> Cow<'_, str> {
    insert_at_matches(text, &COMMENT_CLOSE_RE, " ", Placement::Before, |t, m| {
        !char_before(t, m.start()).is_some_and(is_space)
    })
}
