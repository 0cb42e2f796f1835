//! Line-ending normalization to Unix style

use std::borrow::Cow;

/// Convert `\r\n` and bare `\r` to `\n`
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
