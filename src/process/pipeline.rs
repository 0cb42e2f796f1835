//! Formatting pipeline
//!
//! Runs the rewrite passes in their fixed order:
//! - Comment marker spacing, on the original layout
//! - Keyword line placement
//! - Line-ending normalization, which also canonicalises inserted newlines

use std::io::{Read, Write};

use anyhow::Context;

use crate::format::{break_before_keywords, normalize_line_endings, space_comment_markers};
use crate::Result;

/// Result of formatting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Formatted text
    pub text: String,
    /// Whether the formatted text differs from the input
    pub changed: bool,
}

/// Format a complete Coq document
///
/// Total: every input, including the empty string, produces output.
///
/// ```
/// use coqfmt::process::format_source;
///
/// assert_eq!(format_source("(*c*) intro. Qed.\r\n"), "(* c *) intro. \nQed.\n");
/// ```
#[must_use]
pub fn format_source(text: &str) -> String {
    let spaced = space_comment_markers(text);
    let lined = break_before_keywords(&spaced);
    normalize_line_endings(&lined).into_owned()
}

/// Format a document and report whether anything changed
#[must_use]
pub fn format_document(text: &str) -> FormatOutcome {
    let formatted = format_source(text);
    let changed = formatted != text;
    FormatOutcome {
        text: formatted,
        changed,
    }
}

/// Read a whole document from `input`, format it and write it to `output`
///
/// `source_name` only appears in error messages. Returns whether the
/// formatted text differs from the input.
pub fn format_file<R: Read, W: Write>(
    mut input: R,
    output: &mut W,
    source_name: &str,
) -> Result<bool> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .with_context(|| format!("failed to read {source_name}"))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("{source_name} is not valid UTF-8"))?;

    let outcome = format_document(&text);
    output
        .write_all(outcome.text.as_bytes())
        .with_context(|| format!("failed to write formatted {source_name}"))?;

    Ok(outcome.changed)
}
