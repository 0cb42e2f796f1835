//! Coq source text rewrite passes.
//!
//! Each pass is a pure text-to-text function:
//! - [`comments`]: Spaces out comment markers (`(* ... *)`)
//! - [`keywords`]: Moves declaration/proof keywords to the start of a line
//! - [`line_endings`]: Converts CRLF and CR line endings to LF
//!
//! Passes return `Cow` so that untouched input is never copied. The order in
//! which they run is fixed by [`crate::process::format_source`].

pub mod comments;
pub mod keywords;
pub mod line_endings;

pub use comments::space_comment_markers;
pub use keywords::{break_before_keywords, is_trigger_keyword};
pub use line_endings::normalize_line_endings;
pub use crate::scan::patterns::TRIGGER_KEYWORDS;
