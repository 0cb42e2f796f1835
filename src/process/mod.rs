//! Document formatting pipeline.
//!
//! Composes the rewrite passes from [`crate::format`] in a fixed order:
//!
//! 1. **Comment spacing** on the original layout, so a keyword glued to a
//!    comment marker is spaced before any line-break decision is made
//! 2. **Keyword placement**, splitting lines in front of trigger keywords
//! 3. **Line-ending normalization**, last, so inserted newlines are also
//!    canonical
//!
//! The main entry points are [`format_source`] for in-memory text and
//! [`format_file`] which reads any `Read` and writes to any `Write`.
//! [`files`] applies the pipeline to files on disk.

pub mod files;
pub mod pipeline;

pub use files::{collect_targets, process_single_file, FileStatus};
pub use pipeline::{format_document, format_file, format_source, FormatOutcome};
