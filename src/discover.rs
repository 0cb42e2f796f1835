//! Source file discovery
//!
//! Walks a directory tree and collects Coq sources, honouring the configured
//! extensions and glob exclusions.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

/// Upper bound on traversal depth for pathological directory structures
const MAX_DEPTH: usize = 256;

/// Compile exclusion globs, reporting and dropping invalid ones
#[must_use]
pub fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                eprintln!("Warning: ignoring invalid exclude pattern {p:?}: {e}");
                None
            }
        })
        .collect()
}

/// Recursively find all source files under `directory`
///
/// Returns paths sorted so output order does not depend on the filesystem.
#[must_use]
pub fn find_source_files(directory: &Path, config: &Config, exclude: &[Pattern]) -> Vec<PathBuf> {
    // WalkDir reports symlink loops as errors when following links; those
    // entries are skipped along with unreadable ones.
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .follow_links(true)
        .max_depth(MAX_DEPTH)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry.path(), exclude))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| config.matches_extension(path))
        .collect();

    files.sort();
    files
}

/// Check if a path matches any exclusion pattern
///
/// Patterns are tried against the full path, the file name, and every
/// normal path component.
#[must_use]
pub fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
            || path.components().any(|component| match component {
                Component::Normal(c) => pattern.matches(&c.to_string_lossy()),
                _ => false,
            })
    })
}
