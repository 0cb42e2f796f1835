//! File-level formatting
//!
//! Resolves the files a run targets and formats each one, either printing
//! the result under a `--- <path> ---` header or rewriting it in place with an
//! optional backup. Status reporting is left to the caller.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Config;
use crate::discover::{compile_patterns, find_source_files};
use crate::process::format_document;
use crate::Result;

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Formatted text was written to the output stream
    Printed,
    /// File was rewritten in place, after writing `backup` if requested
    Formatted { backup: Option<PathBuf> },
    /// In-place run and the file was already formatted; nothing written
    Unchanged,
    /// File exceeds `max_file_size` and was not read
    Skipped { size: u64 },
}

/// Resolve the files to format from a `--file` or `--directory` target
///
/// Fails when the file is not a regular file, the directory is not a
/// directory, or the directory holds no matching sources.
pub fn collect_targets(
    file: Option<&Path>,
    directory: Option<&Path>,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    if let Some(file) = file {
        if !file.is_file() {
            anyhow::bail!("{} is not a valid file.", file.display());
        }
        return Ok(vec![file.to_path_buf()]);
    }

    let Some(directory) = directory else {
        anyhow::bail!("no file or directory to format");
    };
    if !directory.is_dir() {
        anyhow::bail!("{} is not a valid directory.", directory.display());
    }

    let exclude = compile_patterns(&config.exclude);
    let files = find_source_files(directory, config, &exclude);
    if files.is_empty() {
        anyhow::bail!(
            "No {} files found in directory {}.",
            describe_extensions(config),
            directory.display()
        );
    }
    Ok(files)
}

/// Human-readable list of configured extensions, e.g. `.v`
fn describe_extensions(config: &Config) -> String {
    config
        .extensions
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join("/")
}

/// Format a single file, either in place or to `out`
///
/// In-place runs only touch files whose content changes; the backup, when
/// enabled, holds the original bytes and is written before the file itself.
pub fn process_single_file<W: Write>(
    path: &Path,
    config: &Config,
    in_place: bool,
    out: &mut W,
) -> Result<FileStatus> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let size = fs::metadata(path)?.len();
    if size > config.max_file_size {
        return Ok(FileStatus::Skipped { size });
    }

    let bytes = fs::read(path)?;
    let original = String::from_utf8(bytes).context("file is not valid UTF-8")?;
    let outcome = format_document(&original);

    if !in_place {
        writeln!(out, "--- {} ---", path.display())?;
        writeln!(out, "{}", outcome.text)?;
        return Ok(FileStatus::Printed);
    }

    if !outcome.changed {
        return Ok(FileStatus::Unchanged);
    }

    let backup = if config.backup {
        let backup_path = config.backup_path(path);
        fs::write(&backup_path, &original)
            .with_context(|| format!("failed to write backup {}", backup_path.display()))?;
        Some(backup_path)
    } else {
        None
    };

    fs::write(path, &outcome.text)?;
    Ok(FileStatus::Formatted { backup })
}
