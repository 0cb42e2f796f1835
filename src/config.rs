//! Configuration management for coqfmt.
//!
//! The rewrite passes themselves have no knobs: the keyword table and comment
//! markers are fixed. [`Config`] controls how files are found and written:
//! - which extensions count as Coq sources
//! - which paths are excluded
//! - whether and how backups are written for in-place formatting
//! - the size limit above which files are skipped
//!
//! Configuration can be loaded from `coqfmt.toml` files, auto-discovered by
//! searching parent directories of the target up to the filesystem root, plus
//! the user's home directory. CLI arguments override file settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["coqfmt.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_extensions() -> Vec<String> {
    vec!["v".to_string()]
}
fn default_backup_suffix() -> String {
    "bak".to_string()
}
fn default_max_file_size() -> u64 {
    100 * 1024 * 1024
}

/// Main configuration struct for coqfmt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File extensions treated as Coq sources, without the dot (default: `["v"]`)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files/directories to skip
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Write `<file>.<backup_suffix>` before overwriting in place (default: false)
    #[serde(default)]
    pub backup: bool,

    /// Suffix appended to backup files (default: "bak")
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,

    /// Files larger than this many bytes are skipped (default: 100 MB)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub backup: Option<bool>,
    pub backup_suffix: Option<String>,
    pub max_file_size: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: default_extensions(),
            exclude: Vec::new(),
            backup: false,
            backup_suffix: default_backup_suffix(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.extensions.is_empty() {
            return Some("extensions must list at least one file extension".to_string());
        }
        if let Some(ext) = self.extensions.iter().find(|e| normalize_extension(e).is_empty()) {
            return Some(format!("extension {ext:?} is empty"));
        }
        if self.backup_suffix.is_empty() {
            return Some("backup_suffix must not be empty".to_string());
        }
        if self.backup_suffix.contains(['/', '\\']) {
            return Some(format!(
                "backup_suffix {:?} must not contain path separators",
                self.backup_suffix
            ));
        }
        if self.max_file_size == 0 {
            return Some("max_file_size must be at least 1 byte".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = &partial.extensions {
            self.extensions.clone_from(v);
        }
        if let Some(v) = partial.backup {
            self.backup = v;
        }
        if let Some(v) = &partial.backup_suffix {
            self.backup_suffix.clone_from(v);
        }
        if let Some(v) = partial.max_file_size {
            self.max_file_size = v;
        }
        // Exclusions accumulate across files
        for pattern in &partial.exclude {
            if !self.exclude.contains(pattern) {
                self.exclude.push(pattern.clone());
            }
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the path's directory up to the root, then adds home directory config.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config has the lowest priority
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Root first, so nearer files override
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Unreadable or malformed files are reported and skipped.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let mut config = Self::default();
        for path in &Self::discover_config_files(start_path) {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }

    /// Check whether `path` has one of the configured extensions
    ///
    /// Extensions may be written with or without a leading dot.
    #[must_use]
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|configured| normalize_extension(configured) == ext)
            })
    }

    /// Path of the backup written before `path` is overwritten
    ///
    /// The suffix is appended to the full file name: `Foo.v` becomes `Foo.v.bak`.
    #[must_use]
    pub fn backup_path(&self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(normalize_extension(&self.backup_suffix));
        PathBuf::from(name)
    }
}

fn normalize_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}
