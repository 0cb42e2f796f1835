//! Command-line interface for coqfmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Single file to format (`-` for stdin)
    pub file: Option<PathBuf>,

    /// Directory to format recursively
    pub directory: Option<PathBuf>,

    /// Overwrite files instead of printing to stdout
    pub in_place: bool,

    /// Write a backup before overwriting (only with `in_place`)
    pub backup: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,

    /// Silent mode (no status output)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

impl CliArgs {
    /// Whether the input is read from stdin (`--file -`)
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.file.as_ref().is_some_and(|f| f.as_os_str() == "-")
    }

    /// Apply the default run mode when no target was given
    ///
    /// With neither `--file` nor `--directory`, the current directory is
    /// formatted recursively in place.
    #[must_use]
    pub fn with_default_target(mut self) -> Self {
        if self.file.is_none() && self.directory.is_none() {
            self.directory = Some(PathBuf::from("."));
            self.in_place = true;
        }
        self
    }
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("coqfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Formats Coq (.v) files: spaces comment markers and starts declaration keywords on their own line")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Path to a single Coq (.v) file to format (`-` reads stdin)")
                .value_name("FILE")
                .conflicts_with("directory")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .help("Directory containing Coq (.v) files to format recursively")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("in-place")
                .short('i')
                .long("in-place")
                .help("Modify files in place instead of printing the formatted code to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("backup")
                .short('b')
                .long("backup")
                .help("Create a backup of each original file before formatting (only with --in-place)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0=auto, 1=sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config discovery and effective settings)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no status output, for editor integration)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        file: matches.get_one::<PathBuf>("file").cloned(),
        directory: matches.get_one::<PathBuf>("directory").cloned(),
        in_place: matches.get_flag("in-place"),
        backup: matches.get_flag("backup"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        jobs: matches.get_one::<usize>("jobs").copied(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
