//! coqfmt - Formatter for Coq (.v) source files

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use coqfmt::process::{collect_targets, process_single_file, FileStatus};
use coqfmt::{parse_args, CliArgs, Config, Result};
use rayon::prelude::*;

fn main() -> Result<()> {
    let args = parse_args().with_default_target();

    if args.backup && !args.in_place && !args.silent {
        eprintln!("Warning: --backup has no effect without --in-place");
    }

    if args.reads_stdin() {
        let config = build_config(&args, None)?;
        return process_stdin(&config, &args);
    }

    let target = args.file.as_deref().or(args.directory.as_deref());
    let config = build_config(&args, target)?;
    let files = collect_targets(args.file.as_deref(), args.directory.as_deref(), &config)?;

    if args.debug {
        eprintln!("[DEBUG] {} file(s) to format", files.len());
    }

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    // Printed output must keep file order
    let use_sequential = !args.in_place || args.jobs == Some(1);
    if use_sequential {
        process_files_sequential(&files, &config, &args);
    } else {
        process_files_parallel(&files, &config, &args);
    }

    Ok(())
}

/// Build configuration from an explicit config file or by auto-discovery,
/// then apply CLI overrides
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else {
        let start = match for_path {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir().unwrap_or_default(),
        };
        if args.debug {
            let discovered = Config::discover_config_files(&start);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", start.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", start.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&start)
    };

    // Override with CLI arguments
    if args.backup {
        config.backup = true;
    }
    for pattern in &args.exclude {
        if !config.exclude.contains(pattern) {
            config.exclude.push(pattern.clone());
        }
    }

    if args.debug {
        print_config_debug(&config);
    }

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   extensions: {:?}", config.extensions);
    eprintln!("[DEBUG]   exclude: {:?}", config.exclude);
    eprintln!("[DEBUG]   backup: {}", config.backup);
    eprintln!("[DEBUG]   backup_suffix: {}", config.backup_suffix);
    eprintln!("[DEBUG]   max_file_size: {}", config.max_file_size);
}

/// Process files one at a time (stdout output or --jobs 1)
fn process_files_sequential(files: &[PathBuf], config: &Config, args: &CliArgs) {
    for path in files {
        if let Err(e) = run_single_file(path, config, args) {
            eprintln!("Error processing {}: {e:#}", path.display());
        }
    }
}

/// Process files in parallel using Rayon
fn process_files_parallel(files: &[PathBuf], config: &Config, args: &CliArgs) {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match run_single_file(path, config, args) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error processing {}: {e:#}", path.display());
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Processed {success} files successfully.");
        } else {
            eprintln!("Processed {success} files, {errors} errors.");
        }
    }
}

/// Format one file and report what happened
fn run_single_file(path: &Path, config: &Config, args: &CliArgs) -> Result<()> {
    let status = process_single_file(path, config, args.in_place, &mut io::stdout().lock())?;
    report_status(path, &status, config, args);
    Ok(())
}

/// Print the status line for a processed file
fn report_status(path: &Path, status: &FileStatus, config: &Config, args: &CliArgs) {
    match status {
        FileStatus::Printed => {}
        FileStatus::Unchanged => {
            if args.debug {
                eprintln!("[DEBUG] Already formatted: {}", path.display());
            }
        }
        FileStatus::Skipped { size } => {
            if !args.silent {
                eprintln!(
                    "Skipping {} ({size} bytes exceeds limit of {} bytes)",
                    path.display(),
                    config.max_file_size
                );
            }
        }
        FileStatus::Formatted { backup } => {
            if args.silent {
                return;
            }
            if let Some(backup_path) = backup {
                println!("Backup created: {}", backup_path.display());
            }
            println!("Formatted (in-place): {}", path.display());
        }
    }
}

/// Process input from stdin, output to stdout
fn process_stdin(config: &Config, args: &CliArgs) -> Result<()> {
    let mut stdin_contents = Vec::new();
    io::stdin().read_to_end(&mut stdin_contents)?;

    let stdin_size = u64::try_from(stdin_contents.len()).unwrap_or(u64::MAX);
    if stdin_size > config.max_file_size {
        anyhow::bail!(
            "stdin input too large ({stdin_size} bytes exceeds limit of {} bytes)",
            config.max_file_size
        );
    }

    let mut stdout = io::stdout().lock();
    let changed = coqfmt::format_file(stdin_contents.as_slice(), &mut stdout, "stdin")?;
    stdout.flush()?;

    if args.debug {
        eprintln!("[DEBUG] stdin changed: {changed}");
    }

    Ok(())
}
