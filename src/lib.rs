//! coqfmt - Lexical formatter for Coq source files
//!
//! Spaces out comment markers and moves declaration keywords onto their own
//! lines. The rewrite is purely textual: no Coq grammar is involved.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod format;
pub mod process;
pub mod scan;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use process::{format_document, format_file, format_source, FormatOutcome};
