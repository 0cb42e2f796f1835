//! Error types and result aliases for coqfmt.
//!
//! The rewrite passes cannot fail; errors only come from reading, decoding
//! and writing files:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used by the I/O layer

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
