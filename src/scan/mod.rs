//! Lexical scanning utilities shared by the rewrite passes.
//!
//! - [`patterns`]: Precompiled regex patterns and the token/keyword tables
//! - [`splice`]: Builds output by inserting text at regex matches found in the
//!   original input, so every decision sees the pre-rewrite layout
//!
//! Nothing here understands Coq syntax: strings and comments are not tracked.

pub mod patterns;
pub mod splice;

pub use splice::{char_at, char_before, insert_at_matches, is_space, is_word_char, Placement};
