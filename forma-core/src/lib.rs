//! Core utilities and types for the forma scaffolding generator.
//!
//! This crate provides the string and file primitives shared by the
//! schema, codegen and template crates.

mod file;
mod utils;

// File operations
pub use file::{File, relative_path, write_file};
// String utilities
pub use utils::{first_letter_lower, first_letter_upper, split_words};
