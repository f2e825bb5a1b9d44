// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Table schema model and schema manifest parsing.
//!
//! A [`TableSchema`] is the already-fetched column metadata the synthesizer
//! consumes. [`SchemaManifest`] is the static schema provider: a `forma.toml`
//! file declaring generation options and tables.

mod error;
mod manifest;
mod options;
mod table;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::SchemaManifest;
pub use options::GenerationOptions;
pub use table::{Column, TableSchema};
