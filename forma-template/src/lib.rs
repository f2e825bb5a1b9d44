// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Template materialization engine.
//!
//! A template is a directory of source files plus a `template.toml`. The
//! engine picks a subset of its files, rewrites each one through an ordered
//! list of [`Rule`]s and writes the result into a fresh output tree.
//!
//! # Module Organization
//!
//! - [`settings`] - `template.toml` parsing
//! - [`tree`] / [`registry`] - Loaded templates, looked up by name
//! - [`selector`] - Include/exclude filtering
//! - [`markers`] / [`rules`] - The substitution engine
//! - [`writer`] - Output directory resolution and collision checks
//! - [`materializer`] - Select, transform and write in one call

mod error;
pub mod markers;
pub mod materializer;
pub mod registry;
pub mod rules;
pub mod selector;
pub mod settings;
pub mod tree;
pub mod writer;

pub use error::{Error, Result};
pub use materializer::{MaterializeRequest, Materializer, RenderedFile};
pub use registry::TemplateRegistry;
pub use rules::{Rule, transform};
pub use selector::{Selection, select};
pub use settings::{ArtifactMarks, KindSettings, RandomizedConstant, TemplateSettings};
pub use tree::{TemplateFile, TemplateTree};
pub use writer::{OutputTarget, write};
