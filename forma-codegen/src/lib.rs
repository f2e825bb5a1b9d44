// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema-to-code synthesizer.
//!
//! Turns a [`TableSchema`](forma_schema::TableSchema) into the four correlated
//! artifacts a scaffold needs: the model file, the DAO update fragment, the
//! handler request/response fragment and the canonical type name.
//!
//! # Module Organization
//!
//! - [`builder`] - Tab-indented code builder used by the renderers
//! - [`naming`] - Go naming conventions (type, field and JSON names)
//! - [`type_mapper`] - SQL column type to Go field type mapping
//! - [`analyze`] - One traversal of the schema shared by every artifact
//! - [`artifacts`] - Artifact renderers and [`synthesize`]

pub mod analyze;
pub mod artifacts;
pub mod builder;
mod error;
pub mod naming;
pub mod type_mapper;

pub use artifacts::{ArtifactKind, Artifacts, synthesize};
pub use error::{Error, Result};
pub use forma_schema::GenerationOptions;
