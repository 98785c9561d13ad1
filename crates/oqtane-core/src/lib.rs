//! Core library for the oqtane scaffolding CLI.
//!
//! Resolves module templates inside an Oqtane solution and computes what a new
//! module would look like, without touching the filesystem beyond reads:
//! - [`solution`] — locate the solution root from any path below it
//! - [`templates`] — template directories, `template.json` manifests, token substitution
//! - [`project`] — plan a module from a request, list available templates
//! - [`materialize`] — the interface a file writer implements

pub mod config;
pub mod error;
pub mod materialize;
pub mod naming;
pub mod project;
pub mod solution;
pub mod templates;
