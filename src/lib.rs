//! toolmeta crate
//!
//! Aggregates tool metadata scattered over bioconda recipes, BioContainers
//! descriptors, bio.tools entries, bioschemas JSON-LD graphs and Galaxy suite
//! records into a compact summary per tool and a detailed page record per tool.
//!
//! # Module Organization
//!
//! - [`mapping`]: path resolution and the declarative summary/page field tables
//! - [`sources`]: source kinds, file naming, parsing and record selection
//! - [`aggregate`]: per-folder merging and the walk over a data directory
//! - [`output`]: staged writing of `combined_metadata.json` and `tools/<tool>.json`
//! - [`commands`]: command-line interface, configuration and logging

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod aggregate;
pub mod commands;
pub mod mapping;
pub mod output;
pub mod sources;

pub use crate::commands::{Host, run};
