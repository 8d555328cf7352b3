//! Metadata providers and how their files are found and parsed.
//!
//! Each tool folder may hold one file per [`SourceKind`]. The kind fixes the
//! file name, the parser, and whether the parsed document is used directly or a
//! node has to be picked out of a linked-data graph first.

mod adapter;
mod record;
mod source_kind;

pub use adapter::{LoadedSource, SourceFile, decode, load, locate, read};
pub use record::{Format, parse_json, parse_yaml, yaml_to_json};
pub use source_kind::{Extraction, SOFTWARE_APPLICATION_TYPE, SourceKind};
