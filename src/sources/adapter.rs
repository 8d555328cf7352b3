use super::record::Format;
use super::source_kind::{Extraction, SourceKind};
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use serde_json::Value;
use std::fs;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "   sources";

/// A source file found inside a tool folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub kind: SourceKind,
    pub path: Utf8PathBuf,
}

/// What reading one source file produced.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedSource {
    /// A record ready for the mapping tables.
    Record(Value),

    /// The file exists but holds nothing to extract: an empty document or an unrecognized extension.
    Empty,

    /// A linked-data graph without a node of the wanted type. The source counts as absent.
    NoMatchingNode,
}

/// Find the source files present for `tool` in `folder`, in processing order.
#[must_use]
pub fn locate(folder: &Utf8Path, tool: &str) -> Vec<SourceFile> {
    SourceKind::iter()
        .map(|kind| SourceFile {
            kind,
            path: folder.join(kind.file_name(tool)),
        })
        .filter(|source| source.path.is_file())
        .collect()
}

/// Read and parse a source file and select the record the mapping tables apply to.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is malformed.
pub fn load(source: &SourceFile) -> Result<LoadedSource> {
    decode(source, &read(source)?)
}

/// Read the raw bytes of a source file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read(source: &SourceFile) -> Result<Vec<u8>> {
    fs::read(&source.path).into_app_err_with(|| format!("unable to read file '{}'", source.path))
}

/// Parse the bytes read from `source` and select the record the mapping tables apply to.
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 text in the source's format.
pub fn decode(source: &SourceFile, bytes: &[u8]) -> Result<LoadedSource> {
    let Some(format) = Format::from_path(&source.path) else {
        log::debug!(target: LOG_TARGET, "No parser for '{}', skipping", source.path);
        return Ok(LoadedSource::Empty);
    };

    let text = core::str::from_utf8(bytes).into_app_err_with(|| format!("file '{}' is not valid UTF-8", source.path))?;

    let Some(document) = format.parse(text, &source.path)? else {
        log::debug!(target: LOG_TARGET, "'{}' holds an empty document", source.path);
        return Ok(LoadedSource::Empty);
    };

    Ok(match source.kind.extraction() {
        Extraction::Direct => LoadedSource::Record(document),
        Extraction::GraphNode { type_tag } => select_graph_node(document, type_tag).map_or_else(
            || {
                log::debug!(target: LOG_TARGET, "No '{type_tag}' node in the graph of '{}'", source.path);
                LoadedSource::NoMatchingNode
            },
            LoadedSource::Record,
        ),
    })
}

/// Take the first node of the root `@graph` array whose `@type` is exactly `type_tag`.
fn select_graph_node(document: Value, type_tag: &str) -> Option<Value> {
    let Value::Object(mut root) = document else {
        return None;
    };

    let Some(Value::Array(graph)) = root.remove("@graph") else {
        return None;
    };

    graph
        .into_iter()
        .find(|node| node.get("@type").and_then(Value::as_str) == Some(type_tag))
}
