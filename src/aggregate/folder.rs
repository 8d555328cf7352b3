use super::tool_metadata::{ToolMetadata, ToolPageMetadata};
use crate::Result;
use crate::commands::ParseErrorPolicy;
use crate::mapping::{MappingTable, evaluate, page_table, summary_table};
use crate::sources::{LoadedSource, SourceFile, SourceKind, decode, locate, read};
use camino::Utf8Path;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

const LOG_TARGET: &str = " aggregate";

/// Result of processing one folder.
#[derive(Debug, Clone, PartialEq)]
pub enum FolderOutcome {
    /// None of the source files exist; the folder does not describe a tool.
    NotAToolFolder,

    /// Source files exist but produced no summary or no page fields.
    NoMetadata { tool_name: String },

    /// Both records carry data and should be published.
    Extracted {
        summary: ToolMetadata,
        page: ToolPageMetadata,
    },
}

/// Extract the summary and page records for the tool folder at `folder`.
///
/// The tool name is the folder's own name. Sources are read in [`SourceKind`] order
/// and each contributes its own block under its source name. A source whose file
/// exists is listed in `contents` even when it yields no fields, except a
/// bioschemas graph without a software node, which counts as absent.
///
/// # Errors
///
/// Returns an error if a source file cannot be read, or cannot be parsed while
/// `on_parse_error` is [`ParseErrorPolicy::Abort`].
pub fn process_folder(folder: &Utf8Path, on_parse_error: ParseErrorPolicy) -> Result<FolderOutcome> {
    let Some(tool_name) = folder.file_name() else {
        return Ok(FolderOutcome::NotAToolFolder);
    };

    let sources = locate(folder, tool_name);
    if sources.is_empty() {
        return Ok(FolderOutcome::NotAToolFolder);
    }

    log::info!(target: LOG_TARGET, "Extracting data for: {tool_name}");

    let mut contents = BTreeSet::new();
    let mut fetched_metadata = Map::new();
    let mut page_metadata = Map::new();

    for source in &sources {
        let record = match load_source(source, tool_name, on_parse_error)? {
            Some(LoadedSource::Record(record)) => record,
            Some(LoadedSource::Empty) | None => {
                let _ = contents.insert(source.kind);
                continue;
            }
            Some(LoadedSource::NoMatchingNode) => continue,
        };

        let _ = contents.insert(source.kind);
        merge(&mut fetched_metadata, source.kind, &record, summary_table(source.kind));
        merge(&mut page_metadata, source.kind, &record, page_table(source.kind));
    }

    if fetched_metadata.is_empty() || page_metadata.is_empty() {
        log::debug!(target: LOG_TARGET, "No metadata extracted for '{tool_name}'");
        return Ok(FolderOutcome::NoMetadata {
            tool_name: tool_name.to_string(),
        });
    }

    Ok(FolderOutcome::Extracted {
        summary: ToolMetadata {
            tool_name: tool_name.to_string(),
            contents: contents.clone(),
            fetched_metadata,
        },
        page: ToolPageMetadata {
            tool_name: tool_name.to_string(),
            contents,
            page_metadata,
        },
    })
}

/// Read and decode one source. Returns `None` when a malformed file is skipped.
///
/// Read failures always propagate; the policy only covers content that cannot be parsed.
fn load_source(source: &SourceFile, tool_name: &str, on_parse_error: ParseErrorPolicy) -> Result<Option<LoadedSource>> {
    let bytes = read(source)?;

    match decode(source, &bytes) {
        Ok(loaded) => Ok(Some(loaded)),
        Err(e) => match on_parse_error {
            ParseErrorPolicy::Abort => Err(e),
            ParseErrorPolicy::Skip => {
                log::warn!(target: LOG_TARGET, "Skipping {} metadata for '{tool_name}': {e}", source.kind);
                Ok(None)
            }
        },
    }
}

fn merge(into: &mut Map<String, Value>, kind: SourceKind, record: &Value, table: MappingTable) {
    let extracted = evaluate(record, table);
    if !extracted.is_empty() {
        let _ = into.insert(kind.to_string(), Value::Object(extracted));
    }
}
