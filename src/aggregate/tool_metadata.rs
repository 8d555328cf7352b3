use crate::sources::SourceKind;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Compact per-tool record, one entry of `combined_metadata.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMetadata {
    pub tool_name: String,

    /// Sources found for the tool, in processing order.
    pub contents: BTreeSet<SourceKind>,

    /// Summary fields keyed by source name.
    pub fetched_metadata: Map<String, Value>,
}

/// Detailed per-tool record, written to `tools/<tool>.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolPageMetadata {
    pub tool_name: String,
    pub contents: BTreeSet<SourceKind>,

    /// Page fields keyed by source name.
    pub page_metadata: Map<String, Value>,
}
