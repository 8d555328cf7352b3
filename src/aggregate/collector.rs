use super::folder::{FolderOutcome, process_folder};
use super::tool_metadata::ToolMetadata;
use crate::Result;
use crate::commands::ParseErrorPolicy;
use crate::output::Sink;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use walkdir::WalkDir;

const LOG_TARGET: &str = " collector";

/// Walks a data directory and aggregates every tool folder below it.
#[derive(Debug, Clone, Copy)]
pub struct Collector {
    on_parse_error: ParseErrorPolicy,
}

impl Collector {
    #[must_use]
    pub const fn new(on_parse_error: ParseErrorPolicy) -> Self {
        Self { on_parse_error }
    }

    /// Process every directory below `data_dir`, at any depth, in file-name order.
    ///
    /// Page records go to `sink` as soon as a folder is done. The returned summaries
    /// follow walk order and only include folders whose summary and page records
    /// both carry data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data_dir` is missing, the walk fails, a folder cannot be
    /// processed, or the sink rejects a record.
    pub fn collect(&self, data_dir: &Utf8Path, sink: &mut impl Sink) -> Result<Vec<ToolMetadata>> {
        if !data_dir.is_dir() {
            bail!("data directory '{data_dir}' does not exist or is not a directory");
        }

        let mut combined = Vec::new();

        for entry_result in WalkDir::new(data_dir).min_depth(1).follow_links(false).sort_by_file_name() {
            let entry = entry_result.into_app_err_with(|| format!("could not walk data directory '{data_dir}'"))?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let folder = match Utf8PathBuf::from_path_buf(entry.into_path()) {
                Ok(folder) => folder,
                Err(path) => {
                    log::warn!(target: LOG_TARGET, "Skipping folder with a non UTF-8 path: '{}'", path.display());
                    continue;
                }
            };

            match process_folder(&folder, self.on_parse_error)? {
                FolderOutcome::NotAToolFolder => {}
                FolderOutcome::NoMetadata { tool_name } => {
                    log::info!(target: LOG_TARGET, "No metadata could be extracted for '{tool_name}', skipping");
                }
                FolderOutcome::Extracted { summary, page } => {
                    sink.write_tool_page(&page)?;
                    combined.push(summary);
                }
            }
        }

        log::debug!(target: LOG_TARGET, "Collected metadata for {} tool(s) under '{data_dir}'", combined.len());

        Ok(combined)
    }
}
