use crate::Result;
use crate::aggregate::{ToolMetadata, ToolPageMetadata};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

const LOG_TARGET: &str = "    output";

/// Name of the combined summary file in the output root.
pub const COMBINED_FILE_NAME: &str = "combined_metadata.json";

/// Directory of per-tool page files in the output root.
pub const TOOLS_DIR_NAME: &str = "tools";

/// Destination for the records produced by a run.
pub trait Sink {
    /// Persist the page record of one tool.
    fn write_tool_page(&mut self, page: &ToolPageMetadata) -> Result<()>;

    /// Persist the combined list of summaries.
    fn write_combined(&mut self, combined: &[ToolMetadata]) -> Result<()>;
}

/// Output root that is rebuilt from scratch on every run.
///
/// [`StagedOutput::prepare`] deletes the output root and creates an empty staging
/// directory next to it. Records are written into the staging directory and
/// [`StagedOutput::publish`] renames it onto the output root. If the value is dropped
/// without being published, the staging directory is removed, so a failed run leaves
/// no output root behind rather than a partial one.
#[derive(Debug)]
pub struct StagedOutput {
    root: Utf8PathBuf,
    staging: Utf8PathBuf,
    written_pages: HashSet<String>,
    published: bool,
}

impl StagedOutput {
    /// Clear `root` and set up a fresh staging directory beside it.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` has no final path component, or if the old
    /// output or staging directory cannot be removed or recreated.
    pub fn prepare(root: &Utf8Path) -> Result<Self> {
        let staging = staging_path(root)?;

        log::info!(target: LOG_TARGET, "Clearing output directory '{root}'");
        remove_dir_if_present(root)?;
        remove_dir_if_present(&staging)?;

        let tools_dir = staging.join(TOOLS_DIR_NAME);
        fs::create_dir_all(&tools_dir).into_app_err_with(|| format!("unable to create directory '{tools_dir}'"))?;

        Ok(Self {
            root: root.to_path_buf(),
            staging,
            written_pages: HashSet::new(),
            published: false,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    #[must_use]
    pub fn staging_dir(&self) -> &Utf8Path {
        &self.staging
    }

    /// Move the staged files onto the output root.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging directory cannot be renamed.
    pub fn publish(mut self) -> Result<()> {
        remove_dir_if_present(&self.root)?;
        fs::rename(&self.staging, &self.root)
            .into_app_err_with(|| format!("unable to move '{}' to '{}'", self.staging, self.root))?;
        self.published = true;

        log::debug!(target: LOG_TARGET, "Published output to '{}'", self.root);
        Ok(())
    }
}

impl Sink for StagedOutput {
    fn write_tool_page(&mut self, page: &ToolPageMetadata) -> Result<()> {
        let file_name = page_file_name(&page.tool_name);
        if !self.written_pages.insert(file_name.clone()) {
            log::warn!(target: LOG_TARGET, "Several folders are named '{}', keeping the last one", page.tool_name);
        }

        save(page, &self.staging.join(TOOLS_DIR_NAME).join(file_name))
    }

    fn write_combined(&mut self, combined: &[ToolMetadata]) -> Result<()> {
        save(combined, &self.staging.join(COMBINED_FILE_NAME))
    }
}

impl Drop for StagedOutput {
    fn drop(&mut self) {
        if !self.published {
            let _ = fs::remove_dir_all(&self.staging);
        }
    }
}

/// File name of the page record for `tool_name` inside `tools/`.
///
/// Characters outside letters, digits and `-_.+` become `_`, and a name made only
/// of dots is replaced entirely, so the result is always one plain file name.
#[must_use]
pub fn page_file_name(tool_name: &str) -> String {
    let mut stem: String = tool_name
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '+') { c } else { '_' })
        .collect();

    if stem.chars().all(|c| c == '.') {
        stem = "_".repeat(stem.len().max(1));
    }

    format!("{stem}.json")
}

/// Sibling directory `.<name>.staging` next to `root`.
fn staging_path(root: &Utf8Path) -> Result<Utf8PathBuf> {
    let Some(name) = root.file_name() else {
        bail!("output directory '{root}' must end in a directory name");
    };

    let parent = root.parent().filter(|p| !p.as_str().is_empty()).unwrap_or_else(|| Utf8Path::new("."));
    Ok(parent.join(format!(".{name}.staging")))
}

fn remove_dir_if_present(path: &Utf8Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).into_app_err_with(|| format!("unable to remove directory '{path}'")),
    }
}

/// Write `data` as compact JSON.
fn save<T>(data: &T, path: &Utf8Path) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let file = File::create(path).into_app_err_with(|| format!("unable to create file '{path}'"))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, data).into_app_err_with(|| format!("unable to write file '{path}'"))?;
    writer.flush().into_app_err_with(|| format!("unable to flush file '{path}'"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SourceKind;
    use serde_json::{Map, json};
    use std::collections::BTreeSet;

    fn page(tool_name: &str) -> ToolPageMetadata {
        let mut page_metadata = Map::new();
        let _ = page_metadata.insert("galaxy".to_string(), json!({"summary": "s"}));
        ToolPageMetadata {
            tool_name: tool_name.to_string(),
            contents: BTreeSet::from([SourceKind::Galaxy]),
            page_metadata,
        }
    }

    fn output_root(temp_dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp_dir.path().join("public").join("metadata")).unwrap()
    }

    #[test]
    fn test_prepare_clears_existing_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = output_root(&temp_dir);
        fs::create_dir_all(root.join("tools")).unwrap();
        fs::write(root.join("tools").join("stale.json"), "{}").unwrap();

        let output = StagedOutput::prepare(&root).unwrap();

        assert!(!root.exists());
        assert!(output.staging_dir().join(TOOLS_DIR_NAME).is_dir());
    }

    #[test]
    fn test_publish_moves_files_into_place() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = output_root(&temp_dir);

        let mut output = StagedOutput::prepare(&root).unwrap();
        output.write_tool_page(&page("bwa")).unwrap();
        output.write_combined(&[]).unwrap();
        let staging = output.staging_dir().to_path_buf();
        output.publish().unwrap();

        assert!(!staging.exists());
        assert_eq!(
            fs::read_to_string(root.join("tools").join("bwa.json")).unwrap(),
            r#"{"tool_name":"bwa","contents":["galaxy"],"page_metadata":{"galaxy":{"summary":"s"}}}"#
        );
        assert_eq!(fs::read_to_string(root.join(COMBINED_FILE_NAME)).unwrap(), "[]");
    }

    #[test]
    fn test_dropping_unpublished_output_leaves_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = output_root(&temp_dir);

        let mut output = StagedOutput::prepare(&root).unwrap();
        output.write_tool_page(&page("bwa")).unwrap();
        let staging = output.staging_dir().to_path_buf();
        drop(output);

        assert!(!staging.exists());
        assert!(!root.exists());
    }

    #[test]
    fn test_page_file_names_are_sanitized() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = output_root(&temp_dir);

        let mut output = StagedOutput::prepare(&root).unwrap();
        output.write_tool_page(&page("a:b")).unwrap();
        output.publish().unwrap();

        assert!(root.join("tools").join("a_b.json").is_file());
    }

    #[test]
    fn test_prepare_rejects_root_without_name() {
        assert!(StagedOutput::prepare(Utf8Path::new("/")).is_err());
    }

    #[test]
    fn test_staging_path_sits_beside_root() {
        assert_eq!(
            staging_path(Utf8Path::new("toolmeta-output")).unwrap(),
            Utf8Path::new("./.toolmeta-output.staging")
        );
        assert_eq!(
            staging_path(Utf8Path::new("../frontend/public/metadata")).unwrap(),
            Utf8Path::new("../frontend/public/.metadata.staging")
        );
        assert!(staging_path(Utf8Path::new("/")).is_err());
    }

    #[test]
    fn test_page_file_name_keeps_common_tool_names() {
        for name in ["samtools", "bwa-mem2", "bowtie2.2", "r-seurat_v4", "g++", "Trinity"] {
            assert_eq!(page_file_name(name), format!("{name}.json"));
        }
    }

    #[test]
    fn test_page_file_name_stays_inside_tools_dir() {
        assert_eq!(page_file_name(".."), "__.json");
        assert_eq!(page_file_name("."), "_.json");
        assert_eq!(page_file_name(""), "_.json");
        assert_eq!(page_file_name("../etc/passwd"), ".._etc_passwd.json");
        assert_eq!(page_file_name("a b:c\\d"), "a_b_c_d.json");
    }
}
