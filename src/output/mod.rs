//! Persisting the produced records.
//!
//! The [`Sink`] trait is what the aggregation pass writes through. [`StagedOutput`]
//! is the on-disk implementation: it clears the output root, writes everything into a
//! sibling staging directory, and swaps the staging directory into place only when
//! the whole pass succeeded.

mod sink;

pub use sink::{COMBINED_FILE_NAME, Sink, StagedOutput, TOOLS_DIR_NAME, page_file_name};
