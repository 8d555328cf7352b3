//! Per-tool aggregation.
//!
//! [`process_folder`] turns one tool folder into a [`ToolMetadata`] summary and a
//! [`ToolPageMetadata`] page record by running every present source through both
//! mapping tables. The [`Collector`] walks a data directory, calls it for every
//! folder, hands page records to a [`Sink`](crate::output::Sink), and returns the
//! summaries in walk order.

mod collector;
mod folder;
mod tool_metadata;

pub use collector::Collector;
pub use folder::{FolderOutcome, process_folder};
pub use tool_metadata::{ToolMetadata, ToolPageMetadata};
