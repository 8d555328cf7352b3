//! Declarative field extraction.
//!
//! A [`MappingTable`] names the output fields of one source kind and, for each field,
//! the [`FieldSpec`] describing where its value lives inside a parsed source record.
//! [`evaluate`] applies a table to a record; [`resolve`] walks a single path.
//!
//! Two tables exist per source kind: the compact summary table feeding
//! `combined_metadata.json` and the richer page table feeding `tools/<tool>.json`.

mod evaluator;
mod path;
mod table;

pub use evaluator::{evaluate, is_truthy};
pub use path::resolve;
pub use table::{Field, FieldSpec, MappingTable, TableKind, page_table, summary_table, table_for};
