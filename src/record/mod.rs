// src/record/mod.rs
//! Book source records: the line-oriented vertex/edge text format.

pub mod parser;
pub mod types;

pub use parser::RecordParser;
pub use types::{ChapterRecord, Record, VertexRecord};

/// Asterisk is the comment marker used by the Stanford GraphBase data files.
pub const DEFAULT_COMMENT_MARKER: char = '*';
