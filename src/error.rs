// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::metrics::DisconnectedGraphWarning;

#[derive(Debug, Error)]
pub enum CharnetError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed record in book {book} at line {line}: {text:?} ({reason})")]
    MalformedRecord {
        book: String,
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("Labels {previous} and {label} are out of order in book {book} (line {line})")]
    OutOfOrderLabel {
        book: String,
        line: usize,
        previous: String,
        label: String,
    },

    #[error("Label {label} is repeated in book {book} (line {line})")]
    DuplicateLabel {
        book: String,
        line: usize,
        label: String,
    },

    #[error("Label {label:?} was not declared as a vertex in book {book} (line {line})")]
    UnknownLabel {
        book: String,
        line: usize,
        label: String,
    },

    #[error("Insufficient data to fit {book}: {distinct} distinct values, need at least {required}")]
    InsufficientData {
        book: String,
        distinct: usize,
        required: usize,
    },

    #[error(transparent)]
    Disconnected(#[from] DisconnectedGraphWarning),

    #[error("Unknown book: {0}")]
    UnknownBook(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CharnetError {
    /// True for errors raised while parsing or building a record.
    #[must_use]
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::OutOfOrderLabel { .. }
                | Self::DuplicateLabel { .. }
                | Self::UnknownLabel { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CharnetError>;

// Allow `?` on std::io::Error by converting to CharnetError::Io with unknown path.
impl From<std::io::Error> for CharnetError {
    fn from(source: std::io::Error) -> Self {
        CharnetError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for CharnetError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(source) => CharnetError::Io { source, path },
            None => CharnetError::Config(format!("filesystem loop at {}", path.display())),
        }
    }
}
