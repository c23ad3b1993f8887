// src/report/mod.rs
//! Output of analyses: JSON artifacts and console summaries.

pub mod console;
pub mod json;

pub use json::{write_book, BookDocument};

/// `word` or `words`.
pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
