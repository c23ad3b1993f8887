//! Runs the per-book pipeline over a list of books.

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::warn;

use crate::catalog::BookSource;
use crate::config::Config;
use crate::error::{CharnetError, Result};

use super::{worker, BookAnalysis};

/// Results of one run, in input order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub analyses: Vec<BookAnalysis>,
    /// Books that could not be analyzed, by name.
    pub failures: Vec<(String, CharnetError)>,
}

impl RunReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// True if any failure came from a bad record rather than the environment.
    #[must_use]
    pub fn has_record_errors(&self) -> bool {
        self.failures.iter().any(|(_, e)| e.is_record_error())
    }
}

/// Analyzes every book independently and in parallel.
///
/// Selecting some books and selecting all of them go through here alike;
/// each call terminates once every book has either finished or failed.
#[must_use]
pub fn analyze_all(sources: &[BookSource], config: &Config) -> RunReport {
    let results: Vec<(String, Result<BookAnalysis>)> = sources
        .par_iter()
        .map(|src| (src.name.clone(), worker::analyze_book(src, config)))
        .collect();

    let mut report = RunReport::default();
    for (name, result) in results {
        match result {
            Ok(analysis) => report.analyses.push(analysis),
            Err(e) => {
                warn!(book = %name, "skipping book: {e}");
                report.failures.push((name, e));
            }
        }
    }
    report
}

/// Like [`analyze_all`], but gives up on the whole run as soon as a book fails.
///
/// # Errors
/// Returns the failure that stopped the run.
pub fn analyze_all_strict(sources: &[BookSource], config: &Config) -> Result<Vec<BookAnalysis>> {
    sources
        .par_iter()
        .map(|src| worker::analyze_book(src, config))
        .collect()
}
