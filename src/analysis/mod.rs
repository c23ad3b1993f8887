// src/analysis/mod.rs
//! Per-book pipeline: build, measure, fit.

pub mod engine;
pub mod worker;

pub use engine::{analyze_all, analyze_all_strict, RunReport};
pub use worker::analyze_book;

use serde::Serialize;

use crate::catalog::BookSource;
use crate::error::Result;
use crate::fit::FitResult;
use crate::graph::{Bicomponents, EncounterGraph, GlobalMeasures};
use crate::metrics::{CentralityStats, MetricTable};

/// Whole-book figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalReport {
    #[serde(flatten)]
    pub measures: GlobalMeasures,
    /// Mean and standard deviation of the normalized centralities.
    pub centrality: CentralityStats,
    pub bicomponents: Bicomponents,
}

/// Everything computed for one book.
#[derive(Debug)]
pub struct BookAnalysis {
    pub source: BookSource,
    pub graph: EncounterGraph,
    pub metrics: MetricTable,
    /// `InsufficientData` when the degrees are too uniform to fit.
    pub fit: Result<FitResult>,
    pub global: GlobalReport,
}

impl BookAnalysis {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.source.name
    }

    #[must_use]
    pub fn fit(&self) -> Option<&FitResult> {
        self.fit.as_ref().ok()
    }
}
