//! Worker module: one book from record file to measures.

use tracing::{info, warn};

use crate::catalog::BookSource;
use crate::config::Config;
use crate::error::{CharnetError, Result};
use crate::fit::PowerLawFitter;
use crate::graph::{bicomponents, EncounterGraph, GlobalMeasures, GraphBuilder};
use crate::metrics::CentralityEngine;

use super::{BookAnalysis, GlobalReport};

/// Reads, builds and measures one book.
///
/// # Errors
/// Returns the build error for an unreadable or invalid record, or
/// `Disconnected` when strict connectivity is configured and the graph
/// falls apart.
pub fn analyze_book(source: &BookSource, config: &Config) -> Result<BookAnalysis> {
    let mut graph = EncounterGraph::new(source.name.as_str());
    GraphBuilder::new()
        .with_comment_marker(config.record.comment_marker)
        .build_file(&mut graph, &source.path)?;

    let metrics = CentralityEngine::new().compute(&graph);
    if config.analysis.strict_connectivity {
        if let Some(warning) = metrics.disconnected() {
            return Err(CharnetError::Disconnected(warning.clone()));
        }
    }

    let fit = PowerLawFitter::new()
        .with_min_support(config.analysis.min_support)
        .fit_degrees(&graph);
    match &fit {
        Ok(f) => info!(
            book = %source.name,
            alpha = f.alpha,
            k_min = f.k_min,
            "fitted degree distribution"
        ),
        Err(e) => warn!("{e}"),
    }

    let global = GlobalReport {
        measures: GlobalMeasures::of(&graph),
        centrality: metrics.stats(),
        bicomponents: bicomponents(&graph),
    };

    Ok(BookAnalysis {
        source: source.clone(),
        graph,
        metrics,
        fit,
        global,
    })
}
