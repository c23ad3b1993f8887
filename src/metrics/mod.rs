// src/metrics/mod.rs
//! Centrality and influence measures over a built encounter graph.

pub mod lobby;
pub mod paths;
pub mod table;

pub use table::{CentralityStats, MetricExport, MetricRow, MetricTable};

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::graph::EncounterGraph;

/// Raised (and logged) when closeness meets unreachable vertex pairs.
///
/// Non-fatal: the affected pairs are left out of closeness and every other
/// measure is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Graph of book {book} is disconnected: {unreachable_pairs} unreachable pairs excluded from closeness")]
pub struct DisconnectedGraphWarning {
    pub book: String,
    /// Ordered `(source, target)` pairs with no path.
    pub unreachable_pairs: usize,
}

/// Computes the [`MetricTable`] of a graph. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentralityEngine;

impl CentralityEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Degree, betweenness, closeness and lobby for every vertex.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(&self, graph: &EncounterGraph) -> MetricTable {
        let n = graph.vertex_count();
        let passes: Vec<paths::SourcePass> = (0..n)
            .into_par_iter()
            .map(|s| paths::source_pass(graph, s))
            .collect();

        let mut betweenness = vec![0.0_f64; n];
        for pass in &passes {
            for (b, d) in betweenness.iter_mut().zip(&pass.dependency) {
                *b += d;
            }
        }
        // Undirected: every path was accumulated from both of its ends.
        for b in &mut betweenness {
            *b /= 2.0;
        }

        let lobbies = lobby::lobby_all(graph);
        let scale = Scale::new(n);

        let rows = (0..n)
            .map(|v| {
                let degree = graph.degree(v);
                let pass = &passes[v];
                let closeness = raw_closeness(pass);
                MetricRow {
                    degree,
                    betweenness: betweenness[v],
                    closeness,
                    lobby: lobbies[v],
                    degree_norm: scale.per_other(degree as f64),
                    betweenness_norm: scale.betweenness(betweenness[v]),
                    closeness_norm: scale.per_other(closeness * pass.reachable as f64),
                    lobby_norm: scale.per_other(lobbies[v] as f64),
                }
            })
            .collect();

        let unreachable_pairs: usize = passes
            .iter()
            .map(|p| n.saturating_sub(1) - p.reachable)
            .sum();
        let disconnected = (unreachable_pairs > 0).then(|| {
            let warning = DisconnectedGraphWarning {
                book: graph.name().to_string(),
                unreachable_pairs,
            };
            warn!("{warning}");
            warning
        });

        MetricTable::new(graph.name(), rows, disconnected)
    }
}

/// Inverse mean distance to the reachable vertices; 0 when none are.
#[allow(clippy::cast_precision_loss)]
fn raw_closeness(pass: &paths::SourcePass) -> f64 {
    if pass.distance_sum == 0 {
        0.0
    } else {
        pass.reachable as f64 / pass.distance_sum as f64
    }
}

struct Scale {
    others: f64,
    pairs: f64,
}

impl Scale {
    #[allow(clippy::cast_precision_loss)]
    fn new(n: usize) -> Self {
        let others = n.saturating_sub(1) as f64;
        let pairs = others * n.saturating_sub(2) as f64;
        Self { others, pairs }
    }

    fn per_other(&self, x: f64) -> f64 {
        if self.others > 0.0 {
            x / self.others
        } else {
            0.0
        }
    }

    fn betweenness(&self, x: f64) -> f64 {
        if self.pairs > 0.0 {
            2.0 * x / self.pairs
        } else {
            0.0
        }
    }
}
