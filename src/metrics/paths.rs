// src/metrics/paths.rs
//! Single-source shortest paths (unweighted BFS) with Brandes accumulation.
//!
//! One [`SourcePass`] per source vertex yields both the betweenness
//! dependencies of that source and the distance totals closeness needs.

use std::collections::VecDeque;

use crate::graph::EncounterGraph;

/// Result of a BFS from one source.
#[derive(Debug, Clone)]
pub struct SourcePass {
    /// `δ_s(v)`: dependency of the source on each vertex. Zero for the source.
    pub dependency: Vec<f64>,
    /// Vertices reachable from the source, excluding itself.
    pub reachable: usize,
    /// Sum of hop distances to the reachable vertices.
    pub distance_sum: usize,
}

/// Runs BFS from `source` and accumulates dependencies backwards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn source_pass(graph: &EncounterGraph, source: usize) -> SourcePass {
    let n = graph.vertex_count();
    let mut sigma = vec![0.0_f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source] = 1.0;
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let Some(dv) = dist[v] else { continue };
        for w in graph.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
            if dist[w] == Some(dv + 1) {
                sigma[w] += sigma[v];
                preds[w].push(v);
            }
        }
    }

    let mut dependency = vec![0.0_f64; n];
    for &w in order.iter().rev() {
        for &v in &preds[w] {
            dependency[v] += sigma[v] / sigma[w] * (1.0 + dependency[w]);
        }
    }
    dependency[source] = 0.0;

    SourcePass {
        dependency,
        reachable: order.len().saturating_sub(1),
        distance_sum: dist.iter().flatten().sum(),
    }
}
