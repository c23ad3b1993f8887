// src/metrics/lobby.rs
//! Lobby index: an h-index over a vertex's neighborhood.
//!
//! `L(v)` is the largest `l` such that at least `l` neighbors of `v` have
//! degree `>= l`. It is local: every vertex is scored from its own neighbor
//! list only.

use crate::graph::EncounterGraph;

/// h-index of a degree multiset. Sorts `degrees` in place (descending).
#[must_use]
pub fn h_index(degrees: &mut [usize]) -> usize {
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    degrees
        .iter()
        .enumerate()
        .take_while(|&(i, &d)| d > i)
        .count()
}

/// Lobby index of vertex `idx`; 0 for isolated or unknown vertices.
#[must_use]
pub fn lobby(graph: &EncounterGraph, idx: usize) -> usize {
    let mut degrees: Vec<usize> = graph.neighbors(idx).map(|w| graph.degree(w)).collect();
    h_index(&mut degrees)
}

/// Lobby index of every vertex, in vertex-index order.
#[must_use]
pub fn lobby_all(graph: &EncounterGraph) -> Vec<usize> {
    (0..graph.vertex_count()).map(|v| lobby(graph, v)).collect()
}
