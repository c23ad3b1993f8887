// src/graph/encounter.rs
//! The weighted, undirected character encounter graph.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// A character of the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub label: String,
    pub name: String,
    /// Number of edge-group occurrences.
    pub frequency: u32,
}

/// An encounter between two characters, `a < b` by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: u32,
}

/// Encounter graph of a single book.
///
/// Vertices are stored in declaration order, so a vertex index doubles as the
/// key of every derived metric table. Only the builder mutates the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterGraph {
    name: String,
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
    /// Neighbor index -> weight, per vertex. Both directions are stored.
    adjacency: Vec<BTreeMap<usize, u32>>,
    edge_count: usize,
    built: bool,
}

impl EncounterGraph {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True once a record has been read into this graph.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built
    }

    pub(crate) fn mark_built(&mut self) {
        self.built = true;
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex(&self, idx: usize) -> Option<&Vertex> {
        self.vertices.get(idx)
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    #[must_use]
    pub fn label_of(&self, idx: usize) -> Option<&str> {
        self.vertices.get(idx).map(|v| v.label.as_str())
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Adds a character and returns its index, or `None` if the label exists.
    pub(crate) fn add_vertex(&mut self, label: &str, name: &str) -> Option<usize> {
        if self.contains(label) {
            return None;
        }
        let idx = self.vertices.len();
        self.vertices.push(Vertex {
            label: label.to_string(),
            name: name.to_string(),
            frequency: 0,
        });
        self.adjacency.push(BTreeMap::new());
        self.index.insert(label.to_string(), idx);
        Some(idx)
    }

    pub(crate) fn inc_frequency(&mut self, idx: usize) {
        if let Some(v) = self.vertices.get_mut(idx) {
            v.frequency += 1;
        }
    }

    /// Links `a`--`b` with weight 1, or bumps the weight of an existing edge.
    /// Returns the resulting weight; self-loops and unknown indices are ignored.
    pub(crate) fn add_encounter(&mut self, a: usize, b: usize) -> u32 {
        let n = self.adjacency.len();
        if a == b || a >= n || b >= n {
            return 0;
        }

        let weight = {
            let w = self.adjacency[a].entry(b).or_insert(0);
            *w += 1;
            *w
        };
        self.adjacency[b].insert(a, weight);
        if weight == 1 {
            self.edge_count += 1;
        }
        weight
    }

    /// True if characters `a` and `b` have met.
    #[must_use]
    pub fn met(&self, a: usize, b: usize) -> bool {
        self.weight(a, b).is_some()
    }

    #[must_use]
    pub fn weight(&self, a: usize, b: usize) -> Option<u32> {
        self.adjacency.get(a)?.get(&b).copied()
    }

    /// Weight of the edge between two labels.
    #[must_use]
    pub fn weight_between(&self, a: &str, b: &str) -> Option<u32> {
        self.weight(self.index_of(a)?, self.index_of(b)?)
    }

    #[must_use]
    pub fn degree(&self, idx: usize) -> usize {
        self.adjacency.get(idx).map_or(0, BTreeMap::len)
    }

    /// Degrees in vertex-index order.
    #[must_use]
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.adjacency.iter().map(BTreeMap::len).collect()
    }

    /// Neighbor indices of `idx`, ascending.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(idx)
            .into_iter()
            .flat_map(|adj| adj.keys().copied())
    }

    /// Each edge once, ordered by `(a, b)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, adj)| {
            adj.range(a + 1..).map(move |(&b, &weight)| Edge { a, b, weight })
        })
    }

    /// Characters with occurrence frequency equal to `freq`.
    #[must_use]
    pub fn count_with_frequency(&self, freq: u32) -> usize {
        self.vertices.iter().filter(|v| v.frequency == freq).count()
    }

    /// Characters that appear exactly once.
    #[must_use]
    pub fn hapax_legomena(&self) -> usize {
        self.count_with_frequency(1)
    }

    /// Characters that appear exactly twice.
    #[must_use]
    pub fn dis_legomena(&self) -> usize {
        self.count_with_frequency(2)
    }
}
