// src/graph/mod.rs
//! Encounter graph construction and whole-graph measures.

pub mod builder;
pub mod encounter;
pub mod measures;

pub use builder::GraphBuilder;
pub use encounter::{EncounterGraph, Edge, Vertex};
pub use measures::{bicomponents, Bicomponents, GlobalMeasures};

use serde::Serialize;

/// One edge by label, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeExport {
    pub a: String,
    pub b: String,
    pub weight: u32,
}

/// One vertex by label, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexExport {
    pub label: String,
    pub name: String,
    pub frequency: u32,
    pub degree: usize,
}

impl EncounterGraph {
    /// Vertices with their degrees, in declaration order.
    #[must_use]
    pub fn vertex_listing(&self) -> Vec<VertexExport> {
        self.vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| VertexExport {
                label: v.label.clone(),
                name: v.name.clone(),
                frequency: v.frequency,
                degree: self.degree(i),
            })
            .collect()
    }

    /// Edges by label, each once.
    #[must_use]
    pub fn edge_listing(&self) -> Vec<EdgeExport> {
        self.edges()
            .map(|e| EdgeExport {
                a: self.label_of(e.a).unwrap_or_default().to_string(),
                b: self.label_of(e.b).unwrap_or_default().to_string(),
                weight: e.weight,
            })
            .collect()
    }
}
