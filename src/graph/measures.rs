// src/graph/measures.rs
//! Whole-graph measures: density, transitivity, legomena and bicomponents.

use std::collections::BTreeSet;

use serde::Serialize;

use super::encounter::EncounterGraph;

/// Book-level summary of an encounter graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalMeasures {
    pub vertices: usize,
    pub edges: usize,
    pub density: f64,
    pub transitivity: f64,
    pub hapax_legomena: usize,
    pub dis_legomena: usize,
    /// Share of characters that appear exactly once.
    pub hapax_ratio: f64,
}

impl GlobalMeasures {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(graph: &EncounterGraph) -> Self {
        let n = graph.vertex_count();
        let hapax = graph.hapax_legomena();
        Self {
            vertices: n,
            edges: graph.edge_count(),
            density: density(graph),
            transitivity: transitivity(graph),
            hapax_legomena: hapax,
            dis_legomena: graph.dis_legomena(),
            hapax_ratio: if n == 0 { 0.0 } else { hapax as f64 / n as f64 },
        }
    }
}

/// `2m / (n (n - 1))`; 0 for graphs with fewer than two vertices.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(graph: &EncounterGraph) -> f64 {
    let n = graph.vertex_count();
    if n < 2 {
        return 0.0;
    }
    2.0 * graph.edge_count() as f64 / (n * (n - 1)) as f64
}

/// Global clustering: `3 × triangles / connected triples`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn transitivity(graph: &EncounterGraph) -> f64 {
    let mut closed = 0_usize;
    let mut triples = 0_usize;

    for v in 0..graph.vertex_count() {
        let k = graph.degree(v);
        triples += k * k.saturating_sub(1) / 2;

        let neighbors: Vec<usize> = graph.neighbors(v).collect();
        for (i, &a) in neighbors.iter().enumerate() {
            closed += neighbors[i + 1..]
                .iter()
                .filter(|&&b| graph.met(a, b))
                .count();
        }
    }

    // Each triangle is seen once from each corner, i.e. `closed == 3 × triangles`.
    if triples == 0 {
        0.0
    } else {
        closed as f64 / triples as f64
    }
}

/// Biconnected components and articulation points, by vertex label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Bicomponents {
    /// Each component's label set; components sorted by their first label.
    pub components: Vec<BTreeSet<String>>,
    pub articulation_points: BTreeSet<String>,
}

/// Edge-partitioned biconnected components (Hopcroft-Tarjan).
#[must_use]
pub fn bicomponents(graph: &EncounterGraph) -> Bicomponents {
    let mut state = Dfs::new(graph.vertex_count());
    for root in 0..graph.vertex_count() {
        if state.disc[root].is_none() {
            state.visit(graph, root);
        }
    }

    let label = |i: usize| graph.label_of(i).unwrap_or_default().to_string();
    let mut components: Vec<BTreeSet<String>> = state
        .components
        .into_iter()
        .map(|c| c.into_iter().map(label).collect())
        .collect();
    components.sort();

    Bicomponents {
        components,
        articulation_points: state.cut.into_iter().map(label).collect(),
    }
}

struct Frame {
    vertex: usize,
    parent: Option<usize>,
    neighbors: Vec<usize>,
    next: usize,
}

struct Dfs {
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    time: usize,
    stack: Vec<(usize, usize)>,
    components: Vec<BTreeSet<usize>>,
    cut: BTreeSet<usize>,
}

impl Dfs {
    fn new(n: usize) -> Self {
        Self {
            disc: vec![None; n],
            low: vec![0; n],
            time: 0,
            stack: Vec::new(),
            components: Vec::new(),
            cut: BTreeSet::new(),
        }
    }

    /// DFS from `root` over an explicit frame stack.
    fn visit(&mut self, graph: &EncounterGraph, root: usize) {
        let mut frames = vec![self.enter(graph, root, None)];
        let mut root_children = 0;

        while let Some(frame) = frames.last_mut() {
            let (u, parent) = (frame.vertex, frame.parent);
            let Some(w) = frame.neighbors.get(frame.next).copied() else {
                frames.pop();
                if let Some(p) = parent {
                    self.low[p] = self.low[p].min(self.low[u]);
                    let p_disc = self.disc[p].unwrap_or_default();
                    if self.low[u] >= p_disc {
                        if frames.last().is_some_and(|f| f.parent.is_some()) {
                            self.cut.insert(p);
                        }
                        self.pop_component(p, u);
                    }
                }
                continue;
            };
            frame.next += 1;

            match self.disc[w] {
                None => {
                    if parent.is_none() {
                        root_children += 1;
                    }
                    self.stack.push((u, w));
                    let child = self.enter(graph, w, Some(u));
                    frames.push(child);
                }
                Some(w_disc) if Some(w) != parent && w_disc < self.disc[u].unwrap_or_default() => {
                    self.stack.push((u, w));
                    self.low[u] = self.low[u].min(w_disc);
                }
                Some(_) => {}
            }
        }

        if root_children > 1 {
            self.cut.insert(root);
        }
    }

    fn enter(&mut self, graph: &EncounterGraph, u: usize, parent: Option<usize>) -> Frame {
        self.disc[u] = Some(self.time);
        self.low[u] = self.time;
        self.time += 1;
        Frame {
            vertex: u,
            parent,
            neighbors: graph.neighbors(u).collect(),
            next: 0,
        }
    }

    fn pop_component(&mut self, u: usize, w: usize) {
        let mut component = BTreeSet::new();
        while let Some((a, b)) = self.stack.pop() {
            component.insert(a);
            component.insert(b);
            if (a, b) == (u, w) {
                break;
            }
        }
        self.components.push(component);
    }
}
