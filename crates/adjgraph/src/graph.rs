//! The adjacency-list [`Graph`] container.
//!
//! Vertices are the indices `0..vertex_count`. Each vertex owns an ordered list of outgoing
//! [`Edge`]s; insertion order is preserved and drives the tie-break order of every traversal.
//! Undirected graphs are stored with both directions present as separate entries.

mod dsu;
mod load;
mod mst;
mod shortest_path;
mod traversal;

use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A weighted outgoing edge, stored in the adjacency list of its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub weight: i64,
    pub target: usize,
}

impl Edge {
    pub fn new(weight: i64, target: usize) -> Self {
        Self { weight, target }
    }
}

/// In/out degree of a single vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Degree {
    pub in_degree: usize,
    pub out_degree: usize,
}

/// A weighted directed graph over the vertices `0..vertex_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// A graph with `vertex_count` vertices and no edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, kept in iteration order.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut g = Self::with_vertices(vertex_count);
        for (from, to, weight) in edges {
            g.check_vertex(from)?;
            g.check_vertex(to)?;
            g.adjacency[from].push(Edge::new(weight, to));
        }
        Ok(g)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Outgoing edges of `v`; empty for out-of-range vertices.
    pub fn edges(&self, v: usize) -> &[Edge] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every vertex's outgoing edges, indexed by vertex.
    pub fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count
    }

    /// Like [`Graph::contains_vertex`], but fails with [`Error::VertexOutOfRange`].
    pub fn check_vertex(&self, v: usize) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Number of directed entries; an undirected edge counts twice.
    pub fn count_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn count_in_out_degrees(&self) -> Vec<Degree> {
        let mut degrees = vec![Degree::default(); self.vertex_count];
        for edges in &self.adjacency {
            for e in edges {
                degrees[e.target].in_degree += 1;
            }
        }
        for (degree, edges) in degrees.iter_mut().zip(&self.adjacency) {
            degree.out_degree = edges.len();
        }
        degrees
    }

    /// True iff every edge `u -> v` of weight `w` has a matching `v -> u` of weight `w`.
    pub fn is_undirected_graph(&self) -> bool {
        let present: FxHashSet<(usize, usize, i64)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e.target, e.weight)))
            .collect();

        present
            .iter()
            .all(|&(from, to, weight)| present.contains(&(to, from, weight)))
    }

    /// Drops every vertex and edge, returning to the zero-vertex graph.
    pub fn clear(&mut self) {
        tracing::debug!(
            vertex_count = self.vertex_count,
            edge_count = self.count_edges(),
            "clearing graph"
        );
        self.adjacency.clear();
        self.vertex_count = 0;
    }

    pub(crate) fn add_undirected_edge(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(Edge::new(1, v));
        self.adjacency[v].push(Edge::new(1, u));
    }
}
