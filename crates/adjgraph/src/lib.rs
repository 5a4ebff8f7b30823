#![forbid(unsafe_code)]

//! Weighted adjacency-list graph with structural queries, traversals, shortest paths and
//! minimum spanning trees.
//!
//! A [`Graph`] is built once (from a dense weight-matrix text source, from an explicit edge
//! list, or as an edgeless graph of a given size) and is read-only afterwards. Every
//! algorithm allocates its own working state, so concurrent read-only calls against the same
//! graph are safe.
//!
//! Soft failures are reported through sentinel results rather than errors:
//!
//! - a start vertex `>= vertex_count` yields an empty result,
//! - [`Graph::bellman_ford`] yields a vector filled with [`NEGATIVE_CYCLE`] when a negative
//!   cycle is reachable,
//! - [`Graph::prim`] and [`Graph::kruskal`] yield `0` for graphs that are not undirected.

pub mod display;
pub mod error;
pub mod graph;

pub use display::{DegreeTable, DistanceTable, Path};
pub use error::{Error, Result};
pub use graph::{Degree, Edge, Graph};

/// Distance reported for vertices that cannot be reached from the start vertex.
pub const UNREACHABLE: i64 = i64::MAX;

/// Every entry of a Bellman-Ford result is set to this value when a negative cycle exists.
pub const NEGATIVE_CYCLE: i64 = -1;

/// Loads a graph from a weight-matrix file, always handing back a usable graph.
///
/// On failure the graph is the zero-vertex graph and the error is returned next to it, so a
/// driver can keep going while still reporting the problem.
pub fn create_graph(path: impl AsRef<std::path::Path>) -> (Graph, Option<Error>) {
    match Graph::from_path(path) {
        Ok(graph) => (graph, None),
        Err(err) => (Graph::default(), Some(err)),
    }
}
