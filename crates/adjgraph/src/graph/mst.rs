//! Minimum spanning tree weight.
//!
//! Both algorithms require an undirected graph. On a graph that fails
//! [`Graph::is_undirected_graph`] they return `0` instead of failing, which a caller cannot
//! tell apart from a legitimately zero-weight tree; check undirectedness first when that
//! matters.
//!
//! Totals saturate at the bounds of `i64` rather than wrapping.

use super::Graph;
use super::dsu::Dsu;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

impl Graph {
    /// Prim's algorithm grown from vertex 0. Weights must be non-negative; this is not checked.
    ///
    /// Only the component containing vertex 0 is spanned.
    pub fn prim(&self) -> i64 {
        if !self.is_undirected_graph() {
            tracing::warn!("prim: graph is not undirected, returning 0");
            return 0;
        }
        if self.is_empty() {
            return 0;
        }

        let mut cost = 0i64;
        let mut included = vec![false; self.vertex_count];
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0i64, 0usize)));

        while let Some(Reverse((weight, v))) = queue.pop() {
            if included[v] {
                continue;
            }
            included[v] = true;
            cost = cost.saturating_add(weight);

            for e in &self.adjacency[v] {
                if !included[e.target] {
                    queue.push(Reverse((e.weight, e.target)));
                }
            }
        }
        cost
    }

    /// Kruskal's algorithm; spans every component (a minimum spanning forest).
    pub fn kruskal(&self) -> i64 {
        if !self.is_undirected_graph() {
            tracing::warn!("kruskal: graph is not undirected, returning 0");
            return 0;
        }

        // Both directions of each undirected edge are listed; the second one is a no-op union.
        let mut edge_list: Vec<(i64, usize, usize)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().map(move |e| (e.weight, u, e.target)))
            .collect();
        edge_list.sort_unstable();

        let mut dsu = Dsu::new(self.vertex_count);
        let mut cost = 0i64;
        for (weight, u, v) in edge_list {
            if dsu.union(u, v) {
                cost = cost.saturating_add(weight);
            }
        }
        cost
    }
}
