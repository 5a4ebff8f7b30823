//! Single-source shortest paths.
//!
//! All three algorithms return one distance per vertex, with [`UNREACHABLE`] for vertices the
//! start cannot reach. A relaxation is skipped whenever its base distance is the sentinel.
//! Dijkstra and Floyd-Warshall saturate the remaining additions; Bellman-Ford works in exact
//! `i128` arithmetic and clamps its finished distances back into `i64`.

use super::Graph;
use crate::{NEGATIVE_CYCLE, UNREACHABLE};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

impl Graph {
    /// Dijkstra's algorithm. Weights must be non-negative; this is not checked.
    ///
    /// Every vertex is settled at most once, so negative weights give wrong distances but the
    /// call still terminates.
    pub fn dijkstra(&self, start: usize) -> Vec<i64> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let mut distance = vec![UNREACHABLE; self.vertex_count];
        let mut settled = vec![false; self.vertex_count];
        let mut queue = BinaryHeap::new();

        distance[start] = 0;
        queue.push(Reverse((0i64, start)));

        while let Some(Reverse((d, v))) = queue.pop() {
            // No decrease-key: stale duplicates are skipped when popped.
            if settled[v] || d > distance[v] || distance[v] == UNREACHABLE {
                continue;
            }
            settled[v] = true;
            for e in &self.adjacency[v] {
                let candidate = distance[v].saturating_add(e.weight);
                if candidate < distance[e.target] {
                    distance[e.target] = candidate;
                    queue.push(Reverse((candidate, e.target)));
                }
            }
        }
        distance
    }

    /// The `start` row of [`Graph::all_pairs_shortest_paths`].
    pub fn floyd_warshall(&self, start: usize) -> Vec<i64> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        self.all_pairs_shortest_paths().swap_remove(start)
    }

    /// Floyd-Warshall over the whole graph; `result[i][j]` is the distance from `i` to `j`.
    ///
    /// Parallel edges seed the direct distance with the lightest of them.
    pub fn all_pairs_shortest_paths(&self) -> Vec<Vec<i64>> {
        let n = self.vertex_count;
        let mut distance = vec![vec![UNREACHABLE; n]; n];

        for (i, edges) in self.adjacency.iter().enumerate() {
            for e in edges {
                let seed = &mut distance[i][e.target];
                *seed = (*seed).min(e.weight);
            }
            distance[i][i] = 0;
        }

        for k in 0..n {
            for i in 0..n {
                let via = distance[i][k];
                if via == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let tail = distance[k][j];
                    if tail == UNREACHABLE {
                        continue;
                    }
                    let candidate = via.saturating_add(tail);
                    if candidate < distance[i][j] {
                        distance[i][j] = candidate;
                    }
                }
            }
        }
        distance
    }

    /// Bellman-Ford. Negative weights are allowed.
    ///
    /// If an edge can still be relaxed after `vertex_count - 1` passes, a negative cycle is
    /// reachable and every entry of the result is [`NEGATIVE_CYCLE`]. Distances outside the
    /// `i64` range are clamped to `i64::MIN` or [`UNREACHABLE`].
    pub fn bellman_ford(&self, start: usize) -> Vec<i64> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        // Every finite distance is a walk of at most `n - 1` edges, so `i128` cannot overflow.
        const UNSEEN: i128 = i128::MAX;
        let n = self.vertex_count;
        let mut distance = vec![UNSEEN; n];
        distance[start] = 0;

        for _ in 1..n {
            for (v, edges) in self.adjacency.iter().enumerate() {
                for e in edges {
                    if distance[v] == UNSEEN {
                        continue;
                    }
                    let candidate = distance[v] + i128::from(e.weight);
                    if candidate < distance[e.target] {
                        distance[e.target] = candidate;
                    }
                }
            }
        }

        let relaxable = self.adjacency.iter().enumerate().any(|(v, edges)| {
            distance[v] != UNSEEN
                && edges
                    .iter()
                    .any(|e| distance[v] + i128::from(e.weight) < distance[e.target])
        });
        if relaxable {
            tracing::warn!(start, "negative cycle detected");
            return vec![NEGATIVE_CYCLE; n];
        }

        distance
            .into_iter()
            .map(|d| match i64::try_from(d) {
                Ok(d) => d,
                Err(_) if d < 0 => i64::MIN,
                Err(_) => UNREACHABLE,
            })
            .collect()
    }
}
