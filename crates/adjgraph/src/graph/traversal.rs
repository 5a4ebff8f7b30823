//! Traversals, cycle detection and connectivity.
//!
//! Depth-first walks use an explicit stack of `(vertex, next edge index)` frames instead of
//! recursion, so deep graphs cannot overflow the call stack. The visitation order is the one
//! the recursive formulation produces: neighbors in adjacency order, backtracking when a
//! vertex's edges are exhausted.

use super::Graph;
use std::collections::VecDeque;

impl Graph {
    /// Vertices reachable from `start`, in depth-first preorder.
    pub fn dfs(&self, start: usize) -> Vec<usize> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let mut visited = vec![false; self.vertex_count];
        let mut path = Vec::new();
        self.dfs_into(start, &mut visited, &mut path);
        tracing::trace!(start, visited = path.len(), "dfs");
        path
    }

    /// Vertices reachable from `start`, in breadth-first order.
    pub fn bfs(&self, start: usize) -> Vec<usize> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let mut visited = vec![false; self.vertex_count];
        let mut path = Vec::new();
        let mut queue = VecDeque::new();

        // Mark on enqueue so a vertex is queued at most once.
        visited[start] = true;
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            path.push(v);
            for e in &self.adjacency[v] {
                if !visited[e.target] {
                    visited[e.target] = true;
                    queue.push_back(e.target);
                }
            }
        }
        tracing::trace!(start, visited = path.len(), "bfs");
        path
    }

    /// Whether the graph contains a directed cycle (self-loops included).
    pub fn has_cycle(&self) -> bool {
        let n = self.vertex_count;
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_stack[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (v, next) = *frame;
                let Some(e) = self.adjacency[v].get(next) else {
                    on_stack[v] = false;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                let w = e.target;
                if on_stack[w] {
                    tracing::trace!(from = v, to = w, "back edge closes a cycle");
                    return true;
                }
                if !visited[w] {
                    visited[w] = true;
                    on_stack[w] = true;
                    stack.push((w, 0));
                }
            }
        }
        false
    }

    /// True iff a depth-first walk from every vertex reaches all vertices.
    ///
    /// This is strong connectivity checked the direct way: one DFS per vertex, so the cost is
    /// O(V * (V + E)) rather than the linear cost of an SCC decomposition.
    pub fn is_connected(&self) -> bool {
        (0..self.vertex_count).all(|v| self.dfs(v).len() == self.vertex_count)
    }

    /// Number of components when edge direction is ignored.
    pub fn count_weakly_connected_components(&self) -> usize {
        let n = self.vertex_count;
        let mut undirected = Graph::with_vertices(n);
        for (from, edges) in self.adjacency.iter().enumerate() {
            for e in edges {
                undirected.add_undirected_edge(from, e.target);
            }
        }

        let mut visited = vec![false; n];
        let mut path = Vec::new();
        let mut count = 0;
        for v in 0..n {
            if !visited[v] {
                count += 1;
                path.clear();
                undirected.dfs_into(v, &mut visited, &mut path);
            }
        }
        tracing::trace!(vertex_count = n, components = count, "counted weak components");
        count
    }

    fn dfs_into(&self, start: usize, visited: &mut [bool], path: &mut Vec<usize>) {
        visited[start] = true;
        path.push(start);
        let mut stack = vec![(start, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            let Some(e) = self.adjacency[v].get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let w = e.target;
            if !visited[w] {
                visited[w] = true;
                path.push(w);
                stack.push((w, 0));
            }
        }
    }
}
