//! Text rendering for graphs and algorithm results.
//!
//! Layouts follow the plain-text reports of the demo driver: two-space separators, one vertex
//! per line, and distances printed verbatim (sentinels included).

use crate::graph::{Degree, Edge, Graph};
use std::fmt;

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.weight, self.target)
    }
}

/// One line per vertex: `i -> (weight, target)  (weight, target)  `.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, edges) in self.adjacency().iter().enumerate() {
            write!(f, "{v} -> ")?;
            for e in edges {
                write!(f, "{e}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A vertex sequence such as a traversal order.
#[derive(Debug, Clone, Copy)]
pub struct Path<'a>(pub &'a [usize]);

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.0 {
            write!(f, "{v}  ")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DegreeTable<'a>(pub &'a [Degree]);

impl fmt::Display for DegreeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertex  (In, Out):")?;
        for (v, d) in self.0.iter().enumerate() {
            writeln!(f, "  {v}     ({}, {})", d.in_degree, d.out_degree)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DistanceTable<'a>(pub &'a [i64]);

impl fmt::Display for DistanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertex  Distance from source:")?;
        for (v, d) in self.0.iter().enumerate() {
            writeln!(f, "  {v}     {d}")?;
        }
        Ok(())
    }
}
