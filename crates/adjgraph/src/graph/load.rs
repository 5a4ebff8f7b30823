//! Weight-matrix loading.
//!
//! The format is whitespace-delimited integers: a vertex count `n` followed by `n * n`
//! weights in row-major order. A zero weight means "no edge"; any other value `m[i][j]` becomes
//! the edge `i -> j`. Tokens after the matrix are ignored.

use super::{Edge, Graph};
use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

impl Graph {
    pub fn from_weight_matrix<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        if let Err(err) = reader.read_to_string(&mut text) {
            tracing::warn!(error = %err, "failed to read weight matrix");
            return Err(err.into());
        }
        text.parse()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "cannot open graph file");
        })?;
        Self::from_weight_matrix(file)
    }
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let graph = parse_weight_matrix(s).inspect_err(|err| {
            tracing::warn!(error = %err, "malformed weight matrix");
        })?;
        tracing::debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.count_edges(),
            "loaded weight matrix"
        );
        Ok(graph)
    }
}

fn parse_weight_matrix(s: &str) -> Result<Graph> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let Some(header) = tokens.first() else {
        return Err(Error::MissingVertexCount);
    };

    let count = parse_token(0, header)?;
    if count < 0 {
        return Err(Error::NegativeVertexCount { count });
    }
    let n = usize::try_from(count).map_err(|_| Error::Truncated {
        expected: usize::MAX,
        found: tokens.len() - 1,
    })?;

    // Reject short input before allocating `n` adjacency lists.
    let expected = n.saturating_mul(n);
    let found = tokens.len() - 1;
    if found < expected {
        return Err(Error::Truncated { expected, found });
    }

    let mut graph = Graph::with_vertices(n);
    for (k, token) in tokens[1..=expected].iter().enumerate() {
        let weight = parse_token(k + 1, token)?;
        if weight != 0 {
            graph.adjacency[k / n].push(Edge::new(weight, k % n));
        }
    }
    Ok(graph)
}

fn parse_token(position: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|_| Error::InvalidToken {
        position,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_weights_are_skipped_and_row_order_is_kept() {
        let g: Graph = "3\n0 2 7\n0 0 0\n-4 0 1\n".parse().unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edges(0), &[Edge::new(2, 1), Edge::new(7, 2)]);
        assert!(g.edges(1).is_empty());
        assert_eq!(g.edges(2), &[Edge::new(-4, 0), Edge::new(1, 2)]);
    }

    #[test]
    fn layout_is_whitespace_agnostic() {
        let a: Graph = "2 0 5 0 0".parse().unwrap();
        let b: Graph = "2\n\n  0\t5\n0\n0\n".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let g: Graph = "1 0 99 junk".parse().unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.count_edges(), 0);
    }

    #[test]
    fn zero_vertex_header_is_an_empty_graph() {
        let g: Graph = "0".parse().unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn empty_source_is_missing_vertex_count() {
        assert!(matches!(
            "  \n".parse::<Graph>(),
            Err(Error::MissingVertexCount)
        ));
    }

    #[test]
    fn short_matrix_is_truncated() {
        assert!(matches!(
            "2 0 5 0".parse::<Graph>(),
            Err(Error::Truncated {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn huge_header_is_rejected_without_allocating() {
        assert!(matches!(
            "4000000000 1 2".parse::<Graph>(),
            Err(Error::Truncated { found: 2, .. })
        ));
    }

    #[test]
    fn non_integer_tokens_are_reported_with_their_position() {
        match "2 0 x 0 0".parse::<Graph>() {
            Err(Error::InvalidToken { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            "two".parse::<Graph>(),
            Err(Error::InvalidToken { position: 0, .. })
        ));
    }

    #[test]
    fn negative_header_is_rejected() {
        assert!(matches!(
            "-1".parse::<Graph>(),
            Err(Error::NegativeVertexCount { count: -1 })
        ));
    }
}
