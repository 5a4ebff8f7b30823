use adjgraph::{Degree, Edge, Error, Graph, create_graph};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

#[test]
fn with_vertices_has_no_edges() {
    let g = Graph::with_vertices(4);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.count_edges(), 0);
    assert!(g.adjacency().iter().all(Vec::is_empty));
    assert!(g.is_undirected_graph());
}

#[test]
fn directed_two_vertex_matrix() {
    let g: Graph = "2\n0 5\n0 0\n".parse().unwrap();
    assert_eq!(g.count_edges(), 1);
    assert!(!g.is_undirected_graph());
    assert_eq!(g.edges(0), &[Edge::new(5, 1)]);
}

#[test]
fn from_weight_matrix_reads_any_reader() {
    let g = Graph::from_weight_matrix(&b"2 0 3 3 0"[..]).unwrap();
    assert!(g.is_undirected_graph());
    assert_eq!(g.count_edges(), 2);
}

#[test]
fn from_path_loads_the_sample_fixture() {
    let g = Graph::from_path(fixture("graph.txt")).unwrap();
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.count_edges(), 14);
    assert!(g.is_undirected_graph());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Graph::from_path(fixture("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.is_load_error());
}

#[test]
fn create_graph_hands_back_an_empty_graph_and_the_error() {
    let (g, err) = create_graph(fixture("truncated.txt"));
    assert!(g.is_empty());
    assert!(matches!(
        err,
        Some(Error::Truncated {
            expected: 9,
            found: 5
        })
    ));

    let (g, err) = create_graph(fixture("graph.txt"));
    assert!(err.is_none());
    assert_eq!(g.vertex_count(), 5);
}

#[test]
fn from_edges_keeps_insertion_order_and_duplicates() {
    let g = Graph::from_edges(3, [(0, 2, 1), (0, 1, 1), (0, 2, 1)]).unwrap();
    assert_eq!(
        g.edges(0),
        &[Edge::new(1, 2), Edge::new(1, 1), Edge::new(1, 2)]
    );
    assert_eq!(g.count_edges(), 3);
}

#[test]
fn from_edges_rejects_out_of_range_endpoints() {
    let err = Graph::from_edges(2, [(0, 1, 1), (1, 2, 1)]).unwrap_err();
    assert!(matches!(
        err,
        Error::VertexOutOfRange {
            vertex: 2,
            vertex_count: 2
        }
    ));
    assert!(!err.is_load_error());
}

#[test]
fn check_vertex_bounds() {
    let g = Graph::with_vertices(3);
    assert!(g.check_vertex(2).is_ok());
    assert!(g.check_vertex(3).is_err());
    assert!(g.edges(3).is_empty());
}

#[test]
fn degrees_sum_to_edge_count() {
    let g = Graph::from_path(fixture("directed.txt")).unwrap();
    let degrees = g.count_in_out_degrees();
    assert_eq!(
        degrees,
        vec![
            Degree {
                in_degree: 0,
                out_degree: 1
            },
            Degree {
                in_degree: 1,
                out_degree: 1
            },
            Degree {
                in_degree: 2,
                out_degree: 0
            },
            Degree {
                in_degree: 0,
                out_degree: 1
            },
        ]
    );
    let ins: usize = degrees.iter().map(|d| d.in_degree).sum();
    let outs: usize = degrees.iter().map(|d| d.out_degree).sum();
    assert_eq!(ins, g.count_edges());
    assert_eq!(outs, g.count_edges());
}

#[test]
fn self_loops_count_as_undirected() {
    let g = Graph::from_edges(2, [(0, 0, 4)]).unwrap();
    assert!(g.is_undirected_graph());
    assert_eq!(
        g.count_in_out_degrees()[0],
        Degree {
            in_degree: 1,
            out_degree: 1
        }
    );
}

#[test]
fn clear_returns_to_the_zero_vertex_graph() {
    let mut g = Graph::from_path(fixture("graph.txt")).unwrap();
    g.clear();
    assert_eq!(g, Graph::default());
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.count_edges(), 0);
    assert!(g.dfs(0).is_empty());
}
