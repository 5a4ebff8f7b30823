use adjgraph::{Degree, DegreeTable, DistanceTable, Edge, Graph, Path};
use serde::Serialize;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "graph.txt";
const DEFAULT_START: usize = 2;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(adjgraph::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<adjgraph::Error> for CliError {
    fn from(value: adjgraph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug)]
struct Args {
    input: String,
    start: usize,
    json: bool,
    pretty: bool,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            start: DEFAULT_START,
            json: false,
            pretty: false,
            verbose: false,
        }
    }
}

fn usage() -> &'static str {
    "adjgraph\n\
\n\
USAGE:\n\
  adjgraph [--start <vertex>] [--json] [--pretty] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - <path> defaults to graph.txt; '-' reads the weight matrix from stdin.\n\
  - The input is a vertex count n followed by an n x n row-major weight matrix (0 = no edge).\n\
  - --start picks the source vertex for traversals and shortest paths (default 2).\n\
  - --json prints a JSON report instead of text; --pretty indents it.\n\
  - Log filtering follows RUST_LOG (default: warn, or debug with --verbose).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut input: Option<String> = None;

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--start" => {
                let Some(start) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.start = start
                    .parse::<usize>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "-" => {
                if input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                input = Some(path.to_string());
            }
        }
    }

    if let Some(input) = input {
        args.input = input;
    }
    Ok(args)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn load(input: &str) -> Result<Graph, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.parse()?);
    }
    Ok(Graph::from_path(input)?)
}

#[derive(Serialize)]
struct Report<'a> {
    vertex_count: usize,
    start: usize,
    adjacency: &'a [Vec<Edge>],
    is_undirected: bool,
    edge_count: usize,
    degrees: Vec<Degree>,
    dfs: Vec<usize>,
    bfs: Vec<usize>,
    has_cycle: bool,
    is_strongly_connected: bool,
    weakly_connected_components: usize,
    dijkstra: Vec<i64>,
    floyd_warshall: Vec<i64>,
    bellman_ford: Vec<i64>,
    prim: i64,
    kruskal: i64,
}

impl<'a> Report<'a> {
    fn build(graph: &'a Graph, start: usize) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            start,
            adjacency: graph.adjacency(),
            is_undirected: graph.is_undirected_graph(),
            edge_count: graph.count_edges(),
            degrees: graph.count_in_out_degrees(),
            dfs: graph.dfs(start),
            bfs: graph.bfs(start),
            has_cycle: graph.has_cycle(),
            is_strongly_connected: graph.is_connected(),
            weakly_connected_components: graph.count_weakly_connected_components(),
            dijkstra: graph.dijkstra(start),
            floyd_warshall: graph.floyd_warshall(start),
            bellman_ford: graph.bellman_ford(start),
            prim: graph.prim(),
            kruskal: graph.kruskal(),
        }
    }

    fn write_text(&self, graph: &Graph, out: &mut impl Write) -> std::io::Result<()> {
        let start = self.start;
        writeln!(out, "Adjacency list (weight, vertex):")?;
        write!(out, "{graph}")?;
        writeln!(out, "Is undirected graph: {}", self.is_undirected)?;
        writeln!(out, "Number of edges: {}", self.edge_count)?;
        write!(out, "{}", DegreeTable(&self.degrees))?;
        writeln!(out, "DFS ({start}): {}", Path(&self.dfs))?;
        writeln!(out, "BFS ({start}): {}", Path(&self.bfs))?;
        writeln!(out, "Has cycle: {}", self.has_cycle)?;
        writeln!(out, "Is strongly connected: {}", self.is_strongly_connected)?;
        writeln!(out, "Number of WCC: {}", self.weakly_connected_components)?;
        writeln!(out, "Shortest path (Dijkstra):")?;
        write!(out, "{}", DistanceTable(&self.dijkstra))?;
        writeln!(out, "Shortest path (Floyd-Warshall):")?;
        write!(out, "{}", DistanceTable(&self.floyd_warshall))?;
        writeln!(out, "Shortest path (Bellman-Ford):")?;
        write!(out, "{}", DistanceTable(&self.bellman_ford))?;
        writeln!(out, "Weight of MST (Prim): {}", self.prim)?;
        writeln!(out, "Weight of MST (Kruskal): {}", self.kruskal)?;
        Ok(())
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let graph = load(&args.input)?;
    if let Err(err) = graph.check_vertex(args.start) {
        tracing::warn!(error = %err, "start vertex out of range; per-vertex results are empty");
    }

    let report = Report::build(&graph, args.start);
    let mut out = std::io::stdout().lock();
    if args.json {
        if args.pretty {
            serde_json::to_writer_pretty(&mut out, &report)?;
        } else {
            serde_json::to_writer(&mut out, &report)?;
        }
        writeln!(out)?;
    } else {
        report.write_text(&graph, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
