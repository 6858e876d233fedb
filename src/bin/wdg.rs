//! CLI entry point for the `wdg` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use weighted_digraph::cli::commands;
use weighted_digraph::graph::Traversal;
use weighted_digraph::types::{GraphError, VertexId};

#[derive(Parser)]
#[command(
    name = "wdg",
    about = "Weighted directed graph queries: adjacency, matrix, BFS/DFS paths",
    allow_negative_numbers = true
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Keep outgoing edges in input order instead of sorting by target
    #[arg(long)]
    insertion_order: bool,

    /// Number of vertices; vertices are numbered 1..=N
    #[arg(long, short = 'n')]
    vertices: i64,

    /// Edge as START,END[,WEIGHT]; repeat for each edge
    #[arg(long = "edge", short = 'e', allow_hyphen_values = true)]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex/edge counts and outgoing edge lists
    Info,
    /// Check whether an edge START -> END exists
    Adjacent {
        /// Start vertex
        start: VertexId,
        /// End vertex
        end: VertexId,
    },
    /// Print the dense adjacency matrix
    Matrix,
    /// Breadth-first path from START to END
    Bfs {
        /// Start vertex
        start: VertexId,
        /// End vertex
        end: VertexId,
    },
    /// Depth-first path from START to END
    Dfs {
        /// Start vertex
        start: VertexId,
        /// End vertex
        end: VertexId,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = commands::load_graph(cli.vertices, &cli.edges, cli.insertion_order).and_then(
        |graph| match cli.command {
            Commands::Info => commands::cmd_info(&graph, json),
            Commands::Adjacent { start, end } => {
                commands::cmd_adjacent(&graph, start, end, json)
            }
            Commands::Matrix => commands::cmd_matrix(&graph, json),
            Commands::Bfs { start, end } => {
                commands::cmd_path(&graph, Traversal::Bfs, start, end, json)
            }
            Commands::Dfs { start, end } => {
                commands::cmd_path(&graph, Traversal::Dfs, start, end, json)
            }
        },
    );

    // Exit code 2 is left to clap for usage errors.
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::NegativeVertexCount(_) => 5,
            GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::VertexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
