//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_walk::cli::commands::{self, WalkKind};
use graph_walk::{EdgeListFormat, GraphError};

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "gwalk: traverse edge-list graphs and detect cycles"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Treat the edge list as an undirected graph with string vertices
    #[arg(long)]
    undirected: bool,

    /// Input format: "text", "json", or "auto" to pick by file extension
    #[arg(long, default_value = "auto")]
    input: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts and the graph itself
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List every edge
    Edges {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Check whether a vertex sequence is a valid path
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertices in path order
        vertices: Vec<String>,
    },
    /// Depth-first walk
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Stop once this vertex is reached
        #[arg(long)]
        end: Option<String>,
    },
    /// Breadth-first walk
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Stop once this vertex is reached
        #[arg(long)]
        end: Option<String>,
    },
    /// Report whether the graph contains a cycle
    Cycle {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Count connected components (undirected only)
    Components {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Shortest distances from a source vertex (directed only)
    Shortest {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex
        source: String,
    },
}

impl Commands {
    fn file(&self) -> &PathBuf {
        match self {
            Self::Info { file }
            | Self::Edges { file }
            | Self::Path { file, .. }
            | Self::Dfs { file, .. }
            | Self::Bfs { file, .. }
            | Self::Cycle { file }
            | Self::Components { file }
            | Self::Shortest { file, .. } => file,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let file = cli.command.file();
    let input = match cli.input.as_str() {
        "text" => EdgeListFormat::Text,
        "json" => EdgeListFormat::Json,
        "auto" => EdgeListFormat::from_path(file),
        other => {
            eprintln!("Invalid input format: {}", other);
            process::exit(3);
        }
    };

    let result = commands::load_graph(file, cli.undirected, input).and_then(|graph| {
        let mut out = std::io::stdout().lock();
        match &cli.command {
            Commands::Info { .. } => commands::cmd_info(&mut out, &graph, json),
            Commands::Edges { .. } => commands::cmd_edges(&mut out, &graph, json),
            Commands::Path { vertices, .. } => commands::cmd_path(&mut out, &graph, vertices, json),
            Commands::Dfs { start, end, .. } => commands::cmd_walk(
                &mut out,
                &graph,
                WalkKind::Dfs,
                start,
                end.as_deref(),
                json,
            ),
            Commands::Bfs { start, end, .. } => commands::cmd_walk(
                &mut out,
                &graph,
                WalkKind::Bfs,
                start,
                end.as_deref(),
                json,
            ),
            Commands::Cycle { .. } => commands::cmd_cycle(&mut out, &graph, json),
            Commands::Components { .. } => commands::cmd_components(&mut out, &graph, json),
            Commands::Shortest { source, .. } => {
                commands::cmd_shortest(&mut out, &graph, source, json)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedLine { .. }
            | GraphError::Json(_)
            | GraphError::VertexLimit { .. } => 2,
            GraphError::InvalidVertex(_) | GraphError::Unsupported(_) => 3,
        };
        process::exit(code);
    }
}
