//! CLI entry point for the `hamiltonian` command-line tool.

use std::process;

use clap::{Parser, Subcommand};
use log::{warn, LevelFilter};

use hamiltonian::cs::graph::{generators, Graph, HamiltonianPath};
use hamiltonian::{Error, Result};

/// Complete graphs above this size take noticeably long to search.
const COMPLETE_GRAPH_WARNING_THRESHOLD: usize = 8;
/// Largest graph for which every path is enumerated after a successful search.
const ENUMERATION_THRESHOLD: usize = 5;
const ALTERNATIVES_SHOWN: usize = 5;

#[derive(Parser)]
#[command(
    name = "hamiltonian",
    about = "Find Hamiltonian paths by exhaustive backtracking"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the built-in sample graphs and K4
    Examples,
    /// Search the undirected complete graph on N vertices
    Complete {
        /// Number of vertices
        #[arg(long)]
        vertices: usize,
    },
    /// Search a graph described on the command line
    Search {
        /// Number of vertices, labelled 0..N-1
        #[arg(long)]
        vertices: usize,
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
        /// Only consider paths starting at this vertex
        #[arg(long)]
        start: Option<usize>,
        /// Edge as "U,V"; repeat for more edges
        #[arg(long = "edge", value_parser = parse_edge)]
        edges: Vec<(usize, usize)>,
    },
}

fn parse_edge(s: &str) -> std::result::Result<(usize, usize), String> {
    let (u, v) = s
        .split_once(',')
        .ok_or_else(|| format!("expected U,V but got '{}'", s))?;
    let u = u
        .trim()
        .parse()
        .map_err(|e| format!("invalid origin '{}': {}", u, e))?;
    let v = v
        .trim()
        .parse()
        .map_err(|e| format!("invalid destination '{}': {}", v, e))?;
    Ok((u, v))
}

fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn search_and_report(graph: &Graph, name: &str, start: Option<usize>) -> Result<()> {
    println!("--- {} ---", name);
    print!("{}", graph);

    let search = HamiltonianPath::new(graph);
    let found = match search.find_path(start)? {
        Some(path) => path,
        None => {
            println!("No Hamiltonian path found");
            println!();
            return Ok(());
        }
    };
    println!("Hamiltonian path found: {}", format_path(&found));

    if graph.vertex_count() <= ENUMERATION_THRESHOLD {
        let all = search.find_all_paths();
        if all.len() > 1 {
            println!("  Total Hamiltonian paths: {}", all.len());
            println!("  Other paths:");
            let others: Vec<&Vec<usize>> = all.iter().filter(|p| **p != found).collect();
            for (i, path) in others.iter().take(ALTERNATIVES_SHOWN).enumerate() {
                println!("    {}: {}", i + 1, format_path(path));
            }
            if others.len() > ALTERNATIVES_SHOWN {
                println!("    ... and {} more", others.len() - ALTERNATIVES_SHOWN);
            }
        }
    }
    println!();
    Ok(())
}

fn cmd_examples() -> Result<()> {
    search_and_report(
        &generators::sample_undirected(),
        "Example 1: undirected graph",
        None,
    )?;
    search_and_report(
        &generators::sample_directed(),
        "Example 2: directed graph",
        None,
    )?;
    search_and_report(
        &generators::sample_disconnected(),
        "Example 3: disconnected graph",
        None,
    )?;
    search_and_report(&generators::complete(4), "Complete graph K4", None)
}

fn cmd_complete(vertices: usize) -> Result<()> {
    if vertices == 0 {
        return Err(Error::invalid_input("vertex count must be positive"));
    }
    if vertices > COMPLETE_GRAPH_WARNING_THRESHOLD {
        warn!(
            "complete graphs with more than {} vertices may take a long time to search",
            COMPLETE_GRAPH_WARNING_THRESHOLD
        );
    }
    let name = format!("Complete graph K{}", vertices);
    search_and_report(&generators::complete(vertices), &name, None)
}

fn cmd_search(
    vertices: usize,
    directed: bool,
    start: Option<usize>,
    edges: &[(usize, usize)],
) -> Result<()> {
    if vertices == 0 {
        return Err(Error::invalid_input("vertex count must be positive"));
    }
    let graph = Graph::from_edges(vertices, directed, edges)?;
    search_and_report(&graph, "Custom graph", start)
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn);
    logger.parse_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Examples => cmd_examples(),
        Commands::Complete { vertices } => cmd_complete(vertices),
        Commands::Search {
            vertices,
            directed,
            start,
            edges,
        } => cmd_search(vertices, directed, start, &edges),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e {
            Error::InvalidVertex { .. } => 2,
            Error::InvalidInput(_) => 3,
        };
        process::exit(code);
    }
}
