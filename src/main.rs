use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use friend_graph_analyzer::cluster::{self, Clique};
use friend_graph_analyzer::config::Config;
use friend_graph_analyzer::data;
use friend_graph_analyzer::graph::algorithms;
use friend_graph_analyzer::graph::SocialGraph;
use friend_graph_analyzer::storage::{self, AnalysisResults, ChainResult, GraphStats};
use friend_graph_analyzer::viz;

#[derive(Parser, Debug)]
#[clap(
    name = "friend-graph-analyzer",
    about = "Shortest chains, affiliation cliques and connectors in a friendship graph"
)]
struct Cli {
    /// Path to a friendship file
    #[clap(long, conflicts_with = "snapshot", required_unless_present = "snapshot")]
    input: Option<PathBuf>,

    /// Path to a graph snapshot written by the `snapshot` command
    #[clap(long)]
    snapshot: Option<PathBuf>,

    /// Leave this person (and their friendships) out of the analysis; repeatable
    #[clap(long)]
    exclude: Vec<String>,

    /// Output directory for reports
    #[clap(long, default_value = "friend_results")]
    output_dir: String,

    /// Skip the GraphML export
    #[clap(long)]
    skip_viz: bool,

    /// Match names exactly instead of lower-casing them
    #[clap(long)]
    case_sensitive: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest chain of friends between two people
    Chain { from: String, to: String },

    /// Answer a file of `from|to` chain queries in parallel
    Chains { queries: PathBuf },

    /// Groups of people with an affiliation, linked through any friends
    Cliques { affiliation: String },

    /// People whose removal disconnects their friends
    Connectors,

    /// Graph statistics
    Stats,

    /// Save the loaded graph as a binary snapshot
    Snapshot { output: PathBuf },

    /// Run the analyses and write JSON results (and GraphML unless skipped)
    Report {
        /// Affiliation to compute cliques for
        #[clap(long)]
        affiliation: Option<String>,

        /// File of `from|to` chain queries to include
        #[clap(long)]
        chains: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(
        args.output_dir.clone(),
        args.threads,
        args.skip_viz,
        !args.case_sensitive,
    );

    let num_threads = config.worker_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let graph = load(&args, &config)?;

    match &args.command {
        Command::Chain { from, to } => {
            let (from, to) = (config.query_key(from), config.query_key(to));
            match algorithms::shortest_chain(&graph, &from, &to) {
                Some(chain) => println!("{}", chain.join(" -> ")),
                None => println!("No chain from {} to {}", from, to),
            }
        }
        Command::Chains { queries } => {
            for result in run_chains(&graph, &config, queries)? {
                match result.chain {
                    Some(chain) => println!("{}", chain.join(" -> ")),
                    None => println!("No chain from {} to {}", result.from, result.to),
                }
            }
        }
        Command::Cliques { affiliation } => {
            let affiliation = config.query_key(affiliation);
            match cluster::cliques(&graph, &affiliation) {
                Some(groups) => {
                    for (i, group) in groups.iter().enumerate() {
                        println!("Clique {}: {}", i + 1, group.join(", "));
                    }
                }
                None => println!("Nobody is affiliated with {}", affiliation),
            }
        }
        Command::Connectors => match cluster::connectors(&graph) {
            Some(names) => println!("{}", names.join(", ")),
            None => println!("No connectors"),
        },
        Command::Stats => {
            let stats = GraphStats::compute(&graph);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Snapshot { output } => {
            storage::save_snapshot(&graph, output)?;
        }
        Command::Report { affiliation, chains } => {
            report(&graph, &config, affiliation.as_deref(), chains.as_deref())?;
        }
    }

    Ok(())
}

/// Load the graph from a friendship file or snapshot, applying exclusions
fn load(args: &Cli, config: &Config) -> Result<SocialGraph> {
    let graph = match (&args.input, &args.snapshot) {
        (Some(input), _) => data::load_graph(input)
            .with_context(|| format!("loading {}", input.display()))?,
        (None, Some(snapshot)) => storage::load_snapshot(snapshot)?,
        (None, None) => bail!("either --input or --snapshot is required"),
    };

    if args.exclude.is_empty() {
        return Ok(graph);
    }

    let excluded: Vec<String> = args.exclude.iter().map(|n| config.query_key(n)).collect();
    log::info!("Excluding {} people", excluded.len());
    Ok(data::preprocessing::exclude_people(&graph, &excluded)?)
}

/// Read `from|to` query lines and answer them in parallel
fn run_chains(graph: &SocialGraph, config: &Config, queries: &Path) -> Result<Vec<ChainResult>> {
    let contents = std::fs::read_to_string(queries)
        .with_context(|| format!("reading {}", queries.display()))?;

    let pairs = data::parse_chain_queries(&contents, config.lowercase_queries)
        .with_context(|| format!("parsing {}", queries.display()))?;

    let chains = algorithms::shortest_chains(graph, &pairs);

    Ok(pairs.into_iter()
        .zip(chains)
        .map(|((from, to), chain)| ChainResult { from, to, chain })
        .collect())
}

fn report(
    graph: &SocialGraph,
    config: &Config,
    affiliation: Option<&str>,
    chains: Option<&Path>,
) -> Result<()> {
    log::info!("Starting friend graph analysis");

    std::fs::create_dir_all(&config.output_dir)?;

    let affiliation = affiliation.map(|a| config.query_key(a));
    let cliques: Option<Vec<Clique>> = affiliation
        .as_deref()
        .and_then(|a| cluster::find_cliques(graph, a));

    let connectors = cluster::connector_indices(graph);
    log::info!("Found {} connectors", connectors.len());

    let chains = match chains {
        Some(path) => run_chains(graph, config, path)?,
        None => Vec::new(),
    };

    let results = AnalysisResults {
        affiliation,
        cliques,
        connectors: Some(connectors),
        chains,
    };

    storage::save_results(&results, graph, &config.output_dir)?;

    if !config.skip_viz {
        let connectors = results.connectors.as_deref().unwrap_or(&[]);
        let path = Path::new(&config.output_dir).join("visualizations").join("friends.graphml");
        viz::write_graphml(graph, connectors, &path)?;
    }

    log::info!("Analysis complete. Results saved to {}", config.output_dir);

    Ok(())
}
