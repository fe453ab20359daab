//! Results persistence module

use anyhow::{Context, Result};
use crate::cluster::Clique;
use crate::graph::SocialGraph;
use crate::graph::algorithms::connected_components;
use serde::{Serialize, Deserialize};
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Outcome of one chain query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainResult {
    pub from: String,
    pub to: String,

    /// `None` when no chain exists
    pub chain: Option<Vec<String>>,
}

/// Everything a report run computed
#[derive(Debug, Clone, Default)]
pub struct AnalysisResults {
    /// Affiliation the cliques were computed for
    pub affiliation: Option<String>,

    pub cliques: Option<Vec<Clique>>,

    /// Connector person indices
    pub connectors: Option<Vec<u32>>,

    pub chains: Vec<ChainResult>,
}

/// Summary statistics of a social graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub largest_component: usize,
    pub isolated_count: usize,
    pub affiliation_count: usize,
    pub mean_degree: f64,
    pub degree_std_dev: f64,
    pub max_degree: usize,
    pub memory_bytes: usize,
}

impl GraphStats {
    pub fn compute(graph: &SocialGraph) -> Self {
        let components = connected_components(graph);
        let degrees: Vec<f64> = (0..graph.node_count)
            .map(|node| graph.degree(node) as f64)
            .collect();

        let (mean_degree, degree_std_dev) = match degrees.len() {
            0 => (0.0, 0.0),
            1 => (degrees[0], 0.0),
            _ => (
                statrs::statistics::Statistics::mean(&degrees),
                statrs::statistics::Statistics::std_dev(&degrees),
            ),
        };

        Self {
            node_count: graph.node_count,
            edge_count: graph.edge_count(),
            component_count: components.len(),
            largest_component: components.iter().map(|c| c.len()).max().unwrap_or(0),
            isolated_count: (0..graph.node_count).filter(|&n| graph.degree(n) == 0).count(),
            affiliation_count: graph.affiliations().len(),
            mean_degree,
            degree_std_dev,
            max_degree: (0..graph.node_count).map(|n| graph.degree(n)).max().unwrap_or(0),
            memory_bytes: graph.memory_usage(),
        }
    }
}

/// Save analysis results to the specified directory
pub fn save_results(
    results: &AnalysisResults,
    graph: &SocialGraph,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving results to {}", output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(results, graph, output_dir)?;

    if let Some(affiliation) = &results.affiliation {
        save_cliques(affiliation, results.cliques.as_deref(), graph, output_dir)?;
    }

    if let Some(connectors) = &results.connectors {
        save_connectors(connectors, graph, output_dir)?;
    }

    if !results.chains.is_empty() {
        write_json(&Path::new(output_dir).join("chains.json"), &json!({
            "chains": results.chains,
        }))?;
    }

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(
    results: &AnalysisResults,
    graph: &SocialGraph,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let cliques = results.cliques.as_deref().unwrap_or(&[]);
    let summary = json!({
        "graph_stats": GraphStats::compute(graph),
        "clique_stats": {
            "affiliation": results.affiliation,
            "clique_count": cliques.len(),
            "total_members": cliques.iter().map(|c| c.size).sum::<usize>(),
            "largest_clique_size": cliques.first().map_or(0, |c| c.size),
        },
        "connector_count": results.connectors.as_ref().map_or(0, |c| c.len()),
        "chain_queries": results.chains.len(),
    });

    write_json(&Path::new(output_dir).join("summary.json"), &summary)
}

/// Save clique membership with names resolved
fn save_cliques(
    affiliation: &str,
    cliques: Option<&[Clique]>,
    graph: &SocialGraph,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving clique information");

    let names = |members: &[u32]| -> Vec<String> {
        members.iter().map(|&id| graph.name(id as usize).to_string()).collect()
    };

    let cliques_json: Vec<_> = cliques.unwrap_or(&[]).iter()
        .map(|c| json!({
            "id": c.id,
            "size": c.size,
            "density": c.density,
            "central_members": names(&c.central_members),
            "members": names(&c.members),
        }))
        .collect();

    write_json(&Path::new(output_dir).join("cliques.json"), &json!({
        "affiliation": affiliation,
        "cliques": cliques_json,
    }))
}

fn save_connectors(connectors: &[u32], graph: &SocialGraph, output_dir: &str) -> Result<()> {
    log::info!("Saving {} connectors", connectors.len());

    let connectors_json: Vec<_> = connectors.iter()
        .map(|&id| {
            let person = graph.person(id as usize);
            json!({
                "name": person.name,
                "affiliation": person.affiliation,
                "friends": graph.degree(id as usize),
            })
        })
        .collect();

    write_json(&Path::new(output_dir).join("connectors.json"), &json!({
        "connectors": connectors_json,
    }))
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

/// Write a binary snapshot of the graph
pub fn save_snapshot(graph: &SocialGraph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("Writing graph snapshot to {}", path.display());

    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    bincode::serialize_into(BufWriter::new(file), graph)?;

    Ok(())
}

/// Read a graph snapshot written by [`save_snapshot`]
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<SocialGraph> {
    let path = path.as_ref();
    log::info!("Reading graph snapshot from {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let graph: SocialGraph = bincode::deserialize_from(BufReader::new(file))?;

    log::info!(
        "Loaded snapshot with {} people and {} friendships",
        graph.node_count,
        graph.edge_count()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{connector_indices, find_cliques};
    use crate::graph::fixtures;

    #[test]
    fn stats_of_path_with_isolated_person() {
        let graph = fixtures::graph(
            &[("a", Some("x")), ("b", None), ("c", Some("y")), ("d", None)],
            &[("a", "b"), ("b", "c")],
        );
        let stats = GraphStats::compute(&graph);
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.component_count, 2);
        assert_eq!(stats.largest_component, 3);
        assert_eq!(stats.isolated_count, 1);
        assert_eq!(stats.affiliation_count, 2);
        assert_eq!(stats.max_degree, 2);
        assert!((stats.mean_degree - 1.0).abs() < 1e-9);
        assert!(stats.degree_std_dev > 0.0);
        assert_eq!(stats.memory_bytes, graph.memory_usage());
        assert!(stats.memory_bytes >= graph.edges.len() * std::mem::size_of::<u32>());
    }

    #[test]
    fn stats_of_empty_graph() {
        let stats = GraphStats::compute(&fixtures::graph(&[], &[]));
        assert_eq!(stats.component_count, 0);
        assert_eq!(stats.mean_degree, 0.0);
    }

    #[test]
    fn saves_report_files() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().to_str().unwrap();
        let graph = fixtures::path();

        let results = AnalysisResults {
            affiliation: Some("x".to_string()),
            cliques: find_cliques(&graph, "x"),
            connectors: Some(connector_indices(&graph)),
            chains: vec![ChainResult {
                from: "a".to_string(),
                to: "d".to_string(),
                chain: crate::shortest_chain(&graph, "a", "d"),
            }],
        };
        save_results(&results, &graph, output_dir).unwrap();

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["graph_stats"]["node_count"], 4);
        assert_eq!(summary["graph_stats"]["memory_bytes"], graph.memory_usage());
        assert_eq!(summary["clique_stats"]["clique_count"], 1);
        assert_eq!(summary["connector_count"], 2);

        let cliques: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("cliques.json")).unwrap()).unwrap();
        assert_eq!(cliques["cliques"][0]["members"], json!(["a", "b", "d"]));

        let connectors: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("connectors.json")).unwrap()).unwrap();
        assert_eq!(connectors["connectors"][0]["name"], "b");

        let chains: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("chains.json")).unwrap()).unwrap();
        assert_eq!(chains["chains"][0]["chain"], json!(["a", "b", "c", "d"]));
    }

    #[test]
    fn snapshot_round_trip_preserves_queries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.bin");
        let graph = fixtures::path();

        save_snapshot(&graph, &path).unwrap();
        let restored = load_snapshot(&path).unwrap();

        assert_eq!(restored.people, graph.people);
        assert_eq!(restored.edges, graph.edges);
        assert_eq!(
            crate::shortest_chain(&restored, "a", "d"),
            crate::shortest_chain(&graph, "a", "d")
        );
    }
}
