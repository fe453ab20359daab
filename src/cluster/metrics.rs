//! Clique statistics and metrics

use crate::graph::SocialGraph;
use std::collections::{HashMap, HashSet};

/// Number of central members reported per clique
pub const CENTRAL_MEMBERS: usize = 5;

/// Calculate density (friendships among members / potential friendships)
pub fn calculate_density(
    graph: &SocialGraph,
    members: &[u32],
) -> f32 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singletons have density 1
    }

    // Potential friendships = n * (n - 1) / 2 for an undirected graph
    let potential_edges = n * (n - 1) / 2;

    let member_set: HashSet<u32> = members.iter().copied().collect();

    // Each internal friendship is seen from both ends
    let mut endpoint_hits = 0;
    for &src_idx in members {
        for &dst_idx in graph.friends(src_idx as usize) {
            if member_set.contains(&dst_idx) {
                endpoint_hits += 1;
            }
        }
    }

    (endpoint_hits / 2) as f32 / potential_edges as f32
}

/// Members with the highest degree inside the group, highest first.
///
/// Ties are broken by person index.
pub fn degree_centrality(
    graph: &SocialGraph,
    members: &[u32],
    top_n: usize,
) -> Vec<u32> {
    let member_set: HashSet<u32> = members.iter().copied().collect();

    let degrees: HashMap<u32, usize> = members.iter()
        .map(|&node_idx| {
            let degree = graph.friends(node_idx as usize)
                .iter()
                .filter(|&&friend| member_set.contains(&friend))
                .count();
            (node_idx, degree)
        })
        .collect();

    let mut nodes_by_degree: Vec<(u32, usize)> = degrees.into_iter().collect();
    nodes_by_degree.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    nodes_by_degree.into_iter()
        .take(top_n)
        .map(|(node, _)| node)
        .collect()
}
