//! Affiliation clique detection

use crate::cluster::Clique;
use crate::cluster::metrics::{calculate_density, degree_centrality, CENTRAL_MEMBERS};
use crate::graph::SocialGraph;
use crate::graph::algorithms::bfs_from;

/// Group the people with `affiliation` by connected component.
///
/// Traversal follows every friendship, so two members end up in the same
/// group when any chain of friends links them, whatever the affiliations of
/// the people in between. Only matching people are reported. Returns `None`
/// if nobody has the affiliation.
pub fn cliques(graph: &SocialGraph, affiliation: &str) -> Option<Vec<Vec<String>>> {
    let groups = affiliation_groups(graph, affiliation);
    if groups.is_empty() {
        return None;
    }

    Some(
        groups.into_iter()
            .map(|members| {
                members.into_iter()
                    .map(|idx| graph.name(idx as usize).to_string())
                    .collect()
            })
            .collect(),
    )
}

/// Index-based cliques with metrics, largest first
pub fn find_cliques(graph: &SocialGraph, affiliation: &str) -> Option<Vec<Clique>> {
    log::info!("Finding cliques for affiliation `{}`", affiliation);

    let mut groups = affiliation_groups(graph, affiliation);
    if groups.is_empty() {
        log::info!("Nobody is affiliated with `{}`", affiliation);
        return None;
    }

    // Stable: equal-sized groups keep discovery order
    groups.sort_by(|a, b| b.len().cmp(&a.len()));

    let cliques: Vec<Clique> = groups.into_iter()
        .enumerate()
        .map(|(id, members)| Clique {
            id: id as u32,
            size: members.len(),
            density: calculate_density(graph, &members),
            central_members: degree_centrality(graph, &members, CENTRAL_MEMBERS),
            members,
        })
        .collect();

    log::info!("Found {} cliques for `{}`", cliques.len(), affiliation);

    Some(cliques)
}

fn affiliation_groups(graph: &SocialGraph, affiliation: &str) -> Vec<Vec<u32>> {
    let is_member: Vec<bool> = graph.people.iter()
        .map(|p| p.is_affiliated_with(affiliation))
        .collect();

    // Non-members never seed a group but are still traversed through,
    // so reachability is tracked separately from seeding.
    let mut reached = vec![false; graph.node_count];
    let mut groups = Vec::new();

    for seed in 0..graph.node_count {
        if !is_member[seed] || reached[seed] {
            continue;
        }

        let members: Vec<u32> = bfs_from(graph, seed, &mut reached)
            .into_iter()
            .filter(|&idx| is_member[idx as usize])
            .collect();

        if !members.is_empty() {
            groups.push(members);
        }
    }

    groups
}
