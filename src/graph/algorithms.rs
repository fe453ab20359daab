//! Graph algorithms for analysis

use crate::graph::SocialGraph;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Find the shortest chain of acquaintances from `from` to `to`.
///
/// The chain starts with `from`, ends with `to`, and every consecutive pair
/// of names are friends. Returns `None` if either name is unknown or the two
/// people are in different components.
pub fn shortest_chain(graph: &SocialGraph, from: &str, to: &str) -> Option<Vec<String>> {
    let source = graph.index_of(from)?;
    let target = graph.index_of(to)?;

    // predecessor[v] is the vertex v was discovered from; the source is its own
    let mut predecessor: Vec<Option<u32>> = vec![None; graph.node_count];
    let mut queue = VecDeque::new();

    predecessor[source] = Some(source as u32);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            break;
        }
        for &friend in graph.friends(current) {
            let friend_idx = friend as usize;
            if predecessor[friend_idx].is_none() {
                predecessor[friend_idx] = Some(current as u32);
                queue.push_back(friend_idx);
            }
        }
    }

    predecessor[target]?;

    let mut chain = Vec::new();
    let mut node = target;
    while node != source {
        chain.push(graph.name(node).to_string());
        node = predecessor[node]? as usize;
    }
    chain.push(graph.name(source).to_string());
    chain.reverse();

    Some(chain)
}

/// Answer many chain queries in parallel over one shared graph.
///
/// Results keep the order of `pairs`.
pub fn shortest_chains(graph: &SocialGraph, pairs: &[(String, String)]) -> Vec<Option<Vec<String>>> {
    log::info!("Answering {} chain queries", pairs.len());

    pairs.par_iter()
        .map(|(from, to)| shortest_chain(graph, from, to))
        .collect()
}

/// Find connected components of the full graph, seeded in index order.
///
/// Members of each component are listed in breadth-first order.
pub fn connected_components(graph: &SocialGraph) -> Vec<Vec<u32>> {
    let mut visited = vec![false; graph.node_count];
    let mut components = Vec::new();

    for seed in 0..graph.node_count {
        if visited[seed] {
            continue;
        }
        components.push(bfs_from(graph, seed, &mut visited));
    }

    components
}

pub fn component_count(graph: &SocialGraph) -> usize {
    connected_components(graph).len()
}

/// Breadth-first traversal from `seed`, skipping and updating `visited`.
///
/// Returns the reached vertices in traversal order, `seed` first.
pub(crate) fn bfs_from(graph: &SocialGraph, seed: usize, visited: &mut [bool]) -> Vec<u32> {
    let mut reached = Vec::new();
    let mut queue = VecDeque::new();

    visited[seed] = true;
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        reached.push(current as u32);
        for &friend in graph.friends(current) {
            let friend_idx = friend as usize;
            if !visited[friend_idx] {
                visited[friend_idx] = true;
                queue.push_back(friend_idx);
            }
        }
    }

    reached
}
