//! Data preprocessing module for graph analysis

use crate::error::{GraphError, GraphResult};
use crate::graph::SocialGraph;
use std::collections::HashMap;

/// Copy the graph without the given people and their friendships.
///
/// Remaining people keep their relative order and are re-indexed densely.
pub fn exclude_people(graph: &SocialGraph, names: &[String]) -> GraphResult<SocialGraph> {
    let mut keep = vec![true; graph.node_count];
    for name in names {
        let idx = graph
            .index_of(name)
            .ok_or_else(|| GraphError::UnknownPerson(name.clone()))?;
        keep[idx] = false;
    }

    Ok(filter_people(graph, &keep))
}

/// Copy the graph keeping only people whose `keep` flag is set
pub fn filter_people(graph: &SocialGraph, keep: &[bool]) -> SocialGraph {
    let kept_count = keep.iter().filter(|&&k| k).count();

    // Create mapping from original to filtered indices
    let mut orig_to_filtered = vec![u32::MAX; graph.node_count];
    let mut filtered_idx = 0;
    for node in 0..graph.node_count {
        if keep[node] {
            orig_to_filtered[node] = filtered_idx;
            filtered_idx += 1;
        }
    }

    let mut filtered = SocialGraph::with_capacity(kept_count, graph.edges.len());
    filtered.offsets.push(0);
    let mut offset = 0;
    let mut index = HashMap::with_capacity(kept_count);

    for node in 0..graph.node_count {
        if !keep[node] {
            continue;
        }

        // Relabelling is monotone, so adjacency stays sorted
        for &friend in graph.friends(node) {
            let friend_idx = friend as usize;
            if keep[friend_idx] {
                filtered.edges.push(orig_to_filtered[friend_idx]);
                offset += 1;
            }
        }
        filtered.offsets.push(offset);

        let person = graph.person(node).clone();
        index.insert(person.name.clone(), orig_to_filtered[node]);
        filtered.people.push(person);
    }

    filtered.node_count = kept_count;
    filtered.index = index;

    log::debug!(
        "Filtered graph from {} to {} people",
        graph.node_count,
        filtered.node_count
    );

    filtered
}
