//! Connector (articulation point) detection
//!
//! A connector is a person whose removal, together with their friendships,
//! splits their component into more pieces. Detection uses the depth-first
//! discovery/low-link method over every component, with an explicit frame
//! stack so deep friend chains cannot overflow the call stack.

use crate::graph::SocialGraph;

/// Find the names of all connectors, in index order.
///
/// Returns `None` for graphs with at most two people and for graphs without
/// any connector.
pub fn connectors(graph: &SocialGraph) -> Option<Vec<String>> {
    if graph.node_count <= 2 {
        return None;
    }

    let found = connector_indices(graph);
    log::debug!("Found {} connectors among {} people", found.len(), graph.node_count);

    if found.is_empty() {
        return None;
    }

    Some(
        found.into_iter()
            .map(|idx| graph.name(idx as usize).to_string())
            .collect(),
    )
}

/// Indices of all connectors, in index order
pub fn connector_indices(graph: &SocialGraph) -> Vec<u32> {
    let mut search = LowLinkSearch::new(graph);

    for root in 0..graph.node_count {
        if search.discovery[root].is_none() {
            search.run_tree(root);
        }
    }

    search.is_connector
        .iter()
        .enumerate()
        .filter(|(_, flag)| **flag)
        .map(|(idx, _)| idx as u32)
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    /// Position of the next friend to examine
    next: usize,
}

/// Per-call state of one connector search
struct LowLinkSearch<'g> {
    graph: &'g SocialGraph,
    discovery: Vec<Option<u32>>,
    low: Vec<u32>,
    counter: u32,
    is_connector: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'g> LowLinkSearch<'g> {
    fn new(graph: &'g SocialGraph) -> Self {
        Self {
            graph,
            discovery: vec![None; graph.node_count],
            low: vec![0; graph.node_count],
            counter: 0,
            is_connector: vec![false; graph.node_count],
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, vertex: usize, parent: Option<usize>) {
        self.discovery[vertex] = Some(self.counter);
        self.low[vertex] = self.counter;
        self.counter += 1;
        self.stack.push(Frame { vertex, parent, next: 0 });
    }

    /// Depth-first search of the tree rooted at `root`
    fn run_tree(&mut self, root: usize) {
        let graph = self.graph;
        let mut root_children = 0;
        self.enter(root, None);

        while let Some(top) = self.stack.len().checked_sub(1) {
            let Frame { vertex, parent, next } = self.stack[top];
            let friends = graph.friends(vertex);

            if next < friends.len() {
                self.stack[top].next += 1;
                let friend = friends[next] as usize;

                match self.discovery[friend] {
                    None => {
                        if vertex == root {
                            root_children += 1;
                        }
                        self.enter(friend, Some(vertex));
                    }
                    Some(friend_discovery) if Some(friend) != parent => {
                        self.low[vertex] = self.low[vertex].min(friend_discovery);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All friends examined: fold this subtree into its parent
            self.stack.pop();
            if let Some(parent) = parent {
                self.low[parent] = self.low[parent].min(self.low[vertex]);

                let parent_discovery = self.discovery[parent].unwrap_or(0);
                if parent != root && self.low[vertex] >= parent_discovery {
                    self.is_connector[parent] = true;
                }
            }
        }

        if root_children > 1 {
            self.is_connector[root] = true;
        }
    }
}
