//! Graph construction module

use crate::error::{GraphError, GraphResult};
use crate::graph::compressed::{Person, SocialGraph};
use std::collections::{HashMap, HashSet};

/// Builder for incrementally constructing a SocialGraph
pub struct GraphBuilder {
    /// Mapping from names to person indices
    name_to_index: HashMap<String, u32>,

    /// People in insertion order
    people: Vec<Person>,

    /// Adjacency lists for each person
    adjacency_lists: Vec<Vec<u32>>,

    /// Friendships added so far, keyed (lower index, higher index)
    friendships: HashSet<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name_to_index: HashMap::with_capacity(capacity),
            people: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            friendships: HashSet::new(),
        }
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Add a person; names must be unique
    pub fn add_person(&mut self, name: &str, affiliation: Option<String>) -> GraphResult<u32> {
        if self.name_to_index.contains_key(name) {
            return Err(GraphError::DuplicatePerson(name.to_string()));
        }

        let idx = u32::try_from(self.people.len())
            .map_err(|_| GraphError::TooLarge(self.people.len()))?;
        self.name_to_index.insert(name.to_string(), idx);
        self.people.push(Person::new(name, affiliation));
        self.adjacency_lists.push(Vec::new());

        Ok(idx)
    }

    /// Add an undirected friendship between two existing people.
    ///
    /// Returns `false` if the friendship was already present.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> GraphResult<bool> {
        let a_idx = self.lookup(a)?;
        let b_idx = self.lookup(b)?;

        if a_idx == b_idx {
            return Err(GraphError::SelfFriendship(a.to_string()));
        }

        if !self.friendships.insert((a_idx.min(b_idx), a_idx.max(b_idx))) {
            log::debug!("Ignoring repeated friendship {} - {}", a, b);
            return Ok(false);
        }

        self.adjacency_lists[a_idx as usize].push(b_idx);
        self.adjacency_lists[b_idx as usize].push(a_idx);

        Ok(true)
    }

    fn lookup(&self, name: &str) -> GraphResult<u32> {
        self.name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownPerson(name.to_string()))
    }

    /// Build the compressed graph
    pub fn build(mut self) -> GraphResult<SocialGraph> {
        let node_count = self.people.len();
        let edge_count: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        if u32::try_from(edge_count).is_err() {
            return Err(GraphError::TooLarge(node_count));
        }

        let mut graph = SocialGraph::with_capacity(node_count, edge_count);

        // Create offsets array
        graph.offsets.push(0);
        let mut offset = 0;
        for list in &mut self.adjacency_lists {
            // Sort for binary search efficiency
            list.sort_unstable();
            graph.edges.extend_from_slice(list);
            offset += list.len() as u32;
            graph.offsets.push(offset);
        }

        graph.node_count = node_count;
        graph.people = self.people;
        graph.index = self.name_to_index;

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_person() {
        let mut builder = GraphBuilder::with_capacity(2);
        builder.add_person("sam", None).unwrap();
        let err = builder.add_person("sam", Some("rutgers".into())).unwrap_err();
        assert!(matches!(err, GraphError::DuplicatePerson(name) if name == "sam"));
    }

    #[test]
    fn rejects_unknown_and_self_friendship() {
        let mut builder = GraphBuilder::with_capacity(2);
        builder.add_person("sam", None).unwrap();
        assert!(matches!(
            builder.add_friendship("sam", "jane"),
            Err(GraphError::UnknownPerson(name)) if name == "jane"
        ));
        assert!(matches!(
            builder.add_friendship("sam", "sam"),
            Err(GraphError::SelfFriendship(_))
        ));
    }

    #[test]
    fn repeated_friendship_is_stored_once() {
        let mut builder = GraphBuilder::with_capacity(2);
        builder.add_person("sam", None).unwrap();
        builder.add_person("jane", None).unwrap();
        assert!(builder.add_friendship("sam", "jane").unwrap());
        assert!(!builder.add_friendship("jane", "sam").unwrap());

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.friends(0), &[1]);
        assert_eq!(graph.friends(1), &[0]);
    }

    #[test]
    fn large_star_keeps_every_friendship_once() {
        let leaves = 200_000;
        let mut builder = GraphBuilder::with_capacity(leaves + 1);
        builder.add_person("hub", None).unwrap();
        for i in 0..leaves {
            builder.add_person(&format!("leaf{}", i), None).unwrap();
        }

        for i in 0..leaves {
            assert!(builder.add_friendship("hub", &format!("leaf{}", i)).unwrap());
        }
        assert!(!builder.add_friendship("leaf7", "hub").unwrap());
        assert!(!builder.add_friendship("hub", "leaf199999").unwrap());

        let graph = builder.build().unwrap();
        assert_eq!(graph.degree(0), leaves);
        assert_eq!(graph.edge_count(), leaves);
        assert_eq!(graph.friends(7), &[0]);
        assert!(graph.are_friends(0, leaves as u32));
    }

    #[test]
    fn empty_builder_builds_empty_graph() {
        let graph = GraphBuilder::with_capacity(0).build().unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.offsets, vec![0]);
    }
}
