//! Memory-efficient social graph representation

use std::collections::HashMap;
use std::mem;
use itertools::Itertools;
use serde::{Serialize, Deserialize};

/// A member of the social network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name, the key used by every query
    pub name: String,

    /// Organization the person belongs to, if any
    pub affiliation: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, affiliation: Option<String>) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.filter(|a| !a.is_empty()),
        }
    }

    /// Whether this person belongs to the given organization
    pub fn is_affiliated_with(&self, affiliation: &str) -> bool {
        self.affiliation.as_deref() == Some(affiliation)
    }
}

/// Compressed sparse representation of an undirected friendship graph.
///
/// Every friendship is stored in both endpoints' adjacency ranges, so
/// `edges.len()` is twice the number of friendships. The graph is never
/// mutated once built; all queries take `&SocialGraph`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialGraph {
    /// Number of people in the graph
    pub node_count: usize,

    /// Offset array: index where each person's friends begin
    /// offsets[i] to offsets[i+1] defines the adjacency range for person i
    pub offsets: Vec<u32>,

    /// Edge array: concatenated, sorted friend lists
    pub edges: Vec<u32>,

    /// People, indexed like the offsets array
    pub people: Vec<Person>,

    /// Mapping from name to person index
    pub index: HashMap<String, u32>,
}

impl SocialGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count: 0,
            offsets: Vec::with_capacity(node_count + 1),
            edges: Vec::with_capacity(edge_count),
            people: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    /// Get the friends of a person
    pub fn friends(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Check if two people are friends
    pub fn are_friends(&self, a: usize, b: u32) -> bool {
        self.friends(a).binary_search(&b).is_ok()
    }

    /// Number of friends of a person
    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Number of undirected friendships
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    pub fn person(&self, node: usize) -> &Person {
        &self.people[node]
    }

    pub fn name(&self, node: usize) -> &str {
        &self.people[node].name
    }

    /// Look up a person's index by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&idx| idx as usize)
    }

    /// Distinct affiliation values, sorted
    pub fn affiliations(&self) -> Vec<&str> {
        self.people
            .iter()
            .filter_map(|p| p.affiliation.as_deref())
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();

        let people = self.people.iter()
            .map(|p| {
                mem::size_of::<Person>()
                    + p.name.capacity()
                    + p.affiliation.as_ref().map_or(0, |a| a.capacity())
            })
            .sum::<usize>();

        let index = self.index.keys()
            .map(|k| k.capacity() + mem::size_of::<(String, u32)>())
            .sum::<usize>();

        base + offsets + edges + people + index
    }
}
