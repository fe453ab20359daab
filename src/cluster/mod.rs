//! Affiliation clustering and connector analysis module

pub mod detection;
pub mod connectors;
pub mod metrics;

use serde::{Serialize, Deserialize};

pub use detection::{cliques, find_cliques};
pub use connectors::{connectors, connector_indices};

/// People sharing one affiliation that lie in the same connected component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clique {
    /// Position of this clique in the size-sorted result
    pub id: u32,

    /// Members of this clique (person indices, traversal order)
    pub members: Vec<u32>,

    /// Size of the clique
    pub size: usize,

    /// Density: friendships among members / potential friendships
    pub density: f32,

    /// Members with the most friends inside the clique
    pub central_members: Vec<u32>,
}
