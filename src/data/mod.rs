//! Input loading and preprocessing module

pub mod loader;
pub mod preprocessing;

pub use loader::{load_graph, parse_chain_queries, parse_graph};
