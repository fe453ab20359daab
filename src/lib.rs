//! Core library functions for the friend graph analyzer

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};
pub use error::GraphError;
pub use graph::{GraphBuilder, Person, SocialGraph};
pub use graph::algorithms::shortest_chain;
pub use cluster::{cliques, connectors};
