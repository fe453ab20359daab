//! Graph representation and algorithms module

pub mod compressed;
pub mod builder;
pub mod algorithms;

pub use compressed::{Person, SocialGraph};
pub use builder::GraphBuilder;
