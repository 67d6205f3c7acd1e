//! Graph representation and algorithms module

pub mod model;
pub mod builder;
pub mod algorithms;

pub use builder::GraphBuilder;
pub use model::{Graph, Node, NodeId};
