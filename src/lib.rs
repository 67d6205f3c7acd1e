//! Clique percolation: k-clique discovery, community graph construction and
//! community extraction

pub mod config;
pub mod error;
pub mod graph;
pub mod clique;
pub mod cluster;
pub mod percolation;
pub mod data;
pub mod storage;
pub mod viz;

pub use clique::{Clique, CliqueSet};
pub use cluster::Community;
pub use config::{Config, SymmetryPolicy};
pub use error::{CpmError, ErrorKind, Result};
pub use graph::{Graph, GraphBuilder, NodeId};
pub use percolation::{percolate, Percolation};
