//! Configuration management for clique percolation

use crate::error::{CpmError, Result};

/// What to do with edges that are declared in one direction only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryPolicy {
    /// Add the missing reverse edge
    #[default]
    Repair,
    /// Fail with [`CpmError::AsymmetricEdge`]
    Reject,
}

/// Default configuration for a percolation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Size of the cliques to percolate
    pub k: usize,

    /// Communities with fewer original nodes are dropped
    pub min_community_size: usize,

    /// Run per-anchor clique search on the rayon pool
    pub parallel: bool,

    /// Handling of one-directional edges in parsed input
    pub symmetry: SymmetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k: 3,
            min_community_size: 0,
            parallel: true,
            symmetry: SymmetryPolicy::Repair,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        k: usize,
        min_community_size: usize,
        parallel: bool,
        symmetry: SymmetryPolicy,
    ) -> Self {
        Self {
            k,
            min_community_size,
            parallel,
            symmetry,
        }
    }

    /// Reject parameters percolation is undefined for
    pub fn validate(&self) -> Result<()> {
        if self.k < 2 {
            return Err(CpmError::InvalidCliqueSize { k: self.k });
        }
        Ok(())
    }
}
