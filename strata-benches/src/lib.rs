//! Benchmark support crate for strata.
//!
//! Provides the parameter type used to label Criterion benchmark cases.

use std::fmt;

/// Parameters for a graph generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateBenchParams {
    /// Number of layers, root included.
    pub depth: usize,
    /// Children attempted per vertex.
    pub new_vertices: usize,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth={},k={}", self.depth, self.new_vertices)
    }
}
