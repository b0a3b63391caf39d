//! Human-readable statistics for generated graphs.

use std::fmt;

use crate::graph::{EdgeColor, Graph};

/// Counts describing the shape of a [`Graph`].
///
/// # Examples
/// ```
/// use strata_core::{EdgeColor, Graph, GraphSummary};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex();
/// let child = graph.add_vertex();
/// graph.add_edge(root, child, EdgeColor::Grey);
/// graph.add_edge(child, child, EdgeColor::Green);
///
/// let summary = GraphSummary::of(&graph);
/// assert_eq!(summary.layer_sizes(), &[1, 1]);
/// assert_eq!(summary.color_count(EdgeColor::Green), 1);
/// assert_eq!(
///     summary.to_string(),
///     "depth: 2, vertices: {amount: 2, distribution: [1, 1]}, \
///      edges: {amount: 2, distribution: {grey: 1, green: 1, yellow: 0, red: 0}}"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphSummary {
    vertex_count: usize,
    layer_sizes: Vec<usize>,
    edge_count: usize,
    color_counts: [(EdgeColor, usize); 4],
}

impl GraphSummary {
    /// Collects the statistics of `graph`.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            layer_sizes: graph.layers().iter().map(Vec::len).collect(),
            edge_count: graph.edge_count(),
            color_counts: EdgeColor::ALL.map(|color| (color, graph.edges_of_color(color).count())),
        }
    }

    /// Number of populated layers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Total vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Vertices per layer, root layer first.
    #[must_use]
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Total edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges of `color`.
    #[must_use]
    pub fn color_count(&self, color: EdgeColor) -> usize {
        self.color_counts
            .iter()
            .find(|(candidate, _)| *candidate == color)
            .map_or(0, |&(_, count)| count)
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth: {}, vertices: {{amount: {}, distribution: [",
            self.depth(),
            self.vertex_count
        )?;
        for (index, size) in self.layer_sizes.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{size}")?;
        }
        write!(
            f,
            "]}}, edges: {{amount: {}, distribution: {{",
            self.edge_count
        )?;
        for (index, (color, count)) in self.color_counts.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}: {count}")?;
        }
        f.write_str("}}")
    }
}
