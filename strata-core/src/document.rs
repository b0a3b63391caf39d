//! Serialisable view of a [`Graph`] for JSON output.
//!
//! The document borrows the graph and lists vertices and edges in id order:
//!
//! ```json
//! {"vertices":[{"id":0,"edge_ids":[0]}],"edges":[{"id":0,"vertex_ids":[0,0]}]}
//! ```

use serde::Serialize;

use crate::graph::{EdgeColor, EdgeId, Graph, VertexId};

/// Borrowed, serialisable representation of a [`Graph`].
///
/// # Examples
/// ```
/// use strata_core::{Graph, GraphDocument};
///
/// let graph = Graph::new();
/// let json = serde_json::to_string(&GraphDocument::from_graph(&graph))?;
/// assert_eq!(json, r#"{"vertices":[],"edges":[]}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct GraphDocument<'a> {
    vertices: Vec<VertexEntry<'a>>,
    edges: Vec<EdgeEntry>,
}

#[derive(Clone, Debug, Serialize)]
struct VertexEntry<'a> {
    id: VertexId,
    edge_ids: &'a [EdgeId],
}

#[derive(Clone, Debug, Serialize)]
struct EdgeEntry {
    id: EdgeId,
    vertex_ids: [VertexId; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<EdgeColor>,
}

impl<'a> GraphDocument<'a> {
    /// Builds the minimal document: ids, incident edges and endpoints.
    #[must_use]
    pub fn from_graph(graph: &'a Graph) -> Self {
        Self::build(graph, false)
    }

    /// Builds a document that also reports each edge's colour.
    #[must_use]
    pub fn from_graph_with_colors(graph: &'a Graph) -> Self {
        Self::build(graph, true)
    }

    fn build(graph: &'a Graph, include_colors: bool) -> Self {
        let vertices = graph
            .vertices()
            .iter()
            .map(|vertex| VertexEntry {
                id: vertex.id(),
                edge_ids: graph.edge_ids_of(vertex.id()).unwrap_or_default(),
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeEntry {
                id: edge.id(),
                vertex_ids: [edge.source(), edge.target()],
                color: include_colors.then_some(edge.color()),
            })
            .collect();
        Self { vertices, edges }
    }
}
