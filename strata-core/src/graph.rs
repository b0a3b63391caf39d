//! Id-indexed storage for layered graphs.
//!
//! Vertices, edges and adjacency lists live in dense vectors indexed by their
//! identifiers, so the structure never holds references between its own
//! elements. Depth bookkeeping is kept twice: a direct vertex-to-depth index
//! for constant-time lookups and a layer partition for ordered iteration.
//!
//! Precondition violations (unknown vertices, duplicate connections, colours
//! that contradict endpoint depths) are programming errors and panic.

use std::fmt;

use serde::Serialize;

/// Layer index of a vertex. The root sits at depth `0`.
pub type Depth = usize;

/// Identifier of a vertex, issued in increasing order starting at zero.
///
/// # Examples
/// ```
/// use strata_core::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    fn slot(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an edge, issued in increasing order starting at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    fn slot(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of an edge, derived from the depths of its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    /// Layered growth edge from depth `d` to a new vertex at `d + 1`.
    Grey,
    /// Self-loop.
    Green,
    /// Connective edge from depth `d` to an existing vertex at `d + 1`.
    Yellow,
    /// Connective edge from depth `d` back to an existing vertex at `d - 2`.
    Red,
}

impl EdgeColor {
    /// Every colour, in reporting order.
    pub const ALL: [Self; 4] = [Self::Grey, Self::Green, Self::Yellow, Self::Red];

    /// Resolves the colour of a connective edge between two existing vertices.
    ///
    /// The rule is deliberately asymmetric: a forward gap of one layer is
    /// yellow, a backward gap of two layers is red, and every other
    /// differential has no colour.
    ///
    /// # Examples
    /// ```
    /// use strata_core::EdgeColor;
    ///
    /// assert_eq!(EdgeColor::for_depths(1, 2), Some(EdgeColor::Yellow));
    /// assert_eq!(EdgeColor::for_depths(3, 1), Some(EdgeColor::Red));
    /// assert_eq!(EdgeColor::for_depths(1, 3), None);
    /// ```
    #[must_use]
    pub fn for_depths(source: Depth, target: Depth) -> Option<Self> {
        if target.checked_sub(source) == Some(1) {
            Some(Self::Yellow)
        } else if source.checked_sub(target) == Some(2) {
            Some(Self::Red)
        } else {
            None
        }
    }

    /// Lowercase name used in summaries and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vertex. Carries nothing but its identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
}

impl Vertex {
    /// Identifier of this vertex.
    #[must_use]
    pub const fn id(&self) -> VertexId {
        self.id
    }
}

/// An edge between two vertices, remembering construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    color: EdgeColor,
}

impl Edge {
    /// Identifier of this edge.
    #[must_use]
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    /// First endpoint passed to [`Graph::add_edge`].
    #[must_use]
    pub const fn source(&self) -> VertexId {
        self.source
    }

    /// Second endpoint passed to [`Graph::add_edge`].
    #[must_use]
    pub const fn target(&self) -> VertexId {
        self.target
    }

    /// Colour assigned at creation.
    #[must_use]
    pub const fn color(&self) -> EdgeColor {
        self.color
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Mutable layered graph populated by [`crate::GraphGenerator`].
///
/// The first vertex added becomes the root and is placed at depth `0`. Other
/// vertices receive their depth from the grey edge that first reaches them.
///
/// # Examples
/// ```
/// use strata_core::{EdgeColor, Graph};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex();
/// let child = graph.add_vertex();
/// graph.add_edge(root, child, EdgeColor::Grey);
///
/// assert_eq!(graph.vertex_depth(root), Some(0));
/// assert_eq!(graph.vertex_depth(child), Some(1));
/// assert!(graph.has_edge(root, child));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
    depths: Vec<Option<Depth>>,
    layers: Vec<Vec<VertexId>>,
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with no incident edges and returns its identifier.
    ///
    /// The first vertex of a graph is the root and is assigned depth `0`.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.push(Vertex { id });
        self.adjacency.push(Vec::new());
        self.depths.push(None);
        if self.layers.is_empty() {
            self.assign_depth(id, 0);
        }
        id
    }

    /// Adds an edge of the given colour and returns its identifier.
    ///
    /// The edge id is appended to the adjacency list of `source` and, unless
    /// the edge is a self-loop, to that of `target`. A grey edge assigns
    /// `target` the depth directly below `source`.
    ///
    /// # Panics
    /// Panics when either vertex does not exist, when a self-loop is not
    /// green (or a green edge is not a self-loop), when the two vertices are
    /// already connected, when a grey edge does not lead from a placed vertex
    /// to an unplaced one, or when a yellow/red colour contradicts the
    /// endpoint depths.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, color: EdgeColor) -> EdgeId {
        assert!(
            self.contains_vertex(source),
            "edge source {source} does not exist"
        );
        assert!(
            self.contains_vertex(target),
            "edge target {target} does not exist"
        );

        if source == target {
            assert_eq!(
                color,
                EdgeColor::Green,
                "self-loop on vertex {source} must be green"
            );
        } else {
            assert!(
                !self.has_edge(source, target),
                "vertices {source} and {target} are already connected"
            );
            match color {
                EdgeColor::Grey => {
                    let Some(parent_depth) = self.vertex_depth(source) else {
                        panic!("grey edge source {source} has no depth");
                    };
                    assert!(
                        self.vertex_depth(target).is_none(),
                        "grey edge target {target} already has a depth"
                    );
                    self.assign_depth(target, parent_depth + 1);
                }
                EdgeColor::Green => panic!("green edge {source} -> {target} is not a self-loop"),
                EdgeColor::Yellow | EdgeColor::Red => assert_eq!(
                    self.connective_color(source, target),
                    Some(color),
                    "{color} edge {source} -> {target} contradicts endpoint depths"
                ),
            }
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.push(Edge {
            id,
            source,
            target,
            color,
        });
        self.adjacency_mut(source).push(id);
        if source != target {
            self.adjacency_mut(target).push(id);
        }
        id
    }

    /// Connects two placed vertices with the colour the depth rule assigns.
    ///
    /// Returns `None` without touching the graph when the vertices are
    /// already connected, are the same vertex, or no colour applies to their
    /// depth differential.
    ///
    /// # Examples
    /// ```
    /// use strata_core::{EdgeColor, Graph};
    ///
    /// let mut graph = Graph::new();
    /// let root = graph.add_vertex();
    /// let a = graph.add_vertex();
    /// let b = graph.add_vertex();
    /// graph.add_edge(root, a, EdgeColor::Grey);
    /// graph.add_edge(root, b, EdgeColor::Grey);
    /// let c = graph.add_vertex();
    /// graph.add_edge(a, c, EdgeColor::Grey);
    ///
    /// let yellow = graph.add_connective_edge(b, c).expect("depth 1 -> 2 is yellow");
    /// assert_eq!(graph.edge(yellow).map(|e| e.color()), Some(EdgeColor::Yellow));
    /// assert!(graph.add_connective_edge(b, c).is_none());
    /// ```
    pub fn add_connective_edge(&mut self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        if source == target || self.has_edge(source, target) {
            return None;
        }
        let color = self.connective_color(source, target)?;
        Some(self.add_edge(source, target, color))
    }

    /// Colour a connective edge between `source` and `target` would receive.
    #[must_use]
    pub fn connective_color(&self, source: VertexId, target: VertexId) -> Option<EdgeColor> {
        EdgeColor::for_depths(self.vertex_depth(source)?, self.vertex_depth(target)?)
    }

    /// Depth of `vertex`, or `None` when it has not been placed yet.
    #[must_use]
    pub fn vertex_depth(&self, vertex: VertexId) -> Option<Depth> {
        self.depths.get(vertex.slot()?).copied().flatten()
    }

    /// Returns `true` when the adjacency lists of `a` and `b` share an edge.
    ///
    /// For `a == b` this reports whether the vertex has any incident edge.
    #[must_use]
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        let (Some(a_edges), Some(b_edges)) = (self.edge_ids_of(a), self.edge_ids_of(b)) else {
            return false;
        };
        a_edges.iter().any(|id| b_edges.contains(id))
    }

    /// Returns `true` when `vertex` has been issued by this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex(vertex).is_some()
    }

    /// All vertices in id order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in id order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.slot()?)
    }

    /// Looks up an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot()?)
    }

    /// Incident edge ids of `vertex` in insertion order.
    #[must_use]
    pub fn edge_ids_of(&self, vertex: VertexId) -> Option<&[EdgeId]> {
        self.adjacency.get(vertex.slot()?).map(Vec::as_slice)
    }

    /// The depth partition; entry `d` lists the vertices at depth `d`.
    #[must_use]
    pub fn layers(&self) -> &[Vec<VertexId>] {
        &self.layers
    }

    /// Vertices at `depth`, empty when the layer does not exist.
    #[must_use]
    pub fn layer(&self, depth: Depth) -> &[VertexId] {
        self.layers.get(depth).map_or(&[], Vec::as_slice)
    }

    /// Number of populated layers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges of the given colour in id order.
    pub fn edges_of_color(&self, color: EdgeColor) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.color == color)
    }

    fn assign_depth(&mut self, vertex: VertexId, depth: Depth) {
        let slot = self.expect_slot(vertex);
        if let Some(entry) = self.depths.get_mut(slot) {
            *entry = Some(depth);
        }
        match self.layers.get_mut(depth) {
            Some(layer) => layer.push(vertex),
            None => {
                assert_eq!(
                    depth,
                    self.layers.len(),
                    "depth {depth} skips a layer"
                );
                self.layers.push(vec![vertex]);
            }
        }
    }

    fn adjacency_mut(&mut self, vertex: VertexId) -> &mut Vec<EdgeId> {
        let slot = self.expect_slot(vertex);
        match self.adjacency.get_mut(slot) {
            Some(edges) => edges,
            None => panic!("vertex {vertex} has no adjacency entry"),
        }
    }

    fn expect_slot(&self, vertex: VertexId) -> usize {
        match vertex.slot().filter(|&slot| slot < self.vertices.len()) {
            Some(slot) => slot,
            None => panic!("vertex {vertex} does not exist"),
        }
    }
}

#[cfg(test)]
mod tests;
