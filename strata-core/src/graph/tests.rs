//! Unit tests for graph storage and edge colouring.

use super::*;

use rstest::rstest;

/// Builds `root -> a -> b` and `root -> c`, returning `(root, a, b, c)`.
fn two_branch_graph() -> (Graph, VertexId, VertexId, VertexId, VertexId) {
    let mut graph = Graph::new();
    let root = graph.add_vertex();
    let a = graph.add_vertex();
    graph.add_edge(root, a, EdgeColor::Grey);
    let b = graph.add_vertex();
    graph.add_edge(a, b, EdgeColor::Grey);
    let c = graph.add_vertex();
    graph.add_edge(root, c, EdgeColor::Grey);
    (graph, root, a, b, c)
}

#[rstest]
#[case::forward_one(0, 1, Some(EdgeColor::Yellow))]
#[case::forward_one_deep(4, 5, Some(EdgeColor::Yellow))]
#[case::backward_two(2, 0, Some(EdgeColor::Red))]
#[case::backward_one(2, 1, None)]
#[case::forward_two(0, 2, None)]
#[case::same_layer(3, 3, None)]
#[case::backward_three(3, 0, None)]
fn for_depths_applies_asymmetric_rule(
    #[case] source: Depth,
    #[case] target: Depth,
    #[case] expected: Option<EdgeColor>,
) {
    assert_eq!(EdgeColor::for_depths(source, target), expected);
}

#[test]
fn ids_are_issued_sequentially_from_zero() {
    let mut graph = Graph::new();
    let ids: Vec<u64> = (0..4).map(|_| graph.add_vertex().get()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    let root = VertexId::new(0);
    let edges: Vec<u64> = (1..4)
        .map(|raw| graph.add_edge(root, VertexId::new(raw), EdgeColor::Grey).get())
        .collect();
    assert_eq!(edges, vec![0, 1, 2]);
}

#[test]
fn first_vertex_is_root_at_depth_zero() {
    let mut graph = Graph::new();
    let root = graph.add_vertex();
    let orphan = graph.add_vertex();

    assert_eq!(graph.vertex_depth(root), Some(0));
    assert_eq!(graph.vertex_depth(orphan), None);
    assert_eq!(graph.layers(), &[vec![root]]);
}

#[test]
fn grey_edges_extend_the_layer_partition() {
    let (graph, root, a, b, c) = two_branch_graph();

    assert_eq!(graph.layer(0), &[root]);
    assert_eq!(graph.layer(1), &[a, c]);
    assert_eq!(graph.layer(2), &[b]);
    assert!(graph.layer(3).is_empty());
    assert_eq!(graph.depth(), 3);
}

#[test]
fn self_loop_is_recorded_once() {
    let mut graph = Graph::new();
    let root = graph.add_vertex();
    let loop_id = graph.add_edge(root, root, EdgeColor::Green);

    assert_eq!(graph.edge_ids_of(root), Some(&[loop_id][..]));
    assert!(graph.edge(loop_id).is_some_and(Edge::is_self_loop));
    assert_eq!(graph.depth(), 1);
}

#[test]
fn has_edge_holds_in_both_directions_after_add() {
    let (graph, root, a, b, c) = two_branch_graph();

    assert!(graph.has_edge(root, a));
    assert!(graph.has_edge(a, root));
    assert!(graph.has_edge(a, b));
    assert!(!graph.has_edge(root, b));
    assert!(!graph.has_edge(c, b));
    assert!(!graph.has_edge(root, VertexId::new(99)));
}

#[test]
fn connective_edges_follow_depth_rule() {
    let (mut graph, root, a, b, c) = two_branch_graph();

    let yellow = graph.add_connective_edge(c, b);
    let red = graph.add_connective_edge(b, root);

    assert_eq!(
        yellow.and_then(|id| graph.edge(id)).map(Edge::color),
        Some(EdgeColor::Yellow)
    );
    assert_eq!(
        red.and_then(|id| graph.edge(id)).map(Edge::color),
        Some(EdgeColor::Red)
    );
    assert!(graph.add_connective_edge(root, b).is_none());
    assert!(graph.add_connective_edge(a, c).is_none());
    assert!(graph.add_connective_edge(root, a).is_none());
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn edges_of_color_filters_by_color() {
    let (mut graph, root, _a, b, c) = two_branch_graph();
    graph.add_edge(root, root, EdgeColor::Green);
    graph.add_connective_edge(c, b);

    let counts: Vec<usize> = EdgeColor::ALL
        .iter()
        .map(|&color| graph.edges_of_color(color).count())
        .collect();
    assert_eq!(counts, vec![3, 1, 1, 0]);
}

#[test]
fn adjacency_preserves_insertion_order() {
    let (mut graph, root, a, _b, c) = two_branch_graph();
    let loop_id = graph.add_edge(a, a, EdgeColor::Green);

    let ids: Vec<u64> = graph
        .edge_ids_of(a)
        .unwrap_or_default()
        .iter()
        .map(|id| id.get())
        .collect();
    assert_eq!(ids, vec![0, 1, loop_id.get()]);
    assert_eq!(graph.edge_ids_of(root).map(<[EdgeId]>::len), Some(2));
    assert_eq!(graph.edge_ids_of(c).map(<[EdgeId]>::len), Some(1));
}

#[test]
#[should_panic(expected = "does not exist")]
fn add_edge_rejects_unknown_vertices() {
    let mut graph = Graph::new();
    let root = graph.add_vertex();
    graph.add_edge(root, VertexId::new(7), EdgeColor::Grey);
}

#[test]
#[should_panic(expected = "must be green")]
fn add_edge_rejects_coloured_self_loops() {
    let mut graph = Graph::new();
    let root = graph.add_vertex();
    graph.add_edge(root, root, EdgeColor::Yellow);
}

#[test]
#[should_panic(expected = "already connected")]
fn add_edge_rejects_duplicate_pairs() {
    let (mut graph, root, a, _b, _c) = two_branch_graph();
    graph.add_edge(a, root, EdgeColor::Grey);
}

#[test]
#[should_panic(expected = "already has a depth")]
fn grey_edge_rejects_placed_targets() {
    let (mut graph, _root, _a, b, c) = two_branch_graph();
    graph.add_edge(c, b, EdgeColor::Grey);
}

#[test]
#[should_panic(expected = "contradicts endpoint depths")]
fn add_edge_rejects_mismatched_connective_colour() {
    let (mut graph, _root, _a, b, c) = two_branch_graph();
    graph.add_edge(c, b, EdgeColor::Red);
}
