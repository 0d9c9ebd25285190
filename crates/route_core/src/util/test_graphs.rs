use crate::{
    attrs, edge,
    graph::{EdgeAttributes, Graph, Node},
};

/// Graph with a short and a direct route between A and C.
///
/// ```text
/// A -> B -> C      D (isolated)
///  \________/
/// ```
/// `A -> C` is longer and slower but cheaper on ticket price. It carries a
/// half hour layover, so with the layover penalty `A -> B -> C` is cheapest.
pub fn generate_simple_graph() -> Graph {
    let mut g = Graph::new();

    let a = g.add_node(Node::new("A"));
    let b = g.add_node(Node::new("B"));
    let c = g.add_node(Node::new("C"));
    g.add_node(Node::new("D"));

    g.add_edge(edge!(a => b, attrs!(10.0, 1.0, 5.0)));
    g.add_edge(edge!(b => c, attrs!(10.0, 1.0, 5.0)));
    g.add_edge(edge!(a => c, attrs!(25.0, 3.0, 9.0, 0.5)));

    g
}

/// Same as [`generate_simple_graph`] but the layover is on `A -> B`, which
/// turns the direct edge into the cheapest route.
pub fn generate_layover_graph() -> Graph {
    let mut g = Graph::new();

    let a = g.add_node(Node::new("A"));
    let b = g.add_node(Node::new("B"));
    let c = g.add_node(Node::new("C"));
    g.add_node(Node::new("D"));

    g.add_edge(edge!(a => b, attrs!(10.0, 1.0, 5.0, 0.5)));
    g.add_edge(edge!(b => c, attrs!(10.0, 1.0, 5.0)));
    g.add_edge(edge!(a => c, attrs!(25.0, 3.0, 9.0)));

    g
}

/// Graph where `B -> C -> B` has a negative cost.
///
/// ```text
/// A -> B <=> C -> D
/// ```
pub fn generate_negative_cycle_graph() -> Graph {
    let mut g = Graph::new();

    let a = g.add_node(Node::new("A"));
    let b = g.add_node(Node::new("B"));
    let c = g.add_node(Node::new("C"));
    let d = g.add_node(Node::new("D"));

    g.add_edge(edge!(a => b, attrs!(1.0, 1.0, 10.0)));
    g.add_edge(edge!(b => c, attrs!(2.0, 1.0, -20.0)));
    g.add_edge(edge!(c => b, attrs!(2.0, 1.0, 5.0)));
    g.add_edge(edge!(c => d, attrs!(1.0, 1.0, 1.0)));

    g
}

fn route(weight: f64, layover: f64) -> EdgeAttributes {
    // Long segments are cheap and short ones expensive, so the objectives
    // disagree on most queries
    EdgeAttributes::new(
        weight * 100.0,
        weight * 0.5 + layover,
        (10.0 - weight) * 20.0,
        layover,
    )
}

/// Bidirectional graph with 11 nodes `A`..`K`
pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::new();

    let a = graph.add_node(Node::new("A"));
    let b = graph.add_node(Node::new("B"));
    let c = graph.add_node(Node::new("C"));
    let d = graph.add_node(Node::new("D"));
    let e = graph.add_node(Node::new("E"));
    let f = graph.add_node(Node::new("F"));
    let g = graph.add_node(Node::new("G"));
    let h = graph.add_node(Node::new("H"));
    let i = graph.add_node(Node::new("I"));
    let j = graph.add_node(Node::new("J"));
    let k = graph.add_node(Node::new("K"));

    graph.add_edges(edge!(a, b, route(3.0, 0.0))); // A <=> B
    graph.add_edges(edge!(a, c, route(5.0, 1.5))); // A <=> C
    graph.add_edges(edge!(a, k, route(3.0, 0.0))); // A <=> K

    graph.add_edges(edge!(b, d, route(5.0, 0.0))); // B <=> D
    graph.add_edges(edge!(b, c, route(3.0, 3.0))); // B <=> C

    graph.add_edges(edge!(c, d, route(2.0, 0.0))); // C <=> D
    graph.add_edges(edge!(c, j, route(2.0, 1.5))); // C <=> J

    graph.add_edges(edge!(d, j, route(4.0, 0.0))); // D <=> J
    graph.add_edges(edge!(d, e, route(7.0, 0.0))); // D <=> E

    graph.add_edges(edge!(e, j, route(3.0, 5.0))); // E <=> J
    graph.add_edges(edge!(e, f, route(6.0, 0.0))); // E <=> F

    graph.add_edges(edge!(f, h, route(2.0, 1.5))); // F <=> H
    graph.add_edges(edge!(f, g, route(4.0, 0.0))); // F <=> G

    graph.add_edges(edge!(g, h, route(3.0, 0.0))); // G <=> H
    graph.add_edges(edge!(g, i, route(5.0, 3.0))); // G <=> I

    graph.add_edges(edge!(h, i, route(3.0, 0.0))); // H <=> I
    graph.add_edges(edge!(h, j, route(2.0, 0.0))); // H <=> J

    graph.add_edges(edge!(i, j, route(4.0, 1.5))); // I <=> J
    graph.add_edges(edge!(i, k, route(6.0, 0.0))); // I <=> K

    graph.add_edges(edge!(j, k, route(3.0, 0.0))); // J <=> K

    graph
}
