//! Deterministic textual export for visualization tools.
//!
//! Produces DOT-style text: nodes then edges, both in increasing index
//! order, so the same snapshot always serializes to the same string. This is
//! a pure projection — no filesystem or network surface lives here.

use std::fmt::Write;

use crate::graph::{EdgeRef, Graph, GraphKind};
use crate::index::{EdgeIndex, NodeIndex};

/// Renders a graph description in DOT syntax.
///
/// `node_label` and `edge_label` project payloads to display labels; labels
/// are escaped, `name` is emitted verbatim and should be a plain identifier.
/// Directed graphs render as `digraph` with `->` edges, undirected as
/// `graph` with `--`.
///
/// # Example
///
/// ```
/// use strata::{to_graph_description, Graph};
///
/// let g: Graph<&str, u32> = Graph::empty_directed();
/// let (g, a) = g.add_node("start");
/// let (g, b) = g.add_node("end");
/// let (g, _) = g.add_edge(a, b, 3).unwrap();
///
/// let text = to_graph_description(&g, "flow", |_, n| n.to_string(), |_, w| w.to_string());
/// assert_eq!(
///     text,
///     "digraph flow {\n    0 [label=\"start\"];\n    1 [label=\"end\"];\n    0 -> 1 [label=\"3\"];\n}\n"
/// );
/// ```
pub fn to_graph_description<N, E, FN, FE>(
    graph: &Graph<N, E>,
    name: &str,
    mut node_label: FN,
    mut edge_label: FE,
) -> String
where
    FN: FnMut(NodeIndex, &N) -> String,
    FE: FnMut(EdgeIndex, &E) -> String,
{
    let (keyword, operator) = match graph.kind() {
        GraphKind::Directed => ("digraph", "->"),
        GraphKind::Undirected => ("graph", "--"),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{keyword} {name} {{");
    for (ix, payload) in graph.nodes() {
        let _ = writeln!(
            out,
            "    {} [label=\"{}\"];",
            ix.index(),
            escape_label(&node_label(ix, payload))
        );
    }
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "    {} {operator} {} [label=\"{}\"];",
            edge.source().index(),
            edge.target().index(),
            escape_label(&edge_label(edge.index(), edge.payload()))
        );
    }
    out.push_str("}\n");
    out
}

impl<N, E> Graph<N, E> {
    /// Method form of [`to_graph_description`].
    pub fn to_graph_description<FN, FE>(
        &self,
        name: &str,
        node_label: FN,
        edge_label: FE,
    ) -> String
    where
        FN: FnMut(NodeIndex, &N) -> String,
        FE: FnMut(EdgeIndex, &E) -> String,
    {
        to_graph_description(self, name, node_label, edge_label)
    }
}

fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
