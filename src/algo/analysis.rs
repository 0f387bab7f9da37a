//! Cycle, ordering, connectivity, and coloring analysis.
//!
//! All algorithms are pure functions over a snapshot, O(V+E) except where
//! noted, with deterministic output: roots are taken in index order and
//! frontier ties break toward the lowest index.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet, VecDeque};

use crate::error::GraphError;
use crate::graph::storage::{Direction, GraphKind};
use crate::graph::Graph;
use crate::index::NodeIndex;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Whether the graph contains no cycle.
///
/// Directed graphs use iterative three-color depth-first marking: an edge
/// back to an in-progress node is a cycle. Undirected graphs use the forest
/// identity `E == V - C` (self-loops and parallel edges both break it).
pub fn is_acyclic<N, E>(graph: &Graph<N, E>) -> bool {
    match graph.kind() {
        GraphKind::Undirected => {
            let components = connected_components(graph);
            graph.edge_count() == graph.node_count() - components.len()
        }
        GraphKind::Directed => {
            let core = graph.core();
            let mut marks: HashMap<NodeIndex, Mark> = HashMap::new();

            for root in graph.node_indices() {
                if marks.contains_key(&root) {
                    continue;
                }
                marks.insert(root, Mark::InProgress);
                // (node, cursor into its adjacency list)
                let mut stack: Vec<(NodeIndex, usize)> = vec![(root, 0)];

                while let Some(frame) = stack.last_mut() {
                    let node = frame.0;
                    let adjacency = core.adjacency(node, Direction::Outgoing);
                    if frame.1 < adjacency.len() {
                        let edge = adjacency[frame.1];
                        frame.1 += 1;
                        let next = core.neighbor_of(edge, node, Direction::Outgoing);
                        match marks.get(&next) {
                            Some(Mark::InProgress) => return false,
                            Some(Mark::Done) => {}
                            None => {
                                marks.insert(next, Mark::InProgress);
                                stack.push((next, 0));
                            }
                        }
                    } else {
                        marks.insert(node, Mark::Done);
                        stack.pop();
                    }
                }
            }
            true
        }
    }
}

/// A topological order of a directed acyclic graph.
///
/// Kahn's algorithm with the zero-in-degree frontier kept in a min-heap, so
/// ties break toward the lowest index and the result is deterministic.
/// Fails with [`GraphError::CyclicGraph`] when any cycle prevents a full
/// ordering; undirected edges make both endpoints depend on each other and
/// report the same way.
pub fn topological_order<N, E>(graph: &Graph<N, E>) -> Result<Vec<NodeIndex>, GraphError> {
    let core = graph.core();
    let mut in_degree: HashMap<NodeIndex, usize> = graph
        .node_indices()
        .map(|ix| (ix, core.adjacency(ix, Direction::Incoming).len()))
        .collect();

    let mut frontier: BinaryHeap<Reverse<NodeIndex>> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&ix, _)| Reverse(ix))
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(Reverse(node)) = frontier.pop() {
        order.push(node);
        for &edge in core.adjacency(node, Direction::Outgoing) {
            let next = core.neighbor_of(edge, node, Direction::Outgoing);
            let degree = in_degree
                .get_mut(&next)
                .expect("adjacency refers to live nodes");
            *degree -= 1;
            if *degree == 0 {
                frontier.push(Reverse(next));
            }
        }
    }

    if order.len() == graph.node_count() {
        Ok(order)
    } else {
        Err(GraphError::CyclicGraph)
    }
}

/// Connected components as a disjoint cover of every node.
///
/// Edge direction is ignored (weak connectivity on directed graphs).
/// Components are discovered from roots in index order; isolated nodes form
/// singletons.
pub fn connected_components<N, E>(graph: &Graph<N, E>) -> Vec<Vec<NodeIndex>> {
    let core = graph.core();
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut components = Vec::new();

    for root in graph.node_indices() {
        if !visited.insert(root) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for direction in [Direction::Outgoing, Direction::Incoming] {
                for &edge in core.adjacency(node, direction) {
                    let next = core.neighbor_of(edge, node, direction);
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        components.push(component);
    }

    components
}

/// Strongly connected components of a directed graph (iterative Tarjan).
///
/// Degenerates to one singleton per node on a DAG. On undirected graphs
/// strong connectivity coincides with plain connectivity, so this delegates
/// to [`connected_components`]. Components come out in reverse topological
/// order of the condensation.
pub fn strongly_connected_components<N, E>(graph: &Graph<N, E>) -> Vec<Vec<NodeIndex>> {
    if graph.kind() == GraphKind::Undirected {
        return connected_components(graph);
    }

    let core = graph.core();
    let mut order: HashMap<NodeIndex, usize> = HashMap::new();
    let mut lowlink: HashMap<NodeIndex, usize> = HashMap::new();
    let mut on_stack: HashSet<NodeIndex> = HashSet::new();
    let mut stack: Vec<NodeIndex> = Vec::new();
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();
    let mut counter = 0usize;

    for root in graph.node_indices() {
        if order.contains_key(&root) {
            continue;
        }
        order.insert(root, counter);
        lowlink.insert(root, counter);
        counter += 1;
        stack.push(root);
        on_stack.insert(root);
        let mut frames: Vec<(NodeIndex, usize)> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;
            let adjacency = core.adjacency(node, Direction::Outgoing);
            if frame.1 < adjacency.len() {
                let edge = adjacency[frame.1];
                frame.1 += 1;
                let next = core.neighbor_of(edge, node, Direction::Outgoing);
                if !order.contains_key(&next) {
                    order.insert(next, counter);
                    lowlink.insert(next, counter);
                    counter += 1;
                    stack.push(next);
                    on_stack.insert(next);
                    frames.push((next, 0));
                } else if on_stack.contains(&next) {
                    let reach = order[&next];
                    let low = lowlink.get_mut(&node).expect("visited node has lowlink");
                    if reach < *low {
                        *low = reach;
                    }
                }
            } else {
                frames.pop();
                let low = lowlink[&node];
                if let Some(parent) = frames.last() {
                    let parent_low = lowlink
                        .get_mut(&parent.0)
                        .expect("visited node has lowlink");
                    if low < *parent_low {
                        *parent_low = low;
                    }
                }
                if low == order[&node] {
                    let mut component = Vec::new();
                    loop {
                        let member = stack.pop().expect("component root is on the stack");
                        on_stack.remove(&member);
                        component.push(member);
                        if member == node {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }
    }

    components
}

/// A two-coloring of the graph, if one exists.
///
/// Breadth-first coloring over every component, direction-blind. Fails with
/// [`GraphError::OddCycle`] when an edge joins two same-colored nodes
/// (self-loops always do).
pub fn bipartite_coloring<N, E>(
    graph: &Graph<N, E>,
) -> Result<BTreeMap<NodeIndex, u8>, GraphError> {
    let core = graph.core();
    let mut colors: BTreeMap<NodeIndex, u8> = BTreeMap::new();

    for root in graph.node_indices() {
        if colors.contains_key(&root) {
            continue;
        }
        colors.insert(root, 0);
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            let color = colors[&node];
            for direction in [Direction::Outgoing, Direction::Incoming] {
                for &edge in core.adjacency(node, direction) {
                    let next = core.neighbor_of(edge, node, direction);
                    match colors.get(&next) {
                        Some(&other) if other == color => return Err(GraphError::OddCycle),
                        Some(_) => {}
                        None => {
                            colors.insert(next, 1 - color);
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
    }

    Ok(colors)
}
