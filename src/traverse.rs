//! Depth-first and breadth-first order generation.
//!
//! Both traversals are pull-based iterators: finite, non-restartable,
//! visit-once, yielding only nodes reachable from the given starts along
//! outgoing edges (symmetric for undirected graphs). DFS keeps an explicit
//! stack so deep or cyclic graphs cannot overflow the call stack; BFS keeps
//! a queue. Neighbor ties break in adjacency-insertion order — DFS pushes
//! each node's neighbors in reverse so the first-inserted neighbor is
//! visited first.

use std::collections::{HashSet, VecDeque};

use crate::graph::storage::Direction;
use crate::graph::Graph;
use crate::index::NodeIndex;

/// Depth-first traversal over a snapshot.
pub struct Dfs<'a, N, E> {
    graph: &'a Graph<N, E>,
    stack: Vec<NodeIndex>,
    visited: HashSet<NodeIndex>,
}

impl<'a, N, E> Dfs<'a, N, E> {
    /// Starts a traversal from the given start nodes, visited in order.
    ///
    /// Start indices not live in the graph are skipped.
    pub fn new<I>(graph: &'a Graph<N, E>, starts: I) -> Self
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        let mut stack: Vec<NodeIndex> = starts
            .into_iter()
            .filter(|&ix| graph.contains_node(ix))
            .collect();
        // The first start must pop first.
        stack.reverse();
        Dfs {
            graph,
            stack,
            visited: HashSet::new(),
        }
    }
}

impl<'a, N, E> Iterator for Dfs<'a, N, E> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.graph.core();
        while let Some(ix) = self.stack.pop() {
            if !self.visited.insert(ix) {
                continue;
            }
            let adjacency = core.adjacency(ix, Direction::Outgoing);
            for &edge in adjacency.iter().rev() {
                let neighbor = core.neighbor_of(edge, ix, Direction::Outgoing);
                if !self.visited.contains(&neighbor) {
                    self.stack.push(neighbor);
                }
            }
            return Some(ix);
        }
        None
    }
}

/// Breadth-first traversal over a snapshot.
pub struct Bfs<'a, N, E> {
    graph: &'a Graph<N, E>,
    queue: VecDeque<NodeIndex>,
    visited: HashSet<NodeIndex>,
}

impl<'a, N, E> Bfs<'a, N, E> {
    /// Starts a traversal from the given start nodes, visited in order.
    ///
    /// Start indices not live in the graph are skipped.
    pub fn new<I>(graph: &'a Graph<N, E>, starts: I) -> Self
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        for ix in starts {
            if graph.contains_node(ix) && visited.insert(ix) {
                queue.push_back(ix);
            }
        }
        Bfs {
            graph,
            queue,
            visited,
        }
    }
}

impl<'a, N, E> Iterator for Bfs<'a, N, E> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.graph.core();
        let ix = self.queue.pop_front()?;
        for &edge in core.adjacency(ix, Direction::Outgoing) {
            let neighbor = core.neighbor_of(edge, ix, Direction::Outgoing);
            if self.visited.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(ix)
    }
}

impl<N, E> Graph<N, E> {
    /// Depth-first order from the given starts. See [`Dfs`].
    pub fn dfs<I>(&self, starts: I) -> Dfs<'_, N, E>
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        Dfs::new(self, starts)
    }

    /// Breadth-first order from the given starts. See [`Bfs`].
    pub fn bfs<I>(&self, starts: I) -> Bfs<'_, N, E>
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        Bfs::new(self, starts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3, plus isolated 4.
    fn diamond_plus_isolate() -> (Graph<(), ()>, Vec<NodeIndex>) {
        let mut ixs = Vec::new();
        let g = Graph::empty_directed().with_mutations(|scope| {
            let n: Vec<_> = (0..5).map(|_| scope.add_node(())).collect();
            scope.add_edge(n[0], n[1], ()).unwrap();
            scope.add_edge(n[0], n[2], ()).unwrap();
            scope.add_edge(n[1], n[3], ()).unwrap();
            scope.add_edge(n[2], n[3], ()).unwrap();
            ixs = n;
        });
        (g, ixs)
    }

    #[test]
    fn dfs_follows_insertion_order_first() {
        let (g, n) = diamond_plus_isolate();
        let order: Vec<_> = g.dfs([n[0]]).collect();
        assert_eq!(order, vec![n[0], n[1], n[3], n[2]]);
    }

    #[test]
    fn bfs_visits_by_layer() {
        let (g, n) = diamond_plus_isolate();
        let order: Vec<_> = g.bfs([n[0]]).collect();
        assert_eq!(order, vec![n[0], n[1], n[2], n[3]]);
    }

    #[test]
    fn unreachable_nodes_are_never_yielded() {
        let (g, n) = diamond_plus_isolate();
        assert!(!g.bfs([n[0]]).any(|ix| ix == n[4]));
        assert!(!g.dfs([n[0]]).any(|ix| ix == n[4]));
    }

    #[test]
    fn multi_start_is_visit_once() {
        let (g, n) = diamond_plus_isolate();
        let order: Vec<_> = g.bfs([n[1], n[2], n[1]]).collect();
        assert_eq!(order, vec![n[1], n[2], n[3]]);
    }

    #[test]
    fn unknown_starts_are_skipped() {
        let (g, n) = diamond_plus_isolate();
        let stale = NodeIndex::new(999);
        let order: Vec<_> = g.dfs([stale, n[4]]).collect();
        assert_eq!(order, vec![n[4]]);
    }

    #[test]
    fn traversal_on_cycles_terminates() {
        let mut ixs = Vec::new();
        let g = Graph::empty_directed().with_mutations(|scope| {
            let a = scope.add_node(());
            let b = scope.add_node(());
            let c = scope.add_node(());
            scope.add_edge(a, b, ()).unwrap();
            scope.add_edge(b, c, ()).unwrap();
            scope.add_edge(c, a, ()).unwrap();
            ixs = vec![a, b, c];
        });
        let order: Vec<_> = g.dfs([ixs[0]]).collect();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn undirected_traversal_is_symmetric() {
        let g: Graph<(), ()> = Graph::empty_undirected();
        let (g, a) = g.add_node(());
        let (g, b) = g.add_node(());
        let (g, _) = g.add_edge(a, b, ()).unwrap();

        let from_b: Vec<_> = g.bfs([b]).collect();
        assert_eq!(from_b, vec![b, a]);
    }
}
