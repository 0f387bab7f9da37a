//! Weighted shortest paths: Dijkstra, A*, Bellman-Ford, Floyd-Warshall.
//!
//! Every algorithm takes a caller cost function over edge payloads and is
//! generic over the cost type (anything `Copy + PartialOrd + Add + Zero`,
//! so plain floats and integers both work). Unreachable targets are absent
//! results, never errors; negative cycles are explicit errors. Equal-cost
//! frontier ties break toward the lowest node index, so path output is
//! deterministic. Unknown source/target indices behave as unreachable.
//!
//! Undirected graphs relax every edge in both directions.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::ops::Add;

use num_traits::Zero;

use crate::error::GraphError;
use crate::graph::storage::Direction;
use crate::graph::Graph;
use crate::index::NodeIndex;

/// A shortest path: total distance plus the node sequence from source to
/// target inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<C> {
    /// Sum of edge costs along the path.
    pub distance: C,
    /// Node indices from source to target; a lone source when they coincide.
    pub path: Vec<NodeIndex>,
}

/// Min-heap adapter over `std::collections::BinaryHeap`.
///
/// Orders by score descending-for-max-heap (so the smallest score pops
/// first) and breaks score ties toward the smaller payload, which is what
/// makes frontier pops deterministic. Incomparable scores (NaN) sort last.
struct MinScored<C, T>(C, T);

impl<C: PartialOrd, T: Ord> PartialEq for MinScored<C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd, T: Ord> Eq for MinScored<C, T> {}

impl<C: PartialOrd, T: Ord> PartialOrd for MinScored<C, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd, T: Ord> Ord for MinScored<C, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            // Smaller payload should pop first from the max-heap.
            other.1.cmp(&self.1)
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a != a && b != b {
            Ordering::Equal
        } else if a != a {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

fn rebuild_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = predecessors[&current];
        path.push(current);
    }
    path.reverse();
    path
}

/// Single-pair shortest path with non-negative costs (Dijkstra).
///
/// Binary-heap priority queue, O((V+E) log V). Non-negativity of `cost` is
/// the caller's responsibility and is not validated. Returns `None` when
/// `target` is unreachable from `source`.
pub fn dijkstra<N, E, C, F>(
    graph: &Graph<N, E>,
    source: NodeIndex,
    target: NodeIndex,
    mut cost: F,
) -> Option<PathResult<C>>
where
    C: Copy + PartialOrd + Add<Output = C> + Zero,
    F: FnMut(&E) -> C,
{
    astar(graph, source, target, &mut cost, |_, _| C::zero())
}

/// Single-pair shortest path guided by a heuristic (A*).
///
/// `heuristic(node, payload)` must never overestimate the true remaining
/// cost to `target` for the result to be optimal; with a zero heuristic
/// this is exactly Dijkstra. Returns `None` when `target` is unreachable.
pub fn astar<N, E, C, F, H>(
    graph: &Graph<N, E>,
    source: NodeIndex,
    target: NodeIndex,
    mut cost: F,
    mut heuristic: H,
) -> Option<PathResult<C>>
where
    C: Copy + PartialOrd + Add<Output = C> + Zero,
    F: FnMut(&E) -> C,
    H: FnMut(NodeIndex, &N) -> C,
{
    if !graph.contains_node(source) || !graph.contains_node(target) {
        return None;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(?source, ?target, "shortest-path search started");

    let core = graph.core();
    let mut best: HashMap<NodeIndex, C> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best.insert(source, C::zero());
    let source_estimate = heuristic(source, &core.nodes[&source]);
    frontier.push(MinScored(C::zero() + source_estimate, source));

    while let Some(MinScored(_, node)) = frontier.pop() {
        if node == target {
            break;
        }
        let reached = best[&node];
        for &edge in core.adjacency(node, Direction::Outgoing) {
            let next = core.neighbor_of(edge, node, Direction::Outgoing);
            let step = cost(&core.edges[&edge].payload);
            let candidate = reached + step;
            if best.get(&next).map_or(true, |&known| candidate < known) {
                best.insert(next, candidate);
                predecessors.insert(next, node);
                let estimate = heuristic(next, &core.nodes[&next]);
                frontier.push(MinScored(candidate + estimate, next));
            }
        }
    }

    best.get(&target).map(|&distance| PathResult {
        distance,
        path: rebuild_path(&predecessors, source, target),
    })
}

/// Single-source shortest-path tree tolerating negative edge costs.
///
/// Produced by [`bellman_ford`]; exposes per-target distances and paths.
#[derive(Debug, Clone)]
pub struct BellmanFord<C> {
    source: NodeIndex,
    distances: HashMap<NodeIndex, C>,
    predecessors: HashMap<NodeIndex, NodeIndex>,
}

impl<C: Copy> BellmanFord<C> {
    /// The source the tree was grown from.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Distance to `target`, absent when unreachable.
    pub fn distance(&self, target: NodeIndex) -> Option<C> {
        self.distances.get(&target).copied()
    }

    /// Shortest path to `target`, absent when unreachable.
    pub fn path_to(&self, target: NodeIndex) -> Option<PathResult<C>> {
        let distance = self.distance(target)?;
        Some(PathResult {
            distance,
            path: rebuild_path(&self.predecessors, self.source, target),
        })
    }
}

/// Single-source shortest paths tolerating negative edge costs
/// (Bellman-Ford).
///
/// V−1 relaxation passes over the edge list plus one verification pass; an
/// edge still relaxable after that proves a reachable negative-sum cycle
/// and fails with [`GraphError::NegativeCycle`]. O(V·E).
pub fn bellman_ford<N, E, C, F>(
    graph: &Graph<N, E>,
    source: NodeIndex,
    mut cost: F,
) -> Result<BellmanFord<C>, GraphError>
where
    C: Copy + PartialOrd + Add<Output = C> + Zero,
    F: FnMut(&E) -> C,
{
    let mut distances: HashMap<NodeIndex, C> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    // Deterministic edge list in index order; undirected edges relax both
    // ways (a single entry for self-loops).
    let mut arcs: Vec<(NodeIndex, NodeIndex, C)> = Vec::with_capacity(graph.edge_count() * 2);
    for edge in graph.edges() {
        let weight = cost(edge.payload());
        arcs.push((edge.source(), edge.target(), weight));
        if !graph.is_directed() && edge.source() != edge.target() {
            arcs.push((edge.target(), edge.source(), weight));
        }
    }

    if graph.contains_node(source) {
        distances.insert(source, C::zero());
    }

    let passes = graph.node_count().saturating_sub(1);
    for _ in 0..passes {
        let mut changed = false;
        for &(from, to, weight) in &arcs {
            let Some(&reached) = distances.get(&from) else {
                continue;
            };
            let candidate = reached + weight;
            if distances.get(&to).map_or(true, |&known| candidate < known) {
                distances.insert(to, candidate);
                predecessors.insert(to, from);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // Verification pass: any remaining slack proves a negative cycle.
    for &(from, to, weight) in &arcs {
        if let Some(&reached) = distances.get(&from) {
            let candidate = reached + weight;
            if distances.get(&to).map_or(true, |&known| candidate < known) {
                return Err(GraphError::NegativeCycle);
            }
        }
    }

    Ok(BellmanFord {
        source,
        distances,
        predecessors,
    })
}

/// Single-pair convenience over [`bellman_ford`].
pub fn bellman_ford_path<N, E, C, F>(
    graph: &Graph<N, E>,
    source: NodeIndex,
    target: NodeIndex,
    cost: F,
) -> Result<Option<PathResult<C>>, GraphError>
where
    C: Copy + PartialOrd + Add<Output = C> + Zero,
    F: FnMut(&E) -> C,
{
    Ok(bellman_ford(graph, source, cost)?.path_to(target))
}

/// All-pairs distances and predecessors, produced by [`floyd_warshall`].
#[derive(Debug, Clone)]
pub struct FloydWarshall<C> {
    order: Vec<NodeIndex>,
    positions: HashMap<NodeIndex, usize>,
    // Row-major n×n; `None` marks unreachable pairs.
    distances: Vec<Option<C>>,
    // predecessors[i*n + j]: position of j's predecessor on the i→j path.
    predecessors: Vec<Option<usize>>,
}

impl<C: Copy> FloydWarshall<C> {
    /// Distance from `a` to `b`, absent when unreachable.
    pub fn distance(&self, a: NodeIndex, b: NodeIndex) -> Option<C> {
        let i = *self.positions.get(&a)?;
        let j = *self.positions.get(&b)?;
        self.distances[i * self.order.len() + j]
    }

    /// Shortest path from `a` to `b`, absent when unreachable.
    pub fn path(&self, a: NodeIndex, b: NodeIndex) -> Option<PathResult<C>> {
        let distance = self.distance(a, b)?;
        let n = self.order.len();
        let i = self.positions[&a];
        let mut current = self.positions[&b];
        let mut path = vec![self.order[current]];
        while current != i {
            current = self.predecessors[i * n + current]
                .expect("reachable pair has a predecessor chain");
            path.push(self.order[current]);
        }
        path.reverse();
        Some(PathResult { distance, path })
    }
}

/// All-pairs shortest paths (Floyd-Warshall), O(V³) time and O(V²) space.
///
/// Negative edge costs are tolerated; a negative value appearing on the
/// distance diagonal proves a negative cycle and fails with
/// [`GraphError::NegativeCycle`].
pub fn floyd_warshall<N, E, C, F>(
    graph: &Graph<N, E>,
    mut cost: F,
) -> Result<FloydWarshall<C>, GraphError>
where
    C: Copy + PartialOrd + Add<Output = C> + Zero,
    F: FnMut(&E) -> C,
{
    let order: Vec<NodeIndex> = graph.node_indices().collect();
    let n = order.len();
    let positions: HashMap<NodeIndex, usize> = order
        .iter()
        .enumerate()
        .map(|(pos, &ix)| (ix, pos))
        .collect();

    let mut distances: Vec<Option<C>> = vec![None; n * n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n * n];
    for i in 0..n {
        distances[i * n + i] = Some(C::zero());
    }

    let mut relax = |distances: &mut Vec<Option<C>>,
                     predecessors: &mut Vec<Option<usize>>,
                     i: usize,
                     j: usize,
                     weight: C| {
        if distances[i * n + j].map_or(true, |known| weight < known) {
            distances[i * n + j] = Some(weight);
            predecessors[i * n + j] = Some(i);
        }
    };
    for edge in graph.edges() {
        let weight = cost(edge.payload());
        let i = positions[&edge.source()];
        let j = positions[&edge.target()];
        relax(&mut distances, &mut predecessors, i, j, weight);
        if !graph.is_directed() {
            relax(&mut distances, &mut predecessors, j, i, weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(through) = distances[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(out) = distances[k * n + j] else {
                    continue;
                };
                let candidate = through + out;
                if distances[i * n + j].map_or(true, |known| candidate < known) {
                    distances[i * n + j] = Some(candidate);
                    predecessors[i * n + j] = predecessors[k * n + j];
                }
            }
        }
    }

    for i in 0..n {
        if let Some(diagonal) = distances[i * n + i] {
            if diagonal < C::zero() {
                return Err(GraphError::NegativeCycle);
            }
        }
    }

    Ok(FloydWarshall {
        order,
        positions,
        distances,
        predecessors,
    })
}
