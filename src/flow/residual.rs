//! Residual graph with breadth-first augmenting path search.
//!
//! # Invariants
//! - `residual[u][v] >= 0` at all times.
//! - Pushing `f` along `u -> v` lowers `residual[u][v]` by `f` and raises
//!   `residual[v][u]` by `f`.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.2

use std::collections::VecDeque;

use crate::models::FlowNetwork;

/// A shortest (fewest-edge) source-to-sink path in the residual graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    /// Vertices from source to sink, inclusive.
    pub vertices: Vec<usize>,
    /// Minimum residual capacity along the path.
    pub bottleneck: i64,
}

impl AugmentingPath {
    /// Path edges as `(from, to)` pairs, source first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Whether the path has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Residual capacities for a flow network.
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    vertex_count: usize,
    residual: Vec<i64>,
}

impl ResidualGraph {
    /// Initializes residual capacities equal to the network's capacities.
    pub fn new(network: &FlowNetwork) -> Self {
        let n = network.vertex_count();
        let mut residual = Vec::with_capacity(n * n);
        for u in 0..n {
            residual.extend_from_slice(network.row(u));
        }
        Self {
            vertex_count: n,
            residual,
        }
    }

    /// Residual capacity of `u -> v`.
    #[inline]
    pub fn residual(&self, u: usize, v: usize) -> i64 {
        self.residual[u * self.vertex_count + v]
    }

    /// Finds a fewest-edge augmenting path from `source` to `sink`.
    ///
    /// Neighbours are explored in ascending vertex index, so ties between
    /// equally short paths always resolve the same way. Returns `None`
    /// once the sink is unreachable.
    pub fn shortest_path(&self, source: usize, sink: usize) -> Option<AugmentingPath> {
        let parent = self.search(source, Some(sink));
        if parent[sink].is_none() {
            return None;
        }

        let mut vertices = vec![sink];
        let mut bottleneck = i64::MAX;
        let mut v = sink;
        while v != source {
            let u = parent[v]?;
            bottleneck = bottleneck.min(self.residual(u, v));
            vertices.push(u);
            v = u;
        }
        vertices.reverse();

        Some(AugmentingPath {
            vertices,
            bottleneck,
        })
    }

    /// Pushes `amount` along every edge of `path`.
    ///
    /// # Panics
    /// If `amount` exceeds the residual capacity of any path edge.
    pub fn augment(&mut self, path: &AugmentingPath, amount: i64) {
        let n = self.vertex_count;
        for (u, v) in path.edges() {
            let forward = u * n + v;
            assert!(self.residual[forward] >= amount, "augmentation exceeds residual");
            self.residual[forward] -= amount;
            self.residual[v * n + u] += amount;
        }
    }

    /// Vertices reachable from `source` over positive residual edges.
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        self.search(source, None)
            .iter()
            .map(Option::is_some)
            .collect()
    }

    /// BFS predecessor map. The source maps to itself; unreached vertices
    /// map to `None`. Stops early once `target` is discovered.
    fn search(&self, source: usize, target: Option<usize>) -> Vec<Option<usize>> {
        let n = self.vertex_count;
        let mut parent = vec![None; n];
        parent[source] = Some(source);

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if parent[v].is_none() && self.residual(u, v) > 0 {
                    parent[v] = Some(u);
                    if Some(v) == target {
                        return parent;
                    }
                    queue.push_back(v);
                }
            }
        }

        parent
    }
}
