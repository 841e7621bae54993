//! Edmonds-Karp maximum flow.
//!
//! # Algorithm
//!
//! 1. Residual capacities start equal to the capacities; all flows are 0.
//! 2. BFS from the source over edges with positive residual capacity.
//!    If the sink is unreached, the current flow is maximal.
//! 3. Walk the predecessor chain back from the sink to find the
//!    bottleneck residual capacity.
//! 4. Push the bottleneck along the path: forward residuals drop, reverse
//!    residuals grow, and the net flow on each edge is updated (cancelling
//!    opposing flow first).
//! 5. Repeat from 2.
//!
//! # Complexity
//! O(V · E²) augmentations bound; each BFS is O(V²) on the dense matrix.
//!
//! # Reference
//! Edmonds & Karp (1972), "Theoretical Improvements in Algorithmic
//! Efficiency for Network Flow Problems"

use log::{debug, info, warn};

use super::{AugmentingPath, FlowEdge, MaxFlowResult, MinCut, ResidualGraph};
use crate::error::{Error, Result};
use crate::models::FlowNetwork;
use crate::validation::validate_terminals;

/// Edmonds-Karp max-flow solver.
///
/// # Example
///
/// ```
/// use u_flowsched::flow::EdmondsKarp;
/// use u_flowsched::models::FlowNetwork;
///
/// let network = FlowNetwork::from_matrix(&[
///     [0, 10, 10, 0],
///     [0, 0, 0, 10],
///     [0, 0, 0, 10],
///     [0, 0, 0, 0],
/// ]).unwrap();
///
/// let result = EdmondsKarp::new().solve(&network, 0, 3).unwrap();
/// assert_eq!(result.total_flow(), 20);
/// assert_eq!(result.flow_edges()[0].to_string(), "s - 1: 10");
/// ```
#[derive(Debug, Clone)]
pub struct EdmondsKarp {
    source_label: String,
    sink_label: String,
    max_augmentations: Option<usize>,
}

impl EdmondsKarp {
    /// Creates a solver with labels `"s"` / `"t"` and no augmentation cap.
    pub fn new() -> Self {
        Self {
            source_label: "s".to_string(),
            sink_label: "t".to_string(),
            max_augmentations: None,
        }
    }

    /// Sets the label used for the source in flow edges.
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }

    /// Sets the label used for the sink in flow edges.
    pub fn with_sink_label(mut self, label: impl Into<String>) -> Self {
        self.sink_label = label.into();
        self
    }

    /// Stops after at most `limit` augmentations.
    ///
    /// If augmenting paths remain when the cap is hit, the result reports
    /// [`MaxFlowResult::is_optimal`] as `false` and carries no min cut.
    pub fn with_max_augmentations(mut self, limit: usize) -> Self {
        self.max_augmentations = Some(limit);
        self
    }

    /// Computes the maximum flow from `source` to `sink`.
    ///
    /// Fails with [`Error::InvalidGraph`] if either terminal is out of bounds
    /// or they coincide.
    pub fn solve(
        &self,
        network: &FlowNetwork,
        source: usize,
        sink: usize,
    ) -> Result<MaxFlowResult> {
        let n = network.vertex_count();
        if let Err(errors) = validate_terminals(n, source, sink) {
            warn!("rejected max-flow input: {} problem(s)", errors.len());
            return Err(Error::InvalidGraph(errors));
        }

        let mut residual = ResidualGraph::new(network);
        let mut flow = vec![0i64; n * n];
        let mut total_flow = 0i64;
        let mut augmentations = 0usize;
        let mut optimal = true;

        while let Some(path) = residual.shortest_path(source, sink) {
            if self
                .max_augmentations
                .is_some_and(|limit| augmentations >= limit)
            {
                warn!("augmentation cap {augmentations} reached before optimality");
                optimal = false;
                break;
            }

            let amount = path.bottleneck;
            residual.augment(&path, amount);
            push_net_flow(&mut flow, n, &path, amount);
            total_flow += amount;
            augmentations += 1;
            debug!("augmenting path {:?} carries {amount}", path.vertices);
        }

        let min_cut =
            optimal.then(|| MinCut::from_partition(network, &residual.reachable_from(source)));
        let edges = self.collect_edges(network, &flow, source, sink);

        info!(
            "max flow {total_flow} from {source} to {sink} after {augmentations} augmentation(s)"
        );

        Ok(MaxFlowResult {
            total_flow,
            vertex_count: n,
            source,
            sink,
            flow,
            edges,
            augmentations,
            min_cut,
        })
    }

    fn collect_edges(
        &self,
        network: &FlowNetwork,
        flow: &[i64],
        source: usize,
        sink: usize,
    ) -> Vec<FlowEdge> {
        let n = network.vertex_count();
        let label = |v: usize| -> String {
            if v == source {
                self.source_label.clone()
            } else if v == sink {
                self.sink_label.clone()
            } else {
                network
                    .label(v)
                    .map_or_else(|| v.to_string(), str::to_string)
            }
        };

        let mut edges = Vec::new();
        for u in 0..n {
            for v in 0..n {
                let f = flow[u * n + v];
                if f > 0 {
                    edges.push(FlowEdge {
                        from: u,
                        to: v,
                        from_label: label(u),
                        to_label: label(v),
                        flow: f,
                    });
                }
            }
        }
        edges
    }
}

impl Default for EdmondsKarp {
    fn default() -> Self {
        Self::new()
    }
}

/// Records `amount` along each path edge as net flow.
///
/// Flow already running the opposite way is cancelled first, so `u -> v`
/// and `v -> u` never both carry flow.
fn push_net_flow(flow: &mut [i64], n: usize, path: &AugmentingPath, amount: i64) {
    for (u, v) in path.edges() {
        let reverse = v * n + u;
        let cancelled = flow[reverse].min(amount);
        flow[reverse] -= cancelled;
        flow[u * n + v] += amount - cancelled;
    }
}

/// Computes the maximum flow on a raw capacity matrix.
///
/// Validates the whole input first and reports every problem found:
/// non-square matrix, negative capacity, self-loop, out-of-bounds or
/// coinciding terminals.
///
/// # Example
///
/// ```
/// let capacity = vec![
///     vec![0, 3, 2, 0],
///     vec![0, 0, 1, 2],
///     vec![0, 0, 0, 3],
///     vec![0, 0, 0, 0],
/// ];
/// let result = u_flowsched::flow::max_flow(&capacity, 0, 3).unwrap();
/// assert_eq!(result.total_flow(), 5);
/// ```
pub fn max_flow<R: AsRef<[i64]>>(
    capacity: &[R],
    source: usize,
    sink: usize,
) -> Result<MaxFlowResult> {
    if let Err(errors) = crate::validation::validate_network(capacity, source, sink) {
        warn!("rejected max-flow input: {} problem(s)", errors.len());
        return Err(Error::InvalidGraph(errors));
    }
    let network = FlowNetwork::from_matrix(capacity)?;
    EdmondsKarp::new().solve(&network, source, sink)
}
