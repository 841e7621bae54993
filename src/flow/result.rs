//! Max-flow solution: total value, per-edge flows, and the minimum cut.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MinCut;

/// An edge carrying positive flow in the final assignment.
///
/// Source and sink render with symbolic labels (`"s"` / `"t"` by default);
/// other vertices use their network label or their index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Tail vertex index.
    pub from: usize,
    /// Head vertex index.
    pub to: usize,
    /// Display label of `from`.
    pub from_label: String,
    /// Display label of `to`.
    pub to_label: String,
    /// Flow carried by the edge (`> 0`).
    pub flow: i64,
}

impl FlowEdge {
    /// `(from_label, to_label, flow)` tuple.
    pub fn as_tuple(&self) -> (&str, &str, i64) {
        (&self.from_label, &self.to_label, self.flow)
    }
}

impl fmt::Display for FlowEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {}", self.from_label, self.to_label, self.flow)
    }
}

/// Result of a max-flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowResult {
    pub(crate) total_flow: i64,
    pub(crate) vertex_count: usize,
    pub(crate) source: usize,
    pub(crate) sink: usize,
    /// Row-major net flow per edge.
    pub(crate) flow: Vec<i64>,
    pub(crate) edges: Vec<FlowEdge>,
    pub(crate) augmentations: usize,
    pub(crate) min_cut: Option<MinCut>,
}

impl MaxFlowResult {
    /// Total flow from source to sink.
    pub fn total_flow(&self) -> i64 {
        self.total_flow
    }

    /// Net flow on edge `from -> to`, `None` if either index is out of bounds.
    pub fn flow(&self, from: usize, to: usize) -> Option<i64> {
        let n = self.vertex_count;
        (from < n && to < n).then(|| self.flow[from * n + to])
    }

    /// Edges with positive flow, in row-major order.
    pub fn flow_edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Number of augmenting paths used.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Whether the search ran until no augmenting path remained.
    ///
    /// `false` only when an augmentation cap stopped the solver early.
    pub fn is_optimal(&self) -> bool {
        self.min_cut.is_some()
    }

    /// The minimum cut certifying optimality, if the flow is optimal.
    pub fn min_cut(&self) -> Option<&MinCut> {
        self.min_cut.as_ref()
    }

    /// Total flow entering `vertex`.
    ///
    /// # Panics
    /// If `vertex` is out of bounds.
    pub fn inflow(&self, vertex: usize) -> i64 {
        let n = self.vertex_count;
        assert!(vertex < n, "vertex out of bounds");
        (0..n).map(|u| self.flow[u * n + vertex]).sum()
    }

    /// Total flow leaving `vertex`.
    ///
    /// # Panics
    /// If `vertex` is out of bounds.
    pub fn outflow(&self, vertex: usize) -> i64 {
        let n = self.vertex_count;
        self.flow[vertex * n..(vertex + 1) * n].iter().sum()
    }

    /// Whether inflow equals outflow at every vertex except source and sink.
    pub fn is_conserved(&self) -> bool {
        (0..self.vertex_count)
            .filter(|&v| v != self.source && v != self.sink)
            .all(|v| self.inflow(v) == self.outflow(v))
    }

    /// Splits into the total flow and the positive-flow edges.
    pub fn into_parts(self) -> (i64, Vec<FlowEdge>) {
        (self.total_flow, self.edges)
    }
}

impl fmt::Display for MaxFlowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow network:")?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
