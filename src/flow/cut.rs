//! Minimum s-t cut extraction.
//!
//! Once no augmenting path remains, the vertices reachable from the source
//! in the residual graph form the source side of a minimum cut. Every
//! original edge leaving that set is saturated, and the cut capacity equals
//! the maximum flow (max-flow/min-cut duality).
//!
//! # Reference
//! Ford & Fulkerson (1956), "Maximal Flow Through a Network"

use serde::{Deserialize, Serialize};

use crate::models::FlowNetwork;

/// An original edge crossing a cut from the source side to the sink side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutEdge {
    /// Tail vertex (source side).
    pub from: usize,
    /// Head vertex (sink side).
    pub to: usize,
    /// Capacity of the edge.
    pub capacity: i64,
}

/// A partition of the vertices into a source side and a sink side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// Vertices on the source side, ascending.
    pub source_side: Vec<usize>,
    /// Vertices on the sink side, ascending.
    pub sink_side: Vec<usize>,
    /// Edges from the source side to the sink side with positive capacity.
    pub edges: Vec<CutEdge>,
    /// Total capacity of `edges`.
    pub capacity: i64,
}

impl MinCut {
    /// Builds the cut induced by a source-side membership mask.
    ///
    /// `on_source_side[v]` says whether `v` belongs to the source side.
    pub fn from_partition(network: &FlowNetwork, on_source_side: &[bool]) -> Self {
        let mut source_side = Vec::new();
        let mut sink_side = Vec::new();
        for (v, &inside) in on_source_side.iter().enumerate() {
            if inside {
                source_side.push(v);
            } else {
                sink_side.push(v);
            }
        }

        let mut edges = Vec::new();
        for &u in &source_side {
            for &v in &sink_side {
                let capacity = network.capacity(u, v);
                if capacity > 0 {
                    edges.push(CutEdge {
                        from: u,
                        to: v,
                        capacity,
                    });
                }
            }
        }
        let capacity = edges.iter().map(|e| e.capacity).sum();

        Self {
            source_side,
            sink_side,
            edges,
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_capacity() {
        let network = FlowNetwork::from_matrix(&[
            [0, 10, 10, 0],
            [0, 0, 0, 10],
            [0, 0, 0, 10],
            [0, 0, 0, 0],
        ])
        .unwrap();

        let cut = MinCut::from_partition(&network, &[true, true, false, false]);
        assert_eq!(cut.source_side, vec![0, 1]);
        assert_eq!(cut.sink_side, vec![2, 3]);
        assert_eq!(
            cut.edges,
            vec![
                CutEdge { from: 0, to: 2, capacity: 10 },
                CutEdge { from: 1, to: 3, capacity: 10 },
            ]
        );
        assert_eq!(cut.capacity, 20);
    }

    #[test]
    fn test_backward_edges_do_not_count() {
        // 1 → 0 crosses sink side to source side and is ignored
        let network = FlowNetwork::from_matrix(&[[0, 0], [5, 0]]).unwrap();
        let cut = MinCut::from_partition(&network, &[true, false]);
        assert!(cut.edges.is_empty());
        assert_eq!(cut.capacity, 0);
    }
}
