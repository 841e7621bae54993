//! Flow network model.
//!
//! A directed capacitated graph over vertices `0..n`, stored as an owned
//! dense `n × n` capacity matrix. Capacity `0` means "no edge".
//!
//! # Invariants
//! - The matrix is square and every capacity is `>= 0`.
//! - Diagonal entries are `0` (self-loops are rejected).
//! - When labels are present there is exactly one per vertex.
//! - The sum of all capacities fits in `i64`, so no flow, cut or residual
//!   value derived from the network can overflow.
//!
//! All constructors validate, so a `FlowNetwork` value always upholds
//! these invariants. Deserialization goes through the same checks.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::{
    validate_capacity_matrix, validate_capacity_total, validate_edge, validate_labels,
};

/// A directed capacitated graph on a dense capacity matrix.
///
/// # Example
/// ```
/// use u_flowsched::models::FlowNetwork;
///
/// let network = FlowNetwork::from_matrix(&[
///     [0, 10, 10, 0],
///     [0, 0, 0, 10],
///     [0, 0, 0, 10],
///     [0, 0, 0, 0],
/// ]).unwrap();
/// assert_eq!(network.vertex_count(), 4);
/// assert_eq!(network.outgoing_capacity(0), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NetworkData", into = "NetworkData")]
pub struct FlowNetwork {
    vertex_count: usize,
    /// Row-major `vertex_count × vertex_count` capacities.
    capacity: Vec<i64>,
    labels: Option<Vec<String>>,
}

/// Serialized form: nested rows plus optional labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NetworkData {
    capacity: Vec<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<String>>,
}

impl FlowNetwork {
    /// Creates a network with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            capacity: vec![0; vertex_count * vertex_count],
            labels: None,
        }
    }

    /// Builds a network from capacity rows.
    ///
    /// Fails with [`Error::InvalidGraph`] if the matrix is not square, holds a
    /// negative capacity, has a non-zero diagonal entry, or its capacities
    /// sum past `i64::MAX`.
    pub fn from_matrix<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        validate_capacity_matrix(rows).map_err(Error::InvalidGraph)?;

        let vertex_count = rows.len();
        let mut capacity = Vec::with_capacity(vertex_count * vertex_count);
        for row in rows {
            capacity.extend_from_slice(row.as_ref());
        }

        Ok(Self {
            vertex_count,
            capacity,
            labels: None,
        })
    }

    /// Attaches a display label to every vertex.
    pub fn with_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        validate_labels(self.vertex_count, &labels).map_err(Error::InvalidGraph)?;
        self.labels = Some(labels);
        Ok(self)
    }

    /// Sets the capacity of edge `from -> to`, replacing any previous value.
    ///
    /// The network is left unchanged if the new capacity would push the
    /// total past `i64::MAX`.
    pub fn set_capacity(&mut self, from: usize, to: usize, capacity: i64) -> Result<()> {
        validate_edge(self.vertex_count, from, to, capacity).map_err(Error::InvalidGraph)?;
        let idx = self.index(from, to);
        let others = self
            .capacity
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(_, &c)| c);
        validate_capacity_total(others.chain([capacity])).map_err(Error::InvalidGraph)?;
        self.capacity[idx] = capacity;
        Ok(())
    }

    /// Builder form of [`set_capacity`](Self::set_capacity).
    pub fn with_edge(mut self, from: usize, to: usize, capacity: i64) -> Result<Self> {
        self.set_capacity(from, to, capacity)?;
        Ok(self)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Capacity of edge `from -> to` (`0` if absent).
    ///
    /// # Panics
    /// If either index is out of bounds.
    #[inline]
    pub fn capacity(&self, from: usize, to: usize) -> i64 {
        self.capacity[self.index(from, to)]
    }

    /// Outgoing capacities of `from`, indexed by target vertex.
    pub fn row(&self, from: usize) -> &[i64] {
        let start = from * self.vertex_count;
        &self.capacity[start..start + self.vertex_count]
    }

    /// Sum of capacities leaving `vertex`.
    pub fn outgoing_capacity(&self, vertex: usize) -> i64 {
        self.row(vertex).iter().sum()
    }

    /// Sum of capacities entering `vertex`.
    pub fn incoming_capacity(&self, vertex: usize) -> i64 {
        (0..self.vertex_count).map(|u| self.capacity(u, vertex)).sum()
    }

    /// Edges with positive capacity, as `(from, to, capacity)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        let n = self.vertex_count;
        self.capacity
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(move |(i, &c)| (i / n, i % n, c))
    }

    /// Number of edges with positive capacity.
    pub fn edge_count(&self) -> usize {
        self.capacity.iter().filter(|&&c| c > 0).count()
    }

    /// Display label of `vertex`, if labels were attached.
    pub fn label(&self, vertex: usize) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|l| l.get(vertex))
            .map(String::as_str)
    }

    /// Copies the capacities back out as nested rows.
    pub fn to_matrix(&self) -> Vec<Vec<i64>> {
        (0..self.vertex_count).map(|u| self.row(u).to_vec()).collect()
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        assert!(
            from < self.vertex_count && to < self.vertex_count,
            "vertex out of bounds"
        );
        from * self.vertex_count + to
    }
}

impl TryFrom<NetworkData> for FlowNetwork {
    type Error = Error;

    fn try_from(data: NetworkData) -> Result<Self> {
        let network = FlowNetwork::from_matrix(&data.capacity)?;
        match data.labels {
            Some(labels) => network.with_labels(labels),
            None => Ok(network),
        }
    }
}

impl From<FlowNetwork> for NetworkData {
    fn from(network: FlowNetwork) -> Self {
        Self {
            capacity: network.to_matrix(),
            labels: network.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn diamond() -> FlowNetwork {
        FlowNetwork::new(4)
            .with_edge(0, 1, 10)
            .and_then(|n| n.with_edge(0, 2, 10))
            .and_then(|n| n.with_edge(1, 3, 10))
            .and_then(|n| n.with_edge(2, 3, 10))
            .unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let network = FlowNetwork::new(3);
        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.edge_count(), 0);
        assert_eq!(network.to_matrix(), vec![vec![0; 3]; 3]);
    }

    #[test]
    fn test_from_matrix_matches_builder() {
        let rows = vec![
            vec![0, 10, 10, 0],
            vec![0, 0, 0, 10],
            vec![0, 0, 0, 10],
            vec![0, 0, 0, 0],
        ];
        let network = FlowNetwork::from_matrix(&rows).unwrap();
        assert_eq!(network, diamond());
        assert_eq!(network.to_matrix(), rows);
    }

    #[test]
    fn test_capacity_sums() {
        let network = diamond();
        assert_eq!(network.outgoing_capacity(0), 20);
        assert_eq!(network.incoming_capacity(3), 20);
        assert_eq!(network.incoming_capacity(0), 0);
        assert_eq!(network.capacity(1, 3), 10);
        assert_eq!(network.capacity(3, 1), 0);
    }

    #[test]
    fn test_edges_row_major() {
        let edges: Vec<_> = diamond().edges().collect();
        assert_eq!(edges, vec![(0, 1, 10), (0, 2, 10), (1, 3, 10), (2, 3, 10)]);
    }

    #[test]
    fn test_from_matrix_rejects_non_square() {
        let err = FlowNetwork::from_matrix(&[vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(_)));
        assert!(err.has_kind(ValidationErrorKind::NonSquareMatrix));
    }

    #[test]
    fn test_set_capacity_rejects_bad_edges() {
        let mut network = FlowNetwork::new(3);
        assert!(network
            .set_capacity(1, 1, 4)
            .unwrap_err()
            .has_kind(ValidationErrorKind::SelfLoop));
        assert!(network
            .set_capacity(0, 3, 4)
            .unwrap_err()
            .has_kind(ValidationErrorKind::VertexOutOfBounds));
        assert!(network
            .set_capacity(0, 1, -4)
            .unwrap_err()
            .has_kind(ValidationErrorKind::NegativeCapacity));
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn test_capacity_total_limit() {
        let max = i64::MAX;
        let err = FlowNetwork::from_matrix(&[[0, max], [max, 0]]).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::CapacityOverflow));

        let mut network = FlowNetwork::new(3).with_edge(0, 1, max - 5).unwrap();
        assert!(network
            .set_capacity(1, 2, 6)
            .unwrap_err()
            .has_kind(ValidationErrorKind::CapacityOverflow));
        assert_eq!(network.capacity(1, 2), 0);

        // Replacing an edge only counts its new value.
        network.set_capacity(0, 1, max).unwrap();
        assert_eq!(network.outgoing_capacity(0), max);
        assert_eq!(network.incoming_capacity(1), max);
    }

    #[test]
    fn test_serde_rejects_overflowing_total() {
        let json = format!(r#"{{"capacity":[[0,{0}],[{0},0]]}}"#, i64::MAX);
        assert!(serde_json::from_str::<FlowNetwork>(&json).is_err());
    }

    #[test]
    fn test_labels() {
        let network = diamond().with_labels(["s", "a", "b", "t"]).unwrap();
        assert_eq!(network.label(1), Some("a"));
        assert_eq!(diamond().label(1), None);

        let err = diamond().with_labels(["s", "t"]).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::LabelCountMismatch));
    }

    #[test]
    fn test_serde_roundtrip() {
        let network = diamond().with_labels(["s", "a", "b", "t"]).unwrap();
        let json = serde_json::to_string(&network).unwrap();
        assert!(json.contains("\"capacity\":[[0,10,10,0]"));
        let back: FlowNetwork = serde_json::from_str(&json).unwrap();
        assert_eq!(back, network);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"capacity":[[0,-3],[0,0]]}"#;
        assert!(serde_json::from_str::<FlowNetwork>(json).is_err());

        let json = r#"{"capacity":[[0,3],[0,0]],"labels":["s"]}"#;
        assert!(serde_json::from_str::<FlowNetwork>(json).is_err());
    }
}
