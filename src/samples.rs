//! Small fixed problem instances.
//!
//! Four flow networks (source at vertex 0, sink at the last vertex) and a
//! five-contestant triathlon job list. Used by the demo binary and as
//! regression fixtures.

use crate::error::Result;
use crate::models::{FlowNetwork, Job};

/// A named flow network with its terminals.
#[derive(Debug, Clone)]
pub struct SampleNetwork {
    /// Short description.
    pub name: &'static str,
    /// The network.
    pub network: FlowNetwork,
    /// Source vertex.
    pub source: usize,
    /// Sink vertex.
    pub sink: usize,
}

const QUESTION1: [[i64; 8]; 8] = [
    [0, 16, 11, 0, 0, 15, 0, 0],
    [0, 0, 6, 7, 8, 0, 0, 0],
    [0, 0, 0, 0, 12, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 18],
    [0, 0, 0, 6, 0, 0, 8, 10],
    [0, 0, 4, 0, 5, 0, 6, 0],
    [0, 0, 0, 0, 0, 0, 0, 13],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const QUESTION2: [[i64; 7]; 7] = [
    [0, 0, 15, 0, 10, 20, 0],
    [0, 0, 0, 0, 0, 0, 10],
    [0, 100, 0, 0, 0, 0, 0],
    [0, 100, 100, 0, 0, 0, 5],
    [0, 0, 100, 0, 0, 0, 0],
    [0, 0, 0, 100, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
];

// Layered: 4 → 9 → 9 vertices, unit capacities past the first layer.
const QUESTION3_EDGES: &[(usize, usize, i64)] = &[
    (0, 1, 3), (0, 2, 2), (0, 3, 2), (0, 4, 2), (1, 5, 1), (1, 6, 1), (1, 7, 1), (2, 8, 1),
    (2, 9, 1), (3, 10, 1), (3, 11, 1), (4, 12, 1), (4, 13, 1), (5, 14, 1), (5, 15, 1),
    (6, 17, 1), (6, 18, 1), (7, 20, 1), (7, 21, 1), (8, 14, 1), (8, 15, 1), (9, 17, 1),
    (9, 18, 1), (10, 21, 1), (11, 19, 1), (11, 22, 1), (12, 16, 1), (12, 20, 1), (13, 19, 1),
    (13, 22, 1), (14, 23, 1), (15, 23, 1), (16, 23, 1), (17, 23, 1), (18, 23, 1), (19, 23, 1),
    (20, 23, 1), (21, 23, 1), (22, 23, 1),
];

// 15 unit inputs → 4 hubs → 5 capacity-limited outlets.
const QUESTION4_EDGES: &[(usize, usize, i64)] = &[
    (0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1), (0, 5, 1), (0, 6, 1), (0, 7, 1), (0, 8, 1),
    (0, 9, 1), (0, 10, 1), (0, 11, 1), (0, 12, 1), (0, 13, 1), (0, 14, 1), (0, 15, 1),
    (1, 16, 1), (1, 17, 1), (1, 18, 1), (2, 16, 1), (2, 17, 1), (2, 19, 1), (3, 17, 1),
    (3, 19, 1), (4, 16, 1), (4, 18, 1), (5, 17, 1), (6, 18, 1), (7, 19, 1), (8, 16, 1),
    (9, 17, 1), (10, 17, 1), (10, 18, 1), (11, 16, 1), (11, 19, 1), (12, 18, 1), (12, 19, 1),
    (13, 18, 1), (14, 17, 1), (15, 16, 1), (15, 19, 1), (16, 20, 100), (16, 22, 100),
    (17, 21, 100), (17, 23, 100), (18, 22, 100), (18, 23, 100), (18, 24, 100), (19, 20, 100),
    (19, 23, 100), (19, 24, 100), (20, 25, 5), (21, 25, 4), (22, 25, 3), (23, 25, 2),
    (24, 25, 2),
];

fn from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Result<FlowNetwork> {
    let mut network = FlowNetwork::new(vertex_count);
    for &(from, to, capacity) in edges {
        network.set_capacity(from, to, capacity)?;
    }
    Ok(network)
}

fn sample(name: &'static str, network: FlowNetwork) -> SampleNetwork {
    let sink = network.vertex_count() - 1;
    SampleNetwork {
        name,
        network,
        source: 0,
        sink,
    }
}

/// The four coursework flow networks, in question order.
pub fn coursework_networks() -> Result<Vec<SampleNetwork>> {
    Ok(vec![
        sample(
            "question 1",
            FlowNetwork::from_matrix(&QUESTION1)?
                .with_labels(["s", "2", "3", "4", "5", "6", "7", "t"])?,
        ),
        sample(
            "question 2",
            FlowNetwork::from_matrix(&QUESTION2)?
                .with_labels(["s", "p1", "p2", "p3", "p4", "p5", "t"])?,
        ),
        sample("question 3", from_edges(24, QUESTION3_EDGES)?),
        sample("question 4", from_edges(26, QUESTION4_EDGES)?),
    ])
}

/// Contestants as `(id, swim, bike, run)`.
pub fn triathlon_jobs() -> Vec<Job> {
    vec![
        Job::new(1, 8, 4, 10),
        Job::new(2, 6, 7, 11),
        Job::new(3, 7, 8, 12),
        Job::new(4, 5, 9, 10),
        Job::new(5, 9, 10, 9),
    ]
}
