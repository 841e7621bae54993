//! Maximum flow on dense capacity matrices.
//!
//! Implements the Edmonds-Karp variant of Ford-Fulkerson: repeated
//! breadth-first augmentation in the residual graph until the sink is
//! unreachable. Each run owns fresh residual and flow matrices, so solving
//! independent networks concurrently needs no coordination.
//!
//! # Output
//!
//! - `MaxFlowResult::total_flow`: the maximum flow value
//! - `MaxFlowResult::flow_edges`: `(from, to, flow)` for every edge with
//!   positive flow, source labelled `s` and sink labelled `t`
//! - `MaxFlowResult::min_cut`: the cut certifying optimality
//!
//! # References
//!
//! - Ford & Fulkerson (1956), "Maximal Flow Through a Network"
//! - Edmonds & Karp (1972), "Theoretical Improvements in Algorithmic
//!   Efficiency for Network Flow Problems"

mod cut;
mod edmonds_karp;
mod residual;
mod result;

pub use cut::{CutEdge, MinCut};
pub use edmonds_karp::{max_flow, EdmondsKarp};
pub use residual::{AugmentingPath, ResidualGraph};
pub use result::{FlowEdge, MaxFlowResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlowNetwork;
    use crate::samples;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_network(rng: &mut StdRng, n: usize, density: f64, max_cap: i64) -> FlowNetwork {
        let mut network = FlowNetwork::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.random_bool(density) {
                    network
                        .set_capacity(u, v, rng.random_range(1..=max_cap))
                        .unwrap();
                }
            }
        }
        network
    }

    /// Minimum cut capacity by enumerating every source-side subset.
    fn brute_force_min_cut(network: &FlowNetwork, source: usize, sink: usize) -> i64 {
        let n = network.vertex_count();
        let free: Vec<usize> = (0..n).filter(|&v| v != source && v != sink).collect();
        let mut best = i64::MAX;

        for mask in 0u32..(1 << free.len()) {
            let mut inside = vec![false; n];
            inside[source] = true;
            for (bit, &v) in free.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    inside[v] = true;
                }
            }
            best = best.min(MinCut::from_partition(network, &inside).capacity);
        }
        best
    }

    #[test]
    fn test_max_flow_equals_brute_force_min_cut() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(2..=7);
            let network = random_network(&mut rng, n, 0.4, 9);
            let result = EdmondsKarp::new().solve(&network, 0, n - 1).unwrap();

            assert_eq!(
                result.total_flow(),
                brute_force_min_cut(&network, 0, n - 1),
                "{:?}",
                network.to_matrix()
            );
            assert_eq!(result.min_cut().unwrap().capacity, result.total_flow());
        }
    }

    #[test]
    fn test_capacity_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = rng.random_range(2..=9);
            let network = random_network(&mut rng, n, 0.35, 20);
            let (source, sink) = (0, n - 1);
            let result = EdmondsKarp::new().solve(&network, source, sink).unwrap();

            assert!(result.total_flow() >= 0);
            assert!(result.total_flow() <= network.outgoing_capacity(source));
            assert!(result.total_flow() <= network.incoming_capacity(sink));
        }
    }

    #[test]
    fn test_conservation_and_net_flow() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let n = rng.random_range(2..=9);
            let network = random_network(&mut rng, n, 0.45, 6);
            let result = EdmondsKarp::new().solve(&network, 0, n - 1).unwrap();

            assert!(result.is_conserved());
            assert_eq!(result.outflow(0) - result.inflow(0), result.total_flow());
            assert_eq!(result.inflow(n - 1) - result.outflow(n - 1), result.total_flow());
            for (u, v, _) in network.edges() {
                let (forward, backward) = (result.flow(u, v), result.flow(v, u));
                assert!(forward.is_some_and(|f| f <= network.capacity(u, v)));
                assert!(forward == Some(0) || backward == Some(0));
            }
            for edge in result.flow_edges() {
                assert!(edge.flow > 0);
                assert!(network.capacity(edge.from, edge.to) > 0);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..50 {
            let n = rng.random_range(2..=8);
            let network = random_network(&mut rng, n, 0.5, 5);
            let solver = EdmondsKarp::new();
            let a = solver.solve(&network, 0, n - 1).unwrap();
            let b = solver.solve(&network, 0, n - 1).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_coursework_networks() {
        let expected = [36, 15, 9, 15];
        for (sample, want) in samples::coursework_networks().unwrap().iter().zip(expected) {
            let result = EdmondsKarp::new()
                .solve(&sample.network, sample.source, sample.sink)
                .unwrap();
            assert_eq!(result.total_flow(), want, "{}", sample.name);
            assert!(result.is_conserved());
            assert_eq!(result.min_cut().unwrap().capacity, want);
        }
    }

    #[test]
    fn test_question1_decomposition() {
        let sample = &samples::coursework_networks().unwrap()[0];
        let result = EdmondsKarp::new()
            .solve(&sample.network, sample.source, sample.sink)
            .unwrap();

        assert_eq!(result.augmentations(), 7);
        let edges: Vec<_> = result
            .flow_edges()
            .iter()
            .map(|e| (e.from, e.to, e.flow))
            .collect();
        assert_eq!(
            edges,
            vec![
                (0, 1, 15),
                (0, 2, 11),
                (0, 5, 10),
                (1, 3, 7),
                (1, 4, 8),
                (2, 4, 11),
                (3, 7, 13),
                (4, 3, 6),
                (4, 6, 7),
                (4, 7, 10),
                (5, 4, 4),
                (5, 6, 6),
                (6, 7, 13),
            ]
        );
        assert_eq!(result.min_cut().unwrap().sink_side, vec![3, 7]);
    }
}
