/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// An Erdős–Rényi random graph model.
///
/// The model is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two distinct nodes; loops are never included.
/// Arcs are sampled with a seeded [pseudorandom number generator](SmallRng),
/// so the same parameters always produce the same graph.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdős–Rényi random graph model, given the number of
    /// nodes, the probability of an arc between any two distinct nodes, and a
    /// seed for the pseudorandom number generator.
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the number of nodes of the model.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Samples the arcs of the graph.
    ///
    /// The time required is quadratic in `n`. Arcs are returned sorted by
    /// source and then by destination.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut arcs = Vec::new();
        for u in 0..self.n {
            for v in 0..self.n {
                if u != v && rng.random_bool(self.p) {
                    arcs.push((u, v));
                }
            }
        }
        arcs
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deterministic() {
        let er = ErdosRenyi::new(20, 0.3, 42);
        assert_eq!(er.arcs(), er.arcs());
        // A different seed gives a different graph, with overwhelming
        // probability.
        assert_ne!(er.arcs(), ErdosRenyi::new(20, 0.3, 43).arcs());
    }

    #[test]
    fn test_no_loops_in_range() {
        let er = ErdosRenyi::new(10, 0.5, 0);
        for (u, v) in er.arcs() {
            assert!(u != v);
            assert!(u < 10 && v < 10);
        }
    }

    #[test]
    fn test_extremes() {
        assert!(ErdosRenyi::new(5, 0.0, 0).arcs().is_empty());
        assert_eq!(ErdosRenyi::new(5, 1.0, 0).arcs().len(), 20);
    }
}
