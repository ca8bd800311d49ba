use itertools::Itertools;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// `G(n,p)` graphs contain every possible edge `{u, v}` with `u < v` with probability `p`
/// independent from each other.
///
/// # Examples
/// ```
/// use ugraph_tours::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let edges = Gnp::new().nodes(10).prob(1.0).generate(rng);
/// assert_eq!(edges.len(), 45);
/// assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(_) if self.n == 0 => 0.0,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    is_valid_probability(p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.probability();
        (0..self.n)
            .tuple_combinations()
            .filter(move |_| rng.random_bool(p))
            .map(|(u, v)| Edge(u, v))
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        assert!(Gnp::new().nodes(20).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(20).prob(1.0).generate(rng).len(), 190);
        assert!(Gnp::new().nodes(0).avg_deg(3.0).generate(rng).is_empty());
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let n = 400;
        let edges = Gnp::new().nodes(n).avg_deg(10.0).generate(rng);
        let avg_deg = 2.0 * edges.len() as f64 / n as f64;
        assert!((8.0..12.0).contains(&avg_deg), "avg_deg = {avg_deg}");

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().nodes(5).prob(1.5);
    }
}
