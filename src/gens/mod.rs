/*!
# Graph Generators

Random graphs and deterministic substructures used to build instances for the tour analyses.

The [`Gnp`] generator follows a builder pattern: create it with `Gnp::new()`, configure it with
`.nodes(n).prob(p)` (or `.avg_deg(d)`) and draw edges with `generate()` or `stream()`.
The [`RandomGraph`] trait wraps this into constructors on any graph implementing
[`GraphFromScratch`], and [`GeneratorSubstructures`] adds paths, cycles and cliques to an
existing graph.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Generated edges are normalized and never self-loops, so they can be fed directly into
/// any undirected representation.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph with `p = avg_deg / n`.
    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, avg_deg: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, avg_deg: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).avg_deg(avg_deg).stream(rng))
    }
}
