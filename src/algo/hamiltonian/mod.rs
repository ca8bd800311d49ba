/*!
# Hamiltonian Paths and Cycles

Deciding whether a graph has a Hamiltonian path (a path visiting every node exactly once) or
a Hamiltonian cycle is NP-complete. Two exact strategies are provided:

| Strategy | Time | Memory | Witness |
|----------|------|--------|---------|
| [`Backtracking`] | `O(n!)` worst case | `O(n + m)` | yes |
| [`SubsetDp`] | `O(2^n * n^2)` | `O(2^n)` words | no |

[`SubsetDp`] is asymptotically much faster in the worst case, but its memory grows
exponentially with the number of nodes and it only decides existence. It is the right choice
for small graphs (roughly `n <= 20`) when a yes/no answer suffices. [`Backtracking`] produces
a witness, needs little memory, and often fails or succeeds fast on sparse graphs, which makes
it preferable for larger instances. [`HamiltonianSearch`] with [`Strategy::Auto`] picks between
both based on the number of nodes.

Both strategies agree on the [`Classification`] of every graph:
- [`Classification::Circuit`] if a Hamiltonian cycle exists. A cycle needs at least `3` nodes
  as the graph has no self-loops and a cycle `u - v - u` would use the same edge twice.
  The empty graph is treated as having a trivial cycle.
- [`Classification::Path`] if a Hamiltonian path but no cycle exists,
- [`Classification::None`] otherwise.
*/

mod backtracking;
mod subset_dp;

use tracing::debug;

use super::*;

pub use backtracking::*;
pub use subset_dp::*;

/// Result of a Hamiltonian analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HamiltonianAnalysis {
    /// Whether a Hamiltonian cycle/path exists
    pub classification: Classification,
    /// A witness for `classification` if the strategy produces one.
    /// For [`Classification::Circuit`] this is the cycle starting at node `0` (the closing edge is
    /// implied), for [`Classification::Path`] it is an open path.
    pub witness: Option<Vec<Node>>,
}

impl HamiltonianAnalysis {
    /// Creates an analysis without witness
    pub fn without_witness(classification: Classification) -> Self {
        Self {
            classification,
            witness: None,
        }
    }

    /// Creates an analysis with a witness
    pub fn with_witness(classification: Classification, witness: Vec<Node>) -> Self {
        Self {
            classification,
            witness: Some(witness),
        }
    }
}

/// A strategy that decides Hamiltonicity of a graph.
pub trait HamiltonianStrategy {
    /// Classifies the graph and possibly returns a witness.
    ///
    /// # Errors
    /// Strategies may refuse graphs that exceed their configured resource bounds.
    fn analyze<G>(&self, graph: &G) -> Result<HamiltonianAnalysis>
    where
        G: AdjacencyList + AdjacencyTest;
}

/// Selects the algorithm used by [`HamiltonianSearch`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Always use [`Backtracking`]
    Backtracking,
    /// Always use [`SubsetDp`]
    SubsetDp,
    /// Use [`SubsetDp`] if the graph has at most `dp_node_limit` nodes and [`Backtracking`] otherwise
    #[default]
    Auto,
}

/// Configurable Hamiltonian analysis that dispatches to one of the available strategies.
///
/// # Examples
/// ```
/// use ugraph_tours::{prelude::*, algo::*, gens::*};
///
/// let mut g = AdjArrayUndir::new(6);
/// g.connect_cycle(0..6);
///
/// let search = HamiltonianSearch::new().strategy(Strategy::Backtracking);
/// let analysis = search.analyze(&g).unwrap();
/// assert_eq!(analysis.classification, Classification::Circuit);
/// assert_eq!(analysis.witness, Some(vec![0, 1, 2, 3, 4, 5]));
///
/// let analysis = HamiltonianSearch::new().strategy(Strategy::SubsetDp).analyze(&g).unwrap();
/// assert_eq!(analysis.classification, Classification::Circuit);
/// assert_eq!(analysis.witness, None);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct HamiltonianSearch {
    strategy: Strategy,
    backtracking: Backtracking,
    subset_dp: SubsetDp,
}

impl HamiltonianSearch {
    /// Creates a new search using [`Strategy::Auto`] and default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Updates the maximum number of nodes for which [`SubsetDp`] is run.
    /// ** Panics if `limit > MAX_DP_NODES` **
    pub fn dp_node_limit(mut self, limit: NumNodes) -> Self {
        self.subset_dp = self.subset_dp.node_limit(limit);
        self
    }

    /// Updates the maximum number of steps of [`Backtracking`] (`None` for no limit)
    pub fn step_limit(mut self, limit: Option<u64>) -> Self {
        self.backtracking = self.backtracking.step_limit(limit);
        self
    }

    /// Returns the concrete strategy (never [`Strategy::Auto`]) used for a graph with `n` nodes
    pub fn resolve(&self, n: NumNodes) -> Strategy {
        match self.strategy {
            Strategy::Auto if n <= self.subset_dp.get_node_limit() => Strategy::SubsetDp,
            Strategy::Auto => Strategy::Backtracking,
            strategy => strategy,
        }
    }
}

impl HamiltonianStrategy for HamiltonianSearch {
    fn analyze<G>(&self, graph: &G) -> Result<HamiltonianAnalysis>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        let strategy = self.resolve(graph.number_of_nodes());
        debug!(nodes = graph.number_of_nodes(), ?strategy, "Hamiltonian search");

        match strategy {
            Strategy::SubsetDp => self.subset_dp.analyze(graph),
            _ => self.backtracking.analyze(graph),
        }
    }
}

/// Returns *true* if `path` visits every node of `graph` exactly once and consecutive nodes are
/// adjacent. If `closed`, the last node must additionally be adjacent to the first one and the
/// graph must have at least `3` nodes (or none at all).
pub fn is_hamiltonian_witness<G>(graph: &G, path: &[Node], closed: bool) -> bool
where
    G: AdjacencyList + AdjacencyTest,
{
    if path.len() != graph.len() {
        return false;
    }

    let mut seen = graph.vertex_bitset_unset();
    let all_distinct = path
        .iter()
        .all(|&u| graph.contains_node(u) && !seen.set_bit(u));

    all_distinct
        && path.windows(2).all(|w| graph.has_edge(w[0], w[1]))
        && (!closed
            || match (path.first(), path.last()) {
                (Some(&first), Some(&last)) => path.len() >= 3 && graph.has_edge(last, first),
                _ => true,
            })
}

/// Hamiltonian analysis directly on graphs
pub trait Hamiltonian: AdjacencyList + AdjacencyTest {
    /// Searches a Hamiltonian path starting at `start` using [`Backtracking`].
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use ugraph_tours::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.hamiltonian_path_from(0).unwrap(), Some(vec![0, 1, 2, 3]));
    /// assert_eq!(g.hamiltonian_path_from(1).unwrap(), None);
    /// ```
    fn hamiltonian_path_from(&self, start: Node) -> Result<Option<Vec<Node>>> {
        Backtracking::new().path_from(self, start)
    }

    /// Searches a Hamiltonian cycle starting at node `0` using [`Backtracking`].
    ///
    /// # Examples
    /// ```
    /// use ugraph_tours::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// assert_eq!(g.hamiltonian_cycle().unwrap(), Some(vec![0, 1, 2, 3]));
    /// ```
    fn hamiltonian_cycle(&self) -> Result<Option<Vec<Node>>> {
        Backtracking::new().cycle(self)
    }

    /// Returns *true* if a Hamiltonian path exists (using [`Strategy::Auto`])
    fn has_hamiltonian_path(&self) -> Result<bool> {
        Ok(self
            .hamiltonian_analysis(Strategy::Auto)?
            .classification
            .has_path())
    }

    /// Returns *true* if a Hamiltonian cycle exists (using [`Strategy::Auto`])
    fn has_hamiltonian_cycle(&self) -> Result<bool> {
        Ok(self
            .hamiltonian_analysis(Strategy::Auto)?
            .classification
            .has_circuit())
    }

    /// Runs a Hamiltonian analysis with the given strategy and default limits
    fn hamiltonian_analysis(&self, strategy: Strategy) -> Result<HamiltonianAnalysis> {
        HamiltonianSearch::new().strategy(strategy).analyze(self)
    }
}

impl<G> Hamiltonian for G where G: AdjacencyList + AdjacencyTest {}
