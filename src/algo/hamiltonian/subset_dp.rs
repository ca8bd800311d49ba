use tracing::{debug, trace};

use super::*;

/// Bitmask over the nodes of a graph handled by [`SubsetDp`]
type NodeMask = u32;

/// Largest number of nodes [`SubsetDp`] can be configured for
pub const MAX_DP_NODES: NumNodes = NodeMask::BITS;

/// Default number of nodes up to which [`SubsetDp`] runs (a table of `4 MiB`)
pub const DEFAULT_DP_NODES: NumNodes = 20;

/// Subset dynamic programming over `(visited set, last node)` states.
///
/// `dp[mask][u]` holds iff there is a simple path visiting exactly the nodes in `mask` and ending
/// in `u`. It is seeded with `dp[{v}][v]` and extended along edges to nodes outside of `mask`.
/// As `mask | (1 << v) > mask`, processing masks in increasing order completes every state
/// before it is extended.
///
/// Runs in `O(2^n * n^2)` time. The table stores all end nodes of a mask in a single word, so
/// it needs `2^n` words of memory. Only existence is decided, no witness is produced. Graphs
/// with more than `node_limit` nodes are refused with [`GraphError::TooManyNodes`].
///
/// # Examples
/// ```
/// use ugraph_tours::{prelude::*, algo::*, gens::*};
///
/// let mut g = AdjArrayUndir::new(6);
/// g.connect_path(0..6);
///
/// let dp = SubsetDp::new();
/// assert!(dp.has_path(&g).unwrap());
/// assert!(!dp.has_cycle(&g).unwrap());
/// assert_eq!(dp.analyze(&g).unwrap().classification, Classification::Path);
///
/// let g = AdjArrayUndir::new(DEFAULT_DP_NODES + 1);
/// assert!(dp.has_path(&g).is_err());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct SubsetDp {
    node_limit: NumNodes,
}

impl Default for SubsetDp {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_DP_NODES,
        }
    }
}

impl SubsetDp {
    /// Creates a new DP with the default node limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the maximum number of nodes
    /// ** Panics if `limit > MAX_DP_NODES` **
    pub fn node_limit(mut self, limit: NumNodes) -> Self {
        assert!(
            limit <= MAX_DP_NODES,
            "subset DP supports at most {MAX_DP_NODES} nodes"
        );
        self.node_limit = limit;
        self
    }

    /// Returns the maximum number of nodes
    pub fn get_node_limit(&self) -> NumNodes {
        self.node_limit
    }

    /// Returns *true* if a Hamiltonian path with arbitrary endpoints exists.
    /// The empty graph has the empty path.
    ///
    /// # Errors
    /// [`GraphError::TooManyNodes`] if the graph has more than `node_limit` nodes
    pub fn has_path<G>(&self, graph: &G) -> Result<bool>
    where
        G: AdjacencyList,
    {
        self.check_size(graph)?;
        if graph.is_empty() {
            return Ok(true);
        }

        let adjacency = adjacency_masks(graph);
        let table = reachability_table(&adjacency, graph.vertices());
        Ok(table[full_mask(graph)] != 0)
    }

    /// Returns *true* if a Hamiltonian cycle exists.
    ///
    /// Runs the DP anchored at node `0` and accepts iff some Hamiltonian path from `0` ends in a
    /// neighbor of `0`, i.e. the closing edge of that very path exists. Graphs with `1` or `2`
    /// nodes have no cycle; the empty graph has the empty cycle.
    ///
    /// # Errors
    /// [`GraphError::TooManyNodes`] if the graph has more than `node_limit` nodes
    pub fn has_cycle<G>(&self, graph: &G) -> Result<bool>
    where
        G: AdjacencyList,
    {
        self.check_size(graph)?;
        match graph.number_of_nodes() {
            0 => return Ok(true),
            1 | 2 => return Ok(false),
            _ => {}
        }

        let adjacency = adjacency_masks(graph);
        let table = reachability_table(&adjacency, std::iter::once(0));
        Ok(table[full_mask(graph)] & adjacency[0] != 0)
    }

    fn check_size<G>(&self, graph: &G) -> Result<()>
    where
        G: GraphNodeOrder,
    {
        if graph.number_of_nodes() > self.node_limit {
            return Err(GraphError::TooManyNodes {
                number_of_nodes: graph.number_of_nodes(),
                limit: self.node_limit,
            });
        }
        Ok(())
    }
}

impl HamiltonianStrategy for SubsetDp {
    fn analyze<G>(&self, graph: &G) -> Result<HamiltonianAnalysis>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        self.check_size(graph)?;

        if !graph.is_connected_including_singletons() {
            debug!(nodes = graph.number_of_nodes(), "graph is disconnected");
            return Ok(HamiltonianAnalysis::without_witness(Classification::None));
        }

        let classification = if self.has_cycle(graph)? {
            Classification::Circuit
        } else if self.has_path(graph)? {
            Classification::Path
        } else {
            Classification::None
        };

        debug!(nodes = graph.number_of_nodes(), %classification, "subset DP finished");
        Ok(HamiltonianAnalysis::without_witness(classification))
    }
}

fn full_mask<G: GraphNodeOrder>(graph: &G) -> usize {
    (1usize << graph.len()) - 1
}

/// Returns the neighborhood of every node as bitmask
fn adjacency_masks<G>(graph: &G) -> Vec<NodeMask>
where
    G: AdjacencyList,
{
    graph
        .vertices()
        .map(|u| {
            graph
                .neighbors_of(u)
                .fold(0 as NodeMask, |mask, v| mask | (1 << v))
        })
        .collect()
}

/// Computes `table[mask]`, the set of nodes `u` such that some simple path starting in one of
/// `seeds` visits exactly the nodes of `mask` and ends in `u`.
fn reachability_table<I>(adjacency: &[NodeMask], seeds: I) -> Vec<NodeMask>
where
    I: IntoIterator<Item = Node>,
{
    let n = adjacency.len();
    let mut table: Vec<NodeMask> = vec![0; 1 << n];
    trace!(nodes = n, states = table.len(), "allocated subset DP table");

    for v in seeds {
        table[1 << v] |= 1 << v;
    }

    for mask in 0..table.len() {
        let mut ends = table[mask];
        while ends != 0 {
            let u = ends.trailing_zeros();
            ends &= ends - 1;

            let mut successors = adjacency[u as usize] & !(mask as NodeMask);
            while successors != 0 {
                let v = successors.trailing_zeros();
                successors &= successors - 1;

                table[mask | (1 << v)] |= 1 << v;
            }
        }
    }

    table
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    #[test]
    fn table_semantics() {
        // 0 - 1 - 2
        let adjacency = vec![0b010, 0b101, 0b010];
        let table = reachability_table(&adjacency, 0..3);

        assert_eq!(table[0b001], 0b001);
        assert_eq!(table[0b011], 0b011);
        assert_eq!(table[0b101], 0b000);
        assert_eq!(table[0b111], 0b101);

        let table = reachability_table(&adjacency, [1]);
        assert_eq!(table[0b001], 0b000);
        assert_eq!(table[0b010], 0b010);
        assert_eq!(table[0b111], 0b000);
    }

    #[test]
    fn every_node_is_a_seed() {
        let graph = AdjArrayUndir::new(1);
        assert!(SubsetDp::new().has_path(&graph).unwrap());
        assert!(!SubsetDp::new().has_cycle(&graph).unwrap());

        let graph = AdjArrayUndir::new(3);
        assert!(!SubsetDp::new().has_path(&graph).unwrap());
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArrayUndir::new(0);
        assert!(SubsetDp::new().has_path(&graph).unwrap());
        assert!(SubsetDp::new().has_cycle(&graph).unwrap());
    }

    #[test]
    fn cycle_requires_closing_edge_of_the_path() {
        // 0 is a leaf, so 0-1-2-3-4 is a Hamiltonian path but no cycle can pass through 0
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_path([0, 1, 2, 3, 4]);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);

        let dp = SubsetDp::new();
        assert!(dp.has_path(&graph).unwrap());
        assert!(!dp.has_cycle(&graph).unwrap());

        graph.add_edge(4, 0);
        assert!(dp.has_cycle(&graph).unwrap());
    }

    #[test]
    fn node_limit() {
        let mut graph = AdjArrayUndir::new(12);
        graph.connect_cycle(0..12);

        let dp = SubsetDp::new().node_limit(11);
        assert_eq!(
            dp.has_path(&graph),
            Err(GraphError::TooManyNodes {
                number_of_nodes: 12,
                limit: 11
            })
        );
        assert!(dp.has_cycle(&graph).is_err());
        assert!(dp.analyze(&graph).is_err());

        let dp = dp.node_limit(12);
        assert_eq!(dp.get_node_limit(), 12);
        assert_eq!(
            dp.analyze(&graph).unwrap().classification,
            Classification::Circuit
        );
    }

    #[test]
    #[should_panic]
    fn node_limit_above_maximum() {
        let _ = SubsetDp::new().node_limit(MAX_DP_NODES + 1);
    }

    #[test]
    fn petersen_graph() {
        // the Petersen graph has a Hamiltonian path but no Hamiltonian cycle
        let mut graph = AdjArrayUndir::new(10);
        graph.connect_cycle(0..5);
        graph.connect_cycle([5, 7, 9, 6, 8]);
        graph.add_edges((0..5).map(|u| (u, u + 5)));

        let dp = SubsetDp::new();
        assert!(dp.has_path(&graph).unwrap());
        assert!(!dp.has_cycle(&graph).unwrap());
        assert_eq!(
            Backtracking::new().analyze(&graph).unwrap().classification,
            Classification::Path
        );
    }
}
