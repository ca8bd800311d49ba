use tracing::trace;

use super::*;

/// Connectivity checks for undirected graphs.
pub trait Connectivity: Traversal {
    /// Returns *true* if all nodes with at least one neighbor lie in the same connected
    /// component. Isolated nodes are ignored, so a graph without edges is trivially connected.
    ///
    /// This is the notion of connectivity relevant for Eulerian trails: isolated nodes carry
    /// no edges and therefore never need to be visited.
    ///
    /// # Examples
    /// ```
    /// use ugraph_tours::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 3)]);
    /// assert!(g.is_connected());
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
    /// assert!(!g.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        let Some(start) = self.vertices_with_neighbors().next() else {
            return true;
        };

        // a search started at a non-isolated node only ever reaches non-isolated nodes
        let reached = self.dfs(start).count() as NumNodes;
        let expected = self.number_of_nodes_with_neighbors();

        trace!(start, reached, expected, "connectivity check");
        reached == expected
    }

    /// Returns *true* if every node (including isolated ones) lies in a single connected
    /// component. The empty graph is connected.
    ///
    /// # Examples
    /// ```
    /// use ugraph_tours::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 3)]);
    /// assert!(!g.is_connected_including_singletons());
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(g.is_connected_including_singletons());
    /// ```
    fn is_connected_including_singletons(&self) -> bool {
        self.is_empty() || self.dfs(0).count() == self.len()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::{GeneratorSubstructures, RandomGraph};

    #[test]
    fn edgeless_graphs_are_connected() {
        for n in 0..10 {
            let graph = AdjArrayUndir::new(n);
            assert!(graph.is_connected());
            assert_eq!(graph.is_connected_including_singletons(), n <= 1);
        }
    }

    #[test]
    fn isolated_nodes_are_ignored() {
        let mut graph = AdjArrayUndir::new(7);
        graph.connect_cycle([1, 3, 5]);
        graph.connect_path([5, 6]);

        assert!(graph.is_connected());
        assert!(!graph.is_connected_including_singletons());
    }

    #[test]
    fn two_disjoint_edges() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert!(!graph.is_connected());
        assert!(!graph.is_connected_including_singletons());
    }

    #[test]
    fn agrees_with_bfs_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 10, 30] {
            for avg_deg in [0.5, 1.0, 2.0, 4.0] {
                for _ in 0..20 {
                    let graph = AdjArrayUndir::gnp(rng, n, avg_deg / n as f64);

                    let expected = match graph.vertices_with_neighbors().next() {
                        None => true,
                        Some(s) => {
                            let reached = graph.bfs(s).collect::<Vec<_>>();
                            graph
                                .vertices_with_neighbors()
                                .all(|u| reached.contains(&u))
                        }
                    };

                    assert_eq!(graph.is_connected(), expected);
                }
            }
        }
    }
}
