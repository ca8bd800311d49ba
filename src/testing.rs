use itertools::Itertools;

use crate::{algo::Classification, prelude::*};

/// Classifies a graph by enumerating all node orders. Only feasible for tiny graphs.
pub(crate) fn brute_force_hamiltonian<G>(graph: &G) -> Classification
where
    G: AdjacencyTest,
{
    let n = graph.number_of_nodes();
    if n == 0 {
        return Classification::Circuit;
    }

    let mut classification = Classification::None;
    for order in graph.vertices().permutations(n as usize) {
        if !order.iter().tuple_windows().all(|(&u, &v)| graph.has_edge(u, v)) {
            continue;
        }

        if n >= 3 && graph.has_edge(order[n as usize - 1], order[0]) {
            return Classification::Circuit;
        }
        classification = Classification::Path;
    }

    classification
}

/// Every graph should implement `GraphNew`, `AdjacencyList` and `AdjacencyTest` consistently
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges without self-loops for nodes `0..n`.
            /// Edges may repeat.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m).filter_map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    (u != v).then_some(Edge(u, v))
                }).collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.is_singleton(u)));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut degrees = vec![0 as NumNodes; n as usize];
                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                            degrees[u as usize] += 1;
                            degrees[v as usize] += 1;
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.degrees().collect_vec(), degrees);
                        assert_eq!(
                            graph.ordered_edges(true),
                            edges.iter().map(|e| e.normalized()).sorted_unstable().collect_vec()
                        );

                        for u in 0..n {
                            let nbs = &adj_matrix[u as usize];
                            assert_eq!(
                                graph.sorted_neighbors_of(u),
                                graph.vertices().filter(|&v| nbs.get_bit(v)).collect_vec()
                            );
                            assert_eq!(graph.is_singleton(u), nbs.cardinality() == 0);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [5 as NumNodes, 20, 50] {
                let edges = random_edges(rng, n, 2 * n);
                let graph = <$graph>::from_edges(n, edges.iter());

                let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in &edges {
                    adj_matrix[u as usize].set_bit(v);
                    adj_matrix[v as usize].set_bit(u);
                }

                for (u, v) in (0..n).cartesian_product(0..n) {
                    assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn brute_force_on_small_graphs() {
        assert_eq!(
            brute_force_hamiltonian(&AdjArrayUndir::new(0)),
            Classification::Circuit
        );
        assert_eq!(
            brute_force_hamiltonian(&AdjArrayUndir::new(1)),
            Classification::Path
        );
        assert_eq!(
            brute_force_hamiltonian(&AdjArrayUndir::from_edges(2, [(0, 1)])),
            Classification::Path
        );
        assert_eq!(
            brute_force_hamiltonian(&AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)])),
            Classification::Circuit
        );
        assert_eq!(
            brute_force_hamiltonian(&AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (0, 3)])),
            Classification::None
        );
    }
}
