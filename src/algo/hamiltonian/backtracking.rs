use tracing::{debug, trace};

use super::*;

/// Exhaustive depth-first search over partial paths.
///
/// Candidates are tried in ascending node order. The search keeps the current path on an
/// explicit stack together with a cursor into each node's candidate list, so placing a node
/// and releasing it again on backtrack always happen as a pair, and the depth of the search
/// (up to `n`) never touches the call stack.
///
/// The worst-case running time is `O(n!)`. An optional step limit bounds the number of node
/// placements; hitting it yields [`GraphError::StepLimitExceeded`], which is distinct from a
/// negative answer.
///
/// # Examples
/// ```
/// use ugraph_tours::{prelude::*, algo::*, gens::*};
///
/// let mut g = AdjArrayUndir::new(5);
/// g.connect_path([0, 2, 4, 1, 3]);
///
/// let bt = Backtracking::new();
/// assert_eq!(bt.path_from(&g, 0).unwrap(), Some(vec![0, 2, 4, 1, 3]));
/// assert_eq!(bt.cycle(&g).unwrap(), None);
///
/// let analysis = bt.analyze(&g).unwrap();
/// assert_eq!(analysis.classification, Classification::Path);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Backtracking {
    step_limit: Option<u64>,
}

impl Backtracking {
    /// Creates a new search without step limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the maximum number of node placements (`None` for no limit)
    pub fn step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Searches a Hamiltonian path starting at `start`.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `start >= n`
    /// - [`GraphError::StepLimitExceeded`] if the step limit was hit
    pub fn path_from<G>(&self, graph: &G, start: Node) -> Result<Option<Vec<Node>>>
    where
        G: AdjacencyList,
    {
        graph.check_node(start)?;
        PathSearch::new(graph, self.step_limit).run(start, |_| true)
    }

    /// Searches a Hamiltonian cycle, returned as a path starting at node `0` whose last node is
    /// adjacent to `0`. Every complete path is checked for the closing edge, so a complete
    /// path that cannot be closed does not end the search.
    ///
    /// Graphs with `1` or `2` nodes have no cycle; the empty graph has the empty cycle.
    ///
    /// # Errors
    /// [`GraphError::StepLimitExceeded`] if the step limit was hit
    pub fn cycle<G>(&self, graph: &G) -> Result<Option<Vec<Node>>>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        match graph.number_of_nodes() {
            0 => Ok(Some(Vec::new())),
            1 | 2 => Ok(None),
            _ => PathSearch::new(graph, self.step_limit).run(0, |last| graph.has_edge(last, 0)),
        }
    }
}

impl HamiltonianStrategy for Backtracking {
    fn analyze<G>(&self, graph: &G) -> Result<HamiltonianAnalysis>
    where
        G: AdjacencyList + AdjacencyTest,
    {
        if graph.is_empty() {
            return Ok(HamiltonianAnalysis::with_witness(
                Classification::Circuit,
                Vec::new(),
            ));
        }

        if !graph.is_connected_including_singletons() {
            debug!(nodes = graph.number_of_nodes(), "graph is disconnected");
            return Ok(HamiltonianAnalysis::without_witness(Classification::None));
        }

        // one budget for the whole analysis
        let mut search = PathSearch::new(graph, self.step_limit);

        if graph.number_of_nodes() >= 3 {
            if let Some(cycle) = search.run(0, |last| graph.has_edge(last, 0))? {
                debug!(steps = search.steps, "Hamiltonian cycle found");
                return Ok(HamiltonianAnalysis::with_witness(
                    Classification::Circuit,
                    cycle,
                ));
            }
        }

        for start in graph.vertices() {
            if let Some(path) = search.run(start, |_| true)? {
                debug!(steps = search.steps, start, "Hamiltonian path found");
                return Ok(HamiltonianAnalysis::with_witness(Classification::Path, path));
            }
        }

        debug!(steps = search.steps, "no Hamiltonian path");
        Ok(HamiltonianAnalysis::without_witness(Classification::None))
    }
}

/// State shared by consecutive searches on the same graph
struct PathSearch<'a, G> {
    graph: &'a G,
    /// sorted and deduplicated neighborhoods
    candidates: Vec<Vec<Node>>,
    steps: u64,
    step_limit: Option<u64>,
}

impl<'a, G> PathSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G, step_limit: Option<u64>) -> Self {
        Self {
            graph,
            candidates: graph
                .vertices()
                .map(|u| graph.sorted_neighbors_of(u))
                .collect(),
            steps: 0,
            step_limit,
        }
    }

    /// Runs the search from `start`. A path covering all nodes is reported iff `accept(last)`
    /// holds for its last node; otherwise the search backtracks and continues.
    fn run<F>(&mut self, start: Node, accept: F) -> Result<Option<Vec<Node>>>
    where
        F: Fn(Node) -> bool,
    {
        let n = self.graph.len();
        let mut placed = self.graph.vertex_bitset_unset();

        // (node, index of the next candidate to try)
        let mut stack: Vec<(Node, usize)> = Vec::with_capacity(n);
        stack.push((start, 0));
        placed.set_bit(start);

        loop {
            let depth = stack.len();
            let Some((u, cursor)) = stack.last_mut() else {
                trace!(start, steps = self.steps, "search space exhausted");
                return Ok(None);
            };
            let u = *u;

            if depth == n && accept(u) {
                return Ok(Some(stack.into_iter().map(|(v, _)| v).collect()));
            }

            let mut next = None;
            if depth < n {
                let nbs = &self.candidates[u as usize];
                while *cursor < nbs.len() {
                    let v = nbs[*cursor];
                    *cursor += 1;
                    if !placed.get_bit(v) {
                        next = Some(v);
                        break;
                    }
                }
            }

            match next {
                Some(v) => {
                    self.steps += 1;
                    if let Some(limit) = self.step_limit.filter(|&limit| self.steps > limit) {
                        return Err(GraphError::StepLimitExceeded { limit });
                    }

                    placed.set_bit(v);
                    stack.push((v, 0));
                }
                None => {
                    stack.pop();
                    placed.clear_bit(u);
                }
            }
        }
    }
}
