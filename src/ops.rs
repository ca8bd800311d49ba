use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a valid node, i.e. `u < n`
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Err(GraphError::NodeOutOfRange)` if `u >= n`
    fn check_node(&self, u: Node) -> Result<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Parallel edges are counted with multiplicity.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Like [`AdjacencyList::neighbors_of`], but distinguishes an isolated node (empty iterator)
    /// from a node that does not exist (`Err`).
    fn try_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Returns the neighborhood of `u` in ascending order with duplicates removed.
    /// ** Panics if `u >= n` **
    fn sorted_neighbors_of(&self, u: Node) -> Vec<Node> {
        self.neighbors_of(u).sorted_unstable().dedup().collect()
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_singleton(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| !self.is_singleton(u))
    }

    /// Returns the number of nodes with non-zero degree
    fn number_of_nodes_with_neighbors(&self) -> NumNodes {
        self.vertices_with_neighbors().count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted_unstable().collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes. `n = 0` is allowed.
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
///
/// There is deliberately no way to remove edges: graphs are built once and then only read.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge `{u, v}` to the graph.
    /// Adding an edge twice creates a parallel edge.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`
    /// - [`GraphError::SelfLoop`] if `u == v`
    ///
    /// The graph is not modified if an error is returned.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds the undirected edge `{u, v}` to the graph.
    /// ** Panics if `u >= n || v >= n || u == v` **
    fn add_edge(&mut self, u: Node, v: Node) {
        if let Err(e) = self.try_add_edge(u, v) {
            panic!("{e}");
        }
    }

    /// Adds all edges in the collection, stopping at the first invalid edge.
    /// Edges added before the invalid one remain in the graph.
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Adds all edges in the collection
    /// ** Panics if any edge is invalid **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and a collection of edges.
    /// Fails fast on the first invalid edge.
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self>;

    /// Create a graph from a number of nodes and a collection of edges.
    /// ** Panics if any edge is invalid **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        match Self::try_from_edges(n, edges) {
            Ok(graph) => graph,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}
