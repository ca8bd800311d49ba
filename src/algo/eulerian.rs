/*!
# Eulerian Trails and Circuits

A graph admits an Eulerian circuit iff all its non-isolated nodes are connected and every
node has even degree. It admits an open Eulerian trail iff it is connected in the same sense
and has exactly two nodes of odd degree (the endpoints of the trail).

This is a pure decision procedure: no trail is constructed.
*/

use tracing::debug;

use super::*;

/// Eulerian analysis on undirected graphs
pub trait Eulerian: Connectivity {
    /// Returns an iterator over all nodes of odd degree.
    /// Parallel edges count with multiplicity.
    fn odd_degree_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns the number of nodes of odd degree. By the handshake lemma this is always even.
    fn number_of_odd_degree_vertices(&self) -> NumNodes {
        let odd = self.odd_degree_vertices().count() as NumNodes;
        debug_assert!(odd % 2 == 0, "handshake lemma violated: {odd} odd-degree nodes");
        odd
    }

    /// Classifies the graph:
    /// - [`Classification::Circuit`] if connected and all degrees are even,
    /// - [`Classification::Path`] if connected and exactly two degrees are odd,
    /// - [`Classification::None`] otherwise.
    ///
    /// Isolated nodes are ignored; the empty graph has a (trivial) circuit.
    ///
    /// # Examples
    /// ```
    /// use ugraph_tours::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(5);
    /// g.connect_cycle(0..5);
    /// assert_eq!(g.eulerian_classification(), Classification::Circuit);
    ///
    /// let mut g = AdjArrayUndir::new(5);
    /// g.connect_path(0..5);
    /// assert_eq!(g.eulerian_classification(), Classification::Path);
    /// ```
    fn eulerian_classification(&self) -> Classification {
        let classification = if !self.is_connected() {
            Classification::None
        } else {
            match self.number_of_odd_degree_vertices() {
                0 => Classification::Circuit,
                2 => Classification::Path,
                _ => Classification::None,
            }
        };

        debug!(
            nodes = self.number_of_nodes(),
            %classification,
            "Eulerian classification computed"
        );
        classification
    }

    /// Returns *true* if an Eulerian circuit exists
    fn has_eulerian_circuit(&self) -> bool {
        self.eulerian_classification().has_circuit()
    }

    /// Returns *true* if an Eulerian trail (open or closed) exists
    fn has_eulerian_trail(&self) -> bool {
        self.eulerian_classification().has_path()
    }
}

impl<G> Eulerian for G where G: AdjacencyList + Sized {}
