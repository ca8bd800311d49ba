/*!
`ugraph_tours` answers *tour* questions on graphs that are
- **u**nlabelled : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Neither nodes nor edges have a weight attached to them
- **u**ndirected : `Edge(u, v)` and `Edge(v, u)` describe the same edge

# Questions

- **Eulerian**: Is there a trail using every edge exactly once, and does it close into a circuit?
  Decided in linear time from connectivity and the number of odd-degree nodes.
- **Hamiltonian**: Is there a path visiting every node exactly once, and does it close into a cycle?
  Decided either by a backtracking search that also returns a witness, or by a subset dynamic
  program that runs in `O(2^n * n^2)` but only answers existence.

Both analyses report a [`Classification`](crate::algo::Classification) of
`None`, `Path` or `Circuit`.

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as a tuple-struct
`Edge(Node, Node)`. Graphs store one neighborhood per node, see the [`repr`] module for
[`AdjArrayUndir`](crate::repr::AdjArrayUndir) and
[`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir). Parallel edges are kept and count
towards the degree, self-loops are rejected.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* pattern before calling the configured algorithm on a provided graph. The commonly used
functionality is also implemented via traits on the graph itself. Invalid input is reported
through [`GraphError`].

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes traversals, connectivity and the Eulerian and Hamiltonian analyses,
- [`gens`] includes random graphs and deterministic substructures such as paths/cycles/cliques.

In most use-cases, `use ugraph_tours::{prelude::*, algo::*};` suffices for your needs.

```rust
use ugraph_tours::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);

assert_eq!(graph.eulerian_classification(), Classification::Path);
assert_eq!(graph.hamiltonian_analysis(Strategy::Auto).unwrap().classification, Classification::Circuit);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `ugraph_tours::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
