/*!
# Graph Algorithms

Traversals, connectivity and the Eulerian and Hamiltonian analyses built on top of them.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use ugraph_tours::algo::*;
```
Most functionality is implemented as traits on the graph itself (`graph.is_connected()`,
`graph.eulerian_classification()`, `graph.hamiltonian_cycle()`, ...). Configurable structs
such as [`HamiltonianSearch`], [`Backtracking`] and [`SubsetDp`] expose the knobs.
*/

mod classification;
mod connectivity;
mod eulerian;
mod hamiltonian;
mod traversal;

use crate::prelude::*;

pub use classification::*;
pub use connectivity::*;
pub use eulerian::*;
pub use hamiltonian::*;
pub use traversal::*;
