/*!
# Graph Representations

A graph is stored as a fixed-size array with one [`Neighborhood`] per node. Every valid node
therefore has a defined (possibly empty) neighborhood, and invalid nodes are caught by bounds
checks instead of silently resolving to an empty neighborhood.

Available representations:
- [`AdjArrayUndir`]: neighborhoods as `Vec<Node>`
- [`SparseAdjArrayUndir`]: neighborhoods as `SmallVec<[Node; 8]>`, preferable for sparse graphs
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
