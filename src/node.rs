/*!
# Node Representation

We choose `Node = u32` as graphs for which Eulerian or Hamiltonian questions are asked
rarely come close to `2^32` nodes. Nodes are numbered `0` to `n - 1`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
/// It never appears in a neighborhood or a reported path.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
