pub mod children;
mod error;
pub mod iter;
mod node;
#[cfg(test)]
mod proptests;
mod stats;

pub use children::ArrayMap;
pub use error::{Error, Result};
pub use stats::Stats;

/// Children of a node, keyed by the leading element of each child's prefix.
pub type Children<K, P> = ArrayMap<K, Box<Node<K, P>>>;

/// A node of a compressed prefix tree.
///
/// Every node stores the fragment of the key it adds on top of its ancestors.
/// The full key of a node is the concatenation of the prefixes from the root
/// down to and including the node itself. Nodes without a payload only exist
/// to branch towards their descendants.
///
/// The value returned by [`Node::new`] is the root of a trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K, P> {
    prefix: Vec<K>,
    // Absent until the first child is attached.
    children: Option<Children<K, P>>,
    payload: Option<P>,
}
