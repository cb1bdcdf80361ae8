#[cfg(feature = "serde")]
use serde::Serialize;

use super::Node;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// Total number of nodes, including the root
    pub nodes: usize,
    /// Nodes holding a payload
    pub entries: usize,
    /// Nodes that only branch towards their descendants
    pub branches: usize,
    /// Level of the deepest node, the root sits at 0
    pub max_depth: usize,
    /// Total number of key elements stored over all prefixes
    pub elements: usize,
}

impl Stats {
    fn new<K, P>(root: &Node<K, P>) -> Self {
        let mut stats = Self::default();

        let mut stack = vec![(0, root)];
        while let Some((depth, node)) = stack.pop() {
            stats.nodes += 1;
            if node.is_entry() {
                stats.entries += 1;
            } else {
                stats.branches += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
            stats.elements += node.prefix().len();
            stack.extend(node.children().map(|child| (depth + 1, child)));
        }

        stats
    }
}

impl<'a, K, P> From<&'a Node<K, P>> for Stats {
    fn from(root: &'a Node<K, P>) -> Self {
        Self::new(root)
    }
}

impl<K, P> Node<K, P> {
    /// Gathers structural statistics about the trie below this node.
    pub fn stats(&self) -> Stats {
        Stats::from(self)
    }
}
