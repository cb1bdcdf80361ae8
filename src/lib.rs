//! A compressed prefix tree over sequences of comparable elements.
//!
//! ```
//! use prefixtrie::Node;
//!
//! let mut trie: Node<char, i32> = Node::new();
//! for (key, payload) in [("abcdef", 2), ("abcdeg", 3), ("abc", 1)] {
//!     let key: Vec<char> = key.chars().collect();
//!     trie.put(&key, payload).unwrap();
//! }
//!
//! assert_eq!(trie.get(&['a', 'b', 'c', 'd', 'e', 'f']), Some(&2));
//! assert_eq!(trie.get(&['a', 'b', 'c', 'd', 'e']), None);
//!
//! trie.traverse(|prefixes, path| {
//!     let node = path[path.len() - 1];
//!     let key: String = prefixes.concat().into_iter().chain(node.prefix().iter().copied()).collect();
//!     println!("{key} : {}", node.payload().unwrap());
//! });
//! ```

#[cfg(feature = "cli")]
pub mod dataset;
pub mod trie;

pub use trie::{ArrayMap, Error, Node, Result, Stats};
