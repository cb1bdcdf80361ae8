use super::Node;

impl<K, P> Node<K, P> {
    /// Walks the trie depth first, calling `visitor` for every stored key.
    ///
    /// The visitor receives the prefixes of all the ancestors of the node,
    /// root first, and the nodes from the root down to and including the node
    /// holding the payload. Joining the prefixes followed by the prefix of
    /// the last node gives back the full key. Children are visited in the
    /// order they were attached.
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&[&[K]], &[&Node<K, P>]),
    {
        let mut prefixes = Vec::new();
        let mut path = Vec::new();
        self.walk(&mut prefixes, &mut path, &mut visitor);
    }

    fn walk<'a, F>(
        &'a self,
        prefixes: &mut Vec<&'a [K]>,
        path: &mut Vec<&'a Node<K, P>>,
        visitor: &mut F,
    ) where
        F: FnMut(&[&[K]], &[&Node<K, P>]),
    {
        path.push(self);
        if self.is_entry() {
            visitor(prefixes.as_slice(), path.as_slice());
        }
        if self.degree() != 0 {
            prefixes.push(self.prefix.as_slice());
            for child in self.children() {
                child.walk(prefixes, path, visitor);
            }
            prefixes.pop();
        }
        path.pop();
    }

    /// Returns an iterator over every stored key and its payload.
    ///
    /// Entries come out in the same order [`Node::traverse`] visits them.
    pub fn iter(&self) -> Iter<'_, K, P> {
        Iter {
            stack: vec![(0, self)],
            key: Vec::new(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = Vec<K>> + '_
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &P>
    where
        K: Clone,
    {
        self.iter().map(|(_, payload)| payload)
    }
}

/// Pre-order iterator over the entries of a trie, see [`Node::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, P> {
    /// Nodes still to visit, along with the length of their parent's full key.
    stack: Vec<(usize, &'a Node<K, P>)>,
    key: Vec<K>,
}

impl<'a, K: Clone, P> Iterator for Iter<'a, K, P> {
    type Item = (Vec<K>, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node)) = self.stack.pop() {
            self.key.truncate(depth);
            self.key.extend_from_slice(node.prefix());
            let depth = self.key.len();
            self.stack
                .extend(node.children().rev().map(|child| (depth, child)));
            if let Some(payload) = node.payload() {
                return Some((self.key.clone(), payload));
            }
        }
        None
    }
}

impl<'a, K: Clone, P> IntoIterator for &'a Node<K, P> {
    type Item = (Vec<K>, &'a P);
    type IntoIter = Iter<'a, K, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
