use super::{ArrayMap, Children, Error, Node, Result};

impl<K, P> Default for Node<K, P> {
    fn default() -> Self {
        Node {
            prefix: Vec::new(),
            children: None,
            payload: None,
        }
    }
}

impl<K, P> Node<K, P> {
    /// Creates an empty root: no prefix, no children and no payload.
    pub fn new() -> Self {
        Node::default()
    }

    fn leaf(prefix: Vec<K>, payload: P) -> Self {
        Node {
            prefix,
            children: None,
            payload: Some(payload),
        }
    }

    /// The fragment of the key this node adds to its ancestors.
    pub fn prefix(&self) -> &[K] {
        &self.prefix
    }

    /// The payload of the key ending at this node, `None` for intermediate nodes.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn payload_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }

    /// Whether a stored key ends at this node.
    pub fn is_entry(&self) -> bool {
        self.payload.is_some()
    }

    /// Number of direct children.
    pub fn degree(&self) -> usize {
        self.children.as_ref().map_or(0, ArrayMap::len)
    }

    /// Direct children in the order they were attached.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node<K, P>> {
        self.children
            .iter()
            .flat_map(|children| children.values())
            .map(|child| &**child)
    }
}

impl<K: PartialEq, P> Node<K, P> {
    /// Length of the longest common leading run of this node's prefix and `path`.
    fn common_prefix_len(&self, path: &[K]) -> usize {
        self.prefix
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// The child whose prefix starts with `element`.
    pub fn child(&self, element: &K) -> Option<&Node<K, P>> {
        self.children
            .as_ref()
            .and_then(|children| children.get(element))
            .map(|child| &**child)
    }

    /// Finds the node whose full key is exactly `path`.
    ///
    /// `path` is relative to the node this is called on, so calling it on the
    /// root searches for an absolute key. Intermediate nodes are never returned.
    pub fn lookup(&self, path: &[K]) -> Option<&Node<K, P>> {
        let matched = self.common_prefix_len(path);
        if matched < self.prefix.len() {
            return None;
        }
        let rest = &path[matched..];
        match rest.first() {
            None => self.is_entry().then_some(self),
            Some(element) => self.child(element)?.lookup(rest),
        }
    }

    fn lookup_mut(&mut self, path: &[K]) -> Option<&mut Node<K, P>> {
        let matched = self.common_prefix_len(path);
        if matched < self.prefix.len() {
            return None;
        }
        let rest = &path[matched..];
        match rest.first() {
            None => self.is_entry().then_some(self),
            Some(element) => self
                .children
                .as_mut()?
                .get_mut(element)?
                .lookup_mut(rest),
        }
    }

    /// Returns the payload stored under `path`.
    pub fn get(&self, path: &[K]) -> Option<&P> {
        self.lookup(path).and_then(Node::payload)
    }

    pub fn get_mut(&mut self, path: &[K]) -> Option<&mut P> {
        self.lookup_mut(path).and_then(Node::payload_mut)
    }

    pub fn contains_key(&self, path: &[K]) -> bool {
        self.lookup(path).is_some()
    }

    /// Assembles a node from parts without checking any of the trie invariants.
    ///
    /// Children are keyed by the given element, which is expected to lead the
    /// child's prefix. Use [`Node::validate`] to check a trie built this way.
    pub fn from_parts(
        prefix: Vec<K>,
        payload: Option<P>,
        children: impl IntoIterator<Item = (K, Node<K, P>)>,
    ) -> Self {
        let children: Children<K, P> = children
            .into_iter()
            .map(|(element, child)| (element, Box::new(child)))
            .collect();
        Node {
            prefix,
            children: (!children.is_empty()).then_some(children),
            payload,
        }
    }

    /// Checks that every child below this node is reachable by its own prefix.
    ///
    /// Each child must have a non-empty prefix whose first element equals the
    /// key it is stored under in its parent.
    pub fn validate(&self) -> Result<()> {
        let Some(children) = &self.children else {
            return Ok(());
        };
        for (element, child) in children {
            if child.prefix.first() != Some(element) {
                return Err(Error::InvalidNode);
            }
            child.validate()?;
        }
        Ok(())
    }
}

impl<K: PartialEq + Clone, P> Node<K, P> {
    /// Stores `payload` under the key `path`, replacing any previous payload.
    ///
    /// Nodes are split where `path` diverges from an existing prefix. Inserting
    /// into a trie that satisfies [`Node::validate`] never fails.
    pub fn put(&mut self, path: &[K], payload: P) -> Result<()> {
        let matched = self.common_prefix_len(path);
        if matched < self.prefix.len() {
            self.split(matched, &path[matched..], payload);
            return Ok(());
        }

        let rest = &path[matched..];
        let Some(element) = rest.first() else {
            self.payload = Some(payload);
            return Ok(());
        };
        let children = self.children.get_or_insert_with(ArrayMap::new);
        match children.get_mut(element) {
            Some(child) => child.put(rest, payload),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(len = rest.len(), "attaching leaf");
                children.put(element.clone(), Box::new(Node::leaf(rest.to_vec(), payload)));
                Ok(())
            }
        }
    }

    /// Cuts the prefix at `at`, moving everything this node held into a new child.
    ///
    /// When `rest` is empty the inserted key ends here and this node takes the
    /// payload, otherwise `rest` becomes a sibling leaf of the moved remainder
    /// and this node is left as an intermediate branch.
    fn split(&mut self, at: usize, rest: &[K], payload: P) {
        #[cfg(feature = "tracing")]
        tracing::trace!(at, remainder = self.prefix.len() - at, "splitting node");

        let remainder = Node {
            prefix: self.prefix.split_off(at),
            children: self.children.take(),
            payload: self.payload.take(),
        };
        let lead = remainder
            .prefix
            .first()
            .cloned()
            .expect("split point lies inside the prefix");

        let mut children = ArrayMap::new();
        children.put(lead, Box::new(remainder));
        match rest.first() {
            None => self.payload = Some(payload),
            Some(element) => {
                children.put(element.clone(), Box::new(Node::leaf(rest.to_vec(), payload)));
            }
        }
        self.children = Some(children);
    }
}

impl<K: PartialEq + Clone, P> FromIterator<(Vec<K>, P)> for Node<K, P> {
    fn from_iter<T: IntoIterator<Item = (Vec<K>, P)>>(iter: T) -> Self {
        let mut root = Node::new();
        root.extend(iter);
        root
    }
}

impl<K: PartialEq + Clone, P> Extend<(Vec<K>, P)> for Node<K, P> {
    fn extend<T: IntoIterator<Item = (Vec<K>, P)>>(&mut self, iter: T) {
        for (key, payload) in iter {
            self.put(&key, payload)
                .expect("insertion into a well formed trie cannot fail");
        }
    }
}
