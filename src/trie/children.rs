use smallvec::SmallVec;

/// Number of entries stored inline before spilling onto the heap.
const INLINE: usize = 4;

/// An associative array that remembers the order its keys were first inserted.
///
/// Keys only need to be comparable for equality, lookups are a linear scan.
/// Nodes of a prefix tree rarely have more than a handful of children, so
/// this beats hashing for the common case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayMap<K, V> {
    entries: SmallVec<[(K, V); INLINE]>,
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        ArrayMap {
            entries: SmallVec::new(),
        }
    }
}

impl<K, V> ArrayMap<K, V> {
    pub fn new() -> Self {
        ArrayMap::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K: PartialEq, V> ArrayMap<K, V> {
    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.position(key).map(|index| &mut self.entries[index].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Inserts a value under `key`, returning the value it replaced.
    ///
    /// A replaced entry keeps its original position in the iteration order.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    entries: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a ArrayMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ArrayMap::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}
