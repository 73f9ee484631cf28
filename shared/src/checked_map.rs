use std::{collections::HashMap, hash::Hash};

/// A map whose inserts and removes assert the caller's view of membership.
///
/// Used for state that must be created and destroyed in lockstep with some
/// other registry; a mismatch is a lifecycle bug, not a recoverable error.
pub struct CheckedMap<K: Eq + Hash, V> {
    inner: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for CheckedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> CheckedMap<K, V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    /// Panics if `key` is already present
    pub fn insert(&mut self, key: K, value: V) {
        if self.inner.contains_key(&key) {
            panic!("Cannot insert and replace value for given key. Check first.")
        }

        self.inner.insert(key, value);
    }

    /// Panics if `key` is absent
    pub fn remove(&mut self, key: &K) -> V {
        match self.inner.remove(key) {
            Some(value) => value,
            None => panic!("Cannot remove value for key with non-existent value. Check whether map contains key first."),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
