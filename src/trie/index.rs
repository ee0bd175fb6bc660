//! Prefix index
//!
//! A case-insensitive, self-locking trie mapping names to typed values.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::node::Node;

#[derive(Debug, Clone)]
struct Tree<V> {
    root: Node<V>,
    len: usize,
}

/// Case-insensitive associative container with exact and prefix lookup.
///
/// Keys are lower-cased before every traversal, so `"Alice"` and `"alice"`
/// address the same entry. Each instance guards its tree with its own
/// reader/writer lock and can be shared between threads on its own; the
/// `&mut self` accessors skip that lock since exclusivity is already proven.
#[derive(Debug)]
pub struct PrefixIndex<V> {
    tree: RwLock<Tree<V>>,
}

impl<V> Default for PrefixIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-cases `key` into the character path used for traversal.
fn normalize(key: &str) -> Vec<char> {
    key.to_lowercase().chars().collect()
}

impl<V> PrefixIndex<V> {
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(Tree {
                root: Node::default(),
                len: 0,
            }),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.tree.read().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` under `key`, replacing and returning any previous value.
    pub fn insert(&self, key: &str, value: V) -> Option<V> {
        let path = normalize(key);
        let mut tree = self.tree.write();
        let previous = tree.root.insert(&path, value);
        if previous.is_none() {
            tree.len += 1;
        }
        previous
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let path = normalize(key);
        self.tree
            .read()
            .root
            .find(&path)
            .is_some_and(Node::is_terminal)
    }

    /// Runs `f` against the value stored under `key` while holding the read
    /// lock. Returns `None` if the key is absent.
    pub fn with_value<R, F>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        let path = normalize(key);
        let tree = self.tree.read();
        tree.root.find(&path).and_then(Node::value).map(f)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let path = normalize(key);
        self.tree
            .get_mut()
            .root
            .find_mut(&path)
            .and_then(Node::value_mut)
    }

    /// Removes `key`, pruning nodes that no longer lead to any key.
    pub fn remove(&self, key: &str) -> Option<V> {
        let path = normalize(key);
        let mut tree = self.tree.write();
        let removed = tree.root.remove(&path);
        if removed.is_some() {
            tree.len -= 1;
        }
        removed
    }

    /// Removes `key` and reports whether anything was deleted.
    pub fn delete(&self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Calls `f` for every entry whose key starts with `prefix`, passing the
    /// full lower-cased key. Visit order is unspecified.
    pub fn visit_prefix<F>(&self, prefix: &str, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        let path = normalize(prefix);
        let tree = self.tree.read();
        if let Some(node) = tree.root.find(&path) {
            let mut key: String = path.into_iter().collect();
            node.visit(&mut key, &mut f);
        }
    }
}

impl<V: Clone> PrefixIndex<V> {
    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        self.with_value(key, V::clone)
    }

    /// Collects every entry whose key starts with `prefix`.
    ///
    /// An empty prefix returns all entries. A prefix with no matching path
    /// and a prefix whose subtree holds no keys both yield an empty map.
    pub fn prefix_search(&self, prefix: &str) -> HashMap<String, V> {
        let mut results = HashMap::new();
        self.visit_prefix(prefix, |key, value| {
            results.insert(key.to_string(), value.clone());
        });
        results
    }
}

impl<V: Clone> Clone for PrefixIndex<V> {
    fn clone(&self) -> Self {
        Self {
            tree: RwLock::new(self.tree.read().clone()),
        }
    }
}

#[cfg(test)]
impl<V> PrefixIndex<V> {
    pub(crate) fn node_count(&self) -> usize {
        self.tree.read().root.count_nodes()
    }

    pub(crate) fn has_dead_nodes(&self) -> bool {
        self.tree.read().root.has_dead_descendant()
    }
}
