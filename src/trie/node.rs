//! Trie nodes
//!
//! Character-keyed tree nodes. A node is terminal exactly when it holds a
//! value, so the terminal flag and the value can never disagree.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    children: HashMap<char, Node<V>>,
    value: Option<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

impl<V> Node<V> {
    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// A non-terminal node with no children serves no key and must be pruned.
    fn is_dead(&self) -> bool {
        !self.is_terminal() && self.children.is_empty()
    }

    /// Follows `path` from this node.
    pub(crate) fn find(&self, path: &[char]) -> Option<&Node<V>> {
        let mut node = self;
        for ch in path {
            node = node.children.get(ch)?;
        }
        Some(node)
    }

    pub(crate) fn find_mut(&mut self, path: &[char]) -> Option<&mut Node<V>> {
        let mut node = self;
        for ch in path {
            node = node.children.get_mut(ch)?;
        }
        Some(node)
    }

    /// Creates the path as needed and stores `value` at its end, returning
    /// whatever value was there before.
    pub(crate) fn insert(&mut self, path: &[char], value: V) -> Option<V> {
        let mut node = self;
        for ch in path {
            node = node.children.entry(*ch).or_default();
        }
        node.value.replace(value)
    }

    /// Removes the value at `path`.
    ///
    /// Every child left dead by the removal is dropped from its parent on the
    /// way back up, so only live keys and their shared prefixes stay
    /// allocated. The receiver itself is never pruned; callers own that
    /// decision (the root always survives).
    pub(crate) fn remove(&mut self, path: &[char]) -> Option<V> {
        let Some((ch, rest)) = path.split_first() else {
            return self.value.take();
        };

        let child = self.children.get_mut(ch)?;
        let removed = child.remove(rest);
        if removed.is_some() && child.is_dead() {
            self.children.remove(ch);
        }
        removed
    }

    /// Calls `f` with the full key and value of every terminal node in this
    /// subtree. `key` holds the path to this node and is restored on return.
    pub(crate) fn visit<F>(&self, key: &mut String, f: &mut F)
    where
        F: FnMut(&str, &V),
    {
        if let Some(value) = &self.value {
            f(key, value);
        }
        for (ch, child) in &self.children {
            key.push(*ch);
            child.visit(key, f);
            key.pop();
        }
    }

    #[cfg(test)]
    pub(crate) fn count_nodes(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Node::count_nodes)
            .sum::<usize>()
    }

    #[cfg(test)]
    pub(crate) fn has_dead_descendant(&self) -> bool {
        self.children
            .values()
            .any(|child| child.is_dead() || child.has_dead_descendant())
    }
}
