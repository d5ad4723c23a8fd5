//! An ordered map implemented with an AVL tree.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::{self, Link, Node};

/// An ordered map implemented with an AVL tree.
///
/// ```
/// use avlmap::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(0, "zero");
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.get(&1), Some(&"one"));
/// map.remove(&1);
/// assert!(map.get(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K: Ord, V> {
    root: Link<K, V>,
    num_nodes: usize,
}

/// An iterator over the entries of a map in ascending key order.
///
/// Created by the [`iter`](AvlTreeMap::iter) method. The iterator is
/// caller-driven: dropping it mid-traversal is fine and a fresh one can be
/// started at any time.
pub struct Iter<'a, K, V> {
    // Path of nodes whose own entry and right subtree are still pending.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    #[cfg(test)]
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Clears the map, dropping all elements.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        node::find(&self.root, key).map(|node| &node.value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        node::find(&self.root, key).map(|node| (&node.key, &node.value))
    }

    /// Returns true if the map contains a value for the given key.
    pub fn contains_key(&self, key: &K) -> bool {
        node::find(&self.root, key).is_some()
    }

    /// Inserts a key-value pair into the map.
    /// If the key was already present only its value is updated.
    /// Returns whether a new key was added.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (root, added) = node::insert(self.root.take(), key, value);
        self.root = root;
        if added {
            self.num_nodes += 1;
        }
        added
    }

    /// Removes a key from the map.
    /// Returns whether the key was previously in the map.
    pub fn remove(&mut self, key: &K) -> bool {
        let (root, removed) = node::remove(self.root.take(), key);
        self.root = root;
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
            debug_assert!(self.get(key).is_none());
        }
        removed
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.num_nodes)
    }

    /// Returns a fully parenthesized structural dump of the tree.
    /// Grammar: `tree := "-" | "(" tree "," key "," tree ")"`.
    /// Intended for debugging and tests, not a stable format.
    pub fn serialize(&self) -> String
    where
        K: fmt::Display,
    {
        node::serialize(&self.root)
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check tree nodes
        let mut num_nodes = 0;
        check_node(&self.root, None, None, &mut num_nodes);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
    }
}

#[cfg(any(test, feature = "consistency_check"))]
fn check_node<K: Ord, V>(
    link: &Link<K, V>,
    lower: Option<&K>,
    upper: Option<&K>,
    num_nodes: &mut usize,
) -> i32 {
    match link {
        None => -1,
        Some(node) => {
            // Check search order against all ancestors
            if let Some(lower) = lower {
                assert!(*lower < node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key < *upper);
            }

            let left_height = check_node(&node.left, lower, Some(&node.key), num_nodes);
            let right_height = check_node(&node.right, Some(&node.key), upper, num_nodes);

            // Check cached height
            assert_eq!(node.height, 1 + std::cmp::max(left_height, right_height));

            // Check AVL condition (near balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            *num_nodes += 1;
            node.height
        }
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: &'a Link<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
