//! Recursive structural core of the AVL tree.
//!
//! Every mutating operation consumes a link, performs the local edit and
//! returns the (possibly new) subtree root. Parents reattach the returned
//! subtree and rebalance on the way back up, so the AVL condition is
//! restored bottom-up along the search path.

use std::cmp::{self, Ordering};
use std::fmt::Display;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    pub(crate) height: i32,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    fn set_left(&mut self, subtree: Link<K, V>) {
        self.left = subtree;
        self.update_height();
    }

    fn set_right(&mut self, subtree: Link<K, V>) {
        self.right = subtree;
        self.update_height();
    }

    fn balancing_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Height of a subtree, where the empty subtree has height -1 and a leaf
/// has height 0.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> i32 {
    match link {
        None => -1,
        Some(node) => node.height,
    }
}

pub(crate) fn find<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let mut current = link;
    while let Some(node) = current {
        match key.cmp(&node.key) {
            Ordering::Equal => return Some(node),
            Ordering::Less => current = &node.left,
            Ordering::Greater => current = &node.right,
        }
    }
    None
}

/// Inserts a key-value pair into the subtree.
/// Returns the new subtree root and whether a new key was added.
/// Inserting an existing key overwrites its value without any structural
/// change.
pub(crate) fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Link<K, V>, bool) {
    match link {
        None => (Some(Box::new(Node::new(key, value))), true),
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, added) = insert(node.left.take(), key, value);
                node.set_left(left);
                (Some(balance(node)), added)
            }
            Ordering::Greater => {
                let (right, added) = insert(node.right.take(), key, value);
                node.set_right(right);
                (Some(balance(node)), added)
            }
            Ordering::Equal => {
                node.value = value;
                (Some(node), false)
            }
        },
    }
}

/// Removes a key from the subtree.
/// Returns the new subtree root and whether the key was present.
pub(crate) fn remove<K: Ord, V>(link: Link<K, V>, key: &K) -> (Link<K, V>, bool) {
    match link {
        None => (None, false),
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = remove(node.left.take(), key);
                node.set_left(left);
                if removed {
                    node = balance(node);
                }
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = remove(node.right.take(), key);
                node.set_right(right);
                if removed {
                    node = balance(node);
                }
                (Some(node), removed)
            }
            Ordering::Equal => {
                if node.left.is_none() {
                    return (node.right.take(), true);
                }
                if node.right.is_none() {
                    return (node.left.take(), true);
                }

                // Node to-remove has two children. Take the in-order
                // successor out of the right subtree and store its pair
                // here, which preserves the search order.
                let (right, (key, value)) = remove_min(node.right.take().unwrap());
                node.set_right(right);
                node.key = key;
                node.value = value;
                (Some(balance(node)), true)
            }
        },
    }
}

/// Detaches the node with the smallest key from the subtree.
/// Returns the remaining subtree and the detached key-value pair.
fn remove_min<K: Ord, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            let node = *node;
            (right, (node.key, node.value))
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.set_left(left);
            (Some(balance(node)), min)
        }
    }
}

/// Promotes the right child to subtree root.
/// The former root becomes the new root's left child and inherits the new
/// root's former left subtree as its right subtree. Heights are recomputed
/// child before parent.
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut root = node.right.take().unwrap();
    node.set_right(root.left.take());
    root.set_left(Some(node));
    root
}

/// Mirror image of [`rotate_left`].
fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut root = node.left.take().unwrap();
    node.set_left(root.right.take());
    root.set_right(Some(node));
    root
}

/// Restores the AVL condition at the subtree root if necessary.
/// A single insert or remove below this node skews it by at most one
/// level, so one single or double rotation is always enough.
fn balance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    // A subtree of height 0 or 1 cannot be out of balance.
    if node.height < 2 {
        return node;
    }

    let factor = node.balancing_factor();
    debug_assert!(factor.abs() <= 2);

    if factor > 1 {
        // Rebalance right. A left-right case is first reduced to
        // left-left by rotating the left child.
        if node.left.as_ref().unwrap().balancing_factor() < 0 {
            let left = rotate_left(node.left.take().unwrap());
            node.set_left(Some(left));
        }
        return rotate_right(node);
    }

    if factor < -1 {
        // Rebalance left, mirror image of the above.
        if node.right.as_ref().unwrap().balancing_factor() > 0 {
            let right = rotate_right(node.right.take().unwrap());
            node.set_right(Some(right));
        }
        return rotate_left(node);
    }

    node
}

/// Writes a fully parenthesized structural dump of the subtree.
/// Grammar: `tree := "-" | "(" tree "," key "," tree ")"`.
/// Intended for debugging and tests, not a stable format.
pub(crate) fn serialize<K: Display, V>(link: &Link<K, V>) -> String {
    let mut out = String::new();
    write_structure(link, &mut out);
    out
}

fn write_structure<K: Display, V>(link: &Link<K, V>, out: &mut String) {
    match link {
        None => out.push('-'),
        Some(node) => {
            out.push('(');
            write_structure(&node.left, out);
            out.push(',');
            out.push_str(&node.key.to_string());
            out.push(',');
            write_structure(&node.right, out);
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populate(values: &[i32]) -> Link<i32, i32> {
        let mut root = None;
        for &value in values {
            let (new_root, _) = insert(root, value, value);
            root = new_root;
        }
        root
    }

    #[test]
    fn test_new_leaf() {
        let (root, added) = insert(None, 1, 2);
        assert!(added);
        let root = root.unwrap();
        assert_eq!(root.height, 0);
        assert_eq!((root.key, root.value), (1, 2));
        assert!(root.left.is_none());
        assert!(root.right.is_none());
    }

    #[test]
    fn test_rotate_left() {
        //   2             4
        //  / \           / \
        // 1   4    ->   2   5
        //    / \       / \
        //   3   5     1   3
        let root = populate(&[2, 1, 4, 3, 5]).unwrap();
        let root = rotate_left(root);
        assert_eq!(root.key, 4);
        assert_eq!(root.height, 2);
        assert_eq!(root.balancing_factor(), 1);
        assert_eq!(root.left.as_ref().unwrap().key, 2);
        assert_eq!(root.right.as_ref().unwrap().key, 5);
    }

    #[test]
    fn test_rotate_right() {
        //     4           2
        //    / \         / \
        //   2   5   ->  1   4
        //  / \             / \
        // 1   3           3   5
        let root = populate(&[4, 2, 5, 1, 3]).unwrap();
        let root = rotate_right(root);
        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(root.balancing_factor(), -1);
        assert_eq!(root.left.as_ref().unwrap().key, 1);
        assert_eq!(root.right.as_ref().unwrap().key, 4);
    }

    #[test]
    fn test_remove_min() {
        let root = populate(&[3, 1, 6, 2, 5, 7, 4]).unwrap();
        let (root, min) = remove_min(root);
        assert_eq!(min, (1, 1));
        assert!(find(&root, &1).is_none());
        assert_eq!(height(&root), 2);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serialize(&populate(&[])), "-");
        assert_eq!(serialize(&populate(&[1])), "(-,1,-)");
        assert_eq!(
            serialize(&populate(&[1, 2, 3, 4, 5, 6, 7])),
            "(((-,1,-),2,(-,3,-)),4,((-,5,-),6,(-,7,-)))"
        );
    }
}
