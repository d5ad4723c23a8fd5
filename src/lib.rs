//! An ordered map and a set implemented with an AVL tree.
//!
//! The tree keeps itself balanced on every insert and remove, so lookups,
//! insertions and deletions all take O(log n) time. Iteration yields
//! entries in ascending key order.
//!
//! # Examples
//!
//! ```
//! use avlmap::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//! map.insert(3, "three");
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get(&2), Some(&"two"));
//!
//! let keys: Vec<i32> = map.iter().map(|(&k, _)| k).collect();
//! assert_eq!(keys, [1, 2, 3]);
//! ```

mod node;

pub mod map;
pub mod set;

pub use map::AvlTreeMap;
pub use set::AvlTreeSet;
