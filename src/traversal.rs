//! Depth-first walks over a [`Tree`][crate::recursive::Tree].
//!
//! A walk hands every `(key, value)` pair to a [`TraversalTask`] exactly once,
//! in the order picked by a [`Traversal`]. Tasks may do whatever they like with
//! the pairs except mutate the tree being walked, which the borrow checker
//! already forbids.
//!
//! # Examples
//!
//! ```
//! use ordtree::recursive::Tree;
//! use ordtree::traversal::{KeyValueCollector, Traversal};
//!
//! let tree: Tree<_, _> = vec![(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
//!
//! let mut collector = KeyValueCollector::new();
//! tree.traverse(&mut collector, Traversal::RightRootLeft);
//!
//! assert_eq!(collector.keys(), &[&3, &2, &1]);
//! assert_eq!(collector.values(), &[&"c", &"b", &"a"]);
//! ```

/// The order in which a walk visits a node relative to its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Left subtree, then the node, then the right subtree. Visits keys in
    /// ascending order.
    InOrder,
    /// Right subtree, then the node, then the left subtree. Visits keys in
    /// descending order.
    RightRootLeft,
}

impl Default for Traversal {
    fn default() -> Self {
        Self::InOrder
    }
}

/// Something to do with each entry a walk visits.
///
/// Any `FnMut(K, V)` closure is a `TraversalTask`, so most callers never need
/// to implement this by hand.
pub trait TraversalTask<K, V> {
    /// Called once per visited entry, in traversal order.
    fn perform_task(&mut self, key: K, value: V);
}

impl<K, V, F> TraversalTask<K, V> for F
where
    F: FnMut(K, V),
{
    fn perform_task(&mut self, key: K, value: V) {
        self(key, value)
    }
}

/// A task that records keys and values into two separate `Vec`s in the order
/// they are visited. Both start out empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValueCollector<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Default for KeyValueCollector<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyValueCollector<K, V> {
    /// Creates a collector with no recorded entries.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Keys seen so far, in visitation order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Values seen so far, in visitation order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Consumes the collector, returning `(keys, values)`.
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }
}

impl<K, V> TraversalTask<K, V> for KeyValueCollector<K, V> {
    fn perform_task(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
    }
}
