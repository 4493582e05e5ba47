//! An unbalanced BST defined by structural recursion. Every operation matches
//! on the two variants of [`Tree`] and recurses into a child slot until it hits
//! an [`Empty`][Tree::Empty] subtree.
//!
//! Operations that change the tree (`insert` and `delete`) take the tree by
//! value and hand back the new root. The root can change identity: inserting
//! into an empty tree creates a node and deleting the last key collapses it
//! back to `Empty`. Because the old handle is moved, there is no way to keep
//! using a stale root by accident.
//!
//! Nothing here rebalances. The shape of the tree, and so its height, is
//! whatever the sequence of inserts and deletes produces.
//!
//! # Examples
//!
//! ```
//! use ordtree::recursive::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! // Always keep the returned tree.
//! let tree = tree.insert(1, "one").insert(2, "two");
//! assert_eq!(tree.search(&1), Some(&"one"));
//! assert_eq!(tree.size(), 2);
//!
//! let tree = tree.delete(&1);
//! assert_eq!(tree.search(&1), None);
//! assert_eq!(tree.min(), Ok(&2));
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::EmptyTreeError;
use crate::traversal::{Traversal, TraversalTask};

/// A Binary Search Tree mapping keys to values.
///
/// Each subtree is owned by exactly one parent, so a `Tree` never shares
/// nodes with another `Tree`.
#[derive(Clone)]
pub enum Tree<K, V> {
    /// A subtree with no entries.
    Empty,
    /// A subtree rooted at a [`Node`].
    Node(Box<Node<K, V>>),
}

/// An entry in a [`Tree`] along with the subtrees holding smaller and larger
/// keys.
#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: Tree::Empty,
            right: Tree::Empty,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The subtree of keys smaller than [`key`][Node::key].
    pub fn left(&self) -> &Tree<K, V> {
        &self.left
    }

    /// The subtree of keys larger than [`key`][Node::key].
    pub fn right(&self) -> &Tree<K, V> {
        &self.right
    }

    /// Removes this node's own entry and returns it along with whatever should
    /// take this node's place.
    ///
    /// With a left subtree, the largest entry of that subtree (the
    /// predecessor) is moved up into this node, the same as deleting the
    /// predecessor's key from the left subtree. Without one, the right
    /// subtree takes over, which is `Empty` for a leaf.
    fn remove_entry(mut self: Box<Self>) -> (Tree<K, V>, (K, V)) {
        let (left, predecessor) = mem::take(&mut self.left).pop_max();
        self.left = left;

        match predecessor {
            Some((key, value)) => {
                log::trace!("promoting predecessor into removed node");
                let key = mem::replace(&mut self.key, key);
                let value = mem::replace(&mut self.value, value);
                (Tree::Node(self), (key, value))
            }
            None => {
                log::trace!("replacing removed node with its right subtree");
                let Node {
                    key, value, right, ..
                } = *self;
                (right, (key, value))
            }
        }
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Whether this tree has no entries.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Potentially finds the value associated with the given key in this tree.
    /// If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let tree = Tree::new().insert(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: cmp::Ord,
    {
        match self {
            Self::Empty => None,
            Self::Node(n) => match key.cmp(&n.key) {
                cmp::Ordering::Less => n.left.search(key),
                cmp::Ordering::Equal => Some(&n.value),
                cmp::Ordering::Greater => n.right.search(key),
            },
        }
    }

    /// Binds `key` to `value` and returns the updated tree. If the key is
    /// already bound, only its value is replaced and the shape of the tree is
    /// left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let tree = Tree::new().insert(1, 2);
    /// assert_eq!(tree.search(&1), Some(&2));
    ///
    /// let tree = tree.insert(1, 3);
    /// assert_eq!(tree.search(&1), Some(&3));
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[must_use = "the tree is moved into `insert`, use the returned tree instead"]
    pub fn insert(self, key: K, value: V) -> Self
    where
        K: cmp::Ord,
    {
        match self {
            Self::Empty => {
                log::trace!("creating node in empty slot");
                Self::Node(Box::new(Node::new(key, value)))
            }
            Self::Node(mut n) => {
                match key.cmp(&n.key) {
                    cmp::Ordering::Less => n.left = mem::take(&mut n.left).insert(key, value),
                    cmp::Ordering::Equal => {
                        log::trace!("overwriting value of existing key");
                        n.value = value;
                    }
                    cmp::Ordering::Greater => n.right = mem::take(&mut n.right).insert(key, value),
                }
                Self::Node(n)
            }
        }
    }

    /// Removes any binding for `key` and returns the updated tree. Deleting a
    /// key that isn't bound is a no-op.
    ///
    /// A node with a left subtree is never unlinked. Instead the largest entry
    /// of its left subtree is promoted into it and that entry is deleted from
    /// the left subtree in turn. A node without a left subtree is replaced by
    /// its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let tree: Tree<_, _> = vec![(5, 'e'), (3, 'c'), (8, 'h'), (1, 'a'), (4, 'd')]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let tree = tree.delete(&5);
    ///
    /// // 4 is the largest key left of 5 so it takes over the root.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(4));
    /// assert_eq!(tree.search(&5), None);
    /// assert_eq!(tree.size(), 4);
    /// ```
    #[must_use = "the tree is moved into `delete`, use the returned tree instead"]
    pub fn delete(self, key: &K) -> Self
    where
        K: cmp::Ord,
    {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(mut n) => match key.cmp(&n.key) {
                cmp::Ordering::Less => {
                    n.left = mem::take(&mut n.left).delete(key);
                    Self::Node(n)
                }
                cmp::Ordering::Equal => n.remove_entry().0,
                cmp::Ordering::Greater => {
                    n.right = mem::take(&mut n.right).delete(key);
                    Self::Node(n)
                }
            },
        }
    }

    /// Removes the entry with the largest key, returning the remaining tree and
    /// the removed entry. The largest node is removed the same way `delete`
    /// would remove it.
    fn pop_max(self) -> (Self, Option<(K, V)>) {
        match self {
            Self::Empty => (Self::Empty, None),
            Self::Node(mut n) => {
                if n.right.is_empty() {
                    let (rest, entry) = n.remove_entry();
                    (rest, Some(entry))
                } else {
                    let (right, entry) = mem::take(&mut n.right).pop_max();
                    n.right = right;
                    (Self::Node(n), entry)
                }
            }
        }
    }

    /// Returns the largest key in this tree.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree has no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::error::EmptyTreeError;
    /// use ordtree::recursive::Tree;
    ///
    /// let tree = Tree::new();
    /// assert_eq!(tree.max(), Err(EmptyTreeError));
    ///
    /// let tree = tree.insert(1, ()).insert(7, ()).insert(3, ());
    /// assert_eq!(tree.max(), Ok(&7));
    /// ```
    pub fn max(&self) -> Result<&K, EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(n) => n.right.max().or(Ok(&n.key)),
        }
    }

    /// Returns the smallest key in this tree.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the tree has no entries.
    pub fn min(&self) -> Result<&K, EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(n) => n.left.min().or(Ok(&n.key)),
        }
    }

    /// Number of keys bound in this tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.size() + n.right.size(),
        }
    }

    /// Number of nodes on the longest path from the root down to a leaf. An
    /// empty tree has a height of 0 and a tree with a single entry has a
    /// height of 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K, V>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Adds a reference to every key in this tree to `keys`. Callers should not
    /// rely on the order keys are added in.
    pub fn extend_keys<'a, C>(&'a self, keys: &mut C)
    where
        C: Extend<&'a K>,
    {
        if let Self::Node(n) = self {
            keys.extend(Some(&n.key));
            n.right.extend_keys(keys);
            n.left.extend_keys(keys);
        }
    }

    /// Gathers references to every key in this tree into a new collection.
    /// Order is unspecified so a set is the natural target.
    ///
    /// Name the element type as a reference (`BTreeSet<&K>`, `Vec<&K>`). For
    /// `Copy` keys, std collections also extend from `&K` into owned `K`, so
    /// `BTreeSet<_>` alone can be ambiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use ordtree::recursive::Tree;
    ///
    /// let tree = Tree::new().insert(2, ()).insert(1, ()).insert(3, ());
    /// let keys: BTreeSet<&i32> = tree.collect_keys();
    ///
    /// assert_eq!(keys.into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn collect_keys<'a, C>(&'a self) -> C
    where
        C: Default + Extend<&'a K>,
    {
        let mut keys = C::default();
        self.extend_keys(&mut keys);
        keys
    }

    /// Returns a new tree holding copies of every entry whose key lies within
    /// `from..=to`. This tree is left untouched and shares nothing with the
    /// result.
    ///
    /// Out of range nodes are dropped along with the side of their subtree
    /// that can't contain in range keys, so the result keeps the relative
    /// shape of the surviving nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    ///
    /// let tree: Tree<_, _> = (1..=9).map(|k| (k, k * 10)).collect();
    /// let range = tree.sub_tree(&3, &5);
    ///
    /// assert_eq!(range.size(), 3);
    /// assert_eq!(range.search(&4), Some(&40));
    /// assert_eq!(range.search(&6), None);
    /// assert_eq!(tree.size(), 9);
    /// ```
    pub fn sub_tree(&self, from: &K, to: &K) -> Self
    where
        K: cmp::Ord + Clone,
        V: Clone,
    {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) if n.key > *to => n.left.sub_tree(from, to),
            Self::Node(n) if n.key < *from => n.right.sub_tree(from, to),
            Self::Node(n) => {
                log::trace!("copying in range node");
                Self::Node(Box::new(Node {
                    key: n.key.clone(),
                    value: n.value.clone(),
                    left: n.left.sub_tree(from, to),
                    right: n.right.sub_tree(from, to),
                }))
            }
        }
    }

    /// Walks the tree depth first, handing every entry to `task` once in the
    /// order given by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::recursive::Tree;
    /// use ordtree::traversal::Traversal;
    ///
    /// let tree = Tree::new().insert(2, 'b').insert(3, 'c').insert(1, 'a');
    ///
    /// let mut seen = String::new();
    /// tree.traverse(&mut |_: &i32, v: &char| seen.push(*v), Traversal::InOrder);
    ///
    /// assert_eq!(seen, "abc");
    /// ```
    pub fn traverse<'a, T>(&'a self, task: &mut T, order: Traversal)
    where
        T: TraversalTask<&'a K, &'a V>,
    {
        if let Self::Node(n) = self {
            let (first, last) = match order {
                Traversal::InOrder => (&n.left, &n.right),
                Traversal::RightRootLeft => (&n.right, &n.left),
            };
            first.traverse(task, order);
            task.perform_task(&n.key, &n.value);
            last.traverse(task, order);
        }
    }

    /// Visits entries in ascending key order. Same as
    /// [`traverse`][Tree::traverse] with [`Traversal::InOrder`].
    pub fn inorder_traversal<'a, T>(&'a self, task: &mut T)
    where
        T: TraversalTask<&'a K, &'a V>,
    {
        self.traverse(task, Traversal::InOrder)
    }

    /// Visits entries in descending key order. Same as
    /// [`traverse`][Tree::traverse] with [`Traversal::RightRootLeft`].
    pub fn right_root_left_traversal<'a, T>(&'a self, task: &mut T)
    where
        T: TraversalTask<&'a K, &'a V>,
    {
        self.traverse(task, Traversal::RightRootLeft)
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, (k, v)| tree.insert(k, v))
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let tree = iter
            .into_iter()
            .fold(mem::take(self), |tree, (k, v)| tree.insert(k, v));
        *self = tree;
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Node(n) => fmt::Debug::fmt(n, f),
        }
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
