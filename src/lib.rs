//! This crate exposes an ordered key-value container built on an unbalanced
//! Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate makes no attempt to limit its height, so inserting keys in sorted
//! order produces a tree as tall as it is large. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree. See [`traversal`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod recursive;
pub mod traversal;


pub use error::EmptyTreeError;
pub use recursive::Tree;
pub use traversal::{KeyValueCollector, Traversal, TraversalTask};
