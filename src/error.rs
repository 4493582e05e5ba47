//! Errors reported by [`Tree`][crate::recursive::Tree] queries.

/// Returned by [`min`][crate::recursive::Tree::min] and
/// [`max`][crate::recursive::Tree::max] when the subtree they were called on
/// holds no entries.
///
/// This is an expected outcome rather than a fault. The tree itself branches
/// on it while walking toward the smallest or largest key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tree is empty")]
pub struct EmptyTreeError;
