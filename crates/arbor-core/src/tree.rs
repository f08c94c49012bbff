//! The binary tree adapter consumed by the layout engine.
//!
//! Any binary tree type can be laid out and rendered by implementing
//! [`BinaryNode`]. The engine never mutates or validates the adapter tree; it
//! only reads each node's label, its children and, optionally, its color.
//!
//! # Implementing the adapter
//!
//! ```
//! use std::borrow::Cow;
//!
//! use arbor_core::tree::{self, BinaryNode};
//!
//! struct Node {
//!     value: i32,
//!     left: Option<Box<Node>>,
//!     right: Option<Box<Node>>,
//! }
//!
//! impl BinaryNode for Node {
//!     fn field(&self) -> Cow<'_, str> {
//!         Cow::Owned(self.value.to_string())
//!     }
//!
//!     fn left(&self) -> Option<&Self> {
//!         self.left.as_deref()
//!     }
//!
//!     fn right(&self) -> Option<&Self> {
//!         self.right.as_deref()
//!     }
//! }
//!
//! let root = Node {
//!     value: 8,
//!     left: Some(Box::new(Node { value: 4, left: None, right: None })),
//!     right: None,
//! };
//!
//! assert_eq!(tree::height(Some(&root)), 2);
//! ```

use std::borrow::Cow;

/// A node of a caller-defined binary tree.
///
/// # Placeholder nodes
///
/// Some tree representations keep "empty" records around instead of
/// dropping the reference altogether (for example a sentinel leaf in a
/// red-black tree). Such nodes must report `true` from
/// [`is_placeholder`](BinaryNode::is_placeholder); they are then treated
/// exactly like a missing child. A node that is neither absent nor a
/// placeholder but still carries no meaningful data is a caller error, and
/// the resulting layout is unspecified.
pub trait BinaryNode {
    /// The text label drawn inside the node.
    fn field(&self) -> Cow<'_, str>;

    /// The left child, if any.
    fn left(&self) -> Option<&Self>;

    /// The right child, if any.
    fn right(&self) -> Option<&Self>;

    /// Fill color override for this node, as a CSS color string.
    ///
    /// Returning `None` keeps the renderer's configured default.
    fn color(&self) -> Option<&str> {
        None
    }

    /// Reports whether this value stands in for a missing node.
    fn is_placeholder(&self) -> bool {
        false
    }
}

/// Normalizes an optional node so that placeholders become `None`.
pub fn present<N: BinaryNode>(node: Option<&N>) -> Option<&N> {
    node.filter(|node| !node.is_placeholder())
}

/// Reports whether `node` is missing, either as `None` or as a placeholder.
pub fn is_absent<N: BinaryNode>(node: Option<&N>) -> bool {
    present(node).is_none()
}

/// Calculates the height of the tree rooted at `root`.
///
/// An empty tree has height 0 and a lone root has height 1. The walk keeps
/// its own stack, so arbitrarily deep chains are fine.
pub fn height<N: BinaryNode>(root: Option<&N>) -> usize {
    let mut height = 0;
    let mut pending: Vec<(&N, usize)> =
        present(root).map(|node| (node, 1)).into_iter().collect();

    while let Some((node, level)) = pending.pop() {
        height = height.max(level);
        pending.extend(
            [present(node.left()), present(node.right())]
                .into_iter()
                .flatten()
                .map(|child| (child, level + 1)),
        );
    }

    height
}

/// Collects the nodes of the tree level by level.
///
/// The outer vector is ordered top-down, each inner vector left to right.
/// Placeholders are skipped; an empty tree yields an empty vector.
pub fn level_order<N: BinaryNode>(root: Option<&N>) -> Vec<Vec<&N>> {
    let mut levels = Vec::new();
    let mut current: Vec<&N> = present(root).into_iter().collect();

    while !current.is_empty() {
        let next = current
            .iter()
            .flat_map(|node| [present(node.left()), present(node.right())])
            .flatten()
            .collect();
        levels.push(current);
        current = next;
    }

    levels
}
