//! Contour records produced by the Setup pass.

use super::NodeId;

/// The extreme node on one side of a subtree at its deepest level.
///
/// `offset` is the horizontal position of that node relative to the root of
/// the subtree that produced the record. An empty subtree is represented by
/// a `None` depth, which orders before every real depth so that comparisons
/// always prefer the non-empty side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contour {
    node: Option<NodeId>,
    offset: f32,
    depth: Option<usize>,
}

impl Contour {
    /// The record for a missing subtree.
    pub fn empty() -> Self {
        Self {
            node: None,
            offset: 0.0,
            depth: None,
        }
    }

    /// A record pointing at `node` itself, found at `depth`.
    pub fn at(node: NodeId, depth: usize) -> Self {
        Self {
            node: Some(node),
            offset: 0.0,
            depth: Some(depth),
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_none()
    }

    /// Re-anchors the record one level up, to a parent whose child sits
    /// `delta` away from it horizontally.
    pub fn shifted(self, delta: f32) -> Self {
        Self {
            offset: self.offset + delta,
            ..self
        }
    }

    /// True if this contour reaches strictly deeper than `other`.
    pub fn is_deeper_than(&self, other: &Contour) -> bool {
        self.depth > other.depth
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::layout::{PlaceableTree, placeable::test_support::TestNode};

    fn some_id() -> NodeId {
        let tree = PlaceableTree::from_source(Some(&TestNode::leaf("1")));
        tree.root().unwrap()
    }

    #[test]
    fn test_empty_is_shallower_than_any_level() {
        let empty = Contour::empty();
        let root_level = Contour::at(some_id(), 0);

        assert!(empty.is_empty());
        assert!(root_level.is_deeper_than(&empty));
        assert!(!empty.is_deeper_than(&root_level));
        assert!(!empty.is_deeper_than(&Contour::empty()));
    }

    #[test]
    fn test_at_points_to_node() {
        let id = some_id();
        let contour = Contour::at(id, 3);

        assert_eq!(contour.node(), Some(id));
        assert_eq!(contour.depth(), Some(3));
        assert_approx_eq!(f32, contour.offset(), 0.0);
    }

    #[test]
    fn test_shifted_accumulates_offset() {
        let contour = Contour::at(some_id(), 2).shifted(-40.0).shifted(15.0);

        assert_approx_eq!(f32, contour.offset(), -25.0);
        assert_eq!(contour.depth(), Some(2));
    }

    #[test]
    fn test_equal_depths_are_not_deeper() {
        let id = some_id();
        assert!(!Contour::at(id, 2).is_deeper_than(&Contour::at(id, 2)));
    }
}
