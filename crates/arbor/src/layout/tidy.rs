//! Reingold–Tilford tidy layout for binary trees.
//!
//! The engine works in two passes over a [`PlaceableTree`]:
//!
//! 1. **Setup** (post-order) computes, for every internal node, the horizontal
//!    distance to its children so that the right contour of the left subtree
//!    and the left contour of the right subtree stay at least the minimum
//!    separation apart on every shared level. When the two subtrees have
//!    different heights, the deepest contour node of the shallower side is
//!    threaded to the next contour node of the deeper side, so later merges
//!    can keep walking the contour without revisiting whole subtrees.
//! 2. **Petrify** (pre-order) turns those relative offsets into absolute
//!    coordinates and removes every thread.
//!
//! Each node is visited a constant number of times per pass plus the contour
//! steps charged to the merge that produced them, which keeps the whole
//! layout linear in the number of nodes.

use log::{debug, trace};

use super::{ChildLink, Contour, NodeId, PlaceableTree};

/// The tidy tree layout engine.
///
/// All distances are in pixels. Nodes are drawn as circles of
/// `node_radius`, so the configured separations are gaps between circle
/// surfaces rather than between centres.
///
/// # Examples
///
/// ```
/// # use arbor::layout::TidyLayout;
/// let engine = TidyLayout::new()
///     .with_sibling_separation(20.0)
///     .with_node_radius(20.0)
///     .with_level_separation(20.0);
/// assert_eq!(engine.level_height(), 60.0);
/// assert_eq!(engine.min_separation(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidyLayout {
    sibling_separation: f32,
    node_radius: f32,
    level_separation: f32,
}

impl Default for TidyLayout {
    fn default() -> Self {
        Self {
            sibling_separation: 20.0,
            node_radius: 20.0,
            level_separation: 20.0,
        }
    }
}

impl TidyLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum gap between the surfaces of adjacent nodes on one level.
    pub fn with_sibling_separation(mut self, separation: f32) -> Self {
        self.sibling_separation = separation;
        self
    }

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    /// Gap between the surfaces of nodes on consecutive levels.
    pub fn with_level_separation(mut self, separation: f32) -> Self {
        self.level_separation = separation;
        self
    }

    /// Minimum distance between the centres of adjacent nodes on one level.
    pub fn min_separation(&self) -> f32 {
        self.sibling_separation + 2.0 * self.node_radius
    }

    /// Vertical distance between consecutive levels.
    pub fn level_height(&self) -> f32 {
        2.0 * self.node_radius + self.level_separation
    }

    /// Lays out `tree` in place: Setup followed by Petrify.
    ///
    /// Does nothing for an empty tree. Setup recurses once per level, so the
    /// caller must keep the tree height within what the current thread's
    /// stack can hold; Petrify uses a work stack and has no such limit.
    pub fn perform(&self, tree: &mut PlaceableTree) {
        let Some(root) = tree.root() else {
            debug!("Skipping layout of empty tree");
            return;
        };

        debug!(
            nodes = tree.len(),
            min_separation = self.min_separation(),
            level_height = self.level_height();
            "Performing tidy layout"
        );

        self.setup(tree);
        let root_x = tree[root].x;
        self.petrify(tree, root_x);
    }

    /// Runs the Setup pass from the root and returns its left and right
    /// contours.
    ///
    /// Afterwards every node has its final `y` and its child offset, and the
    /// tree may contain thread links. Recursion depth equals the tree height.
    pub fn setup(&self, tree: &mut PlaceableTree) -> (Contour, Contour) {
        let root = tree.root();
        let (leftmost, rightmost) = self.setup_node(tree, root, 0);
        trace!(leftmost:?, rightmost:?; "Setup pass finished");
        (leftmost, rightmost)
    }

    /// Runs the Petrify pass, placing the root at `root_x`.
    ///
    /// Every thread is removed before the node's children are visited, so
    /// each node is reached exactly once through its structural parent.
    pub fn petrify(&self, tree: &mut PlaceableTree, root_x: f32) {
        let mut pending: Vec<(NodeId, f32)> =
            tree.root().into_iter().map(|id| (id, root_x)).collect();

        while let Some((id, x)) = pending.pop() {
            let node = &mut tree[id];
            node.x = x;
            if node.is_threaded() {
                node.left = ChildLink::Absent;
                node.right = ChildLink::Absent;
                node.offset = 0.0;
            }

            let offset = node.offset;
            if let Some(right) = node.right.structural() {
                pending.push((right, x + offset));
            }
            if let Some(left) = node.left.structural() {
                pending.push((left, x - offset));
            }
        }
    }

    fn setup_node(
        &self,
        tree: &mut PlaceableTree,
        node: Option<NodeId>,
        depth: usize,
    ) -> (Contour, Contour) {
        let Some(id) = node else {
            return (Contour::empty(), Contour::empty());
        };

        tree[id].y = depth as f32 * self.level_height();
        let (left, right) = tree.children(id);

        let (left_outer, left_inner) = self.setup_node(tree, left, depth + 1);
        let (right_inner, right_outer) = self.setup_node(tree, right, depth + 1);

        if left.is_none() && right.is_none() {
            tree[id].offset = 0.0;
            let contour = Contour::at(id, depth);
            return (contour, contour);
        }

        let min_separation = self.min_separation();
        let mut current_separation = min_separation;
        let mut root_separation = min_separation;
        let mut left_offset_sum = 0.0;
        let mut right_offset_sum = 0.0;
        let mut left_walker = left;
        let mut right_walker = right;

        // Walk down the facing contours one level at a time.
        while let (Some(l), Some(r)) = (left_walker, right_walker) {
            if current_separation < min_separation {
                root_separation += min_separation - current_separation;
                current_separation = min_separation;
            }

            let l_node = &tree[l];
            if let Some(next) = l_node.right.target() {
                left_offset_sum += l_node.offset;
                current_separation -= l_node.offset;
                left_walker = Some(next);
            } else {
                left_offset_sum -= l_node.offset;
                current_separation += l_node.offset;
                left_walker = l_node.left.target();
            }

            let r_node = &tree[r];
            if let Some(next) = r_node.left.target() {
                right_offset_sum -= r_node.offset;
                current_separation -= r_node.offset;
                right_walker = Some(next);
            } else {
                right_offset_sum += r_node.offset;
                current_separation += r_node.offset;
                right_walker = r_node.right.target();
            }
        }

        let offset = (root_separation + self.node_radius) / 2.0;
        tree[id].offset = offset;
        // Walker positions relative to this node.
        left_offset_sum -= offset;
        right_offset_sum += offset;

        let leftmost = if right_inner.is_deeper_than(&left_outer) || left.is_none() {
            right_inner.shifted(offset)
        } else {
            left_outer.shifted(-offset)
        };
        let rightmost = if left_inner.is_deeper_than(&right_outer) || right.is_none() {
            left_inner.shifted(-offset)
        } else {
            right_outer.shifted(offset)
        };

        if let Some(target) = left_walker.filter(|&walker| Some(walker) != left) {
            // The left subtree is deeper: continue the right contour into it.
            if let Some(end) = right_outer.node() {
                let end_x = right_outer.offset() + offset;
                Self::thread(tree, end, end_x, target, left_offset_sum);
            }
        } else if let Some(target) = right_walker.filter(|&walker| Some(walker) != right) {
            // The right subtree is deeper: continue the left contour into it.
            if let Some(end) = left_outer.node() {
                let end_x = left_outer.offset() - offset;
                Self::thread(tree, end, end_x, target, right_offset_sum);
            }
        }

        (leftmost, rightmost)
    }

    /// Links the contour endpoint `end` (at `end_x`) to `target` (at
    /// `target_x`), both positions relative to the node being merged.
    fn thread(
        tree: &mut PlaceableTree,
        end: NodeId,
        end_x: f32,
        target: NodeId,
        target_x: f32,
    ) {
        let node = &mut tree[end];
        debug_assert!(
            node.left == ChildLink::Absent && node.right == ChildLink::Absent,
            "contour endpoints have no children"
        );

        node.offset = (end_x - target_x).abs();
        if target_x <= end_x {
            node.left = ChildLink::Thread(target);
        } else {
            node.right = ChildLink::Thread(target);
        }
        trace!(
            end = end.index(),
            target = target.index(),
            offset = node.offset;
            "Threaded contour"
        );
    }
}

/// Lays out `tree` with the given spacing and returns it fully positioned.
///
/// `sibling_separation` and `level_separation` are gaps between node
/// surfaces; `node_radius` is the radius of the drawn circles. The tree
/// height limit of [`TidyLayout::perform`] applies.
pub fn perform_layout(
    mut tree: PlaceableTree,
    sibling_separation: f32,
    node_radius: f32,
    level_separation: f32,
) -> PlaceableTree {
    TidyLayout::new()
        .with_sibling_separation(sibling_separation)
        .with_node_radius(node_radius)
        .with_level_separation(level_separation)
        .perform(&mut tree);
    tree
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::layout::test_support::{TestNode, sample_tree};

    fn laid_out(source: &TestNode) -> PlaceableTree {
        perform_layout(PlaceableTree::from_source(Some(source)), 20.0, 20.0, 20.0)
    }

    fn find(tree: &PlaceableTree, label: &str) -> NodeId {
        tree.iter()
            .find(|(_, node)| node.field() == label)
            .map(|(id, _)| id)
            .unwrap_or_else(|| panic!("no node labelled {label}"))
    }

    fn assert_position(tree: &PlaceableTree, label: &str, x: f32, y: f32) {
        let node = &tree[find(tree, label)];
        assert_approx_eq!(f32, node.x(), x, epsilon = 1e-3);
        assert_approx_eq!(f32, node.y(), y, epsilon = 1e-3);
    }

    /// A root whose left child is a leaf and whose right child is a chain of
    /// `length` nodes going left.
    fn lopsided(length: usize) -> TestNode {
        let mut chain = TestNode::left_chain(length);
        chain.label = "B".to_string();
        TestNode::leaf("root")
            .with_left(TestNode::leaf("A"))
            .with_right(chain)
    }

    #[test]
    fn test_empty_tree_is_noop() {
        let empty = PlaceableTree::from_source::<TestNode>(None);
        let tree = perform_layout(empty, 20.0, 20.0, 20.0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_single_root() {
        let tree = laid_out(&TestNode::leaf("1"));
        assert_position(&tree, "1", 0.0, 0.0);
        assert_approx_eq!(f32, tree[find(&tree, "1")].offset(), 0.0);
    }

    #[test]
    fn test_two_leaves() {
        let source = TestNode::leaf("root")
            .with_left(TestNode::leaf("L"))
            .with_right(TestNode::leaf("R"));
        let tree = laid_out(&source);

        assert_position(&tree, "root", 0.0, 0.0);
        assert_position(&tree, "L", -40.0, 60.0);
        assert_position(&tree, "R", 40.0, 60.0);
        assert_approx_eq!(f32, tree[find(&tree, "root")].offset(), 40.0);
    }

    #[test]
    fn test_left_chain_steps_left() {
        let tree = laid_out(&TestNode::left_chain(4));

        for (level, label) in ["1", "2", "3", "4"].into_iter().enumerate() {
            let level = level as f32;
            assert_position(&tree, label, -40.0 * level, 60.0 * level);
        }
        assert!(!tree.has_threads());
    }

    #[test]
    fn test_setup_threads_shallow_side() {
        let source = lopsided(4);
        let mut tree = PlaceableTree::from_source(Some(&source));
        let engine = TidyLayout::new();

        let (leftmost, rightmost) = engine.setup(&mut tree);

        let leaf = find(&tree, "A");
        let target = find(&tree, "2");
        assert!(tree.has_threads());
        assert_eq!(tree[leaf].right(), ChildLink::Thread(target));
        assert_eq!(tree[leaf].left(), ChildLink::Absent);
        assert_approx_eq!(f32, tree[leaf].offset(), 40.0);

        // Both extremes are the bottom of the chain, four levels down.
        assert_eq!(leftmost.node(), Some(find(&tree, "4")));
        assert_eq!(rightmost.node(), Some(find(&tree, "4")));
        assert_eq!(leftmost.depth(), Some(4));
        assert_approx_eq!(f32, leftmost.offset(), -80.0);
        assert_approx_eq!(f32, rightmost.offset(), -80.0);
    }

    #[test]
    fn test_petrify_removes_threads() {
        let source = lopsided(4);
        let tree = laid_out(&source);

        assert!(!tree.has_threads());
        let leaf = find(&tree, "A");
        assert!(tree.is_leaf(leaf));
        assert_approx_eq!(f32, tree[leaf].offset(), 0.0);

        assert_position(&tree, "root", 0.0, 0.0);
        assert_position(&tree, "A", -40.0, 60.0);
        assert_position(&tree, "B", 40.0, 60.0);
        assert_position(&tree, "2", 0.0, 120.0);
        assert_position(&tree, "3", -40.0, 180.0);
        assert_position(&tree, "4", -80.0, 240.0);
    }

    #[test]
    fn test_petrify_keeps_structure() {
        let source = sample_tree();
        let before = PlaceableTree::from_source(Some(&source));
        let after = laid_out(&source);

        assert_eq!(before.len(), after.len());
        for (id, node) in before.iter() {
            assert_eq!(node.field(), after[id].field());
            assert_eq!(node.parent(), after[id].parent());
            assert_eq!(before.children(id), after.children(id));
        }
    }

    #[test]
    fn test_children_straddle_parent() {
        let tree = laid_out(&sample_tree());

        for (id, node) in tree.iter() {
            let (left, right) = tree.children(id);
            if let Some(left) = left {
                assert_approx_eq!(f32, tree[left].x(), node.x() - node.offset());
            }
            if let Some(right) = right {
                assert_approx_eq!(f32, tree[right].x(), node.x() + node.offset());
            }
        }
    }

    #[test]
    fn test_sample_tree_positions() {
        let tree = laid_out(&sample_tree());

        assert_position(&tree, "8", 0.0, 0.0);
        assert_position(&tree, "4", -80.0, 60.0);
        assert_position(&tree, "7", 80.0, 60.0);
        assert_position(&tree, "1", -120.0, 120.0);
        assert_position(&tree, "3", -40.0, 120.0);
        assert_position(&tree, "2", 0.0, 180.0);
        assert_position(&tree, "5", 40.0, 120.0);
        assert_position(&tree, "6", 120.0, 120.0);
    }

    #[test]
    fn test_mirror_symmetry() {
        let source = sample_tree();
        let tree = laid_out(&source);
        let mirror = laid_out(&source.mirrored());

        let ids = tree.in_order();
        let mirror_ids: Vec<NodeId> = mirror.in_order().into_iter().rev().collect();
        assert_eq!(ids.len(), mirror_ids.len());

        for (id, mirror_id) in ids.into_iter().zip(mirror_ids) {
            assert_eq!(tree[id].field(), mirror[mirror_id].field());
            assert_approx_eq!(f32, tree[id].x(), -mirror[mirror_id].x(), epsilon = 1e-3);
            assert_approx_eq!(f32, tree[id].y(), mirror[mirror_id].y(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let source = sample_tree();
        let first = laid_out(&source);
        let second = laid_out(&source);

        for (id, node) in first.iter() {
            assert_eq!(node.x(), second[id].x());
            assert_eq!(node.y(), second[id].y());
        }
    }

    #[test]
    fn test_level_separation_controls_y() {
        let source = TestNode::left_chain(3);
        let tree = perform_layout(PlaceableTree::from_source(Some(&source)), 20.0, 10.0, 5.0);

        assert_position(&tree, "2", -25.0, 25.0);
        assert_position(&tree, "3", -50.0, 50.0);
    }

    #[test]
    fn test_perform_respects_existing_root_x() {
        let source = TestNode::leaf("root")
            .with_left(TestNode::leaf("L"))
            .with_right(TestNode::leaf("R"));
        let mut tree = PlaceableTree::from_source(Some(&source));
        let engine = TidyLayout::new();

        engine.setup(&mut tree);
        engine.petrify(&mut tree, 100.0);

        assert_position(&tree, "root", 100.0, 0.0);
        assert_position(&tree, "L", 60.0, 60.0);
        assert_position(&tree, "R", 140.0, 60.0);
    }
}
