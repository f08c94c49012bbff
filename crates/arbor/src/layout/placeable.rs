//! The engine's internal tree representation.
//!
//! A [`PlaceableTree`] is an arena of [`PlaceableNode`]s built once from a
//! [`BinaryNode`] adapter tree. Nodes refer to each other through copyable
//! [`NodeId`]s, so parent back references never own anything and the whole
//! tree is released at once when the arena is dropped.

use std::ops::{Index, IndexMut};

use log::trace;

use arbor_core::{
    geometry::{Bounds, Point},
    tree::{self, BinaryNode},
};

/// Index of a node inside its [`PlaceableTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in build (pre-order) order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One child slot of a node.
///
/// `Thread` links are auxiliary edges inserted by the Setup pass so that
/// contour walks can continue into a deeper neighbouring subtree. They are
/// never part of the logical tree and Petrify removes all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildLink {
    #[default]
    Absent,
    Structural(NodeId),
    Thread(NodeId),
}

impl ChildLink {
    /// The linked node, whether the link is structural or a thread.
    pub fn target(self) -> Option<NodeId> {
        match self {
            Self::Absent => None,
            Self::Structural(id) | Self::Thread(id) => Some(id),
        }
    }

    /// The linked node only if it is a real child.
    pub fn structural(self) -> Option<NodeId> {
        match self {
            Self::Structural(id) => Some(id),
            Self::Absent | Self::Thread(_) => None,
        }
    }

    pub fn is_thread(self) -> bool {
        matches!(self, Self::Thread(_))
    }
}

/// A node that can be placed and rendered.
#[derive(Debug, Clone)]
pub struct PlaceableNode {
    field: String,
    color: Option<String>,
    parent: Option<NodeId>,
    pub(super) left: ChildLink,
    pub(super) right: ChildLink,
    pub(super) x: f32,
    pub(super) y: f32,
    pub(super) offset: f32,
}

impl PlaceableNode {
    fn new(field: String, color: Option<String>, parent: Option<NodeId>) -> Self {
        Self {
            field,
            color,
            parent,
            left: ChildLink::Absent,
            right: ChildLink::Absent,
            x: 0.0,
            y: 0.0,
            offset: 0.0,
        }
    }

    /// The label copied from the adapter node.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The color override copied from the adapter node, if it had one.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> ChildLink {
        self.left
    }

    pub fn right(&self) -> ChildLink {
        self.right
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// The node centre. Only meaningful once layout has completed.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Horizontal distance from this node to each of its children.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// True while one of the child slots holds a thread.
    pub fn is_threaded(&self) -> bool {
        self.left.is_thread() || self.right.is_thread()
    }

    /// True when the node has no structural children.
    pub fn is_leaf(&self) -> bool {
        self.left.structural().is_none() && self.right.structural().is_none()
    }
}

/// Arena holding every node of a tree under layout.
#[derive(Debug, Clone, Default)]
pub struct PlaceableTree {
    nodes: Vec<PlaceableNode>,
    root: Option<NodeId>,
}

impl PlaceableTree {
    /// Builds an isomorphic placeable tree from an adapter tree.
    ///
    /// Missing children and placeholder children are both treated as
    /// absent. Each adapter node's label is read exactly once. The build
    /// recurses once per level of the adapter tree.
    pub fn from_source<N: BinaryNode>(root: Option<&N>) -> Self {
        let mut tree = Self::default();
        tree.root = tree.build(root, None);
        trace!(nodes = tree.len(); "Placeable tree built");
        tree
    }

    fn build<N: BinaryNode>(
        &mut self,
        source: Option<&N>,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        let source = tree::present(source)?;

        let id = NodeId(self.nodes.len());
        let field = source.field().into_owned();
        let color = source.color().map(str::to_owned);
        self.nodes.push(PlaceableNode::new(field, color, parent));

        if let Some(left) = self.build(source.left(), Some(id)) {
            self[id].left = ChildLink::Structural(left);
        }
        if let Some(right) = self.build(source.right(), Some(id)) {
            self[id].right = ChildLink::Structural(right);
        }

        Some(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &PlaceableNode {
        &self[id]
    }

    /// Iterates over all nodes with their ids, in build order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PlaceableNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// The structural children of `id` as `(left, right)`.
    pub fn children(&self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = &self[id];
        (node.left.structural(), node.right.structural())
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self[id].is_leaf()
    }

    /// True if any node still carries a thread link.
    pub fn has_threads(&self) -> bool {
        self.nodes.iter().any(PlaceableNode::is_threaded)
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> =
            self.root.into_iter().map(|id| (id, 1)).collect();
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let (left, right) = self.children(id);
            stack.extend(left.into_iter().chain(right).map(|child| (child, level + 1)));
        }
        height
    }

    /// Collects all node ids in in-order (left, node, right) sequence.
    pub fn in_order(&self) -> Vec<NodeId> {
        self.in_order_with_bounds().0
    }

    /// Collects node ids in in-order sequence together with the bounding box
    /// of all node centres.
    ///
    /// The bounds are `None` for an empty tree.
    pub fn in_order_with_bounds(&self) -> (Vec<NodeId>, Option<Bounds>) {
        let mut nodes = Vec::with_capacity(self.len());
        let mut bounds: Option<Bounds> = None;
        let mut stack = Vec::new();
        let mut cursor = self.root;

        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self[id].left.structural();
            }
            let Some(id) = stack.pop() else {
                break;
            };

            let position = self[id].position();
            bounds = Some(match bounds {
                Some(bounds) => bounds.include(position),
                None => Bounds::from_point(position),
            });
            nodes.push(id);
            cursor = self[id].right.structural();
        }

        (nodes, bounds)
    }
}

impl Index<NodeId> for PlaceableTree {
    type Output = PlaceableNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for PlaceableTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
