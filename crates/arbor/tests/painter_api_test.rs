//! Integration tests for the TreePainter API

use std::borrow::Cow;

use float_cmp::assert_approx_eq;

use arbor::{
    ArborError, TreePainter,
    config::{AppConfig, LayoutConfig, StyleConfig},
    layout::{PlaceableTree, perform_layout},
    tree::BinaryNode,
};

#[derive(Debug, Default)]
struct Node {
    key: String,
    color: Option<String>,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    fn with_left(mut self, child: Node) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    fn with_right(mut self, child: Node) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

impl BinaryNode for Node {
    fn field(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.key)
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

fn balanced() -> Node {
    Node::new("d")
        .with_left(Node::new("b").with_left(Node::new("a")).with_right(Node::new("c")))
        .with_right(Node::new("f").with_left(Node::new("e")).with_right(Node::new("g")))
}

#[test]
fn test_painter_default() {
    let painter = TreePainter::default();
    assert_approx_eq!(f32, painter.config().layout().node_radius(), 20.0);
}

#[test]
fn test_layout_positions_every_node() {
    let painter = TreePainter::default();
    let tree = painter.layout(Some(&balanced())).expect("Failed to lay out");

    assert_eq!(tree.len(), 7);
    assert!(!tree.has_threads());

    let root = tree.root().expect("tree has a root");
    assert_approx_eq!(f32, tree[root].x(), 0.0);
    assert_approx_eq!(f32, tree[root].y(), 0.0);

    let labels: Vec<&str> = tree.in_order().into_iter().map(|id| tree[id].field()).collect();
    assert_eq!(labels, ["a", "b", "c", "d", "e", "f", "g"]);
}

#[test]
fn test_layout_empty_tree() {
    let painter = TreePainter::default();
    let tree = painter.layout::<Node>(None).expect("Empty tree is valid");
    assert!(tree.is_empty());
}

#[test]
fn test_perform_layout_entry_point() {
    let source = Node::new("root").with_left(Node::new("l")).with_right(Node::new("r"));
    let tree = perform_layout(PlaceableTree::from_source(Some(&source)), 20.0, 20.0, 20.0);

    let root = tree.root().expect("tree has a root");
    let (left, right) = tree.children(root);
    let (left, right) = (left.expect("left child"), right.expect("right child"));

    assert_approx_eq!(f32, tree[left].x(), -40.0);
    assert_approx_eq!(f32, tree[right].x(), 40.0);
    assert_approx_eq!(f32, tree[left].y(), 60.0);
    assert_approx_eq!(f32, tree[right].y(), 60.0);
}

#[test]
fn test_render_svg() {
    let painter = TreePainter::default();
    let svg = painter.render_svg(Some(&balanced())).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches("<circle").count(), 7);
    assert_eq!(svg.matches("<line").count(), 6);
}

#[test]
fn test_render_empty_tree() {
    let painter = TreePainter::default();
    let svg = painter.render_svg::<Node>(None).expect("Failed to render");

    assert!(svg.contains("<rect"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_render_is_deterministic() {
    let painter = TreePainter::default();
    let first = painter.render_svg(Some(&balanced())).expect("Failed to render");
    let second = painter.render_svg(Some(&balanced())).expect("Failed to render");
    assert_eq!(first, second);
}

#[test]
fn test_invalid_spacing_is_config_error() {
    let config = AppConfig::new(LayoutConfig::new(20.0, 20.0, -5.0), StyleConfig::default());
    let painter = TreePainter::new(config);

    let result = painter.render_svg(Some(&balanced()));
    assert!(matches!(result, Err(ArborError::Config(_))));
}

#[test]
fn test_invalid_node_color_is_style_error() {
    let painter = TreePainter::default();
    let source = Node::new("x").with_color("not-a-color");

    let result = painter.render_svg(Some(&source));
    assert!(matches!(result, Err(ArborError::Style(_))));
}

#[test]
fn test_save_svg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tree.svg");

    let style = StyleConfig::default().with_edge_arrow(4.0);
    let painter = TreePainter::new(AppConfig::new(LayoutConfig::default(), style));
    painter
        .save_svg(Some(&balanced()), &path)
        .expect("Failed to save");

    let written = std::fs::read_to_string(&path).expect("Failed to read output");
    assert!(written.contains("<marker"));
    assert_eq!(written.matches("marker-end").count(), 6);
}

#[test]
fn test_save_svg_to_missing_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("tree.svg");

    let result = TreePainter::default().save_svg(Some(&balanced()), &path);
    assert!(matches!(result, Err(ArborError::Io(_))));
}
