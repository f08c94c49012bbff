//! Example: Laying out a caller-defined tree
//!
//! Implements `BinaryNode` for a plain boxed tree, inspects the computed
//! positions, then renders the tree with a custom style.

use std::borrow::Cow;

use arbor::{
    TreePainter,
    config::{AppConfig, LayoutConfig, StyleConfig},
    tree::{self, BinaryNode},
};

struct Node {
    value: u32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(value: u32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn with_children(mut self, left: Option<Node>, right: Option<Node>) -> Self {
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
        self
    }
}

impl BinaryNode for Node {
    fn field(&self) -> Cow<'_, str> {
        Cow::Owned(self.value.to_string())
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = Node::new(8).with_children(
        Some(Node::new(4).with_children(
            Some(Node::new(1)),
            Some(Node::new(3).with_children(None, Some(Node::new(2)))),
        )),
        Some(Node::new(7).with_children(Some(Node::new(5)), Some(Node::new(6)))),
    );

    println!("Tree height: {}", tree::height(Some(&root)));
    for (depth, level) in tree::level_order(Some(&root)).iter().enumerate() {
        let labels: Vec<_> = level.iter().map(|node| node.field()).collect();
        println!("  level {depth}: {}", labels.join(" "));
    }

    let layout = LayoutConfig::new(30.0, 40.0, 50.0);
    let style = StyleConfig::default()
        .with_background_color("#0daaf4")
        .with_padding(30.0, 10.0)
        .with_node_stroke("black", 1.0)
        .with_leaf_color("#00eeac")
        .with_edge_arrow(5.0);
    let painter = TreePainter::new(AppConfig::new(layout, style));

    let placed = painter.layout(Some(&root))?;
    for id in placed.in_order() {
        let node = &placed[id];
        println!("{:>3} at ({:>6.1}, {:>6.1})", node.field(), node.x(), node.y());
    }

    painter.save_svg(Some(&root), "dev.svg")?;
    println!("Tree written to dev.svg");

    Ok(())
}
