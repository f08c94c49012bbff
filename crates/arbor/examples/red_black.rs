//! Example: Drawing a red-black tree
//!
//! Each node supplies its own fill color through `BinaryNode::color`, and
//! the nil sentinels of the tree are reported as placeholders so they are
//! not drawn.

use std::borrow::Cow;

use arbor::{
    TreePainter,
    config::{AppConfig, LayoutConfig, StyleConfig},
    tree::BinaryNode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shade {
    Red,
    Black,
}

#[derive(Debug)]
enum RbNode {
    Nil,
    Node {
        key: i32,
        shade: Shade,
        left: Box<RbNode>,
        right: Box<RbNode>,
    },
}

impl RbNode {
    fn leaf(key: i32, shade: Shade) -> Self {
        Self::branch(key, shade, Self::Nil, Self::Nil)
    }

    fn branch(key: i32, shade: Shade, left: RbNode, right: RbNode) -> Self {
        Self::Node {
            key,
            shade,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl BinaryNode for RbNode {
    fn field(&self) -> Cow<'_, str> {
        match self {
            Self::Nil => Cow::Borrowed("nil"),
            Self::Node { key, .. } => Cow::Owned(key.to_string()),
        }
    }

    fn left(&self) -> Option<&Self> {
        match self {
            Self::Nil => None,
            Self::Node { left, .. } => Some(&**left),
        }
    }

    fn right(&self) -> Option<&Self> {
        match self {
            Self::Nil => None,
            Self::Node { right, .. } => Some(&**right),
        }
    }

    fn color(&self) -> Option<&str> {
        match self {
            Self::Node { shade: Shade::Red, .. } => Some("#d62728"),
            Self::Node { shade: Shade::Black, .. } => Some("black"),
            Self::Nil => None,
        }
    }

    fn is_placeholder(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use Shade::{Black, Red};

    let root = RbNode::branch(
        1,
        Black,
        RbNode::leaf(2, Black),
        RbNode::branch(
            3,
            Red,
            RbNode::branch(4, Black, RbNode::leaf(6, Red), RbNode::leaf(7, Red)),
            RbNode::branch(5, Black, RbNode::leaf(8, Red), RbNode::leaf(9, Red)),
        ),
    );

    let style = StyleConfig::default()
        .with_background_color("#eeffff")
        .with_node_stroke("black", 1.0)
        .with_text("white", 14.0)
        .with_edge_arrow(8.0);
    let painter = TreePainter::new(AppConfig::new(LayoutConfig::default(), style));

    painter.save_svg(Some(&root), "rbnode.svg")?;
    println!("Red-black tree written to rbnode.svg");

    Ok(())
}
