//! Node circles and their labels.

use svg::node::element as svg_element;

use arbor_core::color::Color;

use super::Svg;
use crate::{export, layout::PlaceableNode};

impl Svg {
    /// Fill of a node: its own color, else the leaf or internal node color.
    pub(super) fn node_fill(&self, node: &PlaceableNode) -> Result<Color, export::Error> {
        match node.color() {
            Some(color) => Color::new(color).map_err(|err| {
                export::Error::Style(format!("node `{}`: {err}", node.field()))
            }),
            None if node.is_leaf() => Ok(self.leaf_fill),
            None => Ok(self.node_fill),
        }
    }

    pub(super) fn render_node(
        &self,
        node: &PlaceableNode,
    ) -> Result<svg_element::Group, export::Error> {
        let fill = self.node_fill(node)?;
        let position = node.position();

        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.radius)
            .set("fill", fill)
            .set("fill-opacity", fill.alpha());

        if let Some(stroke) = self.node_stroke {
            circle = circle
                .set("stroke", stroke)
                .set("stroke-opacity", stroke.alpha())
                .set("stroke-width", self.node_stroke_width);
        }

        let label = svg_element::Text::new(node.field())
            .set("x", position.x())
            .set("y", position.y())
            .set("dy", self.text_size / 3.0)
            .set("text-anchor", "middle")
            .set("font-size", self.text_size)
            .set("fill", &self.text_color)
            .set("fill-opacity", self.text_color.alpha());

        Ok(svg_element::Group::new().add(circle).add(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::StyleConfig,
        export::svg::SvgBuilder,
        layout::{PlaceableTree, test_support::TestNode},
    };

    fn fills(style: &StyleConfig, source: &TestNode) -> Vec<(String, Color)> {
        let svg = SvgBuilder::new().with_style(style).build().unwrap();
        let tree = PlaceableTree::from_source(Some(source));
        tree.iter()
            .map(|(_, node)| (node.field().to_string(), svg.node_fill(node).unwrap()))
            .collect()
    }

    #[test]
    fn test_fill_precedence() {
        let style = StyleConfig::default()
            .with_node_color("gray")
            .with_leaf_color("green");
        let source = TestNode::leaf("root")
            .with_left(TestNode::leaf("plain"))
            .with_right(TestNode::leaf("red").with_color("red"));

        let fills = fills(&style, &source);

        assert_eq!(fills[0], ("root".to_string(), Color::new("gray").unwrap()));
        assert_eq!(fills[1], ("plain".to_string(), Color::new("green").unwrap()));
        assert_eq!(fills[2], ("red".to_string(), Color::new("red").unwrap()));
    }

    #[test]
    fn test_leaf_color_defaults_to_node_color() {
        let style = StyleConfig::default().with_node_color("navy");
        let fills = fills(&style, &TestNode::leaf("only"));
        assert_eq!(fills[0].1, Color::new("navy").unwrap());
    }

    #[test]
    fn test_invalid_node_color() {
        let svg = SvgBuilder::new().build().unwrap();
        let source = TestNode::leaf("bad").with_color("no-such-color");
        let tree = PlaceableTree::from_source(Some(&source));
        let root = tree.root().unwrap();

        assert!(matches!(
            svg.node_fill(&tree[root]),
            Err(export::Error::Style(_))
        ));
    }

    #[test]
    fn test_stroke_only_when_configured() {
        let tree = PlaceableTree::from_source(Some(&TestNode::leaf("1")));
        let root = tree.root().unwrap();

        let plain = SvgBuilder::new().build().unwrap();
        let group = plain.render_node(&tree[root]).unwrap().to_string();
        assert!(!group.contains("stroke"));

        let style = StyleConfig::default().with_node_stroke("black", 2.0);
        let stroked = SvgBuilder::new().with_style(&style).build().unwrap();
        let group = stroked.render_node(&tree[root]).unwrap().to_string();
        assert!(group.contains("stroke-width=\"2\""));
    }
}
