//! SVG rendering of positioned trees.
//!
//! [`SvgBuilder`] resolves a [`StyleConfig`] into an [`Svg`] exporter once,
//! so invalid colors are reported before any drawing starts. The exporter
//! then turns a laid-out [`PlaceableTree`] into an [`svg::Document`]:
//!
//! - a background rectangle covering the canvas,
//! - one line per parent to child edge, trimmed to the circle surfaces,
//! - one circle and one centred label per node.
//!
//! The root is centred horizontally: the canvas is as wide as the larger of
//! the two horizontal extents on either side of the root, mirrored.

mod edge;
mod node;

pub use edge::edge_endpoints;

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{self, Document, node::element as svg_element};

use arbor_core::{
    color::Color,
    geometry::{Bounds, Insets, Size},
};

use crate::{
    config::{LayoutConfig, StyleConfig},
    export,
    layout::PlaceableTree,
};

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// # use arbor::{config::StyleConfig, export::svg::SvgBuilder};
/// let style = StyleConfig::default();
/// let exporter = SvgBuilder::new()
///     .with_style(&style)
///     .with_node_radius(20.0)
///     .build()
///     .expect("default style is valid");
/// # let _ = exporter;
/// ```
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    node_radius: Option<f32>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Radius of the node circles. Must match the radius used for layout.
    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = Some(radius);
        self
    }

    /// Resolves every color of the style and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a configured color does not parse.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);
        let radius = self
            .node_radius
            .unwrap_or_else(|| LayoutConfig::default().node_radius());

        let svg = Svg {
            radius,
            background: style.background_color().map_err(export::Error::Style)?,
            node_fill: style.node_color().map_err(export::Error::Style)?,
            leaf_fill: style.leaf_color().map_err(export::Error::Style)?,
            node_stroke: style.node_stroke_color().map_err(export::Error::Style)?,
            node_stroke_width: style.node_stroke_width(),
            text_color: style.text_color().map_err(export::Error::Style)?,
            text_size: style.text_size(),
            edge_color: style.edge_color().map_err(export::Error::Style)?,
            edge_width: style.edge_width(),
            arrow_size: style.edge_arrow().then_some(style.arrow_size()),
            padding: Insets::symmetric(style.horizontal_padding(), style.vertical_padding()),
        };
        debug!(radius, arrows = svg.arrow_size.is_some(); "SVG exporter built");

        Ok(svg)
    }
}

/// SVG exporter with a fully resolved style.
#[derive(Debug, Clone)]
pub struct Svg {
    radius: f32,
    background: Color,
    node_fill: Color,
    leaf_fill: Color,
    node_stroke: Option<Color>,
    node_stroke_width: f32,
    text_color: Color,
    text_size: f32,
    edge_color: Color,
    edge_width: f32,
    arrow_size: Option<f32>,
    padding: Insets,
}

impl Svg {
    /// Half of the drawing's horizontal extent around the root.
    fn half_extent(bounds: Option<Bounds>) -> f32 {
        bounds.map_or(0.0, |bounds| {
            bounds.min_x().abs().max(bounds.max_x().abs())
        })
    }

    /// Size of the whole canvas for a tree with the given centre bounds.
    pub fn canvas_size(&self, bounds: Option<Bounds>) -> Size {
        let centres = Size::new(
            2.0 * Self::half_extent(bounds),
            bounds.map_or(0.0, |bounds| bounds.height()),
        );

        centres
            .add_padding(Insets::uniform(self.radius))
            .add_padding(self.padding)
    }

    /// Renders a positioned tree into an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a node's own color does not parse,
    /// or [`export::Error::Render`] if the tree still carries threads.
    pub fn render_tree(&self, tree: &PlaceableTree) -> Result<Document, export::Error> {
        if tree.has_threads() {
            return Err(export::Error::Render(
                "tree still contains layout threads; run the layout first".to_string(),
            ));
        }

        let (in_order, bounds) = tree.in_order_with_bounds();
        let size = self.canvas_size(bounds);
        debug!(width = size.width(), height = size.height(); "SVG canvas size");

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());
        let mut doc = self.add_background(doc, size);

        let Some(bounds) = bounds else {
            return Ok(doc);
        };

        if let Some(marker) = self.arrow_marker() {
            doc = doc.add(svg_element::Definitions::new().add(marker));
        }

        let mut edges = svg_element::Group::new().set("class", "edges");
        let mut nodes = svg_element::Group::new().set("class", "nodes");
        for &id in &in_order {
            let (left, right) = tree.children(id);
            for child in left.into_iter().chain(right) {
                if let Some(line) = self.render_edge(&tree[id], &tree[child]) {
                    edges = edges.add(line);
                }
            }
            nodes = nodes.add(self.render_node(&tree[id])?);
        }

        let content = svg_element::Group::new()
            .set(
                "transform",
                format!(
                    "translate({}, {})",
                    Self::half_extent(Some(bounds)) + self.radius + self.padding.left(),
                    self.radius + self.padding.top() - bounds.min_y()
                ),
            )
            .add(edges)
            .add(nodes);

        Ok(doc.add(content))
    }

    fn add_background(&self, doc: Document, size: Size) -> Document {
        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", &self.background)
            .set("fill-opacity", self.background.alpha());
        doc.add(background)
    }

    /// Writes an SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be created or written.
    pub fn write_document(doc: &Document, path: &Path) -> std::io::Result<()> {
        info!(path:? = path; "Creating SVG file");
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = path, err:err; "Failed to create SVG file");
                return Err(err);
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(path:? = path, err:err; "Failed to write SVG content");
            return Err(err);
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_tree(&self, tree: &PlaceableTree) -> Result<Document, export::Error> {
        let doc = self.render_tree(tree)?;
        debug!(nodes = tree.len(); "SVG document rendered");
        Ok(doc)
    }
}
