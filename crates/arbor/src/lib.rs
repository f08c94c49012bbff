//! Arbor - tidy drawings of binary trees.
//!
//! Arbor lays out any binary tree with the Reingold–Tilford algorithm and
//! renders the result as SVG. Trees are supplied through the
//! [`BinaryNode`](tree::BinaryNode) adapter trait, so no conversion into an
//! Arbor-specific type is needed.
//!
//! The layout guarantees that edges never cross, that sibling subtrees never
//! overlap, that nodes on the same level keep a configurable minimum gap, and
//! that a tree and its mirror image are drawn as mirror images.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use arbor_core::{color, geometry, tree};

pub use error::ArborError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::Exporter;
use layout::PlaceableTree;
use tree::BinaryNode;

/// Lays out and renders binary trees with a fixed configuration.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use arbor::{TreePainter, config::AppConfig, tree::BinaryNode};
///
/// struct Node {
///     key: u32,
///     left: Option<Box<Node>>,
///     right: Option<Box<Node>>,
/// }
///
/// impl BinaryNode for Node {
///     fn field(&self) -> Cow<'_, str> {
///         Cow::Owned(self.key.to_string())
///     }
///
///     fn left(&self) -> Option<&Self> {
///         self.left.as_deref()
///     }
///
///     fn right(&self) -> Option<&Self> {
///         self.right.as_deref()
///     }
/// }
///
/// let leaf = |key| Some(Box::new(Node { key, left: None, right: None }));
/// let root = Node { key: 2, left: leaf(1), right: leaf(3) };
///
/// let painter = TreePainter::new(AppConfig::default());
/// let svg = painter.render_svg(Some(&root)).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct TreePainter {
    config: AppConfig,
}

impl TreePainter {
    /// Create a new tree painter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds a placeable copy of `root` and lays it out.
    ///
    /// An absent root yields an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] if the layout spacing is invalid.
    pub fn layout<N: BinaryNode>(&self, root: Option<&N>) -> Result<PlaceableTree, ArborError> {
        self.config.validate()?;

        let mut tree = PlaceableTree::from_source(root);
        info!(nodes = tree.len(), height = tree.height(); "Laying out tree");

        self.config.layout().engine().perform(&mut tree);
        debug!("Layout calculated");

        Ok(tree)
    }

    /// Lays out `root` and renders it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError`] for invalid configuration or style values.
    pub fn render_svg<N: BinaryNode>(&self, root: Option<&N>) -> Result<String, ArborError> {
        let document = self.render_document(root)?;
        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Lays out `root`, renders it and writes the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Io`] if the file cannot be written, in addition
    /// to the errors of [`render_svg`](Self::render_svg).
    pub fn save_svg<N: BinaryNode>(
        &self,
        root: Option<&N>,
        path: impl AsRef<Path>,
    ) -> Result<(), ArborError> {
        let document = self.render_document(root)?;
        export::svg::Svg::write_document(&document, path.as_ref())?;
        info!(path:? = path.as_ref(); "SVG saved");
        Ok(())
    }

    fn render_document<N: BinaryNode>(
        &self,
        root: Option<&N>,
    ) -> Result<svg::Document, ArborError> {
        let tree = self.layout(root)?;

        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_node_radius(self.config.layout().node_radius())
            .build()?;

        Ok(exporter.export_tree(&tree)?)
    }
}
