//! Export functionality for laid-out trees.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a positioned [`PlaceableTree`] into an output document. It is
//! the final stage in the Arbor pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Caller's tree (BinaryNode)
//!     ↓ build
//! PlaceableTree
//!     ↓ layout (Setup + Petrify)
//! Positioned PlaceableTree
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use thiserror::Error;

use crate::layout::PlaceableTree;

/// Abstraction for tree export backends.
pub trait Exporter {
    /// Renders a fully positioned tree.
    ///
    /// The tree must have been laid out and must no longer contain threads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the tree cannot be converted to the
    /// target format, or [`Error::Style`] if a node carries an unusable color.
    fn export_tree(&self, tree: &PlaceableTree) -> Result<::svg::Document, Error>;
}

/// Errors that can occur during tree export.
///
/// This type is converted into [`ArborError`](crate::ArborError) at the
/// crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    #[error("Render error: {0}")]
    Render(String),

    /// A style value that could not be resolved.
    #[error("Style error: {0}")]
    Style(String),
}
