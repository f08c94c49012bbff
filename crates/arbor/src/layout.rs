//! Tidy layout of binary trees.
//!
//! - [`PlaceableTree`] - arena copy of a caller's tree that the engine positions.
//! - [`Contour`] - extreme node bookkeeping shared by the Setup pass.
//! - [`TidyLayout`] - the two pass Reingold–Tilford engine.

mod contour;
mod placeable;
mod tidy;

pub use contour::Contour;
pub use placeable::{ChildLink, NodeId, PlaceableNode, PlaceableTree};
pub use tidy::{TidyLayout, perform_layout};

#[cfg(test)]
pub(crate) use placeable::test_support;
