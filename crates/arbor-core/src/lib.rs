//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arbor layout
//! engine, its SVG renderer and its command-line front end:
//!
//! - **Trees**: The [`tree::BinaryNode`] adapter trait that lets any binary
//!   tree type be laid out, plus traversal helpers over it
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod color;
pub mod geometry;
pub mod tree;
