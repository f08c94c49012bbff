//! Tree descriptions read by the CLI.
//!
//! A tree is written as nested TOML tables under `root`:
//!
//! ```toml
//! [root]
//! field = 8
//!
//! [root.left]
//! field = 4
//! color = "red"
//!
//! [root.right]
//! field = "seven"
//! ```
//!
//! A file without a `root` table describes the empty tree.

use std::{borrow::Cow, fmt};

use serde::Deserialize;

use arbor::tree::BinaryNode;

use crate::error::CliError;

/// Contents of a tree description file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeFile {
    root: Option<TreeSpec>,
}

impl TreeFile {
    /// Parses a tree description, keeping the source for error reports.
    pub fn parse(src: &str) -> Result<Self, CliError> {
        toml::from_str(src).map_err(|err| CliError::Input {
            message: err.message().to_string(),
            span: err.span(),
            src: src.to_string(),
        })
    }

    pub fn root(&self) -> Option<&TreeSpec> {
        self.root.as_ref()
    }
}

/// A node label; TOML strings, integers and floats are all accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One node of a described tree.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeSpec {
    field: Label,
    color: Option<String>,
    left: Option<Box<TreeSpec>>,
    right: Option<Box<TreeSpec>>,
}

impl BinaryNode for TreeSpec {
    fn field(&self) -> Cow<'_, str> {
        match &self.field {
            Label::Text(text) => Cow::Borrowed(text),
            label => Cow::Owned(label.to_string()),
        }
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
