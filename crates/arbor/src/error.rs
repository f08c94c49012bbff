//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`] which wraps the
//! error conditions that can occur while rendering a tree. Laying out a tree
//! never fails; errors come from configuration, styling and output.

use std::io;

use thiserror::Error;

/// The main error type for Arbor operations.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for ArborError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Style(message) => Self::Style(message),
            error => Self::Export(Box::new(error)),
        }
    }
}
