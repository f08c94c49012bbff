//! Error type of the Arbor CLI.

use std::{io, ops::Range};

use thiserror::Error;

use arbor::ArborError;

use crate::config::ConfigError;

/// Everything that can stop the CLI from producing a drawing.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Arbor(#[from] ArborError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The tree description could not be read.
    ///
    /// `span` locates the offending bytes in `src` when the parser knows them.
    #[error("Invalid tree description: {message}")]
    Input {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },
}
