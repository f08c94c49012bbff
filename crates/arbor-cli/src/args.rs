//! What the `arbor` binary accepts on its command line.

use clap::Parser;

/// Draw a binary tree described in TOML as a tidy SVG picture.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Tree description with nested `[root]`, `[root.left]` and `[root.right]` tables
    #[arg(value_name = "TREE")]
    pub input: String,

    /// Where the drawing is written
    #[arg(short, long, value_name = "SVG", default_value = "tree.svg")]
    pub output: String,

    /// Layout and style settings; searched for in `arbor/config.toml` and the
    /// user config directory when omitted
    #[arg(short, long, value_name = "TOML")]
    pub config: Option<String>,

    /// Verbosity of the log output: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}
