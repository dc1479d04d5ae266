pub mod apply;
pub mod diff;
pub mod read;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsondelta::AlignmentStrategy;

#[derive(Debug, Parser)]
#[command(name = "jsondelta", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a JSON Patch turning one document into another
    Diff(DiffArgs),

    /// Apply a JSON Patch to a document and print the result
    Apply(ApplyArgs),
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the source JSON document
    pub left: PathBuf,

    /// Path to the target JSON document
    pub right: PathBuf,

    /// JSON file with diff options; flags given on the command line win
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Arrays longer than this are compared position by position
    #[arg(long, env = "JSONDELTA_MAX_ALIGN_LEN")]
    pub max_align_len: Option<usize>,

    /// Number of move/replace optimization rounds
    #[arg(long, env = "JSONDELTA_ITERATIONS")]
    pub iterations: Option<usize>,

    /// How common runs between arrays are located
    #[arg(long, value_enum)]
    pub alignment: Option<AlignmentArg>,

    /// Print the patch on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Path to the JSON document to patch
    pub doc: PathBuf,

    /// Path to the JSON Patch file
    pub patch: PathBuf,

    /// Print the result on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignmentArg {
    SingleAnchor,
    Recursive,
}

impl From<AlignmentArg> for AlignmentStrategy {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::SingleAnchor => AlignmentStrategy::SingleAnchor,
            AlignmentArg::Recursive => AlignmentStrategy::Recursive,
        }
    }
}

/// Renders `value` as pretty or single-line JSON.
pub(crate) fn render<T: serde::Serialize>(
    value: &T,
    compact: bool,
) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
