use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::GraphConfig;
use crate::converter::CriteriaKey;

pub mod batch;
pub mod convert;
pub mod inspect;
pub mod materials;

/// Parse/export flags shared by `convert` and `batch`; each overrides the
/// config file when given.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Fail on misaligned fields or incomplete edge records
    #[arg(long)]
    strict: bool,

    /// Add an `edge_types` array parallel to `edges`
    #[arg(long)]
    edge_types: bool,

    /// Add the node id stored in the file as `source_id`
    #[arg(long)]
    source_ids: bool,

    /// Write every node's z coordinate as 0
    #[arg(long)]
    flatten_height: bool,

    /// Key for the criteria text (criteria, description)
    #[arg(long)]
    criteria_key: Option<CriteriaKey>,

    /// Spaces per JSON indentation level
    #[arg(long)]
    indent: Option<usize>,
}

impl ExportArgs {
    /// Apply the flags on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: GraphConfig) -> GraphConfig {
        config.parse.strict |= self.strict;
        config.export.include_edge_types |= self.edge_types;
        config.export.include_source_ids |= self.source_ids;
        config.export.flatten_height |= self.flatten_height;
        if let Some(key) = self.criteria_key {
            config.export.criteria_key = key;
        }
        if let Some(indent) = self.indent {
            config.export.indent = indent;
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a graph file to JSON
    Convert {
        /// Source graph file (.dat)
        #[arg(short, long)]
        source: PathBuf,

        /// Destination JSON file (prints to stdout if not specified)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Inspect a graph file and display its structure
    Inspect {
        /// Graph file to inspect
        path: PathBuf,

        /// Also list every decoded value per field
        #[arg(long)]
        fields: bool,
    },

    /// Convert every graph file under a directory
    Batch {
        /// Directory to search for .dat files
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory (mirrors the source layout)
        #[arg(short, long)]
        destination: PathBuf,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// List node material codes and names
    Materials,
}

impl Commands {
    pub fn execute(&self, config: GraphConfig) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                export,
            } => convert::execute(source, destination.as_deref(), &export.apply(config)),
            Commands::Inspect { path, fields } => inspect::execute(path, *fields, &config),
            Commands::Batch {
                source,
                destination,
                quiet,
                export,
            } => batch::execute(source, destination, !*quiet, &export.apply(config)),
            Commands::Materials => materials::execute(),
        }
    }
}
